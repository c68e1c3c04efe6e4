//! Drop resolution - linear downward search for a settled anchor.

use settle_core::ActivePiece;

use crate::field::Field;
use crate::fit::{evaluate_fit, FitOutcome};

/// Resolve where `piece` comes to rest when dropped from its current anchor.
///
/// The candidate advances one row per `Continue` until the first `Perfect`
/// (the resolved placement) or `Collision` (`None`: no valid drop exists in
/// this column at this rotation). The search is pure - the caller's piece
/// and the field are untouched - and terminates within `field.height()`
/// iterations, since any anchor past the floor collides.
pub fn resolve_drop(field: &Field, piece: ActivePiece) -> Option<ActivePiece> {
    let mut candidate = piece;
    loop {
        match evaluate_fit(field, &candidate) {
            FitOutcome::Perfect => return Some(candidate),
            FitOutcome::Collision => return None,
            FitOutcome::Continue => candidate = candidate.at_row(candidate.anchor.row + 1),
        }
    }
}
