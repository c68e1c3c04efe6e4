//! Placement enumeration - every settled drop for a shape on a field.
//!
//! Callers of the drop engine typically sweep shapes x rotations x columns;
//! this module is that sweep. Committing happens on clones only, so the
//! input field is never mutated and the parallel variant needs no locking.

use rayon::prelude::*;
use rustc_hash::FxHashSet;
use settle_core::{ActivePiece, Position, Shape};

use crate::drop::resolve_drop;
use crate::field::Field;

/// Every resolved placement for `shape`: one drop attempt per distinct
/// rotation and start column, from the top of the field. Columns where the
/// piece cannot settle are skipped.
pub fn enumerate_drops(field: &Field, shape: Shape) -> Vec<ActivePiece> {
    let mut out = Vec::new();
    for &rotation in shape.distinct_rotations() {
        for col in 0..field.width() as i32 {
            let start = ActivePiece::new(shape, rotation, Position::new(0, col));
            if let Some(resolved) = resolve_drop(field, start) {
                out.push(resolved);
            }
        }
    }
    out
}

/// Commit each resolved placement of `shape` onto a clone of `field`.
/// Identical resulting boards are deduplicated by content fingerprint.
pub fn resolved_fields(field: &Field, shape: Shape) -> Vec<Field> {
    let mut seen = FxHashSet::default();
    let mut out = Vec::new();
    for placement in enumerate_drops(field, shape) {
        let mut next = field.clone();
        next.place(&placement);
        if seen.insert(next.fingerprint()) {
            out.push(next);
        }
    }
    out
}

/// Parallel sweep over several shapes. Each worker commits onto its own
/// clone of the field; results are merged and deduplicated only after all
/// mutation is complete.
pub fn par_resolved_fields(field: &Field, shapes: &[Shape]) -> Vec<Field> {
    let committed: Vec<Field> = shapes
        .par_iter()
        .flat_map_iter(|&shape| {
            enumerate_drops(field, shape).into_iter().map(|placement| {
                let mut next = field.clone();
                next.place(&placement);
                next
            })
        })
        .collect();

    let mut seen = FxHashSet::default();
    committed
        .into_iter()
        .filter(|next| seen.insert(next.fingerprint()))
        .collect()
}
