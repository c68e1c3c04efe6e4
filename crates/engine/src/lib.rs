//! settle-engine - collision, perfect-fit, and drop resolution over a field.
//!
//! The field is the single mutable collaborator: pieces are values that the
//! engine reads, and every placement decision is expressed as a return
//! value, never a panic or an error in the hot path.

pub mod drop;
pub mod error;
pub mod field;
pub mod fit;
pub mod placements;

pub use drop::resolve_drop;
pub use error::FieldError;
pub use field::Field;
pub use fit::{evaluate_fit, FitOutcome};
pub use placements::{enumerate_drops, par_resolved_fields, resolved_fields};
