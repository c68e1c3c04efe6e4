//! Settle core crate - fundamental types for drop-placement analysis.

mod cell;
mod piece;
mod shape;

pub use cell::Cell;
pub use piece::{ActivePiece, Position};
pub use shape::{Rotation, Shape};
