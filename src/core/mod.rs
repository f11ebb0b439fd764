//! Core domain types for crossword placement
//!
//! Slots, placements and boards are pure values with no I/O; everything the
//! solver needs to build and check a candidate grid lives here.

mod board;
mod direction;
mod placement;
mod slot;

pub use board::{BLANK, Board, GRID_SIZE, Grid};
pub use direction::Direction;
pub use placement::{Coord, Intersection, Placement};
pub use slot::Slot;
