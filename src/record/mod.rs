//! Record module - Game-record parsing and move extraction.
//!
//! Turns SGF text into the ordered list of stone placements that drives
//! rendering. Only the main sequence of the first game tree is used.

mod coords;
mod error;
mod game;
mod moves;
pub mod sgf;

pub use coords::*;
pub use error::*;
pub use game::*;
pub use moves::*;
pub use sgf::{Collection, GameTree, Node, ParseError, ParseErrorKind, Property};
