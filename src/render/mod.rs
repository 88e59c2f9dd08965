//! Render module - Indexed-color rasterization of board states.
//!
//! Frames are built incrementally: the first from an empty board, every
//! later one by copying its predecessor and drawing one more stone.

mod board;
mod frame;
mod rasterizer;
mod stone;

pub use board::*;
pub use frame::*;
pub use rasterizer::*;
pub use stone::*;
