//! Frame rasterizer - builds one frame per move.
//!
//! Each frame is a full snapshot: a copy of the previous frame (or the
//! empty board) with the new stone drawn on top.

use super::{Frame, draw_stone, render_board};
use crate::record::Move;
use crate::schema::RenderConfig;

/// Turns moves into frames under a fixed render configuration.
pub struct Rasterizer<'a> {
    config: &'a RenderConfig,
}

impl<'a> Rasterizer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        self.config
    }

    /// Render the board after `mv`.
    ///
    /// With no previous frame the empty board is drawn first. The previous
    /// frame is copied, never modified.
    pub fn rasterize(&self, mv: &Move, previous: Option<&Frame>) -> Frame {
        let mut frame = match previous {
            Some(prev) => {
                debug_assert_eq!(prev.side(), self.config.side());
                prev.clone()
            }
            None => render_board(self.config),
        };
        draw_stone(&mut frame, mv, self.config);
        frame
    }

    /// Render every move in order, each frame built from the one before.
    pub fn rasterize_all(&self, moves: &[Move]) -> Vec<Frame> {
        let mut frames: Vec<Frame> = Vec::with_capacity(moves.len());
        for mv in moves {
            let frame = self.rasterize(mv, frames.last());
            frames.push(frame);
        }
        frames
    }
}
