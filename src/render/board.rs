//! Empty board rendering.

use super::{Frame, PaletteIndex};
use crate::schema::RenderConfig;

/// Draw the empty board: background fill plus `board_size` black grid
/// lines per axis.
///
/// Each line runs from half a stone diameter inside one edge to half a
/// stone diameter short of the other.
pub fn render_board(config: &RenderConfig) -> Frame {
    let side = config.side();
    let half = config.stone_radius();
    let mut frame = Frame::new(side);

    for i in 0..config.board_size {
        let line = config.grid_pixel(i);
        for j in half..side - half {
            frame.set(line, j, PaletteIndex::Black);
            frame.set(j, line, PaletteIndex::Black);
        }
    }

    frame
}
