//! Stone rendering.

use rayon::prelude::*;

use super::{Frame, PaletteIndex};
use crate::record::Move;
use crate::schema::RenderConfig;

/// Pixel center of the intersection a move refers to.
#[inline]
pub fn stone_center(mv: &Move, config: &RenderConfig) -> (i64, i64) {
    let d = config.stone_diameter as i64;
    let r = config.stone_radius() as i64;
    (r + mv.x as i64 * d, r + mv.y as i64 * d)
}

/// Euclidean distance between two pixels, truncated toward zero.
#[inline]
pub fn pixel_distance(x1: i64, y1: i64, x2: i64, y2: i64) -> i64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    ((dx * dx + dy * dy) as f64).sqrt() as i64
}

/// Whether pixel `(x, y)` belongs to the stone disc of `mv`.
#[inline]
pub fn in_stone(x: i64, y: i64, mv: &Move, config: &RenderConfig) -> bool {
    let (cx, cy) = stone_center(mv, config);
    pixel_distance(x, y, cx, cy) <= config.stone_radius() as i64
}

/// Disc boxes with fewer rows than this are painted on the calling thread.
/// Default-sized stones (41 rows) stay well below it.
const PARALLEL_MIN_ROWS: usize = 128;

/// Paint the stone of `mv` onto `frame` in the move's color.
///
/// A pixel is painted when its truncated distance to the stone center is
/// at most the stone radius. Truncation keeps every such pixel inside the
/// disc's bounding box, so only that box is scanned. Boxes of at least
/// [`PARALLEL_MIN_ROWS`] rows are split across rayon, one row per task.
/// Parts of the disc beyond the frame edge are clipped.
pub fn draw_stone(frame: &mut Frame, mv: &Move, config: &RenderConfig) {
    let side = frame.side() as i64;
    let r = config.stone_radius() as i64;
    let (cx, cy) = stone_center(mv, config);
    let color = PaletteIndex::from(mv.color) as u8;

    let (x0, x1) = ((cx - r).max(0), (cx + r).min(side - 1));
    let (y0, y1) = ((cy - r).max(0), (cy + r).min(side - 1));
    if x0 > x1 || y0 > y1 {
        return;
    }

    let paint_row = |(i, row): (usize, &mut [u8])| {
        let y = y0 + i as i64;
        for x in x0..=x1 {
            if pixel_distance(x, y, cx, cy) <= r {
                row[x as usize] = color;
            }
        }
    };

    let width = frame.side();
    let rows = &mut frame.pixels_mut()[y0 as usize * width..(y1 as usize + 1) * width];
    if rows.len() / width < PARALLEL_MIN_ROWS {
        rows.chunks_mut(width).enumerate().for_each(paint_row);
    } else {
        rows.par_chunks_mut(width).enumerate().for_each(paint_row);
    }
}
