//! In-memory animation model.

use crate::render::Frame;
use crate::schema::{Palette, RenderConfig};

/// Display time of each frame in hundredths of a second unless configured.
pub const DEFAULT_FRAME_DELAY: u16 = 100;

/// Ordered frames with per-frame delays and a loop count.
#[derive(Debug, Clone)]
pub struct Animation {
    /// Frame side in pixels.
    pub side: usize,
    /// Colors for the palette indices used by every frame.
    pub palette: Palette,
    /// Frames in move order.
    pub frames: Vec<Frame>,
    /// Delay of each frame, parallel to `frames`.
    pub delays: Vec<u16>,
    /// Number of times the animation plays.
    pub loop_count: usize,
}

impl Animation {
    /// Assemble frames into an animation with the configured delay.
    ///
    /// The loop count equals the number of frames. This is intentional and
    /// kept for compatibility with existing output; an empty frame list
    /// gives a loop count of zero.
    pub fn assemble(frames: Vec<Frame>, config: &RenderConfig) -> Self {
        let loop_count = frames.len();
        let delays = vec![config.frame_delay; frames.len()];
        Self {
            side: config.side(),
            palette: config.palette,
            frames,
            delays,
            loop_count,
        }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
