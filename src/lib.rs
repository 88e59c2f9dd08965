//! SGF to GIF - Render recorded Go games as animated images.
//!
//! Every placement move in a game record becomes one frame showing the
//! board after that move. Frames use a fixed three-color palette and are
//! built incrementally, each one a copy of the previous frame with a
//! single stone added.
//!
//! # Architecture
//!
//! - `record`: SGF parsing, coordinate decoding and move extraction
//! - `render`: Board, stone and frame rasterization
//! - `animation`: Frame assembly and GIF encoding/decoding
//! - `schema`: Render configuration
//! - `pipeline`: File-to-file conversion tying the above together
//!
//! # Example
//!
//! ```rust,no_run
//! use sgf_gif::{RenderConfig, pipeline};
//!
//! let config = RenderConfig::default();
//! let animation = pipeline::sgf_to_animation("game.sgf", &config)?;
//! println!("{} frames", animation.frame_count());
//!
//! let stats = pipeline::save("game.gif", &animation)?;
//! println!("{stats}");
//! # Ok::<(), sgf_gif::Error>(())
//! ```

pub mod animation;
pub mod error;
pub mod pipeline;
pub mod record;
pub mod render;
pub mod schema;

// Re-export commonly used types
pub use animation::{Animation, AnimationStats};
pub use error::Error;
pub use record::{Move, StoneColor};
pub use render::{Frame, PaletteIndex, Rasterizer};
pub use schema::{OutOfRangePolicy, Palette, RenderConfig};
