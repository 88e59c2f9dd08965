//! Animation assembly and GIF output.
//!
//! Frames are collected into an [`Animation`] and written as a GIF89a
//! file:
//!
//! ```text
//! Header "GIF89a", logical screen side x side
//! Global color table: background, black, white (padded to 4 entries)
//! NETSCAPE2.0 loop extension: loop count = frame count (when non-zero)
//! Per frame:
//!   Graphic control extension: uniform delay (1/100 s)
//!   Image descriptor + LZW-compressed palette indices
//! Trailer 0x3B
//! ```

mod encoder;
mod format;
mod player;

pub use encoder::{AnimationStats, EncodeError, encode_animation, write_animation};
pub use format::{Animation, DEFAULT_FRAME_DELAY};
pub use player::{AnimationPlayer, DecodeError, DecodedAnimation};
