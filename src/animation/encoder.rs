//! GIF encoding of assembled animations.

use std::borrow::Cow;
use std::io::Write;

use gif::{Encoder, Repeat};

use super::Animation;

/// Errors while turning an animation into GIF bytes.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("GIF encoder failed: {0}")]
    Gif(#[from] gif::EncodingError),
    #[error("Frame side of {0} pixels exceeds the GIF limit of 65535")]
    FrameTooLarge(usize),
    #[error("Frame {index} is {actual}px square, expected {expected}px")]
    FrameSizeMismatch {
        index: usize,
        actual: usize,
        expected: usize,
    },
    #[error("Loop count {0} exceeds the GIF limit of 65535")]
    LoopCountOverflow(usize),
}

/// Write `animation` as a GIF to `writer`.
///
/// The loop extension is only written for a non-zero loop count. The GIF
/// trailer is emitted when the encoder is dropped at the end of this call.
pub fn write_animation<W: Write>(animation: &Animation, writer: W) -> Result<(), EncodeError> {
    let side =
        u16::try_from(animation.side).map_err(|_| EncodeError::FrameTooLarge(animation.side))?;

    let mut encoder = Encoder::new(writer, side, side, &animation.palette.to_rgb_table())?;

    if animation.loop_count > 0 {
        let count = u16::try_from(animation.loop_count)
            .map_err(|_| EncodeError::LoopCountOverflow(animation.loop_count))?;
        encoder.set_repeat(Repeat::Finite(count))?;
    }

    for (index, (frame, &delay)) in animation.frames.iter().zip(&animation.delays).enumerate() {
        if frame.side() != animation.side {
            return Err(EncodeError::FrameSizeMismatch {
                index,
                actual: frame.side(),
                expected: animation.side,
            });
        }

        let gif_frame = gif::Frame {
            width: side,
            height: side,
            delay,
            buffer: Cow::Borrowed(frame.pixels()),
            ..gif::Frame::default()
        };
        encoder.write_frame(&gif_frame)?;
    }

    Ok(())
}

/// Encode `animation` into an in-memory GIF.
pub fn encode_animation(animation: &Animation) -> Result<Vec<u8>, EncodeError> {
    let mut bytes = Vec::new();
    write_animation(animation, &mut bytes)?;
    Ok(bytes)
}

/// Summary of a written animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationStats {
    /// Frames written.
    pub frame_count: usize,
    /// Loop count stored in the file.
    pub loop_count: usize,
    /// Frame side in pixels.
    pub side: usize,
    /// Total file size in bytes.
    pub total_bytes: u64,
}

impl AnimationStats {
    pub fn new(animation: &Animation, total_bytes: u64) -> Self {
        Self {
            frame_count: animation.frame_count(),
            loop_count: animation.loop_count,
            side: animation.side,
            total_bytes,
        }
    }
}

impl std::fmt::Display for AnimationStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} frames of {}x{} px, loop count {}, {} bytes total",
            self.frame_count, self.side, self.side, self.loop_count, self.total_bytes
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{Frame, PaletteIndex};
    use crate::schema::RenderConfig;

    fn tiny_config() -> RenderConfig {
        RenderConfig {
            board_size: 2,
            stone_diameter: 4,
            frame_delay: 25,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_animation_is_header_and_trailer() {
        let animation = Animation::assemble(vec![], &tiny_config());
        let bytes = encode_animation(&animation).unwrap();
        assert_eq!(&bytes[..6], b"GIF89a");
        assert_eq!(bytes.last(), Some(&0x3B));
        assert!(!bytes.windows(11).any(|w| w == b"NETSCAPE2.0"));
    }

    #[test]
    fn test_loop_extension_written() {
        let config = tiny_config();
        let frames = vec![Frame::new(config.side()); 3];
        let bytes = encode_animation(&Animation::assemble(frames, &config)).unwrap();
        let pos = bytes
            .windows(11)
            .position(|w| w == b"NETSCAPE2.0")
            .expect("loop extension");
        // Sub-block: size 3, id 1, little-endian count.
        assert_eq!(&bytes[pos + 11..pos + 15], &[3, 1, 3, 0]);
    }

    #[test]
    fn test_frame_size_mismatch() {
        let config = tiny_config();
        let mut animation = Animation::assemble(vec![Frame::new(config.side())], &config);
        animation.frames.push(Frame::new(3));
        animation.delays.push(25);
        assert!(matches!(
            encode_animation(&animation),
            Err(EncodeError::FrameSizeMismatch { index: 1, .. })
        ));
    }

    #[test]
    fn test_loop_count_overflow() {
        let config = tiny_config();
        let mut animation = Animation::assemble(vec![Frame::new(config.side())], &config);
        animation.loop_count = 70_000;
        assert!(matches!(
            encode_animation(&animation),
            Err(EncodeError::LoopCountOverflow(70_000))
        ));
    }

    #[test]
    fn test_frame_too_large() {
        let mut animation = Animation::assemble(vec![], &tiny_config());
        animation.side = 70_000;
        assert!(matches!(
            encode_animation(&animation),
            Err(EncodeError::FrameTooLarge(70_000))
        ));
    }

    #[test]
    fn test_stats_display() {
        let config = tiny_config();
        let mut frame = Frame::new(config.side());
        frame.set(0, 0, PaletteIndex::Black);
        let animation = Animation::assemble(vec![frame], &config);
        let stats = AnimationStats::new(&animation, 120);
        assert_eq!(
            stats.to_string(),
            "1 frames of 10x10 px, loop count 1, 120 bytes total"
        );
    }
}
