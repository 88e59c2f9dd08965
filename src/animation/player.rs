//! Animation player for reading back written GIFs.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use gif::{ColorOutput, DecodeOptions, Decoder, Repeat};

use crate::render::Frame;

/// Errors while reading a GIF back.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Cannot open animation: {0}")]
    Io(#[from] std::io::Error),
    #[error("GIF decoder failed: {0}")]
    Gif(#[from] gif::DecodingError),
    #[error("Animation is {width}x{height} px; only square frames are supported")]
    NotSquare { width: u16, height: u16 },
    #[error("Frame {0} does not cover the whole screen with palette indices 0-2")]
    UnsupportedFrame(usize),
}

/// Fully decoded animation.
#[derive(Debug, Clone)]
pub struct DecodedAnimation {
    pub side: usize,
    /// Global color table as flat RGB triples.
    pub palette: Vec<u8>,
    pub frames: Vec<Frame>,
    pub delays: Vec<u16>,
    /// Loop setting, `Repeat::Infinite` when no loop extension is present.
    pub repeat: Repeat,
}

/// Frame-by-frame reader for GIFs written by this crate.
///
/// Usage:
/// ```ignore
/// let mut player = AnimationPlayer::open("game.gif")?;
/// while let Some((frame, delay)) = player.next_frame()? {
///     // Use frame...
/// }
/// ```
pub struct AnimationPlayer<R: Read> {
    decoder: Decoder<R>,
    side: usize,
    frames_read: usize,
}

impl AnimationPlayer<BufReader<File>> {
    /// Open a GIF file for playback.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, DecodeError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }
}

impl<R: Read> AnimationPlayer<R> {
    pub fn from_reader(reader: R) -> Result<Self, DecodeError> {
        let mut options = DecodeOptions::new();
        options.set_color_output(ColorOutput::Indexed);
        let decoder = options.read_info(reader)?;

        let (width, height) = (decoder.width(), decoder.height());
        if width != height {
            return Err(DecodeError::NotSquare { width, height });
        }

        Ok(Self {
            decoder,
            side: width as usize,
            frames_read: 0,
        })
    }

    /// Frame side in pixels.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Global color table as flat RGB triples.
    pub fn palette(&self) -> Vec<u8> {
        self.decoder.global_palette().map(<[u8]>::to_vec).unwrap_or_default()
    }

    /// Read the next frame and its delay.
    pub fn next_frame(&mut self) -> Result<Option<(Frame, u16)>, DecodeError> {
        let index = self.frames_read;
        let side = self.side;
        let Some(gif_frame) = self.decoder.read_next_frame()? else {
            return Ok(None);
        };

        if gif_frame.left != 0
            || gif_frame.top != 0
            || gif_frame.width as usize != side
            || gif_frame.height as usize != side
        {
            return Err(DecodeError::UnsupportedFrame(index));
        }
        let delay = gif_frame.delay;
        let frame = Frame::from_indices(side, gif_frame.buffer.to_vec())
            .ok_or(DecodeError::UnsupportedFrame(index))?;

        self.frames_read += 1;
        Ok(Some((frame, delay)))
    }

    /// Decode all remaining frames.
    pub fn read_all(mut self) -> Result<DecodedAnimation, DecodeError> {
        let palette = self.palette();
        let mut frames = Vec::new();
        let mut delays = Vec::new();
        while let Some((frame, delay)) = self.next_frame()? {
            frames.push(frame);
            delays.push(delay);
        }

        Ok(DecodedAnimation {
            side: self.side,
            palette,
            frames,
            delays,
            // Only known once the decoder has passed the loop extension.
            repeat: self.decoder.repeat(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{Animation, encode_animation};
    use crate::record::{Move, StoneColor};
    use crate::render::{PaletteIndex, Rasterizer};
    use crate::schema::RenderConfig;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn small_animation() -> Animation {
        let config = RenderConfig {
            board_size: 5,
            stone_diameter: 8,
            frame_delay: 40,
            ..Default::default()
        };
        let moves = [
            Move {
                color: StoneColor::Black,
                x: 1,
                y: 1,
            },
            Move {
                color: StoneColor::White,
                x: 3,
                y: 2,
            },
        ];
        let frames = Rasterizer::new(&config).rasterize_all(&moves);
        Animation::assemble(frames, &config)
    }

    #[test]
    fn test_frames_survive_encoding() {
        let animation = small_animation();
        let bytes = encode_animation(&animation).unwrap();

        let decoded = AnimationPlayer::from_reader(Cursor::new(bytes))
            .unwrap()
            .read_all()
            .unwrap();

        assert_eq!(decoded.side, animation.side);
        assert_eq!(decoded.frames, animation.frames);
        assert_eq!(decoded.delays, vec![40, 40]);
        assert_eq!(decoded.repeat, Repeat::Finite(2));
        assert_eq!(&decoded.palette[..9], &animation.palette.to_rgb_table());
    }

    #[test]
    fn test_open_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("small.gif");
        std::fs::write(&path, encode_animation(&small_animation()).unwrap()).unwrap();

        let mut player = AnimationPlayer::open(&path).unwrap();
        assert_eq!(player.side(), 42);

        let (first, delay) = player.next_frame().unwrap().unwrap();
        assert_eq!(delay, 40);
        assert_eq!(first.get(12, 12), Some(PaletteIndex::Black));
        assert_eq!(first.count(PaletteIndex::White), 0);

        let (second, _) = player.next_frame().unwrap().unwrap();
        assert_eq!(second.get(28, 20), Some(PaletteIndex::White));
        assert!(player.next_frame().unwrap().is_none());
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            AnimationPlayer::open(dir.path().join("missing.gif")),
            Err(DecodeError::Io(_))
        ));
    }
}
