//! Top-level error for the SGF to GIF pipeline.

use std::io;
use std::path::PathBuf;

use crate::animation::EncodeError;
use crate::record::{ParseError, RecordError};
use crate::schema::ConfigError;

/// Any failure that aborts a conversion. No output is written once one
/// of these is returned.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("cannot parse game record: {0}")]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Record(#[from] RecordError),
    #[error("move {number} at ({x}, {y}) lies outside the {board_size}x{board_size} board")]
    MoveOutOfBounds {
        /// 1-based position in the move sequence.
        number: usize,
        x: i32,
        y: i32,
        board_size: usize,
    },
    #[error("invalid render config: {0}")]
    Config(#[from] ConfigError),
    #[error("cannot encode animation: {0}")]
    Encode(#[from] EncodeError),
    #[error("cannot write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}
