//! Errors raised while interpreting a parsed game record.

/// A well-formed SGF file whose content cannot be turned into moves.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("no games in the file")]
    NoGames,
    #[error("malformed move {ident}: expected exactly one value, got {values:?}")]
    MalformedMove { ident: String, values: Vec<String> },
    #[error("malformed move value: {0:?}")]
    MalformedCoordinate(String),
    #[error("unsupported board size: {0:?}")]
    UnsupportedBoardSize(String),
}
