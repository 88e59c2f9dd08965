//! SGF point decoding.

use super::RecordError;

/// Base letter of the coordinate alphabet; `'a'` is line 0.
const BASE: char = 'a';

/// Decode a two-letter SGF point such as `"dd"` into zero-based `(x, y)`.
///
/// The result is not checked against any board size: letters past the
/// board edge, or outside `a..=z` altogether, decode to out-of-range or
/// negative values and are left for the caller to judge.
pub fn decode_point(token: &str) -> Result<(i32, i32), RecordError> {
    let mut chars = token.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(cx), Some(cy), None) => Ok((offset(cx), offset(cy))),
        _ => Err(RecordError::MalformedCoordinate(token.to_string())),
    }
}

#[inline]
fn offset(c: char) -> i32 {
    c as i32 - BASE as i32
}
