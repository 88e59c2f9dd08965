//! Stone placements extracted from a game tree.

use log::debug;

use super::{GameTree, RecordError, decode_point};

/// Color of a placed stone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoneColor {
    Black,
    White,
}

impl StoneColor {
    /// Color placed by a move property, or `None` for any other property.
    pub fn from_ident(ident: &str) -> Option<Self> {
        match ident {
            "B" => Some(StoneColor::Black),
            "W" => Some(StoneColor::White),
            _ => None,
        }
    }
}

/// One stone placement, in zero-based board coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub color: StoneColor,
    pub x: i32,
    pub y: i32,
}

impl Move {
    /// Whether the move addresses an intersection of a `board_size` board.
    pub fn is_on_board(&self, board_size: usize) -> bool {
        let on_axis = |v: i32| usize::try_from(v).is_ok_and(|v| v < board_size);
        on_axis(self.x) && on_axis(self.y)
    }
}

/// Collect the placements of `tree`'s main sequence.
///
/// Moves come out in node order, then property order within a node.
/// Properties other than `B` and `W` are skipped; variations are not
/// visited.
pub fn extract_moves(tree: &GameTree) -> Result<Vec<Move>, RecordError> {
    let mut moves = Vec::new();
    for node in &tree.nodes {
        for prop in &node.properties {
            let Some(color) = StoneColor::from_ident(&prop.ident) else {
                continue;
            };
            let [value] = prop.values.as_slice() else {
                return Err(RecordError::MalformedMove {
                    ident: prop.ident.clone(),
                    values: prop.values.clone(),
                });
            };

            let (x, y) = decode_point(value)?;
            let mv = Move { color, x, y };
            debug!("{:?}", mv);
            moves.push(mv);
        }
    }

    if !tree.variations.is_empty() {
        debug!(
            "ignoring {} variation(s) after move {}",
            tree.variations.len(),
            moves.len()
        );
    }
    Ok(moves)
}
