//! Game selection and game-level properties.

use log::warn;

use super::{Collection, GameTree, RecordError};

/// The first game of the collection; any others are ignored with a warning.
pub fn first_game(collection: &Collection) -> Result<&GameTree, RecordError> {
    match collection.game_trees.as_slice() {
        [] => Err(RecordError::NoGames),
        [game] => Ok(game),
        [game, ..] => {
            warn!(
                "found {} games: using the first, ignoring the rest",
                collection.game_trees.len()
            );
            Ok(game)
        }
    }
}

/// Board size declared by the root node's `SZ` property, if any.
///
/// Accepts `"n"` and the square form `"n:n"`.
pub fn record_board_size(tree: &GameTree) -> Result<Option<usize>, RecordError> {
    let Some(prop) = tree.nodes.first().and_then(|root| root.get("SZ")) else {
        return Ok(None);
    };

    let [value] = prop.values.as_slice() else {
        return Err(RecordError::UnsupportedBoardSize(prop.values.join(",")));
    };
    let raw = value.trim();
    let unsupported = || RecordError::UnsupportedBoardSize(raw.to_string());
    let parse = |s: &str| s.trim().parse::<usize>().map_err(|_| unsupported());

    let size = match raw.split_once(':') {
        None => parse(raw)?,
        Some((cols, rows)) => {
            let (cols, rows) = (parse(cols)?, parse(rows)?);
            if cols != rows {
                return Err(unsupported());
            }
            cols
        }
    };
    Ok(Some(size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::sgf::{self, Node, Property};

    #[test]
    fn test_first_game() {
        let c = sgf::parse("(;B[aa])(;W[bb])").unwrap();
        let game = first_game(&c).unwrap();
        assert_eq!(game.nodes[0].properties[0].ident, "B");

        let empty = sgf::parse("").unwrap();
        assert_eq!(first_game(&empty), Err(RecordError::NoGames));
    }

    #[test]
    fn test_record_board_size() {
        let size = |text: &str| record_board_size(&sgf::parse(text).unwrap().game_trees[0]);
        assert_eq!(size("(;SZ[19])"), Ok(Some(19)));
        assert_eq!(size("(;SZ[ 9 ])"), Ok(Some(9)));
        assert_eq!(size("(;SZ[13:13])"), Ok(Some(13)));
        assert_eq!(size("(;GM[1];B[aa])"), Ok(None));
        // Only the root node counts.
        assert_eq!(size("(;GM[1];SZ[9])"), Ok(None));
        assert_eq!(
            size("(;SZ[19:9])"),
            Err(RecordError::UnsupportedBoardSize("19:9".to_string()))
        );
        assert_eq!(
            size("(;SZ[9][13])"),
            Err(RecordError::UnsupportedBoardSize("9,13".to_string()))
        );
        assert_eq!(
            size("(;SZ[big])"),
            Err(RecordError::UnsupportedBoardSize("big".to_string()))
        );
    }

    #[test]
    fn test_board_size_without_value() {
        let tree = GameTree {
            nodes: vec![Node {
                properties: vec![Property {
                    ident: "SZ".to_string(),
                    values: vec![],
                }],
            }],
            variations: vec![],
        };
        assert_eq!(
            record_board_size(&tree),
            Err(RecordError::UnsupportedBoardSize(String::new()))
        );
    }
}
