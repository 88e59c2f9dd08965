//! Parser for SGF (Smart Game Format) game collections.
//!
//! Only the tree structure is interpreted here: property values are kept
//! as raw text and game semantics live in the move extractor.

/// Every game tree found in one SGF file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    pub game_trees: Vec<GameTree>,
}

/// A node sequence followed by zero or more variations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameTree {
    /// Main sequence, in play order.
    pub nodes: Vec<Node>,
    /// Child trees branching off the last node of `nodes`.
    pub variations: Vec<GameTree>,
}

impl Drop for GameTree {
    // Flatten before dropping so deeply nested variations do not recurse.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.variations);
        while let Some(mut tree) = pending.pop() {
            pending.append(&mut tree.variations);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    /// Properties in the order they appear in the file.
    pub properties: Vec<Property>,
}

impl Node {
    /// First property with the given identifier.
    pub fn get(&self, ident: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.ident == ident)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    /// Identifier reduced to its uppercase letters.
    pub ident: String,
    /// Unescaped values; never empty.
    pub values: Vec<String>,
}

/// Malformed SGF text, with the 1-based position where it was noticed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {line}, column {column}")]
pub struct ParseError {
    pub line: usize,
    pub column: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("game tree without nodes")]
    EmptySequence,
    #[error("property identifier {0:?} has no uppercase letters")]
    InvalidIdent(String),
    #[error("property {0} has no value")]
    MissingValue(String),
    #[error("unterminated value of property {0}")]
    UnterminatedValue(String),
}

/// Parse SGF text into a collection.
///
/// Whitespace-only input yields an empty collection.
pub fn parse(text: &str) -> Result<Collection, ParseError> {
    parse_bytes(text.as_bytes())
}

/// Parse raw SGF bytes. Non-UTF-8 sequences inside values are replaced.
pub fn parse_bytes(input: &[u8]) -> Result<Collection, ParseError> {
    Parser::new(input).parse_collection()
}

struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        if b == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(b)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.bump();
        }
    }

    fn error_at(&self, line: usize, column: usize, kind: ParseErrorKind) -> ParseError {
        ParseError { line, column, kind }
    }

    fn error(&self, kind: ParseErrorKind) -> ParseError {
        self.error_at(self.line, self.column, kind)
    }

    fn unexpected(&self) -> ParseError {
        match self.peek() {
            Some(b) if b.is_ascii() => self.error(ParseErrorKind::UnexpectedChar(char::from(b))),
            Some(_) => self.error(ParseErrorKind::UnexpectedChar(char::REPLACEMENT_CHARACTER)),
            None => self.error(ParseErrorKind::UnexpectedEof),
        }
    }

    fn expect(&mut self, want: u8) -> Result<(), ParseError> {
        if self.peek() == Some(want) {
            self.bump();
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    fn parse_collection(&mut self) -> Result<Collection, ParseError> {
        let mut game_trees = Vec::new();
        loop {
            self.skip_whitespace();
            match self.peek() {
                None => return Ok(Collection { game_trees }),
                Some(b'(') => game_trees.push(self.parse_game_tree()?),
                Some(_) => return Err(self.unexpected()),
            }
        }
    }

    fn parse_game_tree(&mut self) -> Result<GameTree, ParseError> {
        self.expect(b'(')?;
        // Enclosing trees of `tree`, outermost first. Kept on the heap so
        // nesting depth is bounded by memory, not by the call stack.
        let mut parents: Vec<GameTree> = Vec::new();
        let mut tree = GameTree::default();
        loop {
            self.skip_whitespace();
            match self.peek() {
                // Nodes may not follow a variation inside the same tree.
                Some(b';') if tree.variations.is_empty() => tree.nodes.push(self.parse_node()?),
                Some(b'(') | Some(b')') if tree.nodes.is_empty() => {
                    return Err(self.error(ParseErrorKind::EmptySequence));
                }
                Some(b'(') => {
                    self.bump();
                    parents.push(std::mem::take(&mut tree));
                }
                Some(b')') => {
                    self.bump();
                    match parents.pop() {
                        Some(mut parent) => {
                            parent.variations.push(tree);
                            tree = parent;
                        }
                        None => return Ok(tree),
                    }
                }
                _ => return Err(self.unexpected()),
            }
        }
    }

    fn parse_node(&mut self) -> Result<Node, ParseError> {
        self.expect(b';')?;
        let mut node = Node::default();
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some(b) if b.is_ascii_alphabetic() => node.properties.push(self.parse_property()?),
                _ => return Ok(node),
            }
        }
    }

    fn parse_property(&mut self) -> Result<Property, ParseError> {
        let (line, column) = (self.line, self.column);

        let mut raw = String::new();
        while let Some(b) = self.peek().filter(u8::is_ascii_alphabetic) {
            raw.push(char::from(b));
            self.bump();
        }

        // FF[3] allowed lowercase letters in identifiers; they carry no meaning.
        let ident: String = raw.chars().filter(char::is_ascii_uppercase).collect();
        if ident.is_empty() {
            return Err(self.error_at(line, column, ParseErrorKind::InvalidIdent(raw)));
        }

        let mut values = Vec::new();
        loop {
            self.skip_whitespace();
            if self.peek() != Some(b'[') {
                break;
            }
            values.push(self.parse_value(&ident)?);
        }

        if values.is_empty() {
            return Err(self.error_at(line, column, ParseErrorKind::MissingValue(ident)));
        }
        Ok(Property { ident, values })
    }

    fn parse_value(&mut self, ident: &str) -> Result<String, ParseError> {
        let (line, column) = (self.line, self.column);
        let unterminated =
            |p: &Self| p.error_at(line, column, ParseErrorKind::UnterminatedValue(ident.into()));

        self.expect(b'[')?;
        let mut bytes = Vec::new();
        loop {
            match self.bump() {
                None => return Err(unterminated(self)),
                Some(b']') => break,
                Some(b'\\') => match self.bump() {
                    None => return Err(unterminated(self)),
                    // Soft line break.
                    Some(b'\n') => {
                        if self.peek() == Some(b'\r') {
                            self.bump();
                        }
                    }
                    Some(b'\r') => {
                        if self.peek() == Some(b'\n') {
                            self.bump();
                        }
                    }
                    Some(b) => bytes.push(b),
                },
                Some(b) => bytes.push(b),
            }
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prop(ident: &str, values: &[&str]) -> Property {
        Property {
            ident: ident.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    #[test]
    fn test_parse_simple_game() {
        let c = parse("(;FF[4]GM[1]SZ[19];B[dd];W[pp])").unwrap();
        assert_eq!(c.game_trees.len(), 1);

        let tree = &c.game_trees[0];
        assert_eq!(tree.nodes.len(), 3);
        assert!(tree.variations.is_empty());
        assert_eq!(
            tree.nodes[0].properties,
            vec![prop("FF", &["4"]), prop("GM", &["1"]), prop("SZ", &["19"])]
        );
        assert_eq!(tree.nodes[1].properties, vec![prop("B", &["dd"])]);
        assert_eq!(tree.nodes[2].get("W"), Some(&prop("W", &["pp"])));
        assert_eq!(tree.nodes[2].get("B"), None);
    }

    #[test]
    fn test_whitespace_between_tokens() {
        let c = parse("  (\n ; B [aa]\n\t[bb] ; W[cc] )\n").unwrap();
        let tree = &c.game_trees[0];
        assert_eq!(tree.nodes[0].properties, vec![prop("B", &["aa", "bb"])]);
        assert_eq!(tree.nodes[1].properties, vec![prop("W", &["cc"])]);
    }

    #[test]
    fn test_value_escapes() {
        let c = parse("(;C[a \\] b \\\\ c\\\nd])").unwrap();
        assert_eq!(c.game_trees[0].nodes[0].properties[0].values[0], "a ] b \\ cd");
    }

    #[test]
    fn test_empty_value_is_kept() {
        let c = parse("(;B[])").unwrap();
        assert_eq!(c.game_trees[0].nodes[0].properties, vec![prop("B", &[""])]);
    }

    #[test]
    fn test_long_ff3_identifiers() {
        let c = parse("(;AddBlack[aa]Black[bb])").unwrap();
        let props = &c.game_trees[0].nodes[0].properties;
        assert_eq!(props[0].ident, "AB");
        assert_eq!(props[1].ident, "B");
    }

    #[test]
    fn test_variations() {
        let c = parse("(;GM[1];B[aa](;W[bb];B[cc])(;W[dd]))").unwrap();
        let tree = &c.game_trees[0];
        assert_eq!(tree.nodes.len(), 2);
        assert_eq!(tree.variations.len(), 2);
        assert_eq!(tree.variations[0].nodes.len(), 2);
        assert_eq!(tree.variations[1].nodes[0].properties, vec![prop("W", &["dd"])]);
    }

    #[test]
    fn test_deeply_nested_variations() {
        let depth = 100_000;
        let mut text = "(;B[aa]".repeat(depth);
        text.push_str(&")".repeat(depth));

        let c = parse(&text).unwrap();
        let mut tree = &c.game_trees[0];
        let mut seen = 1;
        while let Some(child) = tree.variations.first() {
            assert_eq!(child.nodes.len(), 1);
            tree = child;
            seen += 1;
        }
        assert_eq!(seen, depth);
    }

    #[test]
    fn test_unclosed_nested_variation() {
        let err = parse("(;B[aa](;W[bb](;B[cc])").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_multiple_game_trees() {
        let c = parse("(;B[aa])\n(;W[bb])").unwrap();
        assert_eq!(c.game_trees.len(), 2);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse("").unwrap(), Collection::default());
        assert_eq!(parse(" \n\t").unwrap(), Collection::default());
    }

    #[test]
    fn test_non_utf8_value() {
        let c = parse_bytes(b"(;C[caf\xe9])").unwrap();
        assert_eq!(c.game_trees[0].nodes[0].properties[0].values[0], "caf\u{FFFD}");
    }

    #[test]
    fn test_error_positions() {
        let err = parse("(;B[aa]\n;W[bb]").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedEof);
        assert_eq!(err.line, 2);

        let err = parse("(;B[aa]]").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedChar(']'));
        assert_eq!((err.line, err.column), (1, 8));

        let err = parse("garbage").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::UnexpectedChar('g'));
        assert_eq!((err.line, err.column), (1, 1));
    }

    #[test]
    fn test_structural_errors() {
        assert_eq!(parse("()").unwrap_err().kind, ParseErrorKind::EmptySequence);
        assert_eq!(
            parse("(;B)").unwrap_err().kind,
            ParseErrorKind::MissingValue("B".to_string())
        );
        assert_eq!(
            parse("(;b[aa])").unwrap_err().kind,
            ParseErrorKind::InvalidIdent("b".to_string())
        );
        assert_eq!(
            parse("(;C[open").unwrap_err().kind,
            ParseErrorKind::UnterminatedValue("C".to_string())
        );
        assert_eq!(
            parse("(;B[aa](;W[bb]);B[cc])").unwrap_err().kind,
            ParseErrorKind::UnexpectedChar(';')
        );
    }

    #[test]
    fn test_error_display() {
        let err = parse("(;B[aa]]").unwrap_err();
        assert_eq!(err.to_string(), "unexpected character ']' at line 1, column 8");
    }
}
