use std::error::Error;
use std::fmt;

pub type Result<T> = std::result::Result<T, CssParseError>;

/// Every way a stylesheet can fail to parse. Positions are zero-based char
/// offsets into the source text.
#[derive(Debug, Clone, PartialEq)]
pub enum CssParseError {
    /// Neither `,` nor `{` followed a selector.
    UnexpectedCharacter { character: char, position: usize },
    /// A required literal was missing, `found` is `None` at end of input.
    ExpectedToken {
        expected: char,
        found: Option<char>,
        position: usize,
    },
    ExpectedIdentifier {
        found: Option<char>,
        position: usize,
    },
    EmptySelector { position: usize },
    UnrecognizedUnit { unit: String, position: usize },
    MalformedNumber { text: String, position: usize },
    MalformedHex { text: String, position: usize },
}

impl CssParseError {
    pub fn position(&self) -> usize {
        use CssParseError::*;

        match *self {
            UnexpectedCharacter { position, .. }
            | ExpectedToken { position, .. }
            | ExpectedIdentifier { position, .. }
            | EmptySelector { position }
            | UnrecognizedUnit { position, .. }
            | MalformedNumber { position, .. }
            | MalformedHex { position, .. } => position,
        }
    }

    /// One-based line and column of the error within `source`.
    pub fn line_and_column(&self, source: &str) -> (usize, usize) {
        let mut line = 1;
        let mut column = 1;

        for c in source.chars().take(self.position()) {
            if c == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }

        (line, column)
    }
}

impl Error for CssParseError {}

struct Found(Option<char>);

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(c) => write!(f, "{:?}", c),
            None => f.write_str("end of input"),
        }
    }
}

impl fmt::Display for CssParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use CssParseError::*;

        match self {
            UnexpectedCharacter {
                character,
                position,
            } => write!(
                f,
                "Unexpected character {:?} in selector at offset {}.",
                character, position
            ),
            ExpectedToken {
                expected,
                found,
                position,
            } => write!(
                f,
                "Expected {:?} at offset {}, found {}.",
                expected,
                position,
                Found(*found)
            ),
            ExpectedIdentifier { found, position } => write!(
                f,
                "Expected an identifier at offset {}, found {}.",
                position,
                Found(*found)
            ),
            EmptySelector { position } => {
                write!(f, "Empty selector at offset {}.", position)
            }
            UnrecognizedUnit { unit, position } => write!(
                f,
                "Unrecognized unit \"{}\" at offset {}.",
                unit, position
            ),
            MalformedNumber { text, position } => write!(
                f,
                "Malformed number \"{}\" at offset {}.",
                text, position
            ),
            MalformedHex { text, position } => write!(
                f,
                "Malformed hex pair \"{}\" at offset {}.",
                text, position
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CssParseError;

    #[test]
    pub fn test_display_end_of_input() {
        let error = CssParseError::ExpectedToken {
            expected: '}',
            found: None,
            position: 7,
        };

        assert_eq!("Expected '}' at offset 7, found end of input.", error.to_string());
        assert_eq!(7, error.position());
    }

    #[test]
    pub fn test_line_and_column() {
        let source = "a { x: 1px; }\nb { y 2px; }";
        let error = CssParseError::ExpectedToken {
            expected: ':',
            found: Some('2'),
            position: 20,
        };

        assert_eq!((2, 7), error.line_and_column(source));
        assert_eq!((1, 1), CssParseError::EmptySelector { position: 0 }.line_and_column(source));
    }

    #[test]
    pub fn test_display_unit() {
        let error = CssParseError::UnrecognizedUnit {
            unit: "em".to_owned(),
            position: 3,
        };

        assert_eq!("Unrecognized unit \"em\" at offset 3.", error.to_string());
    }
}
