pub mod declaration;
pub mod error;
pub mod parser;
pub mod rule;
pub mod scanner;
pub mod selectors;

use log::debug;
use std::fmt;

pub use declaration::{Color, Declaration, Length, Unit, Value};
pub use error::CssParseError;
pub use parser::CssParser;
pub use rule::Rule;
pub use selectors::{Selector, SimpleSelector, Specificity};

/// A parsed stylesheet: its rules in source order.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Stylesheet {
    pub rules: Vec<Rule>,
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in &self.rules {
            writeln!(f, "{}", rule)?;
        }

        Ok(())
    }
}

/// Parses `source` into a [`Stylesheet`].
///
/// The first malformed construct aborts the whole parse; no partial
/// stylesheet is ever returned.
pub fn parse(source: &str) -> Result<Stylesheet, CssParseError> {
    let mut parser = CssParser::new(source);

    match parser.parse_rules() {
        Ok(rules) => {
            debug!("Parsed stylesheet with {} rules.", rules.len());

            Ok(Stylesheet { rules })
        }
        Err(error) => {
            debug!("Stylesheet rejected: {}", error);

            Err(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{parse, CssParseError};

    #[test]
    pub fn test_empty_input() {
        assert!(parse("").unwrap().rules.is_empty());
        assert!(parse(" \n\t  ").unwrap().rules.is_empty());
    }

    #[test]
    pub fn test_to_string() {
        let stylesheet = parse("div,#a{color:#FF00AA;width:3px;}p{}").unwrap();

        assert_eq!(
            "#a, div { color: #ff00aa; width: 3px; }\np { }\n",
            stylesheet.to_string()
        );
    }

    #[test]
    pub fn test_failure_in_later_rule_discards_everything() {
        let error = parse("a { x: 1px; }\nb { y 2px; }").unwrap_err();

        assert_eq!(
            CssParseError::ExpectedToken {
                expected: ':',
                found: Some('2'),
                position: 20,
            },
            error
        );
    }
}
