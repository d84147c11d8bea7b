use crate::css::declaration::{
    hex_pair_value, Color, Declaration, FloatSize, Length, Unit, Value,
};
use crate::css::error::{CssParseError, Result};
use crate::css::rule::Rule;
use crate::css::scanner::Scanner;
use crate::css::selectors::{Selector, SimpleSelector};
use log::trace;
use std::cmp::Reverse;

#[inline]
fn valid_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

/// Recursive descent parser over a single [`Scanner`]. Every decision is made
/// on one character of lookahead and never undone.
pub struct CssParser {
    scanner: Scanner,
}

impl CssParser {
    pub fn new(source: &str) -> CssParser {
        CssParser {
            scanner: Scanner::new(source),
        }
    }

    pub fn parse_rules(&mut self) -> Result<Vec<Rule>> {
        let mut rules = Vec::new();

        loop {
            self.scanner.consume_whitespace();
            if self.scanner.at_end() {
                break;
            }

            let rule = self.parse_rule()?;
            trace!("Parsed rule #{}: {}", rules.len(), rule);
            rules.push(rule);
        }

        Ok(rules)
    }

    fn parse_rule(&mut self) -> Result<Rule> {
        let selectors = self.parse_selectors()?;
        let declarations = self.parse_declarations()?;

        Ok(Rule::new(selectors, declarations))
    }

    /// Parses a comma separated selector list up to and including the `{`,
    /// then orders it by descending specificity.
    fn parse_selectors(&mut self) -> Result<Vec<Selector>> {
        let mut selectors = Vec::new();

        loop {
            selectors.push(Selector::Simple(self.parse_simple_selector()?));
            self.scanner.consume_whitespace();

            match self.scanner.peek() {
                Some('{') => {
                    self.scanner.advance();
                    break;
                }
                Some(',') => {
                    self.scanner.advance();
                    self.scanner.consume_whitespace();
                }
                Some(character) => {
                    return Err(CssParseError::UnexpectedCharacter {
                        character,
                        position: self.scanner.offset(),
                    })
                }
                None => {
                    return Err(CssParseError::ExpectedToken {
                        expected: '{',
                        found: None,
                        position: self.scanner.offset(),
                    })
                }
            }
        }

        // stable, so equal scores keep their source order
        selectors.sort_by_key(|selector| Reverse(selector.specificity().weighted_score()));

        Ok(selectors)
    }

    fn parse_simple_selector(&mut self) -> Result<SimpleSelector> {
        let start = self.scanner.offset();
        let mut selector = SimpleSelector::default();
        let mut universal = false;

        while let Some(c) = self.scanner.peek() {
            match c {
                '#' => {
                    self.scanner.advance();
                    selector.id = Some(self.parse_identifier()?);
                }
                '.' => {
                    self.scanner.advance();
                    selector.classes.push(self.parse_identifier()?);
                }
                '*' => {
                    self.scanner.advance();
                    universal = true;
                }
                c if valid_identifier_char(c) => {
                    selector.tag_name = Some(self.parse_identifier()?);
                }
                _ => break,
            }
        }

        if selector.is_universal() && !universal {
            return Err(CssParseError::EmptySelector { position: start });
        }

        Ok(selector)
    }

    /// Parses declarations up to and including the closing `}`.
    fn parse_declarations(&mut self) -> Result<Vec<Declaration>> {
        let mut declarations = Vec::new();

        loop {
            self.scanner.consume_whitespace();
            match self.scanner.peek() {
                Some('}') => {
                    self.scanner.advance();
                    break;
                }
                Some(_) => declarations.push(self.parse_declaration()?),
                None => {
                    return Err(CssParseError::ExpectedToken {
                        expected: '}',
                        found: None,
                        position: self.scanner.offset(),
                    })
                }
            }
        }

        Ok(declarations)
    }

    fn parse_declaration(&mut self) -> Result<Declaration> {
        let name = self.parse_identifier()?;
        self.scanner.consume_whitespace();
        self.expect_char(':')?;
        self.scanner.consume_whitespace();
        let value = self.parse_value()?;
        self.scanner.consume_whitespace();
        self.expect_char(';')?;

        trace!("Parsed declaration {}: {}", name, value);

        Ok(Declaration::new(name, value))
    }

    fn parse_value(&mut self) -> Result<Value> {
        match self.scanner.peek() {
            Some(c) if c.is_ascii_digit() => Ok(Value::Length(self.parse_length()?)),
            Some('#') => Ok(Value::Color(self.parse_color()?)),
            _ => Ok(Value::Keyword(self.parse_identifier()?)),
        }
    }

    fn parse_length(&mut self) -> Result<Length> {
        Ok(Length {
            value: self.parse_float()?,
            unit: self.parse_unit()?,
        })
    }

    fn parse_float(&mut self) -> Result<FloatSize> {
        let position = self.scanner.offset();
        let text = self
            .scanner
            .consume_while(|c| c.is_ascii_digit() || c == '.');

        // long digit runs overflow to infinity
        text.parse::<FloatSize>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or(CssParseError::MalformedNumber { text, position })
    }

    fn parse_unit(&mut self) -> Result<Unit> {
        let position = self.scanner.offset();
        let unit = self.scanner.consume_while(valid_identifier_char);

        Unit::from_identifier(&unit).ok_or(CssParseError::UnrecognizedUnit { unit, position })
    }

    fn parse_color(&mut self) -> Result<Color> {
        self.expect_char('#')?;

        // the grammar has no alpha pair
        Ok(Color::rgb(
            self.parse_hex_pair()?,
            self.parse_hex_pair()?,
            self.parse_hex_pair()?,
        ))
    }

    fn parse_hex_pair(&mut self) -> Result<u8> {
        let position = self.scanner.offset();
        let text = self.scanner.lookahead(2);

        self.scanner
            .take_pair()
            .and_then(|(high, low)| hex_pair_value(high, low))
            .ok_or(CssParseError::MalformedHex { text, position })
    }

    fn parse_identifier(&mut self) -> Result<String> {
        let position = self.scanner.offset();
        let identifier = self.scanner.consume_while(valid_identifier_char);

        if identifier.is_empty() {
            return Err(CssParseError::ExpectedIdentifier {
                found: self.scanner.peek(),
                position,
            });
        }

        Ok(identifier)
    }

    fn expect_char(&mut self, expected: char) -> Result<()> {
        let position = self.scanner.offset();

        match self.scanner.advance() {
            Some(c) if c == expected => Ok(()),
            found => Err(CssParseError::ExpectedToken {
                expected,
                found,
                position,
            }),
        }
    }
}
