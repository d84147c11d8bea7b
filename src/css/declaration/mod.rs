use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

mod color;

pub use color::Color;
pub(crate) use color::hex_pair_value;

pub type FloatSize = f32;

static UNITS: Lazy<HashMap<&'static str, Unit>> = Lazy::new(|| {
    let mut m = HashMap::new();

    m.insert("px", Unit::Px);

    m
});

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Unit {
    Px,
}

impl Unit {
    /// Looks up a unit identifier. Matching is case-sensitive.
    pub fn from_identifier(identifier: &str) -> Option<Unit> {
        UNITS.get(identifier).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Px => "px",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Length {
    pub value: FloatSize,
    pub unit: Unit,
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum Value {
    Keyword(String),
    Length(Length),
    Color(Color),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Keyword(keyword) => f.write_str(keyword),
            Value::Length(length) => write!(f, "{}", length),
            Value::Color(color) => write!(f, "{}", color),
        }
    }
}

/// A single `name: value;` pair.
#[derive(Debug, PartialEq, Clone)]
pub struct Declaration {
    pub name: String,
    pub value: Value,
}

impl Declaration {
    pub fn new(name: String, value: Value) -> Declaration {
        Declaration { name, value }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.name, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, Declaration, Length, Unit, Value};

    #[test]
    pub fn test_unit_lookup() {
        assert_eq!(Some(Unit::Px), Unit::from_identifier("px"));
        assert_eq!(None, Unit::from_identifier("PX"));
        assert_eq!(None, Unit::from_identifier("em"));
        assert_eq!(None, Unit::from_identifier(""));
    }

    #[test]
    pub fn test_to_string() {
        let width = Declaration::new(
            "width".to_owned(),
            Value::Length(Length {
                value: 12.5,
                unit: Unit::Px,
            }),
        );
        let margin = Declaration::new(
            "margin".to_owned(),
            Value::Length(Length {
                value: 3.0,
                unit: Unit::Px,
            }),
        );
        let color = Declaration::new("color".to_owned(), Value::Color(Color::rgb(0, 0, 170)));
        let display = Declaration::new("display".to_owned(), Value::Keyword("block".to_owned()));

        assert_eq!("width: 12.5px;", width.to_string());
        assert_eq!("margin: 3px;", margin.to_string());
        assert_eq!("color: #0000aa;", color.to_string());
        assert_eq!("display: block;", display.to_string());
    }
}
