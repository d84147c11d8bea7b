//! A small style sheet parser: rules made of compound selectors and
//! `name: value;` declarations, where a value is a keyword, a `px` length or
//! a `#rrggbb` color.

pub mod css;

pub use css::{parse, CssParseError, Stylesheet};
