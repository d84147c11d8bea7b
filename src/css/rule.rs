use super::declaration::Declaration;
use super::selectors::Selector;
use std::fmt;

/// A `selector-list { declaration-list }` block. Selectors are ordered by
/// descending specificity, declarations keep their source order.
#[derive(Debug, PartialEq, Clone)]
pub struct Rule {
    pub selectors: Vec<Selector>,
    pub declarations: Vec<Declaration>,
}

impl Rule {
    pub fn new(selectors: Vec<Selector>, declarations: Vec<Declaration>) -> Rule {
        Rule {
            selectors,
            declarations,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, selector) in self.selectors.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", selector)?;
        }

        f.write_str(" {")?;
        for declaration in &self.declarations {
            write!(f, " {}", declaration)?;
        }
        f.write_str(" }")
    }
}
