use std::fmt;

/// How specific a selector is. The derived ordering is lexicographic: ids
/// first, then classes, then the tag.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Copy, Clone)]
pub struct Specificity {
    pub ids: usize,
    pub classes: usize,
    pub tags: usize,
}

impl Specificity {
    /// Single-number weight used to order the selectors of a rule.
    ///
    /// Ten or more classes spill into the id weight, so this does not always
    /// agree with the lexicographic `Ord`.
    pub fn weighted_score(self) -> usize {
        self.ids * 1000 + self.classes * 100 + self.tags * 10
    }
}

/// A compound selector: an optional tag, an optional id and any number of
/// classes. All three empty means the universal selector `*`.
#[derive(Debug, PartialEq, Eq, Default, Clone)]
pub struct SimpleSelector {
    pub tag_name: Option<String>,
    pub id: Option<String>,
    pub classes: Vec<String>,
}

impl SimpleSelector {
    pub fn is_universal(&self) -> bool {
        self.tag_name.is_none() && self.id.is_none() && self.classes.is_empty()
    }

    pub fn specificity(&self) -> Specificity {
        Specificity {
            ids: self.id.is_some() as usize,
            classes: self.classes.len(),
            tags: self.tag_name.is_some() as usize,
        }
    }
}

impl fmt::Display for SimpleSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_universal() {
            return f.write_str("*");
        }

        if let Some(tag_name) = &self.tag_name {
            f.write_str(tag_name)?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{}", id)?;
        }
        for class in &self.classes {
            write!(f, ".{}", class)?;
        }

        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Selector {
    Simple(SimpleSelector),
}

impl Selector {
    pub fn specificity(&self) -> Specificity {
        match self {
            Selector::Simple(simple) => simple.specificity(),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Simple(simple) => write!(f, "{}", simple),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{SimpleSelector, Specificity};

    fn specificity(ids: usize, classes: usize, tags: usize) -> Specificity {
        Specificity { ids, classes, tags }
    }

    #[test]
    pub fn test_specificity() {
        let selector = SimpleSelector {
            tag_name: Some("div".to_owned()),
            id: None,
            classes: vec!["a".to_owned(), "a".to_owned()],
        };

        assert_eq!(specificity(0, 2, 1), selector.specificity());
        assert_eq!(specificity(0, 0, 0), SimpleSelector::default().specificity());
    }

    #[test]
    pub fn test_weighted_score() {
        assert_eq!(1000, specificity(1, 0, 0).weighted_score());
        assert_eq!(210, specificity(0, 2, 1).weighted_score());
        assert_eq!(10, specificity(0, 0, 1).weighted_score());
    }

    #[test]
    pub fn test_weighted_score_disagrees_with_ordering_past_ten_classes() {
        let id = specificity(1, 0, 0);
        let many_classes = specificity(0, 11, 0);

        assert!(id > many_classes);
        assert!(id.weighted_score() < many_classes.weighted_score());
    }

    #[test]
    pub fn test_to_string() {
        let compound = SimpleSelector {
            tag_name: Some("p".to_owned()),
            id: Some("main".to_owned()),
            classes: vec!["a".to_owned(), "b".to_owned()],
        };

        assert_eq!("p#main.a.b", compound.to_string());
        assert_eq!("*", SimpleSelector::default().to_string());
    }
}
