use smallvec::SmallVec;
use std::str::FromStr;

use crate::{
    error::{Error, Result},
    node::Element,
};

/// A compound selector: an optional tag name followed by any number of
/// `.class` and `#id` parts, e.g. `button.bx--search-close`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: SmallVec<[String; 2]>,
}

impl Selector {
    pub fn matches(&self, element: &Element) -> bool {
        self.tag.as_deref().map_or(true, |tag| tag == element.tag)
            && self
                .id
                .as_deref()
                .map_or(true, |id| element.id() == Some(id))
            && self.classes.iter().all(|class| element.has_class(class))
    }
}

impl FromStr for Selector {
    type Err = Error;

    fn from_str(source: &str) -> Result<Self> {
        let invalid = || Error::InvalidSelector(source.to_owned());
        let source = source.trim();
        if source.is_empty() {
            return Err(invalid());
        }

        let mut selector = Selector::default();
        let tag_len = source.find(['.', '#']).unwrap_or(source.len());
        if tag_len > 0 {
            let tag = &source[..tag_len];
            if !tag.chars().all(is_identifier_char) {
                return Err(invalid());
            }
            selector.tag = Some(tag.to_owned());
        }

        let mut rest = &source[tag_len..];
        while let Some(marker) = rest.chars().next() {
            let part = &rest[1..];
            let part_len = part.find(['.', '#']).unwrap_or(part.len());
            let name = &part[..part_len];
            if name.is_empty() || !name.chars().all(is_identifier_char) {
                return Err(invalid());
            }
            match marker {
                '.' => selector.classes.push(name.to_owned()),
                '#' if selector.id.is_none() => selector.id = Some(name.to_owned()),
                _ => return Err(invalid()),
            }
            rest = &part[part_len..];
        }

        Ok(selector)
    }
}

fn is_identifier_char(character: char) -> bool {
    character.is_ascii_alphanumeric() || character == '-' || character == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_compound_selectors() {
        let selector: Selector = "button.bx--search-close#clear".parse().unwrap();
        assert_eq!(selector.tag.as_deref(), Some("button"));
        assert_eq!(selector.id.as_deref(), Some("clear"));
        assert_eq!(selector.classes.as_slice(), ["bx--search-close"]);

        let selector: Selector = ".bx--skeleton.bx--text-input".parse().unwrap();
        assert_eq!(selector.tag, None);
        assert_eq!(selector.classes.len(), 2);
    }

    #[test]
    fn rejects_malformed_selectors() {
        for source in ["", "  ", "div.", "#a#b", "div > span", ".a..b"] {
            assert_eq!(
                source.parse::<Selector>(),
                Err(Error::InvalidSelector(source.to_owned())),
                "{:?}",
                source
            );
        }
    }

    #[test]
    fn matches_elements() {
        let element = Element::new("input")
            .class("bx--text-input bx--text-input--light")
            .attribute("id", "test");
        let matching = ["input", ".bx--text-input", "#test", "input.bx--text-input--light#test"];
        for source in matching {
            assert!(source.parse::<Selector>().unwrap().matches(&element), "{}", source);
        }
        for source in ["button", ".bx--search", "#other"] {
            assert!(!source.parse::<Selector>().unwrap().matches(&element), "{}", source);
        }
    }
}
