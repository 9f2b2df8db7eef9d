//! Minimal selector grammar understood by the bundled hosts.
//!
//! `#name` matches an element id, `.name` matches the first element carrying
//! the class, and a bare `name` is treated as an id. Compound and descendant
//! selectors are not supported and never match.

/// A parsed element selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Id(String),
    Class(String),
}

impl Selector {
    /// Parse a selector, returning `None` for blank or unsupported input.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        let (is_class, name) = if let Some(rest) = input.strip_prefix('#') {
            (false, rest)
        } else if let Some(rest) = input.strip_prefix('.') {
            (true, rest)
        } else {
            (false, input)
        };

        if name.is_empty() || !name.chars().all(is_name_char) {
            return None;
        }
        if is_class {
            Some(Self::Class(name.to_string()))
        } else {
            Some(Self::Id(name.to_string()))
        }
    }
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}
