use std::fmt::{Display, Formatter};
use std::ops::Deref;

pub const MIN_QUERY_CHARS: usize = 2;

/// A search string derived from a page title. Trimmed and at least two characters long,
/// unless it is the raw title fallback for degenerate input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryCandidate(String);

impl QueryCandidate {
    pub fn new(value: &str) -> Option<Self> {
        Self::with_min_chars(value, MIN_QUERY_CHARS)
    }

    pub fn with_min_chars(value: &str, min_chars: usize) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.chars().count() >= min_chars.max(MIN_QUERY_CHARS) {
            Some(Self(trimmed.to_string()))
        } else {
            None
        }
    }

    pub fn fallback(raw_title: &str) -> Self {
        Self(raw_title.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for QueryCandidate {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for QueryCandidate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for QueryCandidate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for QueryCandidate {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
