//! Multiline text as notebook JSON stores it.

use serde::{Deserialize, Serialize};

/// Text stored either as a single string or as a list of line fragments.
///
/// Notebook JSON uses both shapes interchangeably for cell sources and
/// stream text. Fragments already carry their own newlines, so joining is
/// plain concatenation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MultilineText {
    /// A single string, possibly containing newlines.
    Single(String),
    /// Line fragments to be concatenated verbatim.
    Lines(Vec<String>),
}

impl MultilineText {
    /// Concatenate the fragments into one string.
    pub fn joined(&self) -> String {
        match self {
            MultilineText::Single(s) => s.clone(),
            MultilineText::Lines(lines) => lines.concat(),
        }
    }

    /// Check whether the text is empty.
    pub fn is_empty(&self) -> bool {
        match self {
            MultilineText::Single(s) => s.is_empty(),
            MultilineText::Lines(lines) => lines.iter().all(|l| l.is_empty()),
        }
    }
}

impl Default for MultilineText {
    fn default() -> Self {
        MultilineText::Single(String::new())
    }
}

impl From<&str> for MultilineText {
    fn from(s: &str) -> Self {
        MultilineText::Single(s.to_string())
    }
}

impl From<String> for MultilineText {
    fn from(s: String) -> Self {
        MultilineText::Single(s)
    }
}

impl From<Vec<String>> for MultilineText {
    fn from(lines: Vec<String>) -> Self {
        MultilineText::Lines(lines)
    }
}
