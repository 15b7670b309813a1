//! Captured execution outputs of code cells.

use super::MultilineText;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The MIME-type → payload mapping of a rich output.
pub type MimeBundle = BTreeMap<String, Payload>;

/// One captured result of executing a code cell.
///
/// Notebook JSON distinguishes four `output_type` values; `display_data`
/// and `execute_result` carry the same MIME bundle and render identically,
/// so both deserialize into [`Output::Rich`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "output_type", rename_all = "snake_case")]
pub enum Output {
    /// Text written to stdout or stderr during execution.
    Stream {
        /// Which stream the text was written to.
        name: StreamName,
        /// The captured text fragments.
        #[serde(default)]
        text: MultilineText,
    },

    /// An exception traceback, possibly containing ANSI color escapes.
    Error {
        /// Traceback lines (without trailing newlines).
        #[serde(default)]
        traceback: Vec<String>,
    },

    /// The same logical result in one or more MIME-typed representations.
    #[serde(rename = "display_data", alias = "execute_result")]
    Rich {
        /// MIME type → payload.
        data: MimeBundle,
    },
}

impl Output {
    /// Create a stream output.
    pub fn stream(name: StreamName, text: impl Into<MultilineText>) -> Self {
        Output::Stream {
            name,
            text: text.into(),
        }
    }

    /// Create an error output from traceback lines.
    pub fn error(traceback: Vec<String>) -> Self {
        Output::Error { traceback }
    }

    /// Create a rich output from a MIME bundle.
    pub fn rich(data: MimeBundle) -> Self {
        Output::Rich { data }
    }
}

/// The stream an execution wrote to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamName {
    /// Standard output.
    Stdout,
    /// Standard error.
    Stderr,
}

/// A single MIME representation inside a rich output.
///
/// Text-bearing types store strings or line fragments; other types (e.g.
/// `application/json`) may carry arbitrary JSON. Resolution decides what
/// actually renders, so non-text payloads only fail if selected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Payload {
    /// A textual payload (plain text, HTML, or base64-encoded bytes).
    Text(MultilineText),
    /// A non-text JSON payload.
    Other(serde_json::Value),
}

impl Payload {
    /// Get the payload as concatenated text, if it is textual.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Payload::Text(text) => Some(text.joined()),
            Payload::Other(_) => None,
        }
    }
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        Payload::Text(MultilineText::from(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_stream() {
        let json = r##"{"output_type": "stream", "name": "stdout", "text": ["hello\n"]}"##;
        let output: Output = serde_json::from_str(json).unwrap();
        match output {
            Output::Stream { name, text } => {
                assert_eq!(name, StreamName::Stdout);
                assert_eq!(text.joined(), "hello\n");
            }
            _ => panic!("expected stream output"),
        }
    }

    #[test]
    fn test_deserialize_error() {
        let json = r##"{"output_type": "error", "ename": "ZeroDivisionError",
                       "evalue": "division by zero", "traceback": ["line one", "line two"]}"##;
        let output: Output = serde_json::from_str(json).unwrap();
        match output {
            Output::Error { traceback } => assert_eq!(traceback.len(), 2),
            _ => panic!("expected error output"),
        }
    }

    #[test]
    fn test_display_data_and_execute_result_both_deserialize_as_rich() {
        let display = r##"{"output_type": "display_data", "data": {"text/plain": "2"}}"##;
        let execute = r##"{"output_type": "execute_result", "execution_count": 1,
                          "data": {"text/plain": "2"}}"##;

        for json in [display, execute] {
            let output: Output = serde_json::from_str(json).unwrap();
            match output {
                Output::Rich { data } => {
                    assert_eq!(data["text/plain"].as_text().unwrap(), "2");
                }
                _ => panic!("expected rich output"),
            }
        }
    }

    #[test]
    fn test_json_payload_deserializes_as_other() {
        let json = r##"{"output_type": "display_data",
                       "data": {"application/json": {"a": 1}, "text/plain": "{'a': 1}"}}"##;
        let output: Output = serde_json::from_str(json).unwrap();
        match output {
            Output::Rich { data } => {
                assert!(data["application/json"].as_text().is_none());
                assert!(data["text/plain"].as_text().is_some());
            }
            _ => panic!("expected rich output"),
        }
    }
}
