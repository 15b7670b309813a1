//! Notebook cells.

use super::{MultilineText, Output};
use serde::{Deserialize, Serialize};

/// One unit of a notebook: executable source with captured outputs, or
/// narrative text.
///
/// Markdown and raw cells are both narrative and render the same way;
/// they stay separate variants so the `cell_type` discriminator survives a
/// round trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "cell_type", rename_all = "snake_case")]
pub enum Cell {
    /// Executable source plus its captured outputs.
    Code {
        /// Source text fragments.
        #[serde(default)]
        source: MultilineText,
        /// Captured outputs, in execution order.
        #[serde(default)]
        outputs: Vec<Output>,
    },

    /// Narrative markdown.
    Markdown {
        /// Source text fragments.
        #[serde(default)]
        source: MultilineText,
    },

    /// Raw passthrough text.
    Raw {
        /// Source text fragments.
        #[serde(default)]
        source: MultilineText,
    },
}

impl Cell {
    /// Create a code cell.
    pub fn code(source: impl Into<MultilineText>, outputs: Vec<Output>) -> Self {
        Cell::Code {
            source: source.into(),
            outputs,
        }
    }

    /// Create a markdown cell.
    pub fn markdown(source: impl Into<MultilineText>) -> Self {
        Cell::Markdown {
            source: source.into(),
        }
    }

    /// Create a raw cell.
    pub fn raw(source: impl Into<MultilineText>) -> Self {
        Cell::Raw {
            source: source.into(),
        }
    }

    /// The cell's concatenated source text.
    pub fn source(&self) -> String {
        match self {
            Cell::Code { source, .. } | Cell::Markdown { source } | Cell::Raw { source } => {
                source.joined()
            }
        }
    }

    /// Check whether this is a code cell.
    pub fn is_code(&self) -> bool {
        matches!(self, Cell::Code { .. })
    }
}
