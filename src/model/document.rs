//! Notebook-level types.

use super::Cell;
use serde::{Deserialize, Serialize};

/// A parsed notebook document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notebook {
    /// Cells in document order.
    #[serde(default)]
    pub cells: Vec<Cell>,

    /// Notebook metadata (kernel, language, etc.)
    #[serde(default)]
    pub metadata: Metadata,

    /// Notebook format major version.
    #[serde(default = "default_nbformat")]
    pub nbformat: u32,

    /// Notebook format minor version.
    #[serde(default)]
    pub nbformat_minor: u32,
}

fn default_nbformat() -> u32 {
    4
}

impl Notebook {
    /// Create a new empty notebook.
    pub fn new() -> Self {
        Self {
            cells: Vec::new(),
            metadata: Metadata::default(),
            nbformat: 4,
            nbformat_minor: 5,
        }
    }

    /// Add a cell to the notebook.
    pub fn add_cell(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Get the number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Get the number of code cells.
    pub fn code_cell_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_code()).count()
    }

    /// Check if the notebook has any cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The notebook's code language, if recorded in metadata.
    pub fn language(&self) -> Option<&str> {
        self.metadata.language()
    }
}

impl Default for Notebook {
    fn default() -> Self {
        Self::new()
    }
}

/// Notebook metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Metadata {
    /// Kernel specification.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kernelspec: Option<Kernelspec>,

    /// Language information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_info: Option<LanguageInfo>,
}

impl Metadata {
    /// Resolve the notebook language, preferring `language_info` over the
    /// kernelspec.
    pub fn language(&self) -> Option<&str> {
        if let Some(ref info) = self.language_info {
            return Some(&info.name);
        }
        self.kernelspec
            .as_ref()
            .and_then(|k| k.language.as_deref())
    }
}

/// Kernel specification from notebook metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Kernelspec {
    /// Kernel name (e.g. "python3").
    #[serde(default)]
    pub name: String,

    /// Human-readable kernel name.
    #[serde(default)]
    pub display_name: String,

    /// Kernel language, if recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Language information from notebook metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LanguageInfo {
    /// Language name (e.g. "python").
    #[serde(default)]
    pub name: String,

    /// Language version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Canonical file extension (e.g. ".py").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_extension: Option<String>,
}
