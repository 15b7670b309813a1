//! Render results and statistics.

use serde::Serialize;

/// Counts collected while rendering one notebook.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct RenderStats {
    /// Code cells rendered.
    pub code_cells: usize,
    /// Narrative (markdown or raw) cells rendered.
    pub narrative_cells: usize,
    /// Output records rendered.
    pub outputs: usize,
    /// Image files written.
    pub images: usize,
}

impl RenderStats {
    /// Create empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_code_cell(&mut self) {
        self.code_cells += 1;
    }

    pub(crate) fn add_narrative_cell(&mut self) {
        self.narrative_cells += 1;
    }

    pub(crate) fn add_output(&mut self) {
        self.outputs += 1;
    }

    pub(crate) fn set_images(&mut self, images: usize) {
        self.images = images;
    }

    /// Total number of cells rendered.
    pub fn cell_count(&self) -> usize {
        self.code_cells + self.narrative_cells
    }
}

/// The rendered markdown together with its statistics.
#[derive(Debug, Clone)]
pub struct RenderResult {
    /// The markdown document.
    pub content: String,
    /// Statistics collected during rendering.
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a render result.
    pub fn new(content: String, stats: RenderStats) -> Self {
        Self { content, stats }
    }
}
