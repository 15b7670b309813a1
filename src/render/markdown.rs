//! Markdown rendering for notebooks.

use super::{markup, OutputRenderer, RenderOptions, RenderResult, RenderStats};
use crate::error::Result;
use crate::model::{Cell, Notebook};

/// Convert a notebook to markdown.
pub fn to_markdown(notebook: &Notebook, options: &RenderOptions) -> Result<String> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(notebook)
}

/// Convert a notebook to markdown with statistics.
pub fn to_markdown_with_stats(notebook: &Notebook, options: &RenderOptions) -> Result<RenderResult> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render_with_stats(notebook)
}

/// Markdown renderer.
///
/// Walks the cell sequence in order and assembles per-cell fragments into
/// the final document. One renderer per conversion run.
pub struct MarkdownRenderer {
    options: RenderOptions,
    stats: RenderStats,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: RenderStats::new(),
        }
    }

    /// Render a notebook to markdown.
    pub fn render(mut self, notebook: &Notebook) -> Result<String> {
        self.render_internal(notebook)
    }

    /// Render a notebook to markdown with statistics.
    pub fn render_with_stats(mut self, notebook: &Notebook) -> Result<RenderResult> {
        let content = self.render_internal(notebook)?;
        Ok(RenderResult::new(content, self.stats))
    }

    fn render_internal(&mut self, notebook: &Notebook) -> Result<String> {
        let mut outputs = OutputRenderer::new(self.options.clone());
        let mut fragments: Vec<String> = Vec::new();

        for cell in &notebook.cells {
            match cell {
                Cell::Code {
                    source,
                    outputs: records,
                } => {
                    self.stats.add_code_cell();
                    fragments.push(markup::in_prompt(&self.options.in_prompt_color));
                    fragments.push(markup::code_block(
                        &source.joined(),
                        &self.options.code_language,
                    ));
                    if !records.is_empty() {
                        fragments.push(markup::out_prompt(&self.options.out_prompt_color));
                    }
                    for record in records {
                        fragments.push(outputs.render(record)?);
                        self.stats.add_output();
                    }
                }
                Cell::Markdown { source } | Cell::Raw { source } => {
                    self.stats.add_narrative_cell();
                    fragments.push(format!("{}\n", source.joined()));
                }
            }
        }

        self.stats.set_images(outputs.images_written());
        Ok(fragments.join("\n"))
    }
}
