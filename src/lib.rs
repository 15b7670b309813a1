//! # nbmd
//!
//! Convert Jupyter notebooks to clean Markdown.
//!
//! This library parses notebook JSON into a typed document model and
//! renders it as a single markdown string, extracting embedded image
//! outputs to sibling files and rewriting them as relative links.
//!
//! ## Quick Start
//!
//! ```no_run
//! use nbmd::{parse_file, render};
//!
//! fn main() -> nbmd::Result<()> {
//!     // Parse a notebook file
//!     let notebook = parse_file("analysis.ipynb")?;
//!
//!     // Convert to Markdown
//!     let options = render::RenderOptions::default();
//!     let markdown = render::to_markdown(&notebook, &options)?;
//!     println!("{}", markdown);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Cell-order fidelity**: cells render exactly in input order
//! - **Rich output resolution**: a MIME priority list picks which
//!   representation of a display-data output is rendered
//! - **Image extraction**: base64 image payloads become numbered files
//!   (`image1.png`, `image2.svg`, ...) linked from the document
//! - **Stream and error blocks**: stdout/stderr and tracebacks render as
//!   colored `<pre>` blocks, ANSI escapes stripped

pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{
    Cell, Kernelspec, LanguageInfo, Metadata, MimeBundle, MultilineText, Notebook, Output, Payload,
    StreamName,
};
pub use parser::{parse_file, parse_reader, parse_str};
pub use render::{RenderOptions, RenderResult, RenderStats};

use std::path::Path;

/// Convert a notebook file to markdown with default options.
///
/// Extracted images land in `./images` next to the working directory; use
/// [`to_markdown_with_options`] or the [`Nbmd`] builder to control paths.
///
/// # Example
///
/// ```no_run
/// let markdown = nbmd::to_markdown("analysis.ipynb").unwrap();
/// std::fs::write("analysis.md", markdown).unwrap();
/// ```
pub fn to_markdown<P: AsRef<Path>>(path: P) -> Result<String> {
    let notebook = parse_file(path)?;
    render::to_markdown(&notebook, &RenderOptions::default())
}

/// Convert a notebook file to markdown with custom options.
pub fn to_markdown_with_options<P: AsRef<Path>>(
    path: P,
    options: &RenderOptions,
) -> Result<String> {
    let notebook = parse_file(path)?;
    render::to_markdown(&notebook, options)
}

/// Builder for parsing and converting notebooks.
///
/// # Example
///
/// ```no_run
/// use nbmd::Nbmd;
///
/// let markdown = Nbmd::new()
///     .with_image_dir("./analysis_images")
///     .with_image_dir_name("analysis_images")
///     .parse("analysis.ipynb")?
///     .to_markdown()?;
/// # Ok::<(), nbmd::Error>(())
/// ```
pub struct Nbmd {
    render_options: RenderOptions,
}

impl Nbmd {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            render_options: RenderOptions::default(),
        }
    }

    /// Set the directory extracted images are written to.
    pub fn with_image_dir(mut self, dir: impl Into<std::path::PathBuf>) -> Self {
        self.render_options = self.render_options.with_image_dir(dir);
        self
    }

    /// Set the directory name used in image links.
    pub fn with_image_dir_name(mut self, name: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_image_dir_name(name);
        self
    }

    /// Set the code fence language.
    pub fn with_code_language(mut self, language: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_code_language(language);
        self
    }

    /// Replace the MIME priority list.
    pub fn with_data_priority(mut self, priority: Vec<String>) -> Self {
        self.render_options = self.render_options.with_data_priority(priority);
        self
    }

    /// Parse a notebook file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<NbmdResult> {
        let notebook = parse_file(path)?;
        Ok(NbmdResult {
            notebook,
            render_options: self.render_options,
        })
    }

    /// Parse a notebook from a JSON string.
    pub fn parse_str(self, json: &str) -> Result<NbmdResult> {
        let notebook = parse_str(json)?;
        Ok(NbmdResult {
            notebook,
            render_options: self.render_options,
        })
    }
}

impl Default for Nbmd {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a notebook, ready to render.
pub struct NbmdResult {
    /// The parsed notebook
    pub notebook: Notebook,
    /// Render options to use
    render_options: RenderOptions,
}

impl NbmdResult {
    /// Convert to markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.notebook, &self.render_options)
    }

    /// Convert to markdown with statistics.
    pub fn to_markdown_with_stats(&self) -> Result<RenderResult> {
        render::to_markdown_with_stats(&self.notebook, &self.render_options)
    }

    /// Get the notebook.
    pub fn notebook(&self) -> &Notebook {
        &self.notebook
    }
}
