//! Rendering options and configuration.

use std::path::PathBuf;

/// Default MIME priority, most-preferred first.
const DATA_PRIORITY: [&str; 7] = [
    "text/html",
    "text/markdown",
    "image/svg+xml",
    "text/latex",
    "image/png",
    "image/jpeg",
    "text/plain",
];

/// Options for rendering a notebook to markdown.
///
/// Read-only for the duration of a conversion.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Language tag for code fences.
    pub code_language: String,

    /// Color of the "In:" prompt.
    pub in_prompt_color: String,

    /// Color of the "Out:" prompt.
    pub out_prompt_color: String,

    /// Background color for stdout stream blocks.
    pub stdout_background: String,

    /// Background color for stderr stream blocks.
    pub stderr_background: String,

    /// Background color for error blocks.
    pub error_background: String,

    /// MIME types in preference order; rich outputs render as the first
    /// type present in both this list and the output's bundle.
    pub data_priority: Vec<String>,

    /// Directory name used in image links (relative to the markdown file).
    pub image_dir_name: String,

    /// Directory extracted images are written to. Defaults to
    /// `./<image_dir_name>` when unset.
    pub image_dir: Option<PathBuf>,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the code fence language.
    pub fn with_code_language(mut self, language: impl Into<String>) -> Self {
        self.code_language = language.into();
        self
    }

    /// Set the directory extracted images are written to.
    pub fn with_image_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.image_dir = Some(dir.into());
        self
    }

    /// Set the directory name used in image links.
    pub fn with_image_dir_name(mut self, name: impl Into<String>) -> Self {
        self.image_dir_name = name.into();
        self
    }

    /// Set the prompt colors.
    pub fn with_prompt_colors(
        mut self,
        in_color: impl Into<String>,
        out_color: impl Into<String>,
    ) -> Self {
        self.in_prompt_color = in_color.into();
        self.out_prompt_color = out_color.into();
        self
    }

    /// Replace the MIME priority list.
    pub fn with_data_priority(mut self, priority: Vec<String>) -> Self {
        self.data_priority = priority;
        self
    }

    /// The filesystem directory images are written to.
    pub fn image_dir_path(&self) -> PathBuf {
        self.image_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(&self.image_dir_name))
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            code_language: "python".to_string(),
            in_prompt_color: "#303f9f".to_string(),
            out_prompt_color: "#d84315".to_string(),
            stdout_background: "#eaeef2".to_string(),
            stderr_background: "#fddfdd".to_string(),
            error_background: "#fddfdd".to_string(),
            data_priority: DATA_PRIORITY.iter().map(|s| s.to_string()).collect(),
            image_dir_name: "images".to_string(),
            image_dir: None,
        }
    }
}
