//! Markdown and HTML fragment builders.
//!
//! Pure formatting functions; all decisions about which fragment to emit
//! live in the output renderer and the document walker.

use super::RenderOptions;
use crate::model::StreamName;

/// Wrap source in a fenced code block tagged with `language`.
pub fn code_block(source: &str, language: &str) -> String {
    format!("```{}\n{}\n```", language, source)
}

/// The "In:" prompt above a code cell's source.
pub fn in_prompt(color: &str) -> String {
    format!("<p style=\"color: {};\"><b>In:</b></p>\n", color)
}

/// The "Out:" prompt above a code cell's outputs.
pub fn out_prompt(color: &str) -> String {
    format!("<p style=\"color: {};\"><b>Out:</b></p>\n", color)
}

/// Escape text for embedding in a `<pre>` element.
///
/// Newlines become `&#xA;` entities rather than real line breaks, so the
/// block renders as a single visually-wrapped unit inside markdown.
pub fn escape_pre(text: &str) -> String {
    text.replace('<', "&lt;").replace('\n', "&#xA;")
}

/// Wrap escaped text in a colored `<pre>` element.
pub fn pre_block(text: &str, background: &str) -> String {
    format!(
        "<pre style=\"background: {}; padding-top: 5px\">\n{}</pre>",
        background,
        escape_pre(text)
    )
}

/// Wrap stream output, colored by which stream it came from.
pub fn stream_block(text: &str, name: StreamName, options: &RenderOptions) -> String {
    let background = match name {
        StreamName::Stdout => &options.stdout_background,
        StreamName::Stderr => &options.stderr_background,
    };
    pre_block(text, background)
}

/// Wrap an already ANSI-stripped traceback.
pub fn error_block(text: &str, options: &RenderOptions) -> String {
    pre_block(text, &options.error_background)
}

/// Pass rich HTML through, folding newlines so a multi-line payload does
/// not break markdown layout.
pub fn html_block(raw_html: &str) -> String {
    format!("{}\n", raw_html.replace('\n', "&#xA;"))
}

/// A markdown image reference with no alt text.
pub fn image_block(relative_path: &str) -> String {
    format!("![](./{})", relative_path)
}
