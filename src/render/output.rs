//! Output rendering and MIME resolution.
//!
//! Turns one captured output into one markdown fragment, writing image
//! payloads to disk along the way.

use std::fs;
use std::io;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use regex::Regex;

use super::{markup, RenderOptions};
use crate::error::{Error, Result};
use crate::model::{MimeBundle, Output, Payload};

/// Renders outputs for one conversion run.
///
/// Holds the image counter, so a renderer must not be shared between
/// conversions: numbering follows first-seen order across the whole
/// document and never resets mid-run.
pub struct OutputRenderer {
    options: RenderOptions,
    ansi_escape: Regex,
    image_count: usize,
}

impl OutputRenderer {
    /// Create a renderer for a fresh conversion run.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            ansi_escape: Regex::new(r"\x1b\[.*?[@-~]").unwrap(),
            image_count: 0,
        }
    }

    /// Render one output record to a markdown fragment.
    pub fn render(&mut self, output: &Output) -> Result<String> {
        match output {
            Output::Stream { name, text } => {
                Ok(markup::stream_block(&text.joined(), *name, &self.options))
            }
            Output::Error { traceback } => Ok(self.render_error(traceback)),
            Output::Rich { data } => self.render_rich(data),
        }
    }

    /// The number of images written so far in this run.
    pub fn images_written(&self) -> usize {
        self.image_count
    }

    fn render_error(&self, traceback: &[String]) -> String {
        let raw = traceback.join("\n");
        let plain = self.ansi_escape.replace_all(&raw, "");
        markup::error_block(&plain, &self.options)
    }

    fn render_rich(&mut self, data: &MimeBundle) -> Result<String> {
        let (mime, payload) = self.resolve(data)?;
        if mime == "text/html" {
            Ok(markup::html_block(&text_payload(mime, payload)?))
        } else if mime.starts_with("text/") {
            // Already plain text; emitted unmodified.
            text_payload(mime, payload)
        } else {
            self.extract_image(mime, payload)
        }
    }

    /// Pick the representation with the lowest priority-list index among
    /// the bundle's keys.
    fn resolve<'d>(&self, data: &'d MimeBundle) -> Result<(&'d str, &'d Payload)> {
        let mut best: Option<(usize, &str, &Payload)> = None;
        for (mime, payload) in data {
            if let Some(index) = self.options.data_priority.iter().position(|p| p == mime) {
                if best.map_or(true, |(i, _, _)| index < i) {
                    best = Some((index, mime, payload));
                }
            }
        }
        match best {
            Some((_, mime, payload)) => Ok((mime, payload)),
            None => Err(Error::UnknownOutput(self.options.data_priority.clone())),
        }
    }

    /// Decode a base64 image payload to `image<N>.<ext>` under the image
    /// directory and return the markdown link fragment.
    fn extract_image(&mut self, mime: &str, payload: &Payload) -> Result<String> {
        let subtype = mime.split('/').nth(1).unwrap_or("bin");
        let extension = if subtype.starts_with("svg") {
            "svg"
        } else {
            subtype
        };

        self.image_count += 1;
        let file_name = format!("image{}.{}", self.image_count, extension);

        let dir = self.options.image_dir_path();
        ensure_dir_exists(&dir)?;

        let bytes = decode_base64(&text_payload(mime, payload)?)?;
        let path = dir.join(&file_name);
        log::debug!("writing {} ({} bytes)", path.display(), bytes.len());
        fs::write(&path, bytes)?;

        // Forward slashes in the link regardless of host path conventions.
        Ok(markup::image_block(&format!(
            "{}/{}",
            self.options.image_dir_name, file_name
        )))
    }
}

fn text_payload(mime: &str, payload: &Payload) -> Result<String> {
    payload
        .as_text()
        .ok_or_else(|| Error::Render(format!("non-text payload for {}", mime)))
}

/// Notebook JSON wraps base64 across line fragments; the strict engine
/// rejects embedded whitespace, so strip it first.
fn decode_base64(text: &str) -> Result<Vec<u8>> {
    let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    Ok(STANDARD.decode(compact.as_bytes())?)
}

/// Create the directory if absent, tolerating a concurrent creator.
/// A pre-existing non-directory at the path is fatal.
fn ensure_dir_exists(path: &Path) -> Result<()> {
    if path.exists() {
        if path.is_dir() {
            return Ok(());
        }
        return Err(Error::NotADirectory(path.to_path_buf()));
    }
    log::info!("creating image directory {}", path.display());
    match fs::create_dir_all(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(e.into()),
    }
}
