//! Notebook model types.
//!
//! This module defines the in-memory representation that bridges notebook
//! JSON parsing and markdown rendering. Cells and outputs are explicit sum
//! types, so dispatch sites are exhaustiveness-checked by the compiler.

mod cell;
mod document;
mod output;
mod text;

pub use cell::Cell;
pub use document::{Kernelspec, LanguageInfo, Metadata, Notebook};
pub use output::{MimeBundle, Output, Payload, StreamName};
pub use text::MultilineText;
