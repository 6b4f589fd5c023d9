//! Shared PDF handling utilities
//!
//! This crate turns uploaded PDF bytes into the single normalized text
//! string the evidence engine works on: all pages in document order,
//! joined by a space, with line breaks flattened to spaces.

pub mod extract;
#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;

pub use extract::{normalize_text, ExtractError, PdfTextExtractor, TextExtractor};
