//! PDF text extraction
//!
//! Wraps `pdf-extract` behind the [`TextExtractor`] trait so the pipeline
//! can be driven by other backends (or by plain strings in tests).
//!
//! # Example
//! ```no_run
//! use shared_pdf::{PdfTextExtractor, TextExtractor};
//!
//! # fn example(pdf_bytes: &[u8]) -> Result<(), shared_pdf::ExtractError> {
//! let text = PdfTextExtractor::new().extract(pdf_bytes)?;
//! assert!(!text.contains('\n'));
//! # Ok(())
//! # }
//! ```

use std::panic;

use thiserror::Error;
use tracing::debug;

/// Page separator emitted by some PDF text backends.
const FORM_FEED: char = '\x0C';

/// Reasons a document could not be turned into text.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("Input is not a PDF document")]
    NotPdf,

    #[error("PDF is password protected")]
    PasswordProtected,

    #[error("Invalid PDF: {0}")]
    InvalidPdf(String),

    #[error("PDF has no pages")]
    NoPages,

    #[error("Extraction error: {0}")]
    Extraction(String),
}

/// Source of document text for the extraction pipeline.
pub trait TextExtractor: Send + Sync {
    /// Extract the normalized text of every page.
    fn extract(&self, pdf_bytes: &[u8]) -> Result<String, ExtractError>;

    fn name(&self) -> &'static str;
}

/// Default extractor backed by `pdf-extract`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    pub fn new() -> Self {
        Self
    }

    fn page_count(pdf_bytes: &[u8]) -> Result<usize, ExtractError> {
        // pdf-extract re-exports Document from lopdf
        let document = pdf_extract::Document::load_mem(pdf_bytes)
            .map_err(|e| classify_error(&e.to_string()))?;
        Ok(document.get_pages().len())
    }

    fn read_text(pdf_bytes: &[u8]) -> Result<(usize, String), ExtractError> {
        let page_count = Self::page_count(pdf_bytes)?;
        if page_count == 0 {
            return Err(ExtractError::NoPages);
        }
        let raw_text = pdf_extract::extract_text_from_mem(pdf_bytes)
            .map_err(|e| classify_error(&e.to_string()))?;
        Ok((page_count, raw_text))
    }
}

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, pdf_bytes: &[u8]) -> Result<String, ExtractError> {
        if pdf_bytes.len() < 4 || &pdf_bytes[0..4] != b"%PDF" {
            return Err(ExtractError::NotPdf);
        }

        // pdf-extract panics on some malformed content streams
        let (page_count, raw_text) = panic::catch_unwind(|| Self::read_text(pdf_bytes))
            .map_err(|_| {
                ExtractError::Extraction("PDF backend panicked while reading text".into())
            })??;

        debug!(
            "Extracted {} characters from {} page(s)",
            raw_text.len(),
            page_count
        );

        Ok(normalize_text(&raw_text))
    }

    fn name(&self) -> &'static str {
        "pdf-extract"
    }
}

/// Join form-feed separated pages with a space and flatten line breaks.
pub fn normalize_text(raw_text: &str) -> String {
    raw_text
        .split(FORM_FEED)
        .collect::<Vec<_>>()
        .join(" ")
        .replace("\r\n", " ")
        .replace(['\r', '\n'], " ")
}

fn classify_error(message: &str) -> ExtractError {
    let lower = message.to_lowercase();

    if lower.contains("encrypted") || lower.contains("password") {
        return ExtractError::PasswordProtected;
    }

    if lower.contains("invalid")
        || lower.contains("malformed")
        || lower.contains("corrupt")
        || lower.contains("parse")
        || lower.contains("xref")
        || lower.contains("trailer")
    {
        return ExtractError::InvalidPdf(message.to_string());
    }

    ExtractError::Extraction(message.to_string())
}
