//! Evidence extraction for payment dispute documents
//!
//! Turns the text of an uploaded dispute PDF into a [`DisputeSummary`]:
//! the customer's name, the disputed amount, the last four card digits and
//! sentences that support the legitimacy of the charge.

pub mod analyzer;
pub mod assembler;
pub mod extractors;
pub mod matcher;
pub mod patterns;
pub mod pipeline;

use std::sync::Arc;

use shared_pdf::{PdfTextExtractor, TextExtractor};
use shared_types::{DisputeSummary, ParseOutcome};

pub use analyzer::{LanguageAnalyzer, ParsedDocument, RuleBasedAnalyzer};
pub use pipeline::extract_summary;

/// EvidenceEngine entry point
///
/// Holds the text extractor and language analyzer. Both are built once and
/// shared read-only, so a single engine can serve concurrent requests.
#[derive(Clone)]
pub struct EvidenceEngine {
    analyzer: Arc<dyn LanguageAnalyzer>,
    extractor: Arc<dyn TextExtractor>,
}

impl EvidenceEngine {
    pub fn new() -> Self {
        Self::with_components(
            Arc::new(RuleBasedAnalyzer::new()),
            Arc::new(PdfTextExtractor::new()),
        )
    }

    pub fn with_components(
        analyzer: Arc<dyn LanguageAnalyzer>,
        extractor: Arc<dyn TextExtractor>,
    ) -> Self {
        tracing::debug!(
            analyzer = analyzer.name(),
            extractor = extractor.name(),
            "evidence engine ready"
        );
        Self {
            analyzer,
            extractor,
        }
    }

    /// Parse an uploaded PDF.
    ///
    /// Documents whose text cannot be extracted yield
    /// [`ParseOutcome::Unreadable`] instead of an error.
    pub fn parse_pdf(&self, bytes: &[u8]) -> ParseOutcome {
        match self.extractor.extract(bytes) {
            Ok(text) => ParseOutcome::Parsed(self.parse_text(&text)),
            Err(e) => {
                tracing::warn!(error = %e, size = bytes.len(), "failed to extract document text");
                ParseOutcome::Unreadable
            }
        }
    }

    /// Run the pipeline on text that was already extracted.
    pub fn parse_text(&self, text: &str) -> DisputeSummary {
        extract_summary(self.analyzer.as_ref(), text)
    }
}

impl Default for EvidenceEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EvidenceEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EvidenceEngine")
            .field("analyzer", &self.analyzer.name())
            .field("extractor", &self.extractor.name())
            .finish()
    }
}
