//! Text-to-summary extraction pipeline

use shared_types::{DisputeSummary, EvidenceCategory};

use crate::analyzer::LanguageAnalyzer;
use crate::assembler::assemble;
use crate::extractors::{card_digits, most_frequent_person, resolve_amount, sentence_context};
use crate::matcher::search;
use crate::patterns::{evidence_patterns, CREDIT_CARD};

/// Run the full pipeline over already-extracted document text.
///
/// The text is analyzed once and every extractor reads the same parse.
pub fn extract_summary(analyzer: &dyn LanguageAnalyzer, text: &str) -> DisputeSummary {
    let normalized = shared_pdf::normalize_text(text);
    let doc = analyzer.analyze(&normalized);

    for entity in doc.entities() {
        tracing::debug!(label = %entity.label, text = %entity.text, "entity");
    }

    let name = most_frequent_person(&doc);
    if name.is_none() {
        tracing::warn!("no PERSON entity found, name left empty");
    }

    let amount = resolve_amount(&doc);

    let credit_card = search(&doc, &CREDIT_CARD, card_digits)
        .and_then(|digits| digits.into_iter().next());
    if credit_card.is_none() {
        tracing::warn!("no card ending found, credit card left empty");
    }

    let evidence = EvidenceCategory::ALL.into_iter().filter_map(|category| {
        search(&doc, evidence_patterns(category), sentence_context)
            .map(|snippets| (category, snippets))
    });

    assemble(name, credit_card, amount, evidence)
}
