// Sentence context for evidence snippets
use crate::analyzer::ParsedDocument;
use crate::matcher::MatchSpan;

/// Previous sentences at or under this many characters are not worth
/// prepending.
const MIN_CONTEXT_CHARS: usize = 10;

/// The sentence containing the match, preceded by the previous sentence
/// when that one is long enough to add context.
pub fn sentence_context(doc: &ParsedDocument, span: &MatchSpan) -> Vec<String> {
    let Some(sent_idx) = doc.sentence_index(span.start) else {
        return Vec::new();
    };
    let sentence = doc.sentence_text(sent_idx).trim();

    if sent_idx > 0 {
        let previous = doc.sentence_text(sent_idx - 1).trim();
        if previous.chars().count() > MIN_CONTEXT_CHARS {
            return vec![format!("{} {}", previous, sentence)];
        }
    }

    vec![sentence.to_string()]
}
