//! Language analysis: tokens, sentences and named entities
//!
//! The pipeline only depends on the [`LanguageAnalyzer`] trait. The
//! [`RuleBasedAnalyzer`] shipped here is a lexicon-driven implementation
//! that is good enough for the short, form-like text found in dispute
//! documents; a statistical model can be plugged in behind the same trait.
//!
//! Analyzers are built once at startup and shared read-only between
//! requests, so implementations must be `Send + Sync` and must not keep
//! per-call state.

mod entities;
mod lexicon;
mod sentences;
mod tokenizer;

use std::fmt;

pub use lexicon::Lexicon;
pub use tokenizer::like_num;

/// Produces a [`ParsedDocument`] from normalized text.
pub trait LanguageAnalyzer: Send + Sync {
    fn analyze(&self, text: &str) -> ParsedDocument;

    fn name(&self) -> &'static str;
}

/// A single token with the lexical attributes the pattern matcher needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub lower: String,
    /// Byte offset of the token in the analyzed text
    pub idx: usize,
    pub is_digit: bool,
    pub like_num: bool,
}

impl Token {
    pub fn new(text: &str, idx: usize) -> Self {
        Self {
            text: text.to_string(),
            lower: text.to_lowercase(),
            idx,
            is_digit: !text.is_empty() && text.chars().all(|c| c.is_ascii_digit()),
            like_num: like_num(text),
        }
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte offset just past the token.
    pub fn end(&self) -> usize {
        self.idx + self.text.len()
    }
}

/// A sentence as a half-open range of token indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityLabel {
    Person,
    Money,
    Cardinal,
}

impl EntityLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Money => "MONEY",
            EntityLabel::Cardinal => "CARDINAL",
        }
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub text: String,
    pub label: EntityLabel,
    /// Byte offset of the first character of the entity
    pub start_char: usize,
    /// Token range `[start, end)`
    pub start: usize,
    pub end: usize,
}

/// Read-only view over one analyzed text.
///
/// Token offsets, sentence ranges and entity offsets all refer to
/// [`ParsedDocument::text`].
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    text: String,
    tokens: Vec<Token>,
    sentences: Vec<Sentence>,
    entities: Vec<Entity>,
    token_sentence: Vec<usize>,
}

impl ParsedDocument {
    /// Assemble a document from analyzer output.
    ///
    /// Sentences are expected to be contiguous and to cover every token;
    /// tokens outside any sentence are attached to the last one.
    pub fn new(
        text: impl Into<String>,
        tokens: Vec<Token>,
        sentences: Vec<Sentence>,
        entities: Vec<Entity>,
    ) -> Self {
        let mut token_sentence = vec![sentences.len().saturating_sub(1); tokens.len()];
        for (sent_idx, sentence) in sentences.iter().enumerate() {
            let end = sentence.end.min(tokens.len());
            for slot in token_sentence.iter_mut().take(end).skip(sentence.start) {
                *slot = sent_idx;
            }
        }

        Self {
            text: text.into(),
            tokens,
            sentences,
            entities,
            token_sentence,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn sentences(&self) -> &[Sentence] {
        &self.sentences
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Index of the sentence containing `token_index`.
    pub fn sentence_index(&self, token_index: usize) -> Option<usize> {
        if self.sentences.is_empty() {
            return None;
        }
        self.token_sentence.get(token_index).copied()
    }

    /// Source text covered by the token range `[start, end)`.
    pub fn span_text(&self, start: usize, end: usize) -> &str {
        if start >= end || end > self.tokens.len() {
            return "";
        }
        let from = self.tokens[start].idx;
        let to = self.tokens[end - 1].end();
        self.text.get(from..to).unwrap_or("")
    }

    pub fn sentence_text(&self, sent_idx: usize) -> &str {
        match self.sentences.get(sent_idx) {
            Some(sentence) => self.span_text(sentence.start, sentence.end),
            None => "",
        }
    }

    /// Character immediately before a byte offset, if any.
    pub fn char_before(&self, byte_offset: usize) -> Option<char> {
        self.text.get(..byte_offset)?.chars().next_back()
    }
}

/// Lexicon-driven analyzer used when no statistical model is configured.
#[derive(Debug, Clone)]
pub struct RuleBasedAnalyzer {
    lexicon: Lexicon,
}

impl RuleBasedAnalyzer {
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::english(),
        }
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }
}

impl Default for RuleBasedAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageAnalyzer for RuleBasedAnalyzer {
    fn analyze(&self, text: &str) -> ParsedDocument {
        let tokens = tokenizer::tokenize(text, &self.lexicon);
        let sentences = sentences::segment(&tokens);
        let entities = entities::recognize(text, &tokens, &self.lexicon);
        ParsedDocument::new(text, tokens, sentences, entities)
    }

    fn name(&self) -> &'static str {
        "rule-based"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn texts(doc: &ParsedDocument) -> Vec<&str> {
        doc.tokens().iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_analyze_scenario_document() {
        let analyzer = RuleBasedAnalyzer::new();
        let doc = analyzer.analyze("John Smith disputes a charge of $45.00. Card ending in 1234.");

        assert_eq!(
            texts(&doc),
            vec![
                "John", "Smith", "disputes", "a", "charge", "of", "$", "45.00", ".", "Card",
                "ending", "in", "1234", "."
            ]
        );
        assert_eq!(doc.sentences().len(), 2);
        assert_eq!(
            doc.sentence_text(0),
            "John Smith disputes a charge of $45.00."
        );
        assert_eq!(doc.sentence_text(1), "Card ending in 1234.");

        let labels: Vec<(&str, EntityLabel)> = doc
            .entities()
            .iter()
            .map(|e| (e.text.as_str(), e.label))
            .collect();
        assert_eq!(
            labels,
            vec![
                ("John Smith", EntityLabel::Person),
                ("45.00", EntityLabel::Money),
                ("1234", EntityLabel::Cardinal),
            ]
        );
    }

    #[test]
    fn test_custom_lexicon_suppresses_names() {
        let text = "Acme Widget shipped the order.";
        let persons = |analyzer: &RuleBasedAnalyzer| -> Vec<String> {
            analyzer
                .analyze(text)
                .entities()
                .iter()
                .filter(|e| e.label == EntityLabel::Person)
                .map(|e| e.text.clone())
                .collect()
        };

        assert_eq!(persons(&RuleBasedAnalyzer::new()), vec!["Acme Widget"]);

        let analyzer =
            RuleBasedAnalyzer::with_lexicon(Lexicon::english().with_common_words(&["acme", "widget"]));
        assert!(persons(&analyzer).is_empty());
    }

    #[test]
    fn test_money_entity_offset_points_after_dollar() {
        let doc = RuleBasedAnalyzer::new().analyze("Total due $50 plus $120 fee.");
        let money: Vec<&Entity> = doc
            .entities()
            .iter()
            .filter(|e| e.label == EntityLabel::Money)
            .collect();
        assert_eq!(money.len(), 2);
        for entity in money {
            assert_eq!(doc.char_before(entity.start_char), Some('$'));
        }
    }

    #[test]
    fn test_sentence_index_lookup() {
        let doc = RuleBasedAnalyzer::new().analyze("One two. Three four.");
        assert_eq!(doc.sentence_index(0), Some(0));
        assert_eq!(doc.sentence_index(2), Some(0));
        assert_eq!(doc.sentence_index(3), Some(1));
        assert_eq!(doc.sentence_index(99), None);
    }

    #[test]
    fn test_empty_text_has_no_structure() {
        let doc = RuleBasedAnalyzer::new().analyze("   ");
        assert!(doc.tokens().is_empty());
        assert!(doc.sentences().is_empty());
        assert!(doc.entities().is_empty());
        assert_eq!(doc.sentence_index(0), None);
        assert_eq!(doc.sentence_text(0), "");
    }

    #[test]
    fn test_span_text_uses_source_slice() {
        let doc = RuleBasedAnalyzer::new().analyze("ending   in  1234");
        assert_eq!(doc.span_text(0, 3), "ending   in  1234");
        assert_eq!(doc.span_text(2, 2), "");
    }

    #[test]
    fn test_char_before_handles_multibyte_text() {
        let doc = RuleBasedAnalyzer::new().analyze("Paid €30 and $40");
        let forty = doc.tokens().iter().find(|t| t.text == "40").unwrap();
        assert_eq!(doc.char_before(forty.idx), Some('$'));
        let thirty = doc.tokens().iter().find(|t| t.text == "30").unwrap();
        assert_eq!(doc.char_before(thirty.idx), Some('€'));
        assert_eq!(doc.char_before(0), None);
    }
}
