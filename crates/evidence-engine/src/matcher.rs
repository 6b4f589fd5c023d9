//! Token-sequence pattern matching over a parsed document

use std::collections::HashSet;

use crate::analyzer::{ParsedDocument, Token};

/// One position in a [`TokenPattern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenConstraint {
    /// Lowercase form equals the given word
    Lower(&'static str),
    /// Lowercase form is one of the given words
    LowerIn(&'static [&'static str]),
    IsDigit,
    IsDigitOfLength(usize),
    /// Zero or more arbitrary tokens
    Wildcard,
}

impl TokenConstraint {
    pub fn accepts(&self, token: &Token) -> bool {
        match self {
            TokenConstraint::Lower(word) => token.lower == *word,
            TokenConstraint::LowerIn(words) => words.contains(&token.lower.as_str()),
            TokenConstraint::IsDigit => token.is_digit,
            TokenConstraint::IsDigitOfLength(len) => token.is_digit && token.len() == *len,
            TokenConstraint::Wildcard => true,
        }
    }
}

/// Ordered constraints that must all hold over consecutive tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenPattern(pub &'static [TokenConstraint]);

/// Patterns combined with OR. Static configuration, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternSet {
    pub name: &'static str,
    pub patterns: &'static [TokenPattern],
}

/// A matched token range `[start, end)` and the index of the pattern that
/// produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
    pub pattern: usize,
}

/// All matches of `set` in document order.
///
/// Each pattern scans left to right and resumes after the end of its last
/// match, so matches of the same pattern never overlap. Matches of
/// different patterns may overlap; identical spans are reported once.
pub fn find_matches(doc: &ParsedDocument, set: &PatternSet) -> Vec<MatchSpan> {
    let tokens = doc.tokens();
    let mut spans = Vec::new();

    for (pattern_idx, pattern) in set.patterns.iter().enumerate() {
        let mut start = 0;
        while start < tokens.len() {
            match match_at(tokens, pattern.0, start) {
                Some(end) if end > start => {
                    spans.push(MatchSpan {
                        start,
                        end,
                        pattern: pattern_idx,
                    });
                    start = end;
                }
                _ => start += 1,
            }
        }
    }

    spans.sort_by_key(|span| (span.start, span.end));
    spans.dedup_by_key(|span| (span.start, span.end));
    spans
}

/// Run `transform` on every match of `set` and union the results.
///
/// Strings are deduplicated by exact comparison and kept in the order they
/// were first produced. Returns `None` when nothing matched, which callers
/// must treat differently from an empty result.
pub fn search<F>(doc: &ParsedDocument, set: &PatternSet, transform: F) -> Option<Vec<String>>
where
    F: Fn(&ParsedDocument, &MatchSpan) -> Vec<String>,
{
    let spans = find_matches(doc, set);
    if spans.is_empty() {
        return None;
    }
    tracing::trace!(pattern_set = set.name, matches = spans.len(), "pattern matches");

    let mut seen = HashSet::new();
    let mut results = Vec::new();
    for span in &spans {
        for item in transform(doc, span) {
            if seen.insert(item.clone()) {
                results.push(item);
            }
        }
    }

    Some(results)
}

/// End of the shortest match of `constraints` starting at `pos`.
fn match_at(tokens: &[Token], constraints: &[TokenConstraint], pos: usize) -> Option<usize> {
    let Some((first, rest)) = constraints.split_first() else {
        return Some(pos);
    };

    if let TokenConstraint::Wildcard = first {
        return (pos..=tokens.len()).find_map(|next| match_at(tokens, rest, next));
    }

    let token = tokens.get(pos)?;
    if first.accepts(token) {
        match_at(tokens, rest, pos + 1)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::TokenConstraint::*;
    use super::*;
    use crate::analyzer::{LanguageAnalyzer, RuleBasedAnalyzer};
    use pretty_assertions::assert_eq;

    const CARD: PatternSet = PatternSet {
        name: "card",
        patterns: &[TokenPattern(&[
            Lower("ending"),
            Lower("in"),
            IsDigitOfLength(4),
        ])],
    };

    const CHARGE_VALID: PatternSet = PatternSet {
        name: "charge_valid",
        patterns: &[TokenPattern(&[Lower("charge"), Wildcard, Lower("valid")])],
    };

    fn doc(text: &str) -> ParsedDocument {
        RuleBasedAnalyzer::new().analyze(text)
    }

    fn span_texts(doc: &ParsedDocument, set: &PatternSet) -> Vec<String> {
        find_matches(doc, set)
            .iter()
            .map(|span| doc.span_text(span.start, span.end).to_string())
            .collect()
    }

    #[test]
    fn test_constraints() {
        let tokens = [Token::new("Ending", 0), Token::new("1234", 7), Token::new("12345", 12)];
        assert!(Lower("ending").accepts(&tokens[0]));
        assert!(LowerIn(&["in", "ending"]).accepts(&tokens[0]));
        assert!(IsDigit.accepts(&tokens[1]));
        assert!(IsDigitOfLength(4).accepts(&tokens[1]));
        assert!(!IsDigitOfLength(4).accepts(&tokens[2]));
        assert!(!IsDigit.accepts(&tokens[0]));
        assert!(Wildcard.accepts(&tokens[0]));
    }

    #[test]
    fn test_literal_sequence() {
        let doc = doc("Visa ending in 4242 and Amex ending in 12345.");
        assert_eq!(span_texts(&doc, &CARD), vec!["ending in 4242"]);
    }

    #[test]
    fn test_wildcard_matches_intervening_tokens() {
        let doc = doc("The charge was fully valid.");
        assert_eq!(span_texts(&doc, &CHARGE_VALID), vec!["charge was fully valid"]);
    }

    #[test]
    fn test_wildcard_matches_zero_tokens() {
        let doc = doc("charge valid");
        assert_eq!(span_texts(&doc, &CHARGE_VALID), vec!["charge valid"]);
    }

    #[test]
    fn test_wildcard_is_lazy() {
        let doc = doc("charge is valid and still valid");
        assert_eq!(span_texts(&doc, &CHARGE_VALID), vec!["charge is valid"]);
    }

    #[test]
    fn test_matches_of_one_pattern_do_not_overlap() {
        let doc = doc("charge charge valid");
        assert_eq!(span_texts(&doc, &CHARGE_VALID), vec!["charge charge valid"]);
    }

    #[test]
    fn test_any_pattern_in_set_matches() {
        const SET: PatternSet = PatternSet {
            name: "shipping",
            patterns: &[
                TokenPattern(&[Lower("shipped")]),
                TokenPattern(&[Lower("tracking"), Lower("number")]),
            ],
        };
        let doc = doc("Tracking number 1Z. It shipped.");
        assert_eq!(span_texts(&doc, &SET), vec!["Tracking number", "shipped"]);
    }

    #[test]
    fn test_search_without_matches_is_none() {
        let doc = doc("Nothing relevant here.");
        assert_eq!(search(&doc, &CARD, |_, _| vec!["x".to_string()]), None);
    }

    #[test]
    fn test_search_with_matches_but_no_output_is_empty() {
        let doc = doc("ending in 1234");
        assert_eq!(search(&doc, &CARD, |_, _| Vec::new()), Some(vec![]));
    }

    #[test]
    fn test_search_deduplicates_in_first_seen_order() {
        let doc = doc("ending in 1111. ending in 2222. ending in 1111.");
        let found = search(&doc, &CARD, |doc, span| {
            vec![doc.tokens()[span.end - 1].text.clone()]
        });
        assert_eq!(found, Some(vec!["1111".to_string(), "2222".to_string()]));
    }

    #[test]
    fn test_search_does_not_mutate_document() {
        let doc = doc("Card ending in 1234.");
        let before = doc.tokens().to_vec();
        let first = search(&doc, &CARD, |doc, span| {
            vec![doc.span_text(span.start, span.end).to_string()]
        });
        let second = search(&doc, &CARD, |doc, span| {
            vec![doc.span_text(span.start, span.end).to_string()]
        });
        assert_eq!(first, second);
        assert_eq!(doc.tokens(), before.as_slice());
    }
}
