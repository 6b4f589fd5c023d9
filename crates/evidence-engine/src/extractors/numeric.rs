// Amount and card-number extraction
use lazy_static::lazy_static;
use regex::Regex;
use shared_types::{Amount, AMOUNT_SENTINEL};

use crate::analyzer::{EntityLabel, ParsedDocument};
use crate::matcher::MatchSpan;

lazy_static! {
    static ref TRAILING_NON_DIGITS: Regex = Regex::new(r"\D+$").unwrap();
}

/// Largest `$`-prefixed MONEY entity, falling back to the first raw token
/// containing `$` when the document has no such entity at all.
///
/// The running maximum starts at the `-1` sentinel, so amounts at or below
/// it are reported as [`Amount::NotFound`]. So are `$` entities that fail
/// to parse; they do not trigger the raw token fallback.
pub fn resolve_amount(doc: &ParsedDocument) -> Amount {
    let mut best = AMOUNT_SENTINEL as f64;
    let mut saw_dollar_entity = false;

    for entity in doc.entities() {
        if entity.label != EntityLabel::Money || doc.char_before(entity.start_char) != Some('$') {
            continue;
        }
        saw_dollar_entity = true;
        match parse_money(&entity.text) {
            Some(value) => best = best.max(value),
            None => tracing::warn!(text = %entity.text, "skipping unparseable money entity"),
        }
    }

    if best > AMOUNT_SENTINEL as f64 {
        return Amount::Resolved(best);
    }
    if saw_dollar_entity {
        return Amount::NotFound;
    }

    match first_dollar_token(doc.text()) {
        Some(token) => {
            tracing::info!(token, "no $ money entity found, using raw $ token");
            Amount::RawToken(token.to_string())
        }
        None => Amount::NotFound,
    }
}

/// First whitespace-delimited word containing `$`, verbatim.
pub fn first_dollar_token(text: &str) -> Option<&str> {
    text.split_whitespace().find(|word| word.contains('$'))
}

/// Four-character number-like tokens inside a match, e.g. the digits of
/// "ending in 1234".
pub fn card_digits(doc: &ParsedDocument, span: &MatchSpan) -> Vec<String> {
    doc.tokens()[span.start..span.end]
        .iter()
        .filter(|token| token.like_num && token.len() == 4)
        .map(|token| token.text.trim().to_string())
        .collect()
}

fn parse_money(text: &str) -> Option<f64> {
    let stripped = TRAILING_NON_DIGITS.replace(text, "");
    let compact: String = stripped.chars().filter(|c| *c != ',').collect();
    compact.parse::<f64>().ok().filter(|value| value.is_finite())
}
