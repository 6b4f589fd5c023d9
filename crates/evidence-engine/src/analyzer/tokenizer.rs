//! Whitespace-and-punctuation tokenizer

use super::lexicon::{Lexicon, NUMBER_WORDS, PREFIX_CHARS, SUFFIX_CHARS};
use super::Token;

/// Split `text` into tokens, recording byte offsets into `text`.
pub fn tokenize(text: &str, lexicon: &Lexicon) -> Vec<Token> {
    let mut tokens = Vec::new();
    for (offset, chunk) in whitespace_chunks(text) {
        split_chunk(chunk, offset, lexicon, &mut tokens);
    }
    tokens
}

/// Number-like check: digits with optional sign and separators, a simple
/// fraction, or an English number word.
pub fn like_num(text: &str) -> bool {
    let text = text.strip_prefix(['+', '-', '±', '~']).unwrap_or(text);

    let compact: String = text.chars().filter(|c| *c != ',' && *c != '.').collect();
    if !compact.is_empty() && compact.chars().all(|c| c.is_ascii_digit()) {
        return true;
    }

    if let Some((num, denom)) = text.split_once('/') {
        let is_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
        if is_digits(num) && is_digits(denom) {
            return true;
        }
    }

    NUMBER_WORDS.contains(&text.to_lowercase().as_str())
}

fn whitespace_chunks(text: &str) -> Vec<(usize, &str)> {
    let mut chunks = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, c) in text.char_indices() {
        match (c.is_whitespace(), start) {
            (true, Some(s)) => {
                chunks.push((s, &text[s..idx]));
                start = None;
            }
            (false, None) => start = Some(idx),
            _ => {}
        }
    }
    if let Some(s) = start {
        chunks.push((s, &text[s..]));
    }

    chunks
}

fn split_chunk(chunk: &str, offset: usize, lexicon: &Lexicon, tokens: &mut Vec<Token>) {
    let mut start = 0;
    let mut end = chunk.len();
    let mut suffixes: Vec<(usize, usize)> = Vec::new();

    while let Some(c) = chunk[start..end].chars().next() {
        if !PREFIX_CHARS.contains(&c) {
            break;
        }
        let next = start + c.len_utf8();
        tokens.push(Token::new(&chunk[start..next], offset + start));
        start = next;
    }

    while start < end {
        let body = &chunk[start..end];

        if let Some(len) = possessive_len(body) {
            suffixes.push((end - len, end));
            end -= len;
            continue;
        }

        let Some(last) = body.chars().next_back() else {
            break;
        };
        if last == '.' && keeps_period(body, lexicon) {
            break;
        }
        if !SUFFIX_CHARS.contains(&last) {
            break;
        }
        suffixes.push((end - last.len_utf8(), end));
        end -= last.len_utf8();
    }

    if start < end {
        tokens.push(Token::new(&chunk[start..end], offset + start));
    }
    for (from, to) in suffixes.into_iter().rev() {
        tokens.push(Token::new(&chunk[from..to], offset + from));
    }
}

/// Byte length of a trailing possessive ('s), if the body has one.
fn possessive_len(body: &str) -> Option<usize> {
    ["'s", "'S", "’s", "’S"]
        .iter()
        .find(|suffix| body.len() > suffix.len() && body.ends_with(*suffix))
        .map(|suffix| suffix.len())
}

/// Whether a trailing period is part of the word (abbreviation, initial,
/// dotted acronym) rather than punctuation.
fn keeps_period(body: &str, lexicon: &Lexicon) -> bool {
    let stem = body[..body.len() - 1].to_lowercase();
    if stem.is_empty() {
        return false;
    }
    if lexicon.is_abbreviation(&stem) {
        return true;
    }

    let mut chars = stem.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return c.is_alphabetic();
    }

    stem.contains('.')
        && stem.split('.').all(|part| {
            let mut chars = part.chars();
            matches!((chars.next(), chars.next()), (Some(c), None) if c.is_alphabetic())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn words(text: &str) -> Vec<String> {
        tokenize(text, &Lexicon::english())
            .into_iter()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_splits_currency_and_trailing_punctuation() {
        assert_eq!(words("$45.00."), vec!["$", "45.00", "."]);
        assert_eq!(words("($1,250.99),"), vec!["(", "$", "1,250.99", ")", ","]);
    }

    #[test]
    fn test_keeps_abbreviations_and_initials() {
        assert_eq!(
            words("Mr. J. Doe of Acme Inc. in the U.S. today."),
            vec!["Mr.", "J.", "Doe", "of", "Acme", "Inc.", "in", "the", "U.S.", "today", "."]
        );
    }

    #[test]
    fn test_splits_possessive() {
        assert_eq!(
            words("the customer's address"),
            vec!["the", "customer", "'s", "address"]
        );
    }

    #[test]
    fn test_splits_quotes_around_sentence_end() {
        assert_eq!(words("\"Delivered.\""), vec!["\"", "Delivered", ".", "\""]);
    }

    #[test]
    fn test_ellipsis_becomes_periods() {
        assert_eq!(words("wait..."), vec!["wait", ".", ".", "."]);
    }

    #[test]
    fn test_offsets_point_into_source() {
        let text = "  Card  ending in 1234.";
        for token in tokenize(text, &Lexicon::english()) {
            assert_eq!(&text[token.idx..token.end()], token.text);
        }
    }

    #[test]
    fn test_lexical_attributes() {
        let tokens = tokenize("Ending IN 1234 45.00 four", &Lexicon::english());
        assert_eq!(tokens[0].lower, "ending");
        assert_eq!(tokens[1].lower, "in");
        assert!(tokens[2].is_digit);
        assert_eq!(tokens[2].len(), 4);
        assert!(!tokens[3].is_digit);
        assert!(tokens[3].like_num);
        assert!(tokens[4].like_num);
        assert!(!tokens[4].is_digit);
    }

    #[test]
    fn test_like_num() {
        assert!(like_num("1234"));
        assert!(like_num("1,234.56"));
        assert!(like_num("-5"));
        assert!(like_num("3/4"));
        assert!(like_num("Twenty"));
        assert!(!like_num("12a"));
        assert!(!like_num("."));
        assert!(!like_num(""));
        assert!(!like_num("1/2/3"));
    }

    #[test]
    fn test_unicode_whitespace_and_text() {
        assert_eq!(words("café\u{00A0}crème €5"), vec!["café", "crème", "€", "5"]);
    }
}
