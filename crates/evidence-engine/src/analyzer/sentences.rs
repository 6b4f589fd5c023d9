//! Punctuation-based sentence segmentation

use super::{Sentence, Token};

const TERMINALS: &[char] = &['.', '!', '?'];
const CLOSERS: &[char] = &['"', '\'', '”', '’', ')', ']', '}'];

/// Group tokens into sentences ending at `.`, `!` or `?` runs.
///
/// Closing quotes and brackets right after the terminal stay with the
/// sentence they close. Trailing tokens without terminal punctuation form
/// a final sentence.
pub fn segment(tokens: &[Token]) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < tokens.len() {
        if is_made_of(&tokens[i].text, TERMINALS) {
            let mut end = i + 1;
            while end < tokens.len() && is_made_of(&tokens[end].text, TERMINALS) {
                end += 1;
            }
            while end < tokens.len() && is_made_of(&tokens[end].text, CLOSERS) {
                end += 1;
            }
            sentences.push(Sentence { start, end });
            start = end;
            i = end;
        } else {
            i += 1;
        }
    }

    if start < tokens.len() {
        sentences.push(Sentence {
            start,
            end: tokens.len(),
        });
    }

    sentences
}

fn is_made_of(text: &str, set: &[char]) -> bool {
    !text.is_empty() && text.chars().all(|c| set.contains(&c))
}
