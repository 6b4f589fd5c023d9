//! Rule-based recognition of PERSON, MONEY and CARDINAL entities

use super::lexicon::Lexicon;
use super::{Entity, EntityLabel, Token};

const MAX_NAME_TOKENS: usize = 3;

/// Tag entities over `tokens`. Entities never overlap and are returned in
/// document order.
pub fn recognize(text: &str, tokens: &[Token], lexicon: &Lexicon) -> Vec<Entity> {
    let mut claimed = vec![false; tokens.len()];
    let mut spans: Vec<(usize, usize, EntityLabel)> = Vec::new();

    for (start, end) in money_spans(tokens, lexicon) {
        claim(&mut claimed, start, end);
        spans.push((start, end, EntityLabel::Money));
    }

    for (start, end) in person_spans(tokens, lexicon, &claimed) {
        claim(&mut claimed, start, end);
        spans.push((start, end, EntityLabel::Person));
    }

    for (i, token) in tokens.iter().enumerate() {
        if !claimed[i] && is_numeric_amount(token) {
            claimed[i] = true;
            spans.push((i, i + 1, EntityLabel::Cardinal));
        }
    }

    spans.sort_by_key(|(start, _, _)| *start);
    spans
        .into_iter()
        .map(|(start, end, label)| {
            let from = tokens[start].idx;
            let to = tokens[end - 1].end();
            Entity {
                text: text.get(from..to).unwrap_or_default().to_string(),
                label,
                start_char: from,
                start,
                end,
            }
        })
        .collect()
}

fn claim(claimed: &mut [bool], start: usize, end: usize) {
    for slot in &mut claimed[start..end] {
        *slot = true;
    }
}

fn is_numeric_amount(token: &Token) -> bool {
    token.like_num && token.text.chars().any(|c| c.is_ascii_digit())
}

/// Money spans exclude a leading currency symbol, so callers can look at
/// the character right before the entity to tell `$45` from `45 dollars`.
fn money_spans(tokens: &[Token], lexicon: &Lexicon) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let after_symbol = i > 0 && lexicon.is_currency_symbol(&tokens[i - 1].text);

        if is_numeric_amount(&tokens[i]) {
            let next = tokens.get(i + 1);
            if after_symbol {
                let end = match next {
                    Some(t) if lexicon.is_scale_word(&t.lower) => i + 2,
                    _ => i + 1,
                };
                spans.push((i, end));
                i = end;
                continue;
            }
            if matches!(next, Some(t) if lexicon.is_currency_word(&t.lower)) {
                spans.push((i, i + 2));
                i += 2;
                continue;
            }
        }
        i += 1;
    }

    spans
}

fn person_spans(tokens: &[Token], lexicon: &Lexicon, claimed: &[bool]) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut i = 0;

    while i < tokens.len() {
        let is_free_name = |j: usize| {
            !claimed[j] && is_name_like(&tokens[j]) && !lexicon.is_common_word(&tokens[j].lower)
        };

        if lexicon.is_honorific(&tokens[i].lower) && !claimed[i] {
            let start = i + 1;
            let mut end = start;
            while end < tokens.len() && end - start < MAX_NAME_TOKENS && is_free_name(end) {
                end += 1;
            }
            if end > start {
                spans.push((start, end));
                i = end;
                continue;
            }
        }

        if is_free_name(i) && !is_initial(&tokens[i]) {
            let mut end = i;
            while end < tokens.len() && is_free_name(end) {
                end += 1;
            }
            let run = end - i;
            if (2..=MAX_NAME_TOKENS).contains(&run) {
                spans.push((i, end));
            }
            i = end;
            continue;
        }

        i += 1;
    }

    spans
}

/// Capitalized word (or an initial like `J.`) made of letters, hyphens and
/// apostrophes.
fn is_name_like(token: &Token) -> bool {
    let mut chars = token.text.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_uppercase() {
        return false;
    }
    if is_initial(token) {
        return true;
    }
    token.text.chars().count() >= 2
        && chars.all(|c| c.is_alphabetic() || c == '-' || c == '\'' || c == '’')
}

fn is_initial(token: &Token) -> bool {
    let mut chars = token.text.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(c), Some('.'), None) if c.is_uppercase()
    )
}
