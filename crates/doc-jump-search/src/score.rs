//! Relevance scoring of one entry against one query

use crate::entry::{Entry, EntryKind};
use crate::text::{normalize, tokenize};

/// Bonus for the whole query occurring as a phrase in the label
const PHRASE_LABEL_BONUS: f64 = 0.55;
/// Bonus for the whole query occurring as a phrase in the body text
const PHRASE_TEXT_BONUS: f64 = 0.35;
/// Per-token weights: exact word in label > substring of label >
/// exact word in text > substring of text
const TOKEN_LABEL_WORD: f64 = 1.4;
const TOKEN_LABEL_SUBSTRING: f64 = 1.0;
const TOKEN_TEXT_WORD: f64 = 0.9;
const TOKEN_TEXT_SUBSTRING: f64 = 0.5;
/// Token total is divided by (token count * this factor)
const TOKEN_NORMALIZER: f64 = 1.6;
/// Sub-topic matches land the user closer to the answer than the
/// containing topic, so they get a slight edge
const SUB_TOPIC_BONUS: f64 = 0.08;

/// Compute the relevance score of `entry` for `query`.
///
/// Always >= 0; an empty or token-free query scores 0 against everything.
/// No upper bound is enforced. The weights are tuned empirically; keep them
/// in sync with the ranking tests when touching them.
pub fn score(query: &str, entry: &Entry) -> f64 {
    let q = normalize(query);
    let q_tokens = tokenize(&q);
    if q_tokens.is_empty() {
        return 0.0;
    }

    let label_n = normalize(&entry.label);
    let text_n = normalize(&entry.search_text);

    // Phrase match gets a big boost; label takes precedence over body text.
    let mut s = 0.0;
    if label_n.contains(&q) {
        s += PHRASE_LABEL_BONUS;
    } else if text_n.contains(&q) {
        s += PHRASE_TEXT_BONUS;
    }

    let mut token_score = 0.0;
    for t in &q_tokens {
        if contains_word(&label_n, t) {
            token_score += TOKEN_LABEL_WORD;
        } else if label_n.contains(t.as_str()) {
            token_score += TOKEN_LABEL_SUBSTRING;
        } else if contains_word(&text_n, t) {
            token_score += TOKEN_TEXT_WORD;
        } else if text_n.contains(t.as_str()) {
            token_score += TOKEN_TEXT_SUBSTRING;
        }
    }
    s += token_score / (q_tokens.len() as f64 * TOKEN_NORMALIZER);

    if entry.kind == EntryKind::SubTopic {
        s += SUB_TOPIC_BONUS;
    }

    s
}

/// Whole-word containment in already-normalized text
fn contains_word(haystack: &str, word: &str) -> bool {
    haystack.split(' ').any(|w| w == word)
}
