//! Text normalization and tokenization shared by every scoring pass.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

static WORD_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\w+\b").expect("word token pattern is valid"));

/// Lowercases the text and collapses every whitespace run to a single space.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Number of whitespace-delimited tokens.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Distinct `\w+` tokens of already-normalized text, in sorted order.
pub fn tokenize(text: &str) -> BTreeSet<String> {
    WORD_TOKEN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Keywords that occur anywhere in `text` as substrings, in input order.
///
/// Containment is deliberately raw: "java" matches inside "javascript".
pub fn keywords_present<'a, I>(text: &str, keywords: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    keywords
        .into_iter()
        .filter(|kw| text.contains(kw))
        .map(str::to_string)
        .collect()
}

/// Integer percentage of `part` over `whole`, rounding half to even.
/// Returns 0 when `whole` is 0.
pub fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    let pct = (part as f64 / whole as f64 * 100.0).round_ties_even();
    pct.clamp(0.0, 100.0) as u32
}
