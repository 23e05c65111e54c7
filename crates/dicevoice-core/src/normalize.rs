//! Transcript normalization.
//!
//! Speech recognizers are inconsistent about casing, punctuation and dash
//! characters. Everything that is matched (transcripts, player names, aliases,
//! number words) goes through [`normalize`] first so that matching can be
//! plain token equality.

use unicode_normalization::UnicodeNormalization;

/// Characters replaced by a single space.
const PUNCTUATION: &[char] = &[
    '(', ')', '"', '\'', '«', '»', '„', '“', '”', '‘', '’', ':', ',', '.', ';', '!', '?',
];

/// Dash-family characters replaced by a single space.
const DASHES: &[char] = &['\u{2013}', '\u{2014}', '-', '_'];

/// Lower-case, NFC-normalize, strip punctuation and dashes, collapse whitespace.
///
/// `normalize(normalize(s)) == normalize(s)` for every input.
pub fn normalize(raw: &str) -> String {
    let lowered: String = raw.to_lowercase().nfc().collect();
    lowered
        .chars()
        .map(|c| {
            if PUNCTUATION.contains(&c) || DASHES.contains(&c) {
                ' '
            } else {
                c
            }
        })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize and split into tokens. Empty or all-punctuation input yields no tokens.
pub fn tokenize(raw: &str) -> Vec<String> {
    normalize(raw)
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
