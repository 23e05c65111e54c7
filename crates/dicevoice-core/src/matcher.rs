//! Token prefix matching.
//!
//! This is the only matching primitive in the crate. There is no substring
//! or partial-token matching anywhere: a pattern either equals the leading
//! tokens index-for-index or it does not match at all.

/// Length of `pattern` if it equals the leading tokens of `tokens`, else 0.
///
/// Returns 0 when `pattern` is empty or longer than `tokens`.
pub fn match_from_start<T, P>(tokens: &[T], pattern: &[P]) -> usize
where
    T: AsRef<str>,
    P: AsRef<str>,
{
    if pattern.is_empty() || pattern.len() > tokens.len() {
        return 0;
    }
    let matches = tokens
        .iter()
        .zip(pattern)
        .all(|(token, expected)| token.as_ref() == expected.as_ref());
    if matches {
        pattern.len()
    } else {
        0
    }
}

/// Pick the candidate whose pattern matches the most leading tokens.
///
/// Candidates are scanned in order and a later candidate only replaces the
/// current best when its match is strictly longer, so ties go to the earliest
/// candidate.
pub fn longest_match<T, K, P, I>(tokens: &[T], candidates: I) -> Option<(K, usize)>
where
    T: AsRef<str>,
    P: AsRef<str>,
    I: IntoIterator<Item = (K, Vec<P>)>,
{
    let mut best: Option<(K, usize)> = None;
    for (key, pattern) in candidates {
        let length = match_from_start(tokens, &pattern);
        let best_length = best.as_ref().map_or(0, |(_, len)| *len);
        if length > best_length {
            best = Some((key, length));
        }
    }
    best
}
