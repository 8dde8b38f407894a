//! String utilities for the domain layer.

/// Take at most `max_chars` characters from the start of `s`.
///
/// Counts characters rather than bytes, so multi-byte text is never split
/// inside a code point.
pub fn excerpt(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Character count of `s` after trimming surrounding whitespace.
pub fn trimmed_len(s: &str) -> usize {
    s.trim().chars().count()
}

/// Whether `s` is empty or whitespace only.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
