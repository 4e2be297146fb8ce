//! Case-insensitive text predicates shared by the scoring rules.

/// Lowercase a free-text field for comparison.
///
/// Whitespace is kept as-is; only case is folded.
#[inline]
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// Lowercase every entry, dropping empty ones so they never act as a query.
pub fn normalize_all(values: &[String]) -> Vec<String> {
    values
        .iter()
        .filter(|v| !v.is_empty())
        .map(|v| normalize(v))
        .collect()
}

/// Substring containment on already-normalized text.
///
/// An empty needle never matches.
#[inline]
pub fn contains(haystack: &str, needle: &str) -> bool {
    !needle.is_empty() && haystack.contains(needle)
}

/// True when either string contains the other.
#[inline]
pub fn overlaps(a: &str, b: &str) -> bool {
    contains(a, b) || contains(b, a)
}
