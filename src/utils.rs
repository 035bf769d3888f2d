use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Links a pull request back to the issue it was opened for, e.g. "fixes #42"
    static ref REFERENCE_REGEX: Regex = Regex::new(r"#(\d+)").unwrap();
}

/// Returns the number of the first `#<digits>` reference in `text`.
///
/// Only the first match is considered. A number too large for a `u64` is
/// treated the same as no reference at all.
pub fn extract_reference(text: &str) -> Option<u64> {
    REFERENCE_REGEX
        .captures(text)
        .and_then(|captures| captures.get(1))
        .and_then(|number| number.as_str().parse().ok())
}

/// Literal, case-sensitive substring match against any of `keywords`.
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}
