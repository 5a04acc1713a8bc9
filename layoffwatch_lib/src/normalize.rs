//! Company-name normalization.
//!
//! Raw names arrive from job postings and from the roster CSV with arbitrary
//! casing, punctuation, and legal suffixes. Both sides of a comparison are
//! reduced to the same canonical key before matching.

/// Corporate suffixes dropped during normalization when enabled.
///
/// Matched as whole words anywhere in the name, not only at the end, so
/// "Acme Holdings Europe" and "Acme Europe" compare equal.
const CORPORATE_SUFFIXES: &[&str] = &[
    "inc",
    "llc",
    "ltd",
    "limited",
    "corp",
    "corporation",
    "co",
    "company",
    "plc",
    "gmbh",
    "sa",
    "nv",
    "holding",
    "holdings",
];

/// Normalizes a company name into a comparison key.
///
/// Steps: lowercase, expand `&` to "and", replace everything outside
/// `[a-z0-9]` and whitespace with a space, collapse whitespace, trim.
/// With `remove_suffixes` the corporate-suffix vocabulary is dropped as
/// whole words before the final collapse.
///
/// Empty input yields an empty string; the function never fails and is
/// idempotent.
pub fn normalize(raw: &str, remove_suffixes: bool) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }

    let cleaned: String = raw
        .to_lowercase()
        .replace('&', "and")
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    let words = cleaned.split_whitespace();
    if remove_suffixes {
        words
            .filter(|word| !CORPORATE_SUFFIXES.contains(word))
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        words.collect::<Vec<_>>().join(" ")
    }
}
