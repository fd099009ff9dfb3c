//! URL slug derivation
//!
//! Titles are decomposed (NFKD), combining marks are stripped, and what is
//! left is reduced to lowercase ASCII words joined by single hyphens.
//! Uniqueness is not decided here; see `slug_candidate` for the suffix scheme
//! the slug generator probes with.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Slug used when a title contains nothing sluggable
pub const FALLBACK_SLUG: &str = "post";

/// Derive a URL-safe slug from a title.
///
/// Whitespace, `-` and `_` separate words; any other punctuation is dropped
/// without splitting the word it sits in (`"Don't"` → `"dont"`).
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;

    for c in title.nfkd().filter(|c| !is_combining_mark(*c)) {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else if c.is_whitespace() || c == '-' || c == '_' {
            pending_separator = true;
        }
    }

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// The n-th candidate for a base slug: the base itself, then `base-1`, `base-2`, ...
pub fn slug_candidate(base: &str, attempt: u32) -> String {
    if attempt == 0 {
        base.to_string()
    } else {
        format!("{base}-{attempt}")
    }
}
