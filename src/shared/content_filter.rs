//! Content Filter
//!
//! Word-level censoring of chirp bodies.
//!
//! The body is split on whitespace and every token that matches a disallowed
//! word (ignoring case) is replaced with [`MASK`]. Tokens with attached
//! punctuation (`"kerfuffle!"`) are left untouched. Rejoining with single
//! spaces collapses runs of whitespace.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Replacement for a disallowed word.
pub const MASK: &str = "****";

static PROFANE_WORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["kerfuffle", "sharbert", "fornax"].into_iter().collect());

/// Check whether a single token is on the disallowed list.
pub fn is_profane(word: &str) -> bool {
    PROFANE_WORDS.contains(word.to_lowercase().as_str())
}

/// Replace disallowed words in `body`.
pub fn censor(body: &str) -> String {
    body.split_whitespace()
        .map(|word| if is_profane(word) { MASK } else { word })
        .collect::<Vec<_>>()
        .join(" ")
}
