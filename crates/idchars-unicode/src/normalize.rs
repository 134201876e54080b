//! NFKC divergence detection.
//!
//! Identifiers are compared after NFKC normalization, so two different
//! spellings may name the same thing. The reference pages point out every
//! character whose normalized form is not the character itself.
use std::iter;

use unicode_normalization::UnicodeNormalization;

use crate::names::char_name;

/// A single character of a normalized form, along with its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constituent {
    pub ch: char,
    pub name: Option<String>,
}

/// The NFKC form of a character that differs from the character itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Divergence {
    /// The normalized string.
    pub normalized: String,

    /// Every character of [Divergence::normalized], in order.
    pub constituents: Vec<Constituent>,
}

/// The NFKC normalization of the one character string `c`.
pub fn nfkc(c: char) -> String {
    iter::once(c).nfkc().collect()
}

/// Compare `c` to its NFKC form, yielding the normalized form and its
/// constituents when the two differ.
pub fn divergence(c: char) -> Option<Divergence> {
    let normalized = nfkc(c);

    let mut chars = normalized.chars();
    if chars.next() == Some(c) && chars.next().is_none() {
        return None;
    }

    let constituents =
        normalized.chars().map(|ch| Constituent { ch, name: char_name(ch) }).collect();

    Some(Divergence { normalized, constituents })
}
