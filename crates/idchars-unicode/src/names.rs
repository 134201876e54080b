//! Unicode character name lookup.

/// Look up the canonical Unicode name of `c`.
///
/// Hangul syllables and CJK unified ideographs get their algorithmic names.
/// Characters the name database knows nothing about yield [None]; that is the
/// one lookup failure the generator has, and it is rendered rather than
/// reported.
pub fn char_name(c: char) -> Option<String> {
    unicode_names2::name(c).map(|name| name.to_string())
}
