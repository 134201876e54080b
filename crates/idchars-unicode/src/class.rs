//! Identifier character classification.
//!
//! The rules follow Python's `str.isidentifier`: an identifier starts with a
//! character that has the `XID_Start` property or with `_`, and continues
//! with characters that have the `XID_Continue` property.
use std::fmt;

use crate::CODE_POINT_LIMIT;

/// The role a character may play within an identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Valid anywhere in an identifier, including the first position.
    Start,
    /// Valid anywhere except the first position.
    Continue,
    /// Not valid in an identifier at all.
    Invalid,
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharClass::Start => write!(f, "start"),
            CharClass::Continue => write!(f, "continue"),
            CharClass::Invalid => write!(f, "invalid"),
        }
    }
}

/// True if `c` is valid as a first character of an identifier.
pub fn is_id_start(c: char) -> bool {
    c == '_' || unicode_ident::is_xid_start(c)
}

/// True if `c` is valid as a non-first character of an identifier.
pub fn is_id_continue(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}

/// Classify a single character.
pub fn classify(c: char) -> CharClass {
    if is_id_start(c) {
        CharClass::Start
    } else if is_id_continue(c) {
        CharClass::Continue
    } else {
        CharClass::Invalid
    }
}

/// Classify a raw code point. Surrogates and values past the end of the
/// Unicode range are never identifier characters.
pub fn classify_code_point(code: u32) -> CharClass {
    if code >= CODE_POINT_LIMIT {
        return CharClass::Invalid;
    }

    char::from_u32(code).map_or(CharClass::Invalid, classify)
}

/// Check whether the whole of `s` is a single identifier.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();

    match chars.next() {
        Some(first) if is_id_start(first) => chars.all(is_id_continue),
        _ => false,
    }
}

#[cfg(test)]
mod test_super {
    use super::*;

    #[test]
    fn test_ascii_classes() {
        assert_eq!(classify('a'), CharClass::Start);
        assert_eq!(classify('Z'), CharClass::Start);
        assert_eq!(classify('_'), CharClass::Start);
        assert_eq!(classify('0'), CharClass::Continue);
        assert_eq!(classify('9'), CharClass::Continue);
        assert_eq!(classify('$'), CharClass::Invalid);
        assert_eq!(classify(' '), CharClass::Invalid);
        assert_eq!(classify('-'), CharClass::Invalid);
    }

    #[test]
    fn test_unicode_classes() {
        // LATIN SMALL LETTER E WITH ACUTE
        assert_eq!(classify('\u{E9}'), CharClass::Start);
        // COMBINING GRAVE ACCENT
        assert_eq!(classify('\u{300}'), CharClass::Continue);
        // MIDDLE DOT
        assert_eq!(classify('\u{B7}'), CharClass::Continue);
        // ARABIC-INDIC DIGIT THREE
        assert_eq!(classify('\u{663}'), CharClass::Continue);
        // FULLWIDTH LOW LINE
        assert_eq!(classify('\u{FF3F}'), CharClass::Continue);
        // SCRIPT CAPITAL P
        assert_eq!(classify('\u{2118}'), CharClass::Start);
        // CJK UNIFIED IDEOGRAPH-4E00
        assert_eq!(classify('\u{4E00}'), CharClass::Start);
        // GRINNING FACE
        assert_eq!(classify('\u{1F600}'), CharClass::Invalid);
    }

    #[test]
    fn test_nfkc_unstable_start_characters_are_excluded() {
        // KATAKANA-HIRAGANA VOICED SOUND MARK is `ID_Start` but normalizes to
        // a space followed by a combining mark, so it is not `XID_Start`.
        assert_eq!(classify('\u{309B}'), CharClass::Invalid);
    }

    #[test]
    fn test_classify_code_point_bounds() {
        assert_eq!(classify_code_point(0x61), CharClass::Start);
        assert_eq!(classify_code_point(0xD800), CharClass::Invalid);
        assert_eq!(classify_code_point(0xDFFF), CharClass::Invalid);
        assert_eq!(classify_code_point(CODE_POINT_LIMIT), CharClass::Invalid);
        assert_eq!(classify_code_point(u32::MAX), CharClass::Invalid);
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("_private"));
        assert!(is_identifier("snake_case_2"));
        assert!(is_identifier("\u{E9}t\u{E9}"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("2fast"));
        assert!(!is_identifier("kebab-case"));
    }

    #[test]
    fn test_classes_agree_with_identifier_rules() {
        for c in (0..CODE_POINT_LIMIT).filter_map(char::from_u32) {
            let class = classify(c);

            if is_id_start(c) {
                assert!(is_id_continue(c), "start character {c:?} must also continue");
            }

            let prefixed: String = ['a', c].iter().collect();
            let continues = !is_id_start(c) && is_identifier(&prefixed);
            assert_eq!(class == CharClass::Continue, continues, "mismatch for {c:?}");
            assert_eq!(class == CharClass::Start, is_identifier(&c.to_string()));
        }
    }
}
