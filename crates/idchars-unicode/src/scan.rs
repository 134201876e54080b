//! The single pass over the code point space.
use std::ops::Range;

use log::debug;

use crate::{
    class::{classify, CharClass},
    CODE_POINT_LIMIT,
};

/// The identifier characters found by a scan, each list in ascending code
/// point order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierChars {
    /// Characters valid in any position.
    pub start: Vec<char>,

    /// Characters valid in any position but the first.
    pub continues: Vec<char>,
}

impl IdentifierChars {
    /// The characters of the given class. Invalid characters are never
    /// collected, so that list is always empty.
    pub fn of_class(&self, class: CharClass) -> &[char] {
        match class {
            CharClass::Start => &self.start,
            CharClass::Continue => &self.continues,
            CharClass::Invalid => &[],
        }
    }
}

/// Scan the whole code point space `[0, 0x110000)`.
pub fn scan() -> IdentifierChars {
    scan_range(0..CODE_POINT_LIMIT)
}

/// Scan the code points within `range`. Code points outside of the Unicode
/// range and surrogates are skipped.
pub fn scan_range(range: Range<u32>) -> IdentifierChars {
    let mut chars = IdentifierChars::default();
    let end = range.end.min(CODE_POINT_LIMIT);

    for c in (range.start..end).filter_map(char::from_u32) {
        match classify(c) {
            CharClass::Start => chars.start.push(c),
            CharClass::Continue => chars.continues.push(c),
            CharClass::Invalid => {}
        }
    }

    debug!(
        "scanned {:#X}..{:#X}: {} start and {} continue characters",
        range.start,
        end,
        chars.start.len(),
        chars.continues.len()
    );

    chars
}

#[cfg(test)]
mod test_super {
    use super::*;

    #[test]
    fn test_scan_ascii_letters() {
        let chars = scan_range(0x41..0x7B);

        let expected: Vec<char> = ('A'..='Z').chain(['_']).chain('a'..='z').collect();
        assert_eq!(chars.start, expected);
        assert!(chars.continues.is_empty());
    }

    #[test]
    fn test_scan_ascii() {
        let chars = scan_range(0..0x80);

        assert_eq!(chars.start.len(), 53);
        assert_eq!(chars.continues, ('0'..='9').collect::<Vec<_>>());
    }

    #[test]
    fn test_scan_skips_surrogates_and_clamps() {
        let chars = scan_range(0xD7F0..0xE010);
        let surrogates = 0xD800..=0xDFFF;
        assert!(chars.start.iter().chain(&chars.continues).all(|c| !surrogates.contains(&(*c as u32))));

        assert_eq!(scan_range(CODE_POINT_LIMIT..u32::MAX), IdentifierChars::default());
    }

    #[test]
    fn test_full_scan_is_ordered_and_disjoint() {
        let chars = scan();

        assert_eq!(chars.start.first(), Some(&'A'));
        assert_eq!(chars.continues.first(), Some(&'0'));
        assert!(chars.start.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(chars.continues.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(chars.continues.iter().all(|c| chars.start.binary_search(c).is_err()));
        assert!(chars.start.len() > chars.continues.len());
        assert!(chars.of_class(CharClass::Invalid).is_empty());
    }
}
