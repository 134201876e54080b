//! Unicode side of the identifier character generator: which code points may
//! start or continue an identifier, what they are called, and what they turn
//! into under NFKC normalization.
use std::fmt;

pub mod class;
pub mod entry;
pub mod names;
pub mod normalize;
pub mod scan;

/// One past the largest Unicode code point.
pub const CODE_POINT_LIMIT: u32 = 0x110000;

/// A Unicode version triple, e.g. `15.1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnicodeVersion {
    pub major: u8,
    pub minor: u8,
    pub micro: u8,
}

impl fmt::Display for UnicodeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

/// The Unicode version of the normalization tables, which is the version
/// reported on the generated pages.
pub const UNICODE_VERSION: UnicodeVersion = {
    let (major, minor, micro) = unicode_normalization::UNICODE_VERSION;
    UnicodeVersion { major, minor, micro }
};

/// Format a code point the way the reference tables show it, `U+` followed
/// by at least four upper-case hex digits.
pub fn format_code_point(code: u32) -> String {
    format!("U+{code:04X}")
}
