//! Describing individual characters on the command line.
use idchars_docs::{row::render_divergence, text::UNKNOWN_NAME};
use idchars_unicode::{
    class::classify_code_point, entry::CharEntry, format_code_point, CODE_POINT_LIMIT,
};

use crate::error::PipelineError;

/// Turn a lookup argument into the code points it denotes.
///
/// Arguments of the form `U+XXXX` or `0xXXXX` name a single code point,
/// anything else stands for the characters it is made of.
pub fn parse_code_points(argument: &str) -> Result<Vec<u32>, PipelineError> {
    let hex = ["U+", "u+", "0x", "0X"].iter().find_map(|prefix| argument.strip_prefix(prefix));

    match hex {
        Some(digits) if !digits.is_empty() => {
            let code = digits
                .chars()
                .all(|digit| digit.is_ascii_hexdigit())
                .then(|| u32::from_str_radix(digits, 16).ok())
                .flatten();

            match code {
                Some(code) if code < CODE_POINT_LIMIT => Ok(vec![code]),
                _ => Err(PipelineError::InvalidCodePoint(argument.to_string())),
            }
        }
        _ => Ok(argument.chars().map(|ch| ch as u32).collect()),
    }
}

/// Describe a single code point: its class, glyph, name and what it
/// normalizes to.
pub fn describe(code: u32) -> String {
    let class = classify_code_point(code);

    let Some(ch) = char::from_u32(code) else {
        return format!("{}\t{class}\t(not a character)", format_code_point(code));
    };

    let entry = CharEntry::new(ch);
    let name = entry.name.as_deref().unwrap_or(UNKNOWN_NAME);
    let note = entry.divergence.as_ref().map(render_divergence).unwrap_or_default();

    format!("{}\t{class}\t{}\t{name}{note}", format_code_point(code), printable(ch))
}

/// Control characters and other invisible characters are shown escaped.
fn printable(ch: char) -> String {
    if ch.is_control() || ch.is_whitespace() {
        ch.escape_unicode().to_string()
    } else {
        ch.to_string()
    }
}
