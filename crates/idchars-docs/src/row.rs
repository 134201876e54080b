//! Table rows of the reference pages.
use idchars_unicode::{entry::CharEntry, format_code_point, normalize::Divergence};
use itertools::Itertools;

use crate::text::UNKNOWN_NAME;

/// Render the table row of `entry`, including the trailing newline.
///
/// ```text
/// | U+FB01 | ﬁ | LATIN SMALL LIGATURE FI (normalizes to U+0066, U+0069: fi (LATIN SMALL LETTER F, LATIN SMALL LETTER I))|
/// ```
pub fn render_row(entry: &CharEntry) -> String {
    let mut row = format!(
        "| {} | {} | {}",
        format_code_point(entry.code()),
        entry.ch,
        entry.name.as_deref().unwrap_or(UNKNOWN_NAME)
    );

    if let Some(divergence) = &entry.divergence {
        row.push_str(&render_divergence(divergence));
    }

    row.push_str("|\n");
    row
}

/// Render the note explaining what a character normalizes to.
pub fn render_divergence(divergence: &Divergence) -> String {
    let codes = divergence
        .constituents
        .iter()
        .map(|constituent| format_code_point(constituent.ch as u32))
        .join(", ");

    let names = divergence
        .constituents
        .iter()
        .map(|constituent| constituent.name.as_deref().unwrap_or(UNKNOWN_NAME))
        .join(", ");

    format!(" (normalizes to {codes}: {} ({names}))", divergence.normalized)
}
