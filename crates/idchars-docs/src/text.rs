//! Static text fragments of the reference pages.
use const_format::concatcp;

/// Name of the footnote explaining characters without a name.
pub const UNKNOWN_FOOTNOTE: &str = "unknown";

/// What is shown in place of a name that the name database does not have.
pub const UNKNOWN_NAME: &str = concatcp!("(unknown) [^", UNKNOWN_FOOTNOTE, "]");

/// Banner at the top of every generated page.
pub const WARNING: &str = "\
<!-- WARNING: This file is generated automatically, do not edit it
directly. Rather, edit the idchars generator which produces this file.
-->

";

/// Header of the character table.
pub const TABLE_HEADER: &str = "\
| Code point | Character | Name |
|------------|-----------|------|
";

/// Trailer of every generated page, defines the unknown name footnote.
pub const FOOTER: &str = concatcp!(
    "\n\n[^",
    UNKNOWN_FOOTNOTE,
    "]: The Unicode name for this character is not present in the
            name database of the generator. You may be able to find more by
            searching the character on
            [fileformat.info](http://www.fileformat.info/info/unicode/char/search.htm)
            or [Wikipedia](https://www.wikipedia.org/).
"
);

#[cfg(test)]
mod test_super {
    use super::*;

    #[test]
    fn test_unknown_name_references_footnote() {
        assert_eq!(UNKNOWN_NAME, "(unknown) [^unknown]");
        assert!(FOOTER.starts_with("\n\n[^unknown]: The Unicode name"));
        assert!(FOOTER.ends_with("(https://www.wikipedia.org/).\n"));
    }
}
