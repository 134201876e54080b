//! The two reference pages and their rendering.
use std::{fmt, io};

use idchars_unicode::{class::CharClass, entry::CharEntry, UnicodeVersion};

use crate::{
    row::render_row,
    text::{FOOTER, TABLE_HEADER, WARNING},
};

/// Which of the reference pages is being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    /// Characters that are valid in any position of an identifier.
    Start,
    /// Characters that are valid in any position but the first.
    Continue,
}

impl PageKind {
    /// All pages, in the order in which they are generated.
    pub const ALL: [PageKind; 2] = [PageKind::Start, PageKind::Continue];

    /// The link target of the page, relative to the other page.
    pub fn slug(&self) -> &'static str {
        match self {
            PageKind::Start => "start-characters",
            PageKind::Continue => "continue-characters",
        }
    }

    /// The name of the file the page is written to.
    pub fn file_name(&self) -> String {
        format!("{}.md", self.slug())
    }

    /// The heading of the page.
    pub fn title(&self) -> &'static str {
        match self {
            PageKind::Start => "Start Characters",
            PageKind::Continue => "Continue Characters",
        }
    }

    /// The page that this page links to.
    pub fn other(&self) -> PageKind {
        match self {
            PageKind::Start => PageKind::Continue,
            PageKind::Continue => PageKind::Start,
        }
    }

    /// The character class listed on this page.
    pub fn class(&self) -> CharClass {
        match self {
            PageKind::Start => CharClass::Start,
            PageKind::Continue => CharClass::Continue,
        }
    }

    fn intro(&self, language: &str) -> String {
        let (listed, other_listed) = match self {
            PageKind::Start => (
                format!("valid as any character in a {language} variable\nname"),
                "valid for any character other than the\nfirst",
            ),
            PageKind::Continue => (
                format!("valid as any character other than the first\nin a {language} variable name"),
                "valid for any\ncharacter including the first",
            ),
        };

        let other = self.other();

        format!(
            "\nThese are the characters that are {listed}. For a list of characters that are \
             {other_listed}, see the [{}]({}).\n\n\
             You can also view the <a href=\"{}\">raw markdown</a> for this page.\n\n",
            other.title(),
            other.slug(),
            self.file_name()
        )
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

/// Where the data on a page comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    /// The language whose identifiers are described.
    pub language: String,

    /// Version of the generator.
    pub generator_version: String,

    /// Version of the Unicode character database.
    pub unicode_version: UnicodeVersion,
}

impl Provenance {
    fn header(&self) -> String {
        format!(
            "This page was generated using idchars version {}, which\nuses Unicode version {}\n\n",
            self.generator_version, self.unicode_version
        )
    }
}

/// Render the page `kind` listing `chars` into `out`.
pub fn render_page(
    out: &mut impl io::Write,
    kind: PageKind,
    chars: &[char],
    provenance: &Provenance,
) -> io::Result<()> {
    out.write_all(WARNING.as_bytes())?;
    write!(out, "## {}\n\n", kind.title())?;
    out.write_all(kind.intro(&provenance.language).as_bytes())?;
    out.write_all(provenance.header().as_bytes())?;
    write!(out, "There are a total of {} characters in this list.\n\n", chars.len())?;
    out.write_all(TABLE_HEADER.as_bytes())?;

    for &ch in chars {
        out.write_all(render_row(&CharEntry::new(ch)).as_bytes())?;
    }

    out.write_all(FOOTER.as_bytes())
}

/// Render the page `kind` into a string.
pub fn render_page_to_string(kind: PageKind, chars: &[char], provenance: &Provenance) -> String {
    let mut buffer = Vec::new();

    // Writing into a vector cannot fail.
    let _ = render_page(&mut buffer, kind, chars, provenance);
    String::from_utf8_lossy(&buffer).into_owned()
}
