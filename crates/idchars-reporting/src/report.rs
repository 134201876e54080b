//! Diagnostic report definitions.
use std::fmt;

use idchars_utils::highlight::{highlight, Colour, Modifier};

/// The kind of [Report].
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum ReportKind {
    /// The job failed.
    Error,
    /// Purely informational, e.g. the `--help` output of the argument parser.
    Info,
}

impl ReportKind {
    /// Get the [Colour] of the report kind label.
    pub fn as_colour(&self) -> Colour {
        match self {
            ReportKind::Error => Colour::Red,
            ReportKind::Info => Colour::Blue,
        }
    }

    /// Get the label of the report kind.
    pub fn message(&self) -> &'static str {
        match self {
            ReportKind::Error => "error",
            ReportKind::Info => "info",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", highlight(self.as_colour() | Modifier::Bold, self.message()))
    }
}

/// The kind of [ReportNote], determines its label.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq)]
pub enum ReportNoteKind {
    /// A note giving more context about the report.
    Note,
    /// A suggestion on how to resolve the report.
    Help,
}

impl fmt::Display for ReportNoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportNoteKind::Note => write!(f, "note"),
            ReportNoteKind::Help => write!(f, "help"),
        }
    }
}

/// An additional line of information attached to a [Report].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportNote {
    pub kind: ReportNoteKind,
    pub message: String,
}

impl ReportNote {
    pub fn new(kind: ReportNoteKind, message: impl ToString) -> Self {
        Self { kind, message: message.to_string() }
    }
}

/// A diagnostic that is shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// The general kind of the report.
    pub kind: ReportKind,

    /// The headline of the report.
    pub title: String,

    /// Any notes that follow the headline.
    pub notes: Vec<ReportNote>,
}

impl Default for Report {
    fn default() -> Self {
        Self { kind: ReportKind::Error, title: String::new(), notes: vec![] }
    }
}

impl Report {
    /// Create an empty error [Report].
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the kind of the report.
    pub fn kind(&mut self, kind: ReportKind) -> &mut Self {
        self.kind = kind;
        self
    }

    /// Set the headline of the report.
    pub fn title(&mut self, title: impl ToString) -> &mut Self {
        self.title = title.to_string();
        self
    }

    /// Attach a [ReportNoteKind::Note] to the report.
    pub fn add_note(&mut self, message: impl ToString) -> &mut Self {
        self.notes.push(ReportNote::new(ReportNoteKind::Note, message));
        self
    }

    /// Attach a [ReportNoteKind::Help] to the report.
    pub fn add_help(&mut self, message: impl ToString) -> &mut Self {
        self.notes.push(ReportNote::new(ReportNoteKind::Help, message));
        self
    }

    /// Check if the report denotes an error.
    pub fn is_error(&self) -> bool {
        self.kind == ReportKind::Error
    }
}
