//! Defines the error type for the generator pipeline. These errors can
//! originate from the parsing of the command-line arguments, from reading or
//! writing the pages, or from a check finding that the pages are stale.

use std::{io, path::PathBuf};

use clap::error::ErrorKind;
use idchars_reporting::report::{Report, ReportKind};
use thiserror::Error;

/// Why a page failed the up-to-date check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Staleness {
    /// The page does not exist.
    Missing,

    /// The page differs from the generated one, starting at `line` (1-based).
    Outdated { line: usize },
}

/// A page that failed the up-to-date check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StalePage {
    pub path: PathBuf,
    pub staleness: Staleness,
}

/// Errors that might occur when running a generator job.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Some parsing error that clap emits, it could be benign.
    #[error("{0}")]
    ParseError(#[from] clap::Error),

    /// The output directory could not be created.
    #[error("couldn't create `{}`, {error}", .path.display())]
    ResourceCreation {
        /// The item that was being created.
        path: PathBuf,

        /// The specific [io::Error] that occurred.
        error: io::Error,
    },

    /// A page could not be written.
    #[error("couldn't write `{}`, {error}", .path.display())]
    Write { path: PathBuf, error: io::Error },

    /// A page could not be read for checking.
    #[error("couldn't read `{}`, {error}", .path.display())]
    Read { path: PathBuf, error: io::Error },

    /// One or more pages are missing or differ from the generated ones.
    #[error("{} page(s) are out of date", .0.len())]
    StalePages(Vec<StalePage>),

    /// A lookup argument that looked like a code point but isn't one.
    #[error("`{0}` is not a valid code point")]
    InvalidCodePoint(String),
}

impl PipelineError {
    /// Convert the error into the [Report]s that describe it. Every stale
    /// page gets a report of its own.
    pub fn into_reports(self) -> Vec<Report> {
        match self {
            PipelineError::StalePages(pages) => pages.into_iter().map(stale_page_report).collect(),
            error => vec![Report::from(error)],
        }
    }
}

fn stale_page_report(page: StalePage) -> Report {
    let mut report = Report::new();
    report.kind(ReportKind::Error);

    match page.staleness {
        Staleness::Missing => {
            report.title(format!("`{}` does not exist", page.path.display()));
        }
        Staleness::Outdated { line } => {
            report
                .title(format!("`{}` is out of date", page.path.display()))
                .add_note(format!("the generated page first differs at line {line}"));
        }
    }

    report.add_help("run `idchars generate` to update the pages");
    report
}

fn io_message(action: &str, path: &std::path::Path, error: &io::Error) -> String {
    let kind = error.kind();

    error.raw_os_error().map_or_else(
        || format!("couldn't {action} `{}`, {kind}", path.display()),
        |code| format!("couldn't {action} `{}`, {kind} (code: {code})", path.display()),
    )
}

impl From<PipelineError> for Report {
    fn from(value: PipelineError) -> Self {
        let mut report = Report::new();

        match value {
            PipelineError::ParseError(error) => {
                match error.kind() {
                    ErrorKind::DisplayHelp
                    | ErrorKind::DisplayVersion
                    | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                        report.kind(ReportKind::Info);
                    }
                    _ => {
                        report.kind(ReportKind::Error);
                    }
                }

                report.title(error.to_string());
            }
            PipelineError::ResourceCreation { path, error } => {
                report.kind(ReportKind::Error).title(io_message("create", &path, &error));
            }
            PipelineError::Write { path, error } => {
                report.kind(ReportKind::Error).title(io_message("write", &path, &error));
            }
            PipelineError::Read { path, error } => {
                report.kind(ReportKind::Error).title(io_message("read", &path, &error));
            }
            error @ PipelineError::StalePages(_) => {
                report.kind(ReportKind::Error).title(error.to_string());
            }
            error @ PipelineError::InvalidCodePoint(_) => {
                report
                    .kind(ReportKind::Error)
                    .title(error.to_string())
                    .add_help("code points are written as `U+00E9` or `0xE9`, up to `U+10FFFF`");
            }
        };

        report
    }
}
