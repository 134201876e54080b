//! Diagnostic report writing utilities.
use std::fmt;

use idchars_utils::highlight::{highlight, Modifier};

use crate::report::Report;

/// General data type for displaying a list of [Report]s.
pub struct ReportWriter {
    reports: Vec<Report>,
}

impl ReportWriter {
    pub fn new(reports: Vec<Report>) -> Self {
        Self { reports }
    }
}

impl fmt::Display for ReportWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for report in &self.reports {
            writeln!(f, "{}: {}", report.kind, highlight(Modifier::Bold, &report.title))?;

            for note in &report.notes {
                let label = highlight(report.kind.as_colour() | Modifier::Bold, "=");
                writeln!(f, "  {label} {}: {}", note.kind, note.message)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod test_super {
    use idchars_utils::highlight::strip_highlighting;

    use super::*;
    use crate::report::ReportKind;

    #[test]
    fn test_render_report_with_notes() {
        let mut report = Report::new();
        report
            .kind(ReportKind::Error)
            .title("`docs/start-characters.md` is out of date")
            .add_note("the page would list 4 more characters")
            .add_help("run `idchars generate` to update the page");

        let rendered = strip_highlighting(&ReportWriter::new(vec![report]).to_string());

        assert_eq!(
            rendered,
            "error: `docs/start-characters.md` is out of date\n  \
             = note: the page would list 4 more characters\n  \
             = help: run `idchars generate` to update the page\n"
        );
    }

    #[test]
    fn test_render_several_reports() {
        let mut first = Report::new();
        first.kind(ReportKind::Error).title("first");
        let mut second = Report::new();
        second.kind(ReportKind::Info).title("second");

        let rendered = strip_highlighting(&ReportWriter::new(vec![first, second]).to_string());
        assert_eq!(rendered, "error: first\ninfo: second\n");
    }
}
