//! idchars diagnostic reporting. Errors from the generator jobs are turned
//! into [report::Report]s at the binary edge and rendered with
//! [writer::ReportWriter].
pub mod report;
pub mod writer;
