//! idchars entry point.
mod args;

use std::{panic, process::exit};

use args::GeneratorOptions;
use clap::Parser as ClapParser;
use idchars_pipeline::{error::PipelineError, settings::GeneratorSettings, Generator};
use idchars_reporting::{report::Report, writer::ReportWriter};
use idchars_utils::{
    crash::crash_handler,
    logging::{self, GeneratorLogger},
    stream::OutputStream,
    stream_writeln,
};
use log::info;

pub static GENERATOR_LOGGER: GeneratorLogger = GeneratorLogger::new();

/// Write the reports to the error stream and exit, with a failure status if
/// any of them is an error.
fn report_and_exit(reports: Vec<Report>) -> ! {
    let failed = reports.iter().any(Report::is_error);
    let mut stream = OutputStream::stderr();

    stream_writeln!(stream, "{}", ReportWriter::new(reports));
    exit(if failed { 1 } else { 0 })
}

fn main() {
    // Initial grunt work, panic handler and logger setup...
    panic::set_hook(Box::new(crash_handler));
    GENERATOR_LOGGER.set_streams(OutputStream::stdout(), OutputStream::stderr());

    let settings: GeneratorSettings = match GeneratorOptions::try_parse() {
        Ok(options) => options.into(),
        Err(error) => report_and_exit(PipelineError::from(error).into_reports()),
    };

    logging::install(&GENERATOR_LOGGER, settings.debug)
        .unwrap_or_else(|_| panic!("couldn't initiate logger"));

    let output_metrics = settings.output_metrics;
    let mut generator = Generator::new(settings, OutputStream::stdout());
    let result = generator.run();

    if output_metrics {
        info!("stage metrics:\n{}", generator.metrics());
    }

    if let Err(error) = result {
        report_and_exit(error.into_reports());
    }
}
