//! idchars logging utilities. This defines a simple logger with a style
//! which should be used across the generator to log and print messages.

use once_cell::sync::OnceCell;

use crate::{
    highlight::{highlight, Colour, Modifier},
    log::{Level, LevelFilter, Log, Metadata, Record},
    stream::OutputStream,
    stream_writeln,
};

/// The logger that is used by the generator for `log!` statements.
///
/// Errors are written to the error stream, everything else to the output
/// stream. Records are dropped until the streams have been set.
#[derive(Default)]
pub struct GeneratorLogger {
    /// The output stream that the logger will write to.
    pub output_stream: OnceCell<OutputStream>,

    /// The error stream that the logger will write to.
    pub error_stream: OnceCell<OutputStream>,
}

impl GeneratorLogger {
    /// Create a new generator logger.
    pub const fn new() -> Self {
        Self { output_stream: OnceCell::new(), error_stream: OnceCell::new() }
    }

    /// Point the logger at the given streams. Subsequent calls are ignored,
    /// the first pair of streams wins.
    pub fn set_streams(&self, output: OutputStream, error: OutputStream) {
        let _ = self.output_stream.set(output);
        let _ = self.error_stream.set(error);
    }
}

impl Log for GeneratorLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        // Custom colour formatting for the log level
        let level_prefix = match record.level() {
            Level::Error => highlight(Colour::Red | Modifier::Bold, "error"),
            Level::Warn => highlight(Colour::Yellow | Modifier::Bold, "warn"),
            Level::Info => highlight(Colour::Blue | Modifier::Bold, "info"),
            Level::Debug => highlight(Colour::Blue | Modifier::Bold, "debug"),
            Level::Trace => highlight(Colour::Magenta | Modifier::Bold, "trace"),
        };

        let stream = if record.level() == Level::Error {
            self.error_stream.get()
        } else {
            self.output_stream.get()
        };

        if let Some(stream) = stream {
            let mut out = stream.clone();
            stream_writeln!(out, "{level_prefix}: {}", record.args());
        }
    }

    fn flush(&self) {}
}

/// Install `logger` as the global logger, with the max level derived from
/// whether debug output was requested.
pub fn install(logger: &'static GeneratorLogger, debug: bool) -> Result<(), log::SetLoggerError> {
    log::set_logger(logger)?;
    log::set_max_level(if debug { LevelFilter::Debug } else { LevelFilter::Info });
    Ok(())
}
