//! A stream interface for the generator to write information to. The binary
//! points it at `stdout`/`stderr`, whereas tests use the owned variant to
//! capture whatever the generator would have printed.

use std::{
    io,
    sync::{Arc, Mutex},
};

/// Where the output of the generator should be written to.
#[derive(Debug)]
pub enum OutputStream {
    /// Points to the `stdout` stream.
    Stdout(io::Stdout),

    /// Points to the `stderr` stream.
    Stderr(io::Stderr),

    /// Backed by a shared buffer.
    Owned(Arc<Mutex<Vec<u8>>>),
}

impl OutputStream {
    /// Create a new [OutputStream] which uses "stdout" as the output stream.
    pub fn stdout() -> Self {
        OutputStream::Stdout(io::stdout())
    }

    /// Create a new [OutputStream] which uses "stderr" as the output stream.
    pub fn stderr() -> Self {
        OutputStream::Stderr(io::stderr())
    }

    /// Create an owned [OutputStream].
    pub fn owned() -> Self {
        OutputStream::Owned(Arc::new(Mutex::new(Vec::new())))
    }

    /// Get the contents that were written to an owned stream. Streams that
    /// point to the terminal have no recorded contents.
    pub fn contents(&self) -> Option<String> {
        match self {
            OutputStream::Owned(buffer) => {
                let buffer = buffer.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                Some(String::from_utf8_lossy(&buffer).into_owned())
            }
            _ => None,
        }
    }
}

impl Clone for OutputStream {
    fn clone(&self) -> Self {
        match self {
            OutputStream::Stdout(_) => OutputStream::Stdout(io::stdout()),
            OutputStream::Stderr(_) => OutputStream::Stderr(io::stderr()),
            OutputStream::Owned(buffer) => OutputStream::Owned(buffer.clone()),
        }
    }
}

impl io::Write for OutputStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputStream::Stdout(stream) => stream.write(buf),
            OutputStream::Stderr(stream) => stream.write(buf),
            OutputStream::Owned(buffer) => {
                let mut buffer = buffer.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
                buffer.extend_from_slice(buf);
                Ok(buf.len())
            }
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputStream::Stdout(stream) => stream.flush(),
            OutputStream::Stderr(stream) => stream.flush(),
            OutputStream::Owned(_) => Ok(()),
        }
    }
}

/// Write a line into an [OutputStream], ignoring any error that occurs.
/// There is nowhere left to report a failure to print a message.
#[macro_export]
macro_rules! stream_writeln {
    ($stream:expr, $($arg:tt)*) => {{
        use std::io::Write as _;
        let _ = writeln!($stream, $($arg)*);
    }};
}
