//! idchars general utilities shared by the generator crates.

pub mod crash;
pub mod highlight;
pub mod logging;
pub mod stream;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod timing;

// Re-export logging utility
pub use log;
