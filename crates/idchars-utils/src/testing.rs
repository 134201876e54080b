//! Helpers for tests that touch the filesystem, only built for tests and
//! with the `testing` feature.
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// A scratch directory that is removed when dropped.
#[derive(Debug)]
pub struct ScratchDirectory {
    path: PathBuf,
}

impl ScratchDirectory {
    /// Create a fresh directory named after `name` inside the system
    /// temporary directory.
    pub fn new(name: &str) -> io::Result<Self> {
        let mut path = std::env::temp_dir();
        path.push(format!("idchars-{name}-{}", std::process::id()));

        if path.exists() {
            fs::remove_dir_all(&path)?;
        }

        fs::create_dir_all(&path)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ScratchDirectory {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

#[cfg(test)]
mod test_super {
    use super::*;

    #[test]
    fn test_scratch_directory_is_removed_on_drop() {
        let scratch = ScratchDirectory::new("testing").unwrap();
        let path = scratch.path().to_owned();
        fs::write(path.join("page.md"), "").unwrap();
        assert!(path.is_dir());

        drop(scratch);
        assert!(!path.exists());
    }
}
