//! Filesystem helpers for reading and writing the pages.
use std::{fs, io, path::Path};

use crate::error::PipelineError;

/// Create `directory` (and its parents) if it doesn't exist yet.
pub fn ensure_directory(directory: &Path) -> Result<(), PipelineError> {
    if directory.is_dir() {
        return Ok(());
    }

    fs::create_dir_all(directory)
        .map_err(|error| PipelineError::ResourceCreation { path: directory.to_owned(), error })
}

/// Write `contents` to the page at `path`, replacing the previous page.
pub fn write_page(path: &Path, contents: &str) -> Result<(), PipelineError> {
    fs::write(path, contents).map_err(|error| PipelineError::Write { path: path.to_owned(), error })
}

/// Read the page at `path`, yielding [None] when there is no such page.
pub fn read_page(path: &Path) -> Result<Option<String>, PipelineError> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(error) => Err(PipelineError::Read { path: path.to_owned(), error }),
    }
}

/// Find the first line (1-based) at which `expected` and `found` differ, or
/// [None] if they are identical.
pub fn first_difference(expected: &str, found: &str) -> Option<usize> {
    if expected == found {
        return None;
    }

    let mut expected_lines = expected.split('\n');
    let mut found_lines = found.split('\n');
    let mut line = 1;

    loop {
        match (expected_lines.next(), found_lines.next()) {
            (Some(left), Some(right)) if left == right => line += 1,
            _ => return Some(line),
        }
    }
}

#[cfg(test)]
mod test_super {
    use idchars_utils::testing::ScratchDirectory;

    use super::*;

    #[test]
    fn test_first_difference() {
        assert_eq!(first_difference("a\nb\nc", "a\nb\nc"), None);
        assert_eq!(first_difference("a\nb\nc", "a\nx\nc"), Some(2));
        assert_eq!(first_difference("a\nb\nc", "a\nb"), Some(3));
        assert_eq!(first_difference("a\n", "a\nb\n"), Some(2));
        assert_eq!(first_difference("", "a"), Some(1));
    }

    #[test]
    fn test_read_write_pages() {
        let scratch = ScratchDirectory::new("fs").unwrap();
        let directory = scratch.path().join("nested").join("docs");
        let page = directory.join("start-characters.md");

        ensure_directory(&directory).unwrap();
        assert!(directory.is_dir());
        assert_eq!(read_page(&page).unwrap(), None);

        write_page(&page, "## Start Characters\n").unwrap();
        assert_eq!(read_page(&page).unwrap().as_deref(), Some("## Start Characters\n"));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let scratch = ScratchDirectory::new("fs-missing").unwrap();
        let page = scratch.path().join("missing").join("start-characters.md");

        let error = write_page(&page, "").unwrap_err();
        assert!(matches!(error, PipelineError::Write { path, .. } if path == page));
    }
}
