//! Settings and configurations that can be applied to a generator run.
use std::path::{Path, PathBuf};

use idchars_docs::page::{PageKind, Provenance};
use idchars_unicode::UNICODE_VERSION;

/// Directory the pages are written to when none was specified.
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "docs";

/// Language named in the page introductions when none was specified.
pub const DEFAULT_LANGUAGE: &str = "Python";

/// What the generator should do.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GeneratorMode {
    /// Scan the code points and write the pages.
    #[default]
    Generate,

    /// Scan the code points and verify that the pages on disk are current.
    Check,

    /// Describe the given characters or code points.
    Lookup(Vec<String>),
}

/// Various settings that are present on the generator when initially
/// launching.
#[derive(Debug, Clone)]
pub struct GeneratorSettings {
    /// An optionally specified output directory for the pages.
    ///
    /// N.B. This path is the one that is specified via command-line arguments,
    /// the resolved path can be accessed via the
    /// [`GeneratorSettings::output_directory`] API.
    pub(crate) output_directory: Option<PathBuf>,

    /// The language whose identifiers the pages describe.
    pub language: String,

    /// Which pages should be generated or checked.
    pub pages: Vec<PageKind>,

    /// Whether debugging log statements are enabled.
    pub debug: bool,

    /// Print the duration of each stage when the job has completed.
    pub output_metrics: bool,

    /// The version of the generator that is recorded on the pages.
    pub generator_version: String,

    /// What the generator should do.
    pub mode: GeneratorMode,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            output_directory: None,
            language: DEFAULT_LANGUAGE.to_string(),
            pages: PageKind::ALL.to_vec(),
            debug: false,
            output_metrics: false,
            generator_version: env!("CARGO_PKG_VERSION").to_string(),
            mode: GeneratorMode::default(),
        }
    }
}

impl GeneratorSettings {
    /// Create a new [GeneratorSettings] running in the given mode.
    pub fn new(mode: GeneratorMode) -> Self {
        Self { mode, ..Default::default() }
    }

    /// Specify the directory the pages are written to.
    pub fn set_output_directory(&mut self, path: impl Into<PathBuf>) {
        self.output_directory = Some(path.into());
    }

    /// Get the output directory, [DEFAULT_OUTPUT_DIRECTORY] unless one was
    /// specified.
    pub fn output_directory(&self) -> &Path {
        self.output_directory.as_deref().unwrap_or_else(|| Path::new(DEFAULT_OUTPUT_DIRECTORY))
    }

    /// Get the path that the page `kind` is written to.
    pub fn page_path(&self, kind: PageKind) -> PathBuf {
        self.output_directory().join(kind.file_name())
    }

    /// Get the selected pages, deduplicated, in generation order.
    pub fn selected_pages(&self) -> Vec<PageKind> {
        PageKind::ALL.into_iter().filter(|kind| self.pages.contains(kind)).collect()
    }

    /// The [Provenance] recorded on every page.
    pub fn provenance(&self) -> Provenance {
        Provenance {
            language: self.language.clone(),
            generator_version: self.generator_version.clone(),
            unicode_version: UNICODE_VERSION,
        }
    }
}
