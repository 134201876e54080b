//! The idchars generator pipeline. A [Generator] runs a single job described
//! by its [settings::GeneratorSettings]: writing the reference pages,
//! checking that the pages on disk are current, or describing individual
//! characters.
pub mod error;
pub mod fs;
pub mod lookup;
pub mod settings;

use idchars_docs::page::{render_page_to_string, PageKind};
use idchars_unicode::scan::{scan, IdentifierChars};
use idchars_utils::{stream::OutputStream, stream_writeln, timing::StageMetrics};
use log::{debug, info};

use crate::{
    error::{PipelineError, StalePage, Staleness},
    settings::{GeneratorMode, GeneratorSettings},
};

/// A page rendered in memory, ready to be written or compared.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub kind: PageKind,
    pub character_count: usize,
    pub contents: String,
}

/// Runs the job described by its settings.
pub struct Generator {
    settings: GeneratorSettings,

    /// Where the output of the `lookup` job is written to.
    output: OutputStream,

    /// Timings of each stage of the job.
    metrics: StageMetrics,
}

impl Generator {
    pub fn new(settings: GeneratorSettings, output: OutputStream) -> Self {
        Self { settings, output, metrics: StageMetrics::default() }
    }

    /// Get a reference to the [GeneratorSettings].
    pub fn settings(&self) -> &GeneratorSettings {
        &self.settings
    }

    /// Get the collected [StageMetrics].
    pub fn metrics(&self) -> &StageMetrics {
        &self.metrics
    }

    /// Run the job that the settings describe.
    pub fn run(&mut self) -> Result<(), PipelineError> {
        match self.settings.mode.clone() {
            GeneratorMode::Generate => self.generate(),
            GeneratorMode::Check => self.check(),
            GeneratorMode::Lookup(arguments) => self.lookup(&arguments),
        }
    }

    /// Scan the code points once and render every selected page.
    pub fn render(&mut self) -> Vec<RenderedPage> {
        let chars: IdentifierChars = self.metrics.time_item("scan", scan);
        let provenance = self.settings.provenance();
        let pages = self.settings.selected_pages();

        self.metrics.time_item("render", || {
            pages
                .into_iter()
                .map(|kind| {
                    let listed = chars.of_class(kind.class());
                    debug!("rendering `{kind}` with {} characters", listed.len());

                    RenderedPage {
                        kind,
                        character_count: listed.len(),
                        contents: render_page_to_string(kind, listed, &provenance),
                    }
                })
                .collect()
        })
    }

    fn generate(&mut self) -> Result<(), PipelineError> {
        let pages = self.render();
        fs::ensure_directory(self.settings.output_directory())?;

        for page in pages {
            let path = self.settings.page_path(page.kind);
            self.metrics.time_item("write", || fs::write_page(&path, &page.contents))?;

            info!("wrote `{}` ({} characters)", path.display(), page.character_count);
        }

        Ok(())
    }

    fn check(&mut self) -> Result<(), PipelineError> {
        let pages = self.render();
        let mut stale = vec![];

        for page in pages {
            let path = self.settings.page_path(page.kind);
            let found = self.metrics.time_item("read", || fs::read_page(&path))?;

            let staleness = match found {
                None => Some(Staleness::Missing),
                Some(found) => fs::first_difference(&page.contents, &found)
                    .map(|line| Staleness::Outdated { line }),
            };

            match staleness {
                Some(staleness) => stale.push(StalePage { path, staleness }),
                None => info!("`{}` is up to date", path.display()),
            }
        }

        if stale.is_empty() {
            Ok(())
        } else {
            Err(PipelineError::StalePages(stale))
        }
    }

    fn lookup(&mut self, arguments: &[String]) -> Result<(), PipelineError> {
        let mut codes = vec![];

        for argument in arguments {
            codes.extend(lookup::parse_code_points(argument)?);
        }

        for code in codes {
            stream_writeln!(self.output, "{}", lookup::describe(code));
        }

        Ok(())
    }
}
