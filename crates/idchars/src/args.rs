//! idchars arguments management.

use clap::{Parser as ClapParser, ValueEnum};
use idchars_docs::page::PageKind;
use idchars_pipeline::settings::{GeneratorMode, GeneratorSettings, DEFAULT_LANGUAGE};

/// GeneratorOptions is a structural representation of what arguments the
/// generator can take when running.
#[derive(ClapParser, Debug)]
#[clap(
    name = "idchars",
    version,
    author = "The idchars authors",
    about = "Generate reference pages of the characters that are valid in identifiers"
)]
#[clap(disable_colored_help = true)]
pub(crate) struct GeneratorOptions {
    /// Directory that the pages are written to, `docs` by default
    #[clap(short, long, global = true)]
    pub(crate) output_directory: Option<String>,

    /// Language named in the introduction of each page
    #[clap(long, global = true, default_value = DEFAULT_LANGUAGE)]
    pub(crate) language: String,

    /// Only generate or check the given page, can be repeated
    #[clap(short, long = "page", global = true, value_enum)]
    pub(crate) pages: Vec<PageArg>,

    /// Run the generator in debug mode
    #[clap(short, long, global = true)]
    pub(crate) debug: bool,

    /// Whether to print the duration of each stage once the job has finished
    #[clap(long, global = true)]
    pub(crate) output_metrics: bool,

    /// Generator mode, `generate` when omitted
    #[clap(subcommand)]
    pub(crate) mode: Option<SubCmd>,
}

/// A page that can be selected on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PageArg {
    Start,
    Continue,
}

impl From<PageArg> for PageKind {
    fn from(page: PageArg) -> Self {
        match page {
            PageArg::Start => PageKind::Start,
            PageArg::Continue => PageKind::Continue,
        }
    }
}

#[derive(ClapParser, Debug, Clone)]
pub(crate) enum SubCmd {
    Generate(GenerateMode),
    Check(CheckMode),
    Lookup(LookupMode),
}

/// Scan every code point and write the pages
#[derive(ClapParser, Debug, Clone)]
pub(crate) struct GenerateMode {}

/// Verify that the pages on disk match what would be generated
#[derive(ClapParser, Debug, Clone)]
pub(crate) struct CheckMode {}

/// Describe characters, given literally or as `U+XXXX`/`0xXXXX` code points
#[derive(ClapParser, Debug, Clone)]
pub(crate) struct LookupMode {
    /// Characters or code points to describe
    #[clap(required = true)]
    pub(crate) items: Vec<String>,
}

impl From<GeneratorOptions> for GeneratorSettings {
    fn from(options: GeneratorOptions) -> Self {
        let mode = match options.mode {
            Some(SubCmd::Check(_)) => GeneratorMode::Check,
            Some(SubCmd::Lookup(LookupMode { items })) => GeneratorMode::Lookup(items),
            Some(SubCmd::Generate(_)) | None => GeneratorMode::Generate,
        };

        let mut settings = GeneratorSettings::new(mode);
        settings.language = options.language;
        settings.debug = options.debug;
        settings.output_metrics = options.output_metrics;
        settings.generator_version = env!("CARGO_PKG_VERSION").to_string();

        if let Some(directory) = options.output_directory {
            settings.set_output_directory(directory);
        }

        if !options.pages.is_empty() {
            settings.pages = options.pages.into_iter().map(PageKind::from).collect();
        }

        settings
    }
}

#[cfg(test)]
mod test_super {
    use std::path::Path;

    use clap::Parser;

    use super::*;

    fn settings(args: &[&str]) -> GeneratorSettings {
        GeneratorOptions::try_parse_from(args).unwrap().into()
    }

    #[test]
    fn test_defaults() {
        let settings = settings(&["idchars"]);

        assert_eq!(settings.mode, GeneratorMode::Generate);
        assert_eq!(settings.output_directory(), Path::new("docs"));
        assert_eq!(settings.selected_pages(), vec![PageKind::Start, PageKind::Continue]);
        assert_eq!(settings.language, "Python");
        assert!(!settings.debug);
    }

    #[test]
    fn test_check_with_global_options() {
        let settings =
            settings(&["idchars", "check", "--page", "continue", "-o", "site/docs", "--debug"]);

        assert_eq!(settings.mode, GeneratorMode::Check);
        assert_eq!(settings.selected_pages(), vec![PageKind::Continue]);
        assert_eq!(settings.output_directory(), Path::new("site/docs"));
        assert!(settings.debug);
    }

    #[test]
    fn test_lookup_items() {
        let settings = settings(&["idchars", "lookup", "U+00E9", "_x"]);
        assert_eq!(settings.mode, GeneratorMode::Lookup(vec!["U+00E9".into(), "_x".into()]));

        assert!(GeneratorOptions::try_parse_from(["idchars", "lookup"]).is_err());
        assert!(GeneratorOptions::try_parse_from(["idchars", "--page", "middle"]).is_err());
    }
}
