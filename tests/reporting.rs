//! Tests for the reports that a failing job renders for the user.

use idchars_docs::page::PageKind;
use idchars_pipeline::{
    error::PipelineError,
    settings::{GeneratorMode, GeneratorSettings},
    Generator,
};
use idchars_reporting::writer::ReportWriter;
use idchars_utils::{stream::OutputStream, testing::ScratchDirectory};

use crate::ANSI_REGEX;

/// Run the job and render the reports of its error, with the scratch
/// directory replaced by `$DIR`.
fn run_and_render(settings: GeneratorSettings, scratch: &ScratchDirectory) -> String {
    let error = Generator::new(settings, OutputStream::owned()).run().unwrap_err();
    let rendered = ReportWriter::new(error.into_reports()).to_string();

    ANSI_REGEX
        .replace_all(&rendered, "")
        .replace(scratch.path().to_str().unwrap(), "$DIR")
}

#[test]
fn check_without_pages() {
    let scratch = ScratchDirectory::new("reporting-check").unwrap();
    let mut settings = GeneratorSettings::new(GeneratorMode::Check);
    settings.set_output_directory(scratch.path());
    settings.pages = vec![PageKind::Continue];

    pretty_assertions::assert_eq!(
        run_and_render(settings, &scratch),
        "error: `$DIR/continue-characters.md` does not exist\n  \
         = help: run `idchars generate` to update the pages\n"
    );
}

#[test]
fn lookup_invalid_code_point() {
    let scratch = ScratchDirectory::new("reporting-lookup").unwrap();
    let settings = GeneratorSettings::new(GeneratorMode::Lookup(vec!["0x110000".into()]));

    pretty_assertions::assert_eq!(
        run_and_render(settings, &scratch),
        "error: `0x110000` is not a valid code point\n  \
         = help: code points are written as `U+00E9` or `0xE9`, up to `U+10FFFF`\n"
    );
}

#[test]
fn generate_into_a_file() {
    let scratch = ScratchDirectory::new("reporting-generate").unwrap();
    let blocker = scratch.path().join("docs");
    std::fs::write(&blocker, "not a directory").unwrap();

    let mut settings = GeneratorSettings::new(GeneratorMode::Generate);
    settings.set_output_directory(&blocker);
    settings.pages = vec![PageKind::Start];

    let error = Generator::new(settings, OutputStream::owned()).run().unwrap_err();
    assert!(matches!(error, PipelineError::ResourceCreation { ref path, .. } if *path == blocker));
}
