//! Transliterate command.

use clap::Args;
use owo_colors::OwoColorize;
use rhymesmith_core::{Config, Language, Transcription};
use tracing::{debug, instrument};

use super::{build_engine, resolve_language};

/// Arguments for the `transliterate` subcommand.
#[derive(Args, Debug)]
pub struct TransliterateArgs {
    /// Words to render.
    #[arg(required = true)]
    pub words: Vec<String>,

    /// Language of the words (defaults to the configured language).
    #[arg(short, long, value_enum)]
    pub lang: Option<Language>,
}

/// Print the approximate phonetic rendering and rhyme key of each word.
#[instrument(name = "cmd_transliterate", skip_all, fields(words = args.words.len()))]
pub fn cmd_transliterate(
    args: TransliterateArgs,
    global_json: bool,
    config: &Config,
) -> anyhow::Result<()> {
    let language = resolve_language(args.lang, config);
    debug!(language = %language, "executing transliterate command");

    let engine = build_engine(config);
    let rendered: Vec<Transcription> = args
        .words
        .iter()
        .map(|word| engine.transliterate(word, language))
        .collect();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&rendered)?);
        return Ok(());
    }

    let width = rendered.iter().map(|t| t.word.chars().count()).max().unwrap_or(0);
    for t in &rendered {
        println!(
            "{:<width$}  {}  {} {}",
            t.word.bold(),
            t.transcription,
            "key".dimmed(),
            t.key.cyan(),
        );
    }

    Ok(())
}
