//! Compare command: do two words rhyme?

use clap::Args;
use owo_colors::OwoColorize;
use rhymesmith_core::{Config, Language};
use tracing::{debug, instrument};

use super::{build_engine, resolve_language};

/// Arguments for the `compare` subcommand.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First word.
    pub word1: String,

    /// Second word.
    pub word2: String,

    /// Language of both words (defaults to the configured language).
    #[arg(short, long, value_enum)]
    pub lang: Option<Language>,
}

/// Compare the phonetic tails of two words.
#[instrument(name = "cmd_compare", skip_all, fields(word1 = %args.word1, word2 = %args.word2))]
pub fn cmd_compare(args: CompareArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let language = resolve_language(args.lang, config);
    debug!(language = %language, "executing compare command");

    let comparison = build_engine(config).compare_words(&args.word1, &args.word2, language);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&comparison)?);
        return Ok(());
    }

    match comparison.rhyme_type {
        Some(kind) if comparison.rhyme => println!(
            "{} {} / {}: {} ({:.2})",
            "RHYME:".green(),
            comparison.word1,
            comparison.word2,
            kind,
            comparison.strength,
        ),
        _ => println!(
            "{} {} / {}",
            "NO RHYME:".yellow(),
            comparison.word1,
            comparison.word2,
        ),
    }
    println!(
        "  {:<16} {}",
        comparison.word1.dimmed(),
        comparison.transcription1
    );
    println!(
        "  {:<16} {}",
        comparison.word2.dimmed(),
        comparison.transcription2
    );

    Ok(())
}
