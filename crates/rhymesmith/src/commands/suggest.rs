//! Suggest command: ranked rhyme candidates for a word.

use std::sync::Arc;

use clap::Args;
use owo_colors::OwoColorize;
use rhymesmith_core::{Config, Language, Mood, RhymeType, SuggestOptions, SuggestionRanker};
use tracing::{debug, info, instrument};

use super::resolve_language;

/// Arguments for the `suggest` subcommand.
#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// Word to find rhymes for.
    pub word: String,

    /// Language of the word (defaults to the configured language).
    #[arg(short, long, value_enum)]
    pub lang: Option<Language>,

    /// Filter candidates by emotional tone.
    #[arg(short, long, value_enum)]
    pub mood: Option<Mood>,

    /// Maximum number of suggestions.
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Surrounding lyric text.
    #[arg(long)]
    pub context: Option<String>,
}

/// Print rhyme suggestions for a word, best first.
#[instrument(name = "cmd_suggest", skip_all, fields(word = %args.word))]
pub fn cmd_suggest(args: SuggestArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let language = resolve_language(args.lang, config);
    debug!(
        word = %args.word,
        language = %language,
        mood = ?args.mood,
        limit = ?args.limit,
        "executing suggest command"
    );

    let mut options = SuggestOptions::from_config(config);
    if let Some(limit) = args.limit {
        if limit == 0 {
            anyhow::bail!("--limit must be at least 1");
        }
        options.max_results = limit;
    }

    let ranker = SuggestionRanker::new(Arc::new(config.build_tables())).with_options(options);
    let suggestions = ranker.suggest(&args.word, language, args.mood, args.context.as_deref());
    info!(count = suggestions.len(), "ranked suggestions");

    if global_json {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
        return Ok(());
    }

    if suggestions.is_empty() {
        println!("{}", format!("no rhymes found for '{}'", args.word).dimmed());
        return Ok(());
    }

    let width = suggestions.iter().map(|s| s.word.chars().count()).max().unwrap_or(0);
    for suggestion in &suggestions {
        let kind = match suggestion.rhyme_type {
            RhymeType::Perfect => suggestion.rhyme_type.green().to_string(),
            RhymeType::Near => suggestion.rhyme_type.cyan().to_string(),
            _ => suggestion.rhyme_type.yellow().to_string(),
        };
        let gloss = suggestion
            .gloss
            .as_deref()
            .map(|g| format!("  {}", g.dimmed()))
            .unwrap_or_default();
        println!(
            "{:<width$}  {:<16} {} syl  {:.2}{}",
            suggestion.word.bold(),
            kind,
            suggestion.syllables,
            suggestion.frequency,
            gloss,
        );
    }

    Ok(())
}
