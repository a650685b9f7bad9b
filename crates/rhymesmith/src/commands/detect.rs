//! Detect command: rhyme groups for one or more lyric files.

use camino::Utf8PathBuf;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use rhymesmith_core::{Config, Language, RhymeGroup, RhymeType};
use serde::Serialize;
use tracing::{debug, info, instrument};

use super::{build_engine, read_input, resolve_language};

/// Arguments for the `detect` subcommand.
#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Lyric files to analyze (`-` reads stdin).
    #[arg(required = true)]
    pub files: Vec<Utf8PathBuf>,

    /// Lyric language (defaults to the configured language).
    #[arg(short, long, value_enum)]
    pub lang: Option<Language>,

    /// Minimum strength for cross-line groups (0.0-1.0).
    #[arg(long)]
    pub min_strength: Option<f64>,

    /// Skip rhymes that sit inside a single line.
    #[arg(long)]
    pub cross_line_only: bool,
}

/// Groups found in one input.
#[derive(Debug, Serialize)]
pub struct FileRhymes {
    /// Path as given on the command line.
    pub file: String,
    /// Detected groups.
    pub groups: Vec<RhymeGroup>,
}

/// Find rhyme groups in each file.
///
/// JSON output is always an array of `{file, groups}` objects, one per input.
#[instrument(name = "cmd_detect", skip_all, fields(files = args.files.len()))]
pub fn cmd_detect(
    args: DetectArgs,
    global_json: bool,
    quiet: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let language = resolve_language(args.lang, config);
    debug!(language = %language, min_strength = ?args.min_strength, "executing detect command");

    if let Some(min) = args.min_strength
        && !(0.0..=1.0).contains(&min)
    {
        anyhow::bail!("--min-strength must be between 0.0 and 1.0, got {min}");
    }

    let mut engine = build_engine(config);
    if let Some(min_strength) = args.min_strength {
        let mut options = engine.options().clone();
        options.min_strength = min_strength;
        engine = engine.with_options(options);
    }

    let progress = progress_bar(args.files.len(), global_json || quiet);
    let mut results = Vec::with_capacity(args.files.len());
    for file in &args.files {
        progress.set_message(file.to_string());
        let content = read_input(file, max_input_bytes)?;
        let mut groups = engine.detect_rhymes(&content, language);
        if args.cross_line_only {
            groups.retain(RhymeGroup::is_cross_line);
        }
        info!(file = %file, groups = groups.len(), "detected rhymes");
        results.push(FileRhymes {
            file: file.to_string(),
            groups,
        });
        progress.inc(1);
    }
    progress.finish_and_clear();

    if global_json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    let show_headers = results.len() > 1;
    for result in &results {
        if show_headers {
            println!("{}", result.file.bold());
        }
        if result.groups.is_empty() {
            println!("  {}", "no rhymes found".dimmed());
        }
        for group in &result.groups {
            print_group(group);
        }
    }

    Ok(())
}

/// Progress is only worth drawing for several files.
fn progress_bar(len: usize, hidden: bool) -> ProgressBar {
    if hidden || len < 2 {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::with_template("{bar:30} {pos}/{len} {wide_msg}") {
        bar.set_style(style);
    }
    bar
}

fn print_group(group: &RhymeGroup) {
    let lines: Vec<String> = group
        .positions
        .iter()
        .map(|p| (p.line + 1).to_string())
        .collect();
    let kind = match group.rhyme_type {
        RhymeType::Perfect | RhymeType::Multisyllabic => group.rhyme_type.green().to_string(),
        RhymeType::Internal => group.rhyme_type.cyan().to_string(),
        _ => group.rhyme_type.yellow().to_string(),
    };
    println!(
        "  {:<12} {:<14} {:.2}  {}  {}",
        group.id.bold(),
        kind,
        group.strength,
        group.words.join(", "),
        format!("(lines {})", lines.join(", ")).dimmed(),
    );
}
