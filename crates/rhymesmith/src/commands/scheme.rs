//! Scheme command: per-line rhyme scheme of a lyric.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use rhymesmith_core::{Config, Language, text};
use tracing::{debug, instrument};

use super::{build_engine, read_input, resolve_language};

/// Arguments for the `scheme` subcommand.
#[derive(Args, Debug)]
pub struct SchemeArgs {
    /// Lyric file to analyze (`-` reads stdin).
    pub file: Utf8PathBuf,

    /// Lyric language (defaults to the configured language).
    #[arg(short, long, value_enum)]
    pub lang: Option<Language>,

    /// Print only the pattern string (e.g. `ABAB`).
    #[arg(long)]
    pub pattern_only: bool,
}

/// Analyze a lyric and print one scheme symbol per line.
#[instrument(name = "cmd_scheme", skip_all, fields(file = %args.file))]
pub fn cmd_scheme(
    args: SchemeArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let language = resolve_language(args.lang, config);
    debug!(file = %args.file, language = %language, "executing scheme command");

    let content = read_input(&args.file, max_input_bytes)?;
    let analysis = build_engine(config)
        .analyze(&content, language)
        .with_context(|| format!("failed to analyze {}", args.file))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else if args.pattern_only {
        println!("{}", analysis.pattern);
    } else {
        let width = analysis
            .scheme
            .iter()
            .map(|s| s.to_string().len())
            .max()
            .unwrap_or(1);
        for (symbol, line) in analysis.scheme.iter().zip(text::split_lines(&content)) {
            let label = format!("{:<width$}", symbol.to_string());
            if symbol.letter().is_some() {
                println!("{}  {}", label.bold().cyan(), line);
            } else {
                println!("{}  {}", label.dimmed(), line.dimmed());
            }
        }
        println!();
        println!("{}: {}", "Pattern".dimmed(), analysis.pattern.bold());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args_for(file: &tempfile::NamedTempFile, pattern_only: bool) -> SchemeArgs {
        SchemeArgs {
            file: Utf8PathBuf::from_path_buf(file.path().to_path_buf()).unwrap(),
            lang: None,
            pattern_only,
        }
    }

    fn lyric_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "I hear you sing\nthe bells will ring\n\nand then we part").unwrap();
        file
    }

    #[test]
    fn scheme_text_succeeds() {
        let file = lyric_file();
        assert!(cmd_scheme(args_for(&file, false), false, &Config::default(), None).is_ok());
    }

    #[test]
    fn scheme_pattern_only_succeeds() {
        let file = lyric_file();
        assert!(cmd_scheme(args_for(&file, true), false, &Config::default(), None).is_ok());
    }

    #[test]
    fn scheme_json_succeeds() {
        let file = lyric_file();
        assert!(cmd_scheme(args_for(&file, false), true, &Config::default(), None).is_ok());
    }

    #[test]
    fn scheme_missing_file_fails() {
        let args = SchemeArgs {
            file: Utf8PathBuf::from("/nonexistent/song.txt"),
            lang: None,
            pattern_only: false,
        };
        assert!(cmd_scheme(args, false, &Config::default(), None).is_err());
    }
}
