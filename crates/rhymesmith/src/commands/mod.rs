//! Command implementations.

use std::io::Read;
use std::sync::Arc;

use anyhow::Context;
use camino::Utf8Path;
use rhymesmith_core::{Config, Language, RhymeEngine};

pub mod compare;
pub mod detect;
pub mod info;
pub mod scheme;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod suggest;
pub mod transliterate;

/// Path argument that means "read standard input".
pub const STDIN_PATH: &str = "-";

/// Read a file and validate its size against the configured limit.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Read lyrics from a file, or from stdin when the path is `-`.
pub fn read_input(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    if path.as_str() == STDIN_PATH {
        read_limited(std::io::stdin().lock(), max_bytes, "stdin")
    } else {
        read_input_file(path, max_bytes)
    }
}

/// Read at most `max_bytes` from a stream, failing if there is more.
fn read_limited<R: Read>(reader: R, max_bytes: Option<usize>, name: &str) -> anyhow::Result<String> {
    let cap = max_bytes.map_or(u64::MAX, |max| (max as u64).saturating_add(1));
    let mut bytes = Vec::new();
    reader
        .take(cap)
        .read_to_end(&mut bytes)
        .with_context(|| format!("failed to read {name}"))?;
    if let Some(max) = max_bytes
        && bytes.len() > max
    {
        anyhow::bail!("input too large: {name} exceeds {max} bytes");
    }
    String::from_utf8(bytes).with_context(|| format!("{name} is not valid UTF-8"))
}

/// The `--lang` flag if given, else the configured language.
pub fn resolve_language(flag: Option<Language>, config: &Config) -> Language {
    flag.unwrap_or_else(|| config.language())
}

/// Engine over the built-in tables plus configured families.
pub fn build_engine(config: &Config) -> RhymeEngine {
    RhymeEngine::from_config(config, Arc::new(config.build_tables()))
}
