//! Logging setup for the CLI.
//!
//! Human-readable logs go to stderr. Structured JSONL logs go to a file when
//! a location can be resolved, in this order:
//!
//! 1. `RHYMESMITH_LOG_PATH` (exact file)
//! 2. `RHYMESMITH_LOG_DIR`, then `log_dir` from config
//! 3. the platform data directory (`~/.local/share/rhymesmith/logs` on Linux)
//!
//! `RUST_LOG` overrides the level derived from flags and config.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const LOG_PATH_ENV: &str = "RHYMESMITH_LOG_PATH";
const LOG_DIR_ENV: &str = "RHYMESMITH_LOG_DIR";
const LOG_FILE_NAME: &str = "rhymesmith.jsonl";

/// Where JSONL logs should be written.
#[derive(Debug, Clone, Default)]
pub struct ObservabilityConfig {
    /// Exact log file. Wins over `log_dir`.
    pub log_path: Option<PathBuf>,
    /// Directory for `rhymesmith.jsonl`.
    pub log_dir: Option<PathBuf>,
}

impl ObservabilityConfig {
    /// Read the environment, falling back to the configured log directory.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        let log_path = std::env::var_os(LOG_PATH_ENV).map(PathBuf::from);
        let log_dir = std::env::var_os(LOG_DIR_ENV)
            .map(PathBuf::from)
            .or(config_log_dir)
            .or_else(default_log_dir);
        Self { log_path, log_dir }
    }

    /// Directory and file name of the log file, if one is configured.
    fn log_file(&self) -> Option<(PathBuf, String)> {
        if let Some(path) = &self.log_path {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
            let name = path.file_name()?.to_string_lossy().into_owned();
            return Some((dir, name));
        }
        self.log_dir
            .as_ref()
            .map(|dir| (dir.clone(), LOG_FILE_NAME.to_string()))
    }
}

fn default_log_dir() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "rhymesmith")
        .map(|dirs| dirs.data_local_dir().join("logs"))
}

/// Build the log filter from flags and the configured level.
///
/// `RUST_LOG` wins when set. Otherwise `--quiet` forces `error`, each `-v`
/// steps up from the configured level to `debug` and then `trace`.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Install the global subscriber.
///
/// Without `-v`, stderr only shows warnings and errors; the file log gets
/// everything the filter allows. The returned guard flushes the file writer
/// on drop and must be held for the life of the program.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
    verbose: u8,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_level = if verbose == 0 {
        LevelFilter::WARN
    } else {
        LevelFilter::TRACE
    };
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(stderr_level);

    let (file_layer, guard) = match config.log_file().and_then(|(dir, name)| open_log(&dir, &name)) {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().json().with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    Ok(guard)
}

/// Open the JSONL log file, or `None` when the location is unusable.
fn open_log(dir: &Path, name: &str) -> Option<RollingFileAppender> {
    std::fs::create_dir_all(dir).ok()?;
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(name)
        .build(dir)
        .ok()
}
