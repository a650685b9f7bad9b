//! Error types for rhymesmith-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,

    /// A configured value is outside its accepted range.
    #[error("invalid value for {field}: {reason}")]
    InvalidValue {
        /// Name of the offending config field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// An explicitly requested config file does not exist.
    #[error("config file not found: {0}")]
    MissingFile(Utf8PathBuf),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur during rhyme analysis.
///
/// Normal input never produces these: empty text, unknown languages and
/// unrhymable words all degrade to empty results. Only caller contract
/// violations are reported.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum RhymeError {
    /// `lines` passed to scheme assignment do not match the analysed text.
    #[error(
        "rhyme group {group} references line {line}, word {word_index} ({word:?}) \
         which does not exist in the {line_count} lines provided"
    )]
    LineMismatch {
        /// Id of the group holding the stale position.
        group: String,
        /// Line index recorded in the group.
        line: usize,
        /// Word index recorded in the group.
        word_index: usize,
        /// Normalized word recorded in the group.
        word: String,
        /// Number of lines the caller supplied.
        line_count: usize,
    },

    /// An unrecognised mood name was supplied.
    #[error("unknown mood: {0}. Use: positive, negative, neutral")]
    UnknownMood(String),
}

/// Result type alias using [`RhymeError`].
pub type RhymeResult<T> = Result<T, RhymeError>;
