//! Configuration loading and discovery.
//!
//! This module provides configuration file discovery by:
//! 1. Walking up from the current directory to find project config
//! 2. Loading user config from XDG config directory
//! 3. Merging with sensible defaults
//!
//! # Supported formats
//!
//! The following configuration file formats are supported:
//! - TOML (`.toml`)
//! - YAML (`.yaml`, `.yml`)
//! - JSON (`.json`)
//!
//! # Config file locations (in order of precedence, highest first):
//! - `rhymesmith.<ext>` in current directory or any parent
//! - `.rhymesmith.<ext>` in current directory or any parent
//! - `~/.config/rhymesmith/config.<ext>` (user config)
//!
//! Where `<ext>` is one of: `toml`, `yaml`, `yml`, `json`
//!
//! When multiple files exist in the same directory, all are merged via figment.
//! Later extensions override earlier: toml < yaml < yml < json.
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use rhymesmith_core::config::{Config, ConfigLoader};
//!
//! let cwd = std::env::current_dir().unwrap();
//! let cwd = Utf8PathBuf::try_from(cwd).expect("current directory is not valid UTF-8");
//! let (config, _sources) = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::dictionaries::RhymeTables;
use crate::error::{ConfigError, ConfigResult};
use crate::language::Language;
use crate::rhyme::{DEFAULT_MIN_STRENGTH, RhymeType};
use crate::suggest::{DEFAULT_MAX_RESULTS, DEFAULT_MIN_SIMILARITY};

/// Default maximum input size: 1 MiB. Lyrics are small; anything larger is
/// almost certainly the wrong file.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;

/// Default phonetic-key cache capacity.
pub const DEFAULT_CACHE_CAPACITY: usize = 4096;

/// A user-supplied rhyme family, appended to the built-in tables.
///
/// ```toml
/// [[families]]
/// language = "en"
/// pattern = "ay"
/// words = ["bouquet", "cabaret"]
/// rhyme_type = "near"
/// frequency = 0.3
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct CustomFamily {
    /// Language code the family belongs to.
    #[serde(default = "default_language")]
    pub language: String,
    /// Word ending that selects the family.
    pub pattern: String,
    /// Member words.
    pub words: Vec<String>,
    /// Rhyme type for every member (default: perfect).
    #[serde(default)]
    pub rhyme_type: Option<RhymeType>,
    /// Frequency for every member (default: 0.5).
    #[serde(default)]
    pub frequency: Option<f64>,
}

/// The configuration for rhymesmith.
///
/// Deserialized from config files found during discovery (TOML, YAML, or
/// JSON). Every field has a default, so an empty file is valid.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Log level for the application (e.g., "debug", "info", "warn", "error").
    pub log_level: LogLevel,
    /// Directory for JSONL log files (falls back to platform defaults if unset).
    pub log_dir: Option<Utf8PathBuf>,
    /// Default lyric language code. Unsupported codes use generic rules.
    pub language: String,
    /// Cross-line rhyme groups weaker than this are dropped (0.0--1.0).
    pub min_group_strength: f64,
    /// Maximum number of suggestions returned.
    pub max_suggestions: usize,
    /// Similarity floor for generated fallback suggestions (0.0--1.0).
    pub min_similarity: f64,
    /// Phonetic-key cache capacity in entries. `0` disables the cache.
    pub cache_capacity: usize,
    /// Highlight colours for rhyme groups, cycled in order.
    pub palette: Option<Vec<String>>,
    /// Maximum input size in bytes (default: 1 MiB).
    ///
    /// Omit to use the default. Use `disable_input_limit` to remove the
    /// limit entirely.
    pub max_input_bytes: Option<usize>,
    /// Disable the input size limit entirely.
    pub disable_input_limit: bool,
    /// Extra rhyme families appended to the built-in dictionaries.
    pub families: Vec<CustomFamily>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            log_dir: None,
            language: default_language(),
            min_group_strength: DEFAULT_MIN_STRENGTH,
            max_suggestions: DEFAULT_MAX_RESULTS,
            min_similarity: DEFAULT_MIN_SIMILARITY,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            palette: None,
            max_input_bytes: None,
            disable_input_limit: false,
            families: Vec::new(),
        }
    }
}

fn default_language() -> String {
    Language::En.as_str().to_string()
}

impl Config {
    /// The configured default language.
    pub fn language(&self) -> Language {
        Language::from_code(&self.language)
    }

    /// Effective input limit, or `None` when disabled.
    pub fn input_limit(&self) -> Option<usize> {
        if self.disable_input_limit {
            None
        } else {
            Some(self.max_input_bytes.unwrap_or(DEFAULT_MAX_INPUT_BYTES))
        }
    }

    /// Reject values outside their accepted ranges.
    pub fn validate(&self) -> ConfigResult<()> {
        check_unit_range("min_group_strength", self.min_group_strength)?;
        check_unit_range("min_similarity", self.min_similarity)?;
        if self.max_suggestions == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_suggestions",
                reason: "must be at least 1".to_string(),
            });
        }
        for family in &self.families {
            if family.pattern.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "families",
                    reason: "pattern must not be empty".to_string(),
                });
            }
            if let Some(frequency) = family.frequency {
                check_unit_range("families.frequency", frequency)?;
            }
        }
        Ok(())
    }

    /// Built-in tables plus the configured families.
    pub fn build_tables(&self) -> RhymeTables {
        let mut tables = RhymeTables::builtin();
        if !self.families.is_empty() {
            tables.extend_families(&self.families);
            tracing::debug!(families = self.families.len(), "added custom rhyme families");
        }
        tables
    }
}

fn check_unit_range(field: &'static str, value: f64) -> ConfigResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            reason: format!("{value} is outside 0.0..=1.0"),
        })
    }
}

/// Log level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Verbose output for debugging and development.
    Debug,
    /// Standard operational information (default).
    #[default]
    Info,
    /// Warnings about potential issues.
    Warn,
    /// Errors that indicate failures.
    Error,
}

impl LogLevel {
    /// Returns the log level as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Metadata about which configuration sources were loaded.
///
/// Returned alongside [`Config`] from [`ConfigLoader::load()`] so commands
/// can report the actual config files without re-discovering them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project config files found by walking up, ordered low→high precedence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// User config file from XDG config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Explicit config files loaded (e.g., from `--config` flag).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// Returns the highest-precedence config file that was loaded.
    ///
    /// Precedence: explicit files > project files > user file.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }
}

/// Supported configuration file extensions (in order of preference).
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Application name for XDG directory lookup and config file names.
const APP_NAME: &str = "rhymesmith";

/// Prefix for environment overrides (`RHYMESMITH_LANGUAGE=it`).
const ENV_PREFIX: &str = "RHYMESMITH_";

/// Builder for loading configuration from multiple sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    /// Starting directory for project config search.
    project_search_root: Option<Utf8PathBuf>,
    /// Whether to include user config from XDG directory.
    include_user_config: bool,
    /// Stop searching when we hit a directory containing this file/dir.
    boundary_marker: Option<String>,
    /// Explicit config files to load (for testing or programmatic use).
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a new config loader with default settings.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Set the starting directory for project config search.
    ///
    /// The loader will walk up from this directory looking for config files.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set whether to include user config from `~/.config/rhymesmith/`.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Set a boundary marker to stop directory traversal.
    ///
    /// When walking up directories, stop if we find a directory containing
    /// this file or directory name. Default is `.git`.
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.boundary_marker = Some(marker.into());
        self
    }

    /// Disable boundary marker (search all the way to filesystem root).
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary_marker = None;
        self
    }

    /// Add an explicit config file to load.
    ///
    /// Files are loaded in order, with later files taking precedence.
    /// Explicit files are loaded after discovered files.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration, merging all discovered sources.
    ///
    /// Precedence (highest to lowest):
    /// 1. `RHYMESMITH_*` environment variables
    /// 2. Explicit files (in order added via `with_file`)
    /// 3. Project config (closest to search root)
    /// 4. User config (`~/.config/rhymesmith/config.<ext>`)
    /// 5. Default values
    ///
    /// An explicit file that does not exist is an error; discovered files
    /// are only picked up when present.
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let mut sources = ConfigSources::default();

        if self.include_user_config
            && let Some(user_config) = self.find_user_config()
        {
            figment = Self::merge_file(figment, &user_config);
            sources.user_file = Some(user_config);
        }

        if let Some(ref root) = self.project_search_root {
            let project_configs = self.find_project_configs(root);
            for pc in &project_configs {
                figment = Self::merge_file(figment, pc);
            }
            sources.project_files = project_configs;
        }

        for file in &self.explicit_files {
            if !file.is_file() {
                return Err(ConfigError::MissingFile(file.clone()));
            }
            figment = Self::merge_file(figment, file);
        }
        sources.explicit_files = self.explicit_files;

        // RHYMESMITH_LANGUAGE=it, RHYMESMITH_LOG_LEVEL=debug, etc.
        figment = figment.merge(Env::prefixed(ENV_PREFIX).lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        config.validate()?;
        tracing::info!(
            log_level = config.log_level.as_str(),
            language = %config.language(),
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Load configuration, returning an error if no config file is found.
    pub fn load_or_error(self) -> ConfigResult<(Config, ConfigSources)> {
        let has_user = self.include_user_config && self.find_user_config().is_some();
        let has_project = self
            .project_search_root
            .as_ref()
            .is_some_and(|root| !self.find_project_configs(root).is_empty());
        let has_explicit = !self.explicit_files.is_empty();

        if !has_user && !has_project && !has_explicit {
            return Err(ConfigError::NotFound);
        }

        self.load()
    }

    /// Find project config files by walking up from the given directory.
    ///
    /// Returns all matching config files from the closest directory that has
    /// any match, ordered low-to-high precedence: dotfiles before regular
    /// files.
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            let mut found = Vec::new();

            for ext in CONFIG_EXTENSIONS {
                let dotfile = dir.join(format!(".{APP_NAME}.{ext}"));
                if dotfile.is_file() {
                    found.push(dotfile);
                }
            }
            for ext in CONFIG_EXTENSIONS {
                let regular = dir.join(format!("{APP_NAME}.{ext}"));
                if regular.is_file() {
                    found.push(regular);
                }
            }

            if !found.is_empty() {
                return found;
            }

            // Check for boundary marker AFTER checking config files,
            // so a config in the same directory as the marker is found.
            if let Some(ref marker) = self.boundary_marker
                && dir.join(marker).exists()
                && dir != start
            {
                break;
            }

            current = dir.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }

    /// Find user config in XDG config directory.
    fn find_user_config(&self) -> Option<Utf8PathBuf> {
        let config_dir = user_config_dir()?;
        CONFIG_EXTENSIONS
            .iter()
            .map(|ext| config_dir.join(format!("config.{ext}")))
            .find(|path| path.is_file())
    }

    /// Merge a config file into the figment, detecting format from extension.
    fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
        match path.extension() {
            Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
            Some("json") => figment.merge(Json::file_exact(path.as_str())),
            _ => figment.merge(Toml::file_exact(path.as_str())),
        }
    }
}

/// Get the project directories for XDG-compliant path resolution.
///
/// Returns `None` if the home directory cannot be determined.
fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("", "", APP_NAME)
}

/// Get the user config directory path.
///
/// Returns `~/.config/rhymesmith/` on Linux, `~/Library/Application Support/rhymesmith/`
/// on macOS, and equivalent on other platforms.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = project_dirs()?;
    Utf8PathBuf::from_path_buf(proj_dirs.config_dir().to_path_buf()).ok()
}

/// Get the local data directory path (machine-specific, not synced).
///
/// Used as the fallback location for JSONL log files.
pub fn user_data_local_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = project_dirs()?;
    Utf8PathBuf::from_path_buf(proj_dirs.data_local_dir().to_path_buf()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Serializes tests that mutate environment variables via `set_var`/`remove_var`.
    static TEST_ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn load_file(contents: &str, name: &str) -> ConfigResult<(Config, ConfigSources)> {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(name);
        fs::write(&config_path, contents).unwrap();
        let config_path = Utf8PathBuf::try_from(config_path).unwrap();

        ConfigLoader::new()
            .with_user_config(false)
            .with_file(&config_path)
            .load()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert!(config.log_dir.is_none());
        assert_eq!(config.language(), Language::En);
        assert!((config.min_group_strength - 0.6).abs() < f64::EPSILON);
        assert_eq!(config.max_suggestions, 20);
        assert_eq!(config.cache_capacity, DEFAULT_CACHE_CAPACITY);
        assert!(config.families.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_loader_builds_with_defaults() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let loader = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker();

        let (config, sources) = loader.load().unwrap();
        assert_eq!(config, Config::default());
        assert!(sources.primary_file().is_none());
    }

    #[test]
    fn test_single_file_overrides_default() {
        let (config, sources) = load_file(
            r#"log_level = "debug"
log_dir = "/tmp/rhymesmith"
language = "it"
min_group_strength = 0.8
"#,
            "config.toml",
        )
        .unwrap();

        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(
            config.log_dir.as_ref().map(|dir| dir.as_str()),
            Some("/tmp/rhymesmith")
        );
        assert_eq!(config.language(), Language::It);
        assert!((config.min_group_strength - 0.8).abs() < f64::EPSILON);
        assert!(sources.primary_file().is_some());
    }

    #[test]
    fn test_later_file_overrides_earlier() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let tmp = TempDir::new().unwrap();

        let base_config = tmp.path().join("base.toml");
        fs::write(&base_config, "language = \"fr\"\nmax_suggestions = 5\n").unwrap();

        let override_config = tmp.path().join("override.toml");
        fs::write(&override_config, r#"language = "de""#).unwrap();

        let base_config = Utf8PathBuf::try_from(base_config).unwrap();
        let override_config = Utf8PathBuf::try_from(override_config).unwrap();

        let (config, _sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&base_config)
            .with_file(&override_config)
            .load()
            .unwrap();

        assert_eq!(config.language(), Language::De);
        assert_eq!(config.max_suggestions, 5);
    }

    #[test]
    fn test_missing_explicit_file_errors() {
        let result = ConfigLoader::new()
            .with_user_config(false)
            .with_file("/nonexistent/rhymesmith.toml")
            .load();
        assert!(matches!(result, Err(ConfigError::MissingFile(_))));
    }

    #[test]
    fn test_project_config_discovery() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let tmp = TempDir::new().unwrap();
        let project_dir = tmp.path().join("project");
        let sub_dir = project_dir.join("songs").join("drafts");
        fs::create_dir_all(&sub_dir).unwrap();

        fs::write(project_dir.join(".rhymesmith.toml"), r#"language = "es""#).unwrap();

        let sub_dir = Utf8PathBuf::try_from(sub_dir).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&sub_dir)
            .load()
            .unwrap();

        assert_eq!(config.language(), Language::Es);
        assert_eq!(sources.project_files.len(), 1);
    }

    #[test]
    fn test_boundary_marker_stops_search() {
        let tmp = TempDir::new().unwrap();

        let parent = tmp.path().join("parent");
        let child = parent.join("child");
        let work = child.join("work");
        fs::create_dir_all(&work).unwrap();

        // Config in parent (should NOT be found due to .git boundary)
        fs::write(parent.join(".rhymesmith.toml"), r#"log_level = "warn""#).unwrap();
        fs::create_dir(child.join(".git")).unwrap();

        let work = Utf8PathBuf::try_from(work).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_boundary_marker(".git")
            .with_project_search(&work)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Info);
        assert!(sources.project_files.is_empty());
    }

    #[test]
    fn dotfile_before_regular() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".rhymesmith.toml"), r#"log_level = "debug""#).unwrap();
        fs::write(tmp.path().join("rhymesmith.toml"), r#"log_level = "error""#).unwrap();

        let tmp_path = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&tmp_path)
            .load()
            .unwrap();

        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(sources.project_files.len(), 2);
    }

    #[test]
    fn only_closest_directory_contributes() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let tmp = TempDir::new().unwrap();
        let parent = tmp.path().join("parent");
        let child = parent.join("child");
        fs::create_dir_all(&child).unwrap();

        fs::write(parent.join("rhymesmith.toml"), "max_suggestions = 3\n").unwrap();
        fs::write(child.join(".rhymesmith.yaml"), "language: fr\n").unwrap();

        let child_path = Utf8PathBuf::try_from(child).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(&child_path)
            .load()
            .unwrap();

        assert_eq!(config.language(), Language::Fr);
        assert_eq!(config.max_suggestions, 20);
        assert_eq!(sources.project_files.len(), 1);
    }

    #[test]
    fn test_load_or_error_fails_when_no_config() {
        let result = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .load_or_error();

        assert!(matches!(result, Err(ConfigError::NotFound)));
    }

    #[test]
    fn json_config_is_supported() {
        let (config, _sources) =
            load_file(r#"{"cache_capacity": 0, "palette": ["red"]}"#, "config.json").unwrap();
        assert_eq!(config.cache_capacity, 0);
        assert_eq!(config.palette, Some(vec!["red".to_string()]));
    }

    #[test]
    fn out_of_range_strength_is_rejected() {
        let result = load_file("min_group_strength = 1.5\n", "config.toml");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                field: "min_group_strength",
                ..
            })
        ));
    }

    #[test]
    fn zero_max_suggestions_is_rejected() {
        let result = load_file("max_suggestions = 0\n", "config.toml");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                field: "max_suggestions",
                ..
            })
        ));
    }

    #[test]
    fn input_limit_defaults_and_disables() {
        assert_eq!(Config::default().input_limit(), Some(DEFAULT_MAX_INPUT_BYTES));

        let (config, _sources) = load_file(
            "max_input_bytes = 1024\ndisable_input_limit = true\n",
            "config.toml",
        )
        .unwrap();
        assert!(config.disable_input_limit);
        assert_eq!(config.max_input_bytes, Some(1024));
        assert_eq!(config.input_limit(), None);
    }

    #[test]
    fn families_deserialize_from_yaml() {
        let yaml = r#"
families:
  - language: en
    pattern: ay
    words: [bouquet, cabaret]
    rhyme_type: near
    frequency: 0.3
  - pattern: ight
    words: [kite]
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.families.len(), 2);
        assert_eq!(config.families[0].rhyme_type, Some(RhymeType::Near));
        assert_eq!(config.families[1].language, "en");
        assert!(config.families[1].frequency.is_none());
    }

    #[test]
    fn build_tables_includes_custom_families() {
        let config = Config {
            families: vec![CustomFamily {
                language: "en".to_string(),
                pattern: "ight".to_string(),
                words: vec!["kite".to_string()],
                rhyme_type: None,
                frequency: None,
            }],
            ..Config::default()
        };
        let tables = config.build_tables();
        let family = tables.family(Language::En, "ight").unwrap();
        assert!(family.iter().any(|e| e.word == "kite"));
    }

    #[test]
    fn empty_family_pattern_is_rejected() {
        let config = Config {
            families: vec![CustomFamily {
                pattern: " ".to_string(),
                ..CustomFamily::default()
            }],
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    #[allow(unsafe_code)]
    fn test_env_var_override_language() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

        // SAFETY: Test environment. The mutex serializes env access across tests.
        unsafe {
            std::env::set_var("RHYMESMITH_LANGUAGE", "es");
        }

        let (config, _sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .load()
            .unwrap();

        // SAFETY: Cleanup after test.
        unsafe {
            std::env::remove_var("RHYMESMITH_LANGUAGE");
        }

        assert_eq!(config.language(), Language::Es);
    }

    #[test]
    #[allow(unsafe_code)]
    fn test_env_var_overrides_file_config() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        fs::write(&config_path, "max_suggestions = 5\n").unwrap();
        let config_path = Utf8PathBuf::try_from(config_path).unwrap();

        // SAFETY: Test environment. The mutex serializes env access across tests.
        unsafe {
            std::env::set_var("RHYMESMITH_MAX_SUGGESTIONS", "7");
        }

        let (config, _sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(&config_path)
            .load()
            .unwrap();

        // SAFETY: Cleanup after test.
        unsafe {
            std::env::remove_var("RHYMESMITH_MAX_SUGGESTIONS");
        }

        assert_eq!(config.max_suggestions, 7);
    }

    #[test]
    fn test_user_config_dir() {
        if let Some(path) = user_config_dir() {
            assert!(path.as_str().contains("rhymesmith"));
        }
    }
}
