use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming an explicit configuration file.
pub const CONFIG_ENV_VAR: &str = "DICEVOICE_CONFIG";

const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors raised while locating, reading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Unknown combination key in vocabulary.aliases: {0}")]
    UnknownCombination(String),

    #[error("Number word '{0}' must normalize to exactly one token")]
    InvalidNumberWord(String),

    #[error("Alias '{alias}' for combination '{combination}' is empty after normalization")]
    EmptyAlias { combination: String, alias: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub speech: SpeechConfig,
    pub vocabulary: VocabularyConfig,
    /// Players registered when the score keeper starts
    pub players: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive; `RUST_LOG` takes precedence
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// When false the speech source reports itself unavailable
    pub enabled: bool,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Vocabulary additions layered on top of the built-in tables.
///
/// Alias keys are combination keys (`ones`, `four_of_a_kind`, `any`, ...).
/// Extra aliases are appended after the built-in ones for that combination.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    pub aliases: BTreeMap<String, Vec<String>>,
    pub number_words: BTreeMap<String, i32>,
}

impl AppConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Load configuration from an explicit file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded configuration file");
        Self::from_toml_str(&content, path)
    }

    /// Resolve and load configuration.
    ///
    /// Precedence: explicit path, then `DICEVOICE_CONFIG`, then the per-user
    /// config directory. Explicit locations must exist; the per-user file is
    /// optional and its absence yields the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from) {
            return Self::load_from_file(&path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => {
                debug!("no configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Per-user configuration file location, if a home directory is known.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "dicevoice")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}
