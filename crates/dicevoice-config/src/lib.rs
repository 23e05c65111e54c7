//! Configuration management for dicevoice.
//!
//! Configuration is a single TOML document. Every section is optional and
//! falls back to built-in defaults, so an empty file (or no file at all) is a
//! valid configuration.
//!
//! ```toml
//! players = ["Дима", "Андрей"]
//!
//! [logging]
//! level = "debug"
//!
//! [speech]
//! enabled = true
//!
//! [vocabulary.aliases]
//! full_house = ["фуллхаус"]
//!
//! [vocabulary.number_words]
//! "полтинник" = 50
//! ```

pub mod config;

pub use config::{
    AppConfig, ConfigError, LoggingConfig, Result, SpeechConfig, VocabularyConfig, CONFIG_ENV_VAR,
};
