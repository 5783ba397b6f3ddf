//! # fnschema-config
//!
//! Layered configuration loading for fnschema using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`FNSCHEMA_*` prefix, `__` as separator)
//! 2. Project-level `./.fnschema.toml`
//! 3. User-level `<config dir>/fnschema/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `FNSCHEMA_SOURCE__INCLUDE_TESTS` -> `source.include_tests`
//! and `FNSCHEMA_SCHEMA__CYCLES` -> `schema.cycles`.
//!
//! # Usage
//!
//! ```no_run
//! use fnschema_config::FnschemaConfig;
//!
//! let config = FnschemaConfig::load().expect("config");
//! let options = config.translate_options();
//! ```

mod error;
mod schema;
mod source;

pub use error::ConfigError;
pub use schema::SchemaConfig;
pub use source::SourceConfig;

use std::path::PathBuf;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use fnschema_core::TranslateOptions;
use fnschema_parser::LoadOptions;
use serde::{Deserialize, Serialize};

/// Project-local config file, relative to the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".fnschema.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FnschemaConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub schema: SchemaConfig,
}

impl FnschemaConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// # Errors
    /// Returns `ConfigError::Figment` when a file cannot be parsed or a value
    /// has the wrong shape.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("FNSCHEMA_").split("__"))
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("fnschema").join("config.toml"))
    }

    #[must_use]
    pub const fn translate_options(&self) -> TranslateOptions {
        self.schema.translate_options()
    }

    #[must_use]
    pub const fn load_options(&self) -> LoadOptions {
        self.source.load_options()
    }
}
