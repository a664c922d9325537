//! `othello.toml` settings for the command-line driver

use std::path::Path;

use serde::Deserialize;
use tournament::MatchConfig;

use crate::error::ConfigError;

/// Fewest placements a match game may be capped at; a full game needs 60.
pub const MIN_MAX_MOVES: u32 = 60;

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub log: LogConfig,
    #[serde(rename = "match")]
    pub match_settings: MatchSettings,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG`
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct MatchSettings {
    pub num_games: u32,
    pub max_moves: u32,
    pub alternate_colors: bool,
    /// Seeds random engines; entropy when absent
    pub seed: Option<u64>,
}

impl Default for MatchSettings {
    fn default() -> Self {
        let defaults = MatchConfig::default();
        Self {
            num_games: defaults.num_games,
            max_moves: defaults.max_moves,
            alternate_colors: defaults.alternate_colors,
            seed: None,
        }
    }
}

impl MatchSettings {
    pub fn to_match_config(&self, verbose: bool) -> MatchConfig {
        MatchConfig {
            num_games: self.num_games,
            max_moves: self.max_moves,
            alternate_colors: self.alternate_colors,
            verbose,
        }
    }
}

impl AppConfig {
    /// Reads and validates a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&text)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Like [`AppConfig::load`], but a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.match_settings.num_games == 0 {
            return Err(ConfigError::Invalid("match.num_games must be > 0".into()));
        }
        if self.match_settings.max_moves < MIN_MAX_MOVES {
            return Err(ConfigError::Invalid(format!(
                "match.max_moves must be >= {MIN_MAX_MOVES}, got {}",
                self.match_settings.max_moves
            )));
        }
        if self.log.filter.trim().is_empty() {
            return Err(ConfigError::Invalid("log.filter must not be empty".into()));
        }
        Ok(())
    }
}
