//! Configuration management (TOML)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::manager::monitoring::{DEFAULT_LIMIT, Limit, TOP_LIMIT};
use crate::manager::operations::{KillSignal, MatchMode};
use crate::tui::actions::EnterAction;

/// Overrides the config file location.
pub const CONFIG_ENV: &str = "PROCTOP_CONFIG";

pub const MIN_NAME_WIDTH: u16 = 25;
pub const MAX_NAME_WIDTH: u16 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub log_filter: String,
    pub ranking: RankingConfig,
    pub action: ActionConfig,
    pub table: TableConfig,
    pub style: StyleConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Rows to keep: a count, `"top"` for the compact top-five table, or
    /// `"all"`.
    pub limit: LimitSetting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LimitSetting {
    Count(usize),
    Named(NamedLimit),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamedLimit {
    All,
    Top,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ActionConfig {
    pub on_enter: EnterAction,
    pub signal: KillSignal,
    pub match_mode: MatchMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub height: u16,
    pub name_width: u16,
}

/// 256-colour palette indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub border: u8,
    pub header: u8,
    pub selected_fg: u8,
    pub selected_bg: u8,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: "off".to_string(),
            ranking: RankingConfig::default(),
            action: ActionConfig::default(),
            table: TableConfig::default(),
            style: StyleConfig::default(),
        }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        let limit = match DEFAULT_LIMIT {
            Limit::All => LimitSetting::Named(NamedLimit::All),
            Limit::Top(k) => LimitSetting::Count(k),
        };
        RankingConfig { limit }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            height: 7,
            name_width: MAX_NAME_WIDTH,
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        StyleConfig {
            border: 240,
            header: 240,
            selected_fg: 229,
            selected_bg: 57,
        }
    }
}

impl RankingConfig {
    pub fn limit(&self) -> Limit {
        match self.limit {
            LimitSetting::Count(k) => Limit::Top(k),
            LimitSetting::Named(NamedLimit::Top) => Limit::Top(TOP_LIMIT),
            LimitSetting::Named(NamedLimit::All) => Limit::All,
        }
    }
}

impl TableConfig {
    pub fn name_width(&self) -> u16 {
        self.name_width.clamp(MIN_NAME_WIDTH, MAX_NAME_WIDTH)
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if config.ranking.limit == LimitSetting::Count(0) {
            return Err(ConfigError::Invalid {
                path: path.to_path_buf(),
                reason: "[ranking] limit must be at least 1".to_string(),
            });
        }
        Ok(config)
    }

    /// Loads the file when it exists; a missing file means defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Config::default())
        }
    }

    pub fn config_path() -> PathBuf {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return PathBuf::from(path);
        }
        directories::ProjectDirs::from("", "", "proctop")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("proctop.toml"))
    }
}
