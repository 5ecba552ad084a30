//! TOML configuration: default ordering, bar width, provider display
//! overrides (name, logo badge, series color).
//!
//! ```toml
//! default_sort = "median"
//! descending = false
//! bar_width = 16
//!
//! [providers.e2b]
//! name = "E2B"
//! logo = "E2"
//! color = "#ff8800"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use ttiboard_core::{DisplayAssets, SortKey};

use crate::palette::{parse_color, Palette};

pub const DEFAULT_BAR_WIDTH: u16 = 16;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("provider `{provider}` has invalid color `{value}`")]
    InvalidColor { provider: String, value: String },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub name: Option<String>,
    pub logo: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    pub default_sort: String,
    pub descending: bool,
    pub bar_width: u16,
    pub providers: BTreeMap<String, ProviderConfig>,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            default_sort: "median".to_string(),
            descending: false,
            bar_width: DEFAULT_BAR_WIDTH,
            providers: BTreeMap::new(),
        }
    }
}

impl TuiConfig {
    /// `<config dir>/ttiboard/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ttiboard").join("config.toml"))
    }

    /// Load from `path`. A missing file yields defaults; a malformed one is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn sort_key(&self) -> SortKey {
        SortKey::parse_or_primary(&self.default_sort)
    }

    pub fn bar_width(&self) -> u16 {
        self.bar_width.clamp(4, 64)
    }

    /// Built-in display assets with this config's overrides applied.
    pub fn assets(&self) -> DisplayAssets {
        let mut assets = DisplayAssets::builtin();
        for (provider, cfg) in &self.providers {
            if cfg.name.is_none() && cfg.logo.is_none() {
                continue;
            }
            let current = assets.get(provider).cloned();
            let name = cfg
                .name
                .clone()
                .or_else(|| current.as_ref().map(|a| a.display_name.clone()))
                .unwrap_or_else(|| provider.clone());
            let logo = cfg
                .logo
                .clone()
                .or_else(|| current.map(|a| a.logo))
                .unwrap_or_else(|| ttiboard_core::PLACEHOLDER_LOGO.to_string());
            assets.insert(provider, name, logo);
        }
        assets
    }

    /// Built-in palette with this config's color overrides applied.
    pub fn palette(&self) -> Result<Palette, ConfigError> {
        let mut palette = Palette::builtin();
        for (provider, cfg) in &self.providers {
            if let Some(value) = &cfg.color {
                let color = parse_color(value).ok_or_else(|| ConfigError::InvalidColor {
                    provider: provider.clone(),
                    value: value.clone(),
                })?;
                palette.insert(provider, color);
            }
        }
        Ok(palette)
    }
}
