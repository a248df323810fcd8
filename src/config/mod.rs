// pipetriage - GPL-3.0-or-later
// This file is part of pipetriage.
//
// Copyright (C) 2026 Daniel Freiermuth
//
// pipetriage is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// pipetriage is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with pipetriage.  If not, see <https://www.gnu.org/licenses/>.

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How records are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// One JSON object per line
    #[default]
    Json,
    /// Indented JSON array
    Pretty,
    /// Human-readable summary per file
    Summary,
}

fn default_include_full_content() -> bool {
    true
}

fn default_log_extension() -> String {
    "log".to_string()
}

/// Global user configuration stored in config directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Output format used when none is given on the command line
    #[serde(default)]
    pub default_output: OutputFormat,

    /// Whether emitted records keep the full log text
    #[serde(default = "default_include_full_content")]
    pub include_full_content: bool,

    /// Extension of log files picked up from directory inputs
    #[serde(default = "default_log_extension")]
    pub log_extension: String,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            default_output: OutputFormat::default(),
            include_full_content: default_include_full_content(),
            log_extension: default_log_extension(),
        }
    }
}

impl GlobalConfig {
    /// Get the path to the global config file
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pipetriage").join("config.json"))
    }

    /// Load global config from disk, returning defaults if not found
    pub fn load() -> Self {
        Self::config_path().map_or_else(Self::default, |path| Self::load_from(&path))
    }

    /// Load config from `path`; a missing or unreadable file yields defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::info!("No config found at {}, using defaults", path.display());
            return Self::default();
        }

        tracing::info!("Loading config from {}", path.display());
        match std::fs::read_to_string(path)
            .map_err(anyhow::Error::from)
            .and_then(|contents| serde_json::from_str::<Self>(&contents).map_err(Into::into))
        {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring invalid config {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Save config to the global config path
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path().context("Could not determine config directory")?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save config to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
