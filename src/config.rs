// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

use crate::error::{Error, Result};

/// Live-preview behavior applied by the embedding host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Milliseconds the editor waits after the last keystroke before the
    /// pipeline re-runs (default: 150)
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Render the starter code as soon as a problem opens (default: true)
    #[serde(default = "default_true")]
    pub run_on_load: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            run_on_load: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_debounce_ms() -> u64 {
    150
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the problem/submission document store
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Request timeout in seconds (default 30)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Live-preview options
    #[serde(default)]
    pub preview: PreviewConfig,
}

fn default_api_base() -> String {
    "https://api.katapad.dev".into()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            timeout_secs: default_timeout_secs(),
            preview: PreviewConfig::default(),
        }
    }
}

impl Config {
    /// Load with priority: ENV > user config > project config > defaults
    pub fn load() -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Project-level config (.katapad.toml in the working directory)
        if let Ok(cwd) = std::env::current_dir() {
            let project_config = cwd.join(".katapad.toml");
            if project_config.exists() {
                figment = figment.merge(Toml::file(&project_config));
            }
        }

        // User-level config
        if let Some(path) = Self::config_path() {
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
            }
        }

        // Environment variables (KATAPAD_API_BASE, etc.)
        // Use __ separator for nested keys (e.g. KATAPAD_PREVIEW__DEBOUNCE_MS)
        figment = figment.merge(Env::prefixed("KATAPAD_").split("__"));

        let config: Config = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "katapad").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.api_base)
            .map_err(|e| Error::Config(format!("api_base is not a valid URL: {e}")))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(Error::Config(format!(
                "api_base must start with http:// or https://, got '{}'",
                self.api_base
            )));
        }

        if url.host_str().is_none() {
            return Err(Error::Config(format!(
                "api_base has no host: '{}'",
                self.api_base
            )));
        }

        if !(1..=300).contains(&self.timeout_secs) {
            return Err(Error::Config(format!(
                "timeout_secs must be 1–300, got {}",
                self.timeout_secs
            )));
        }

        if self.preview.debounce_ms > 5_000 {
            return Err(Error::Config(format!(
                "preview.debounce_ms must be at most 5000, got {}",
                self.preview.debounce_ms
            )));
        }

        Ok(())
    }
}
