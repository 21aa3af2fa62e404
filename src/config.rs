// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::layout::{LayoutOptions, Style};
use crate::model::token::Feature;

pub const REVERSE_MODE_ENV: &str = "ARBOR_REVERSE_MODE";
pub const PROGRESSIVE_LOADING_ENV: &str = "ARBOR_PROGRESSIVE_LOADING";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid value for {name}: {value:?}")]
    InvalidEnv { name: &'static str, value: String },
}

/// Options shared by parsing, layout and the orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Right-to-left scripts: token order and sentence reconstruction are reversed.
    pub reverse_mode: bool,
    /// Emit each block as soon as it is laid out instead of all at once.
    pub progressive_loading: bool,
    pub shown_features: Vec<Feature>,
    pub style: Style,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reverse_mode: false,
            progressive_loading: true,
            shown_features: Feature::DEFAULT_SHOWN.to_vec(),
            style: Style::default(),
        }
    }
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        let config = Self::from_json_str(&json)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Applies `ARBOR_REVERSE_MODE` and `ARBOR_PROGRESSIVE_LOADING` when set.
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides_from(|name| env::var(name))
    }

    fn with_overrides_from<F>(mut self, var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Result<String, env::VarError>,
    {
        if let Some(value) = flag_from(&var, REVERSE_MODE_ENV)? {
            self.reverse_mode = value;
        }
        if let Some(value) = flag_from(&var, PROGRESSIVE_LOADING_ENV)? {
            self.progressive_loading = value;
        }
        Ok(self)
    }

    pub fn toggle_reverse(&mut self) {
        self.reverse_mode = !self.reverse_mode;
    }

    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions::new(self.reverse_mode, self.shown_features.clone())
    }
}

fn flag_from<F>(var: &F, name: &'static str) -> Result<Option<bool>, ConfigError>
where
    F: Fn(&str) -> Result<String, env::VarError>,
{
    let value = match var(name) {
        Ok(value) => value,
        Err(env::VarError::NotPresent) => return Ok(None),
        Err(env::VarError::NotUnicode(_)) => {
            return Err(ConfigError::InvalidEnv { name, value: "<non-unicode>".to_owned() });
        }
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "" => Ok(None),
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(ConfigError::InvalidEnv { name, value }),
    }
}
