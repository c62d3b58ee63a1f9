// Copyright (c) 2025 Moneylens.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::currency::BASE_CURRENCY;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("io.moneylens", "Moneylens", "moneylens"));

/// User preferences persisted across sessions, the only durable client-side
/// state. Everything else is owned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prefs {
    pub display_currency: String,
    pub language: String,
    pub api_base: String,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            display_currency: BASE_CURRENCY.to_string(),
            language: "en".to_string(),
            api_base: "http://localhost:8000/api".to_string(),
        }
    }
}

pub fn prefs_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    let config_dir = proj.config_dir();
    fs::create_dir_all(config_dir).context("Failed to create config dir")?;
    Ok(config_dir.join("prefs.json"))
}

impl Prefs {
    pub fn load() -> Result<Self> {
        Self::load_from(&prefs_path()?)
    }

    /// Missing file means first run: start from defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Read prefs at {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("Parse prefs at {}", path.display()))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&prefs_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).context("Failed to create config dir")?;
        }
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw).with_context(|| format!("Write prefs at {}", path.display()))
    }
}
