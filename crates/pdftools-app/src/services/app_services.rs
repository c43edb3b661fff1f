// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer — configuration persistence and file output for the
// Dioxus UI.
//
// All fields are cheaply cloneable (Arc-wrapped) so the struct can be passed
// into closures and async blocks without lifetime issues.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use pdftools_core::AppConfig;
use pdftools_core::error::Result;
use tracing::info;

use super::data_dir;

/// Shared application services accessible from all Dioxus components via
/// `use_context::<AppServices>()`.
#[derive(Clone)]
pub struct AppServices {
    config: Arc<Mutex<AppConfig>>,
    data_dir: PathBuf,
}

impl AppServices {
    /// Initialise all services. Call once at app startup.
    ///
    /// Creates the data directory and loads the persisted config (defaults
    /// when no config file exists yet).
    pub fn init() -> Result<Self> {
        let dir = data_dir::data_dir();
        info!(path = %dir.display(), "initialising app services");

        let config = load_config(&dir).unwrap_or_default();

        Ok(Self {
            config: Arc::new(Mutex::new(config)),
            data_dir: dir,
        })
    }

    /// In-memory services with default settings, used when the data
    /// directory is unusable.
    pub fn fallback() -> Self {
        Self {
            config: Arc::new(Mutex::new(AppConfig::default())),
            data_dir: std::env::temp_dir(),
        }
    }

    // -- Config Persistence --------------------------------------------------

    /// Get a clone of the current config.
    pub fn config(&self) -> AppConfig {
        self.config.lock().expect("config lock poisoned").clone()
    }

    /// Update and persist the config.
    #[allow(dead_code)]
    pub fn save_config(&self, config: &AppConfig) -> Result<()> {
        *self.config.lock().expect("config lock poisoned") = config.clone();
        persist_config(&self.data_dir, config)
    }

    // -- File output ---------------------------------------------------------

    /// Ask the user where to save a generated PDF and write it there.
    ///
    /// The dialog is pre-filled with `default_name`. Returns the chosen path,
    /// or `None` if the user cancelled (nothing is written).
    pub fn save_pdf(&self, bytes: &[u8], default_name: &str) -> Result<Option<PathBuf>> {
        let chosen = rfd::FileDialog::new()
            .set_file_name(default_name)
            .add_filter("PDF", &["pdf"])
            .save_file();

        match chosen {
            Some(path) => {
                std::fs::write(&path, bytes)?;
                info!(path = %path.display(), bytes = bytes.len(), "PDF saved");
                Ok(Some(path))
            }
            None => {
                info!("save dialog cancelled");
                Ok(None)
            }
        }
    }

    /// Path to the data directory.
    #[allow(dead_code)]
    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }
}

// -- Config file persistence -------------------------------------------------

const CONFIG_FILE: &str = "config.json";

fn load_config(data_dir: &Path) -> Option<AppConfig> {
    let path = data_dir.join(CONFIG_FILE);
    let data = std::fs::read_to_string(&path).ok()?;
    serde_json::from_str(&data).ok()
}

fn persist_config(data_dir: &Path, config: &AppConfig) -> Result<()> {
    let path = data_dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(&path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_persists_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.rewrite_delay_ms = 250;

        persist_config(dir.path(), &config).unwrap();
        let loaded = load_config(dir.path()).unwrap();
        assert_eq!(loaded.rewrite_delay_ms, 250);
    }

    #[test]
    fn missing_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(dir.path()).is_none());
    }
}
