use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Runtime configuration.
///
/// Loaded once at startup from a YAML file when `CLOTH_CONFIG` points at
/// one, otherwise from individual environment variables with defaults.
/// Port and serving-root validation happen before the server is started;
/// the core treats these values as already checked.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the acceptor binds, all interfaces by default.
    pub listen_addr: String,
    /// Directory beneath which every resource is resolved.
    pub root: PathBuf,
    /// Path of the append-only session log.
    pub log_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            root: PathBuf::from("www"),
            log_path: PathBuf::from("cloth.log"),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        if let Ok(path) = std::env::var("CLOTH_CONFIG") {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config file {path}"))?;
            return serde_yaml::from_str(&text).context("parsing config file");
        }

        let mut cfg = Self::default();
        if let Ok(addr) = std::env::var("CLOTH_LISTEN") {
            cfg.listen_addr = addr;
        }
        if let Ok(root) = std::env::var("CLOTH_ROOT") {
            cfg.root = PathBuf::from(root);
        }
        if let Ok(path) = std::env::var("CLOTH_LOG") {
            cfg.log_path = PathBuf::from(path);
        }
        Ok(cfg)
    }
}
