//! Application configuration: backend base URL and scan settle window.
//!
//! Values come from `.unsub_config.ron` in the working directory when it
//! exists; the `UNSUB_API_URL` environment variable overrides the file.

use std::fs;
use std::path::Path;
use std::time::Duration;

use app_logging::app_warn;
use serde::{Deserialize, Serialize};

const CONFIG_FILENAME: &str = ".unsub_config.ron";
const DEFAULT_BASE_URL: &str = "http://localhost:8001";
const DEFAULT_SCAN_SETTLE_MS: u64 = 3000;

const API_URL_ENV: &str = "UNSUB_API_URL";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
struct ConfigFile {
    api_base_url: String,
    scan_settle_ms: u64,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            scan_settle_ms: DEFAULT_SCAN_SETTLE_MS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub scan_settle: Duration,
}

impl AppConfig {
    pub fn load(dir: &Path) -> Self {
        Self::resolve(load_file(dir), std::env::var(API_URL_ENV).ok())
    }

    fn resolve(file: Option<ConfigFile>, env_url: Option<String>) -> Self {
        let file = file.unwrap_or_default();
        Self {
            api_base_url: env_url.unwrap_or(file.api_base_url),
            scan_settle: Duration::from_millis(file.scan_settle_ms),
        }
    }
}

fn load_file(dir: &Path) -> Option<ConfigFile> {
    let path = dir.join(CONFIG_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return None;
        }
        Err(err) => {
            app_warn!("Failed to read config from {:?}: {}", path, err);
            return None;
        }
    };

    match ron::from_str(&content) {
        Ok(config) => Some(config),
        Err(err) => {
            app_warn!("Failed to parse config from {:?}: {}", path, err);
            None
        }
    }
}
