//! Server settings.
//!
//! Defaults are overridden first by an optional `coupons.toml` in the working
//! directory and then by `COUPONS_*` environment variables.

use log::warn;
use serde::Deserialize;
use std::fs;

const CONFIG_FILE: &str = "coupons.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Open the default browser on the app URL once the server is up.
    pub open_browser: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
            open_browser: true,
        }
    }
}

impl Settings {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

/// Partial settings as they may appear in `coupons.toml`.
#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    host: Option<String>,
    port: Option<u16>,
    open_browser: Option<bool>,
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(CONFIG_FILE) {
        match toml::from_str::<FileSettings>(&raw) {
            Ok(file_cfg) => apply_file(&mut settings, file_cfg),
            Err(e) => warn!("ignoring {}: {}", CONFIG_FILE, e),
        }
    }

    apply_env(&mut settings, |key| std::env::var(key).ok());
    settings
}

fn apply_file(settings: &mut Settings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.host {
        settings.host = v;
    }
    if let Some(v) = file_cfg.port {
        settings.port = v;
    }
    if let Some(v) = file_cfg.open_browser {
        settings.open_browser = v;
    }
}

fn apply_env(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    if let Some(v) = var("COUPONS_HOST") {
        settings.host = v;
    }
    if let Some(v) = var("COUPONS_PORT") {
        match v.parse() {
            Ok(port) => settings.port = port,
            Err(_) => warn!("COUPONS_PORT={} is not a port number, keeping {}", v, settings.port),
        }
    }
    if let Some(v) = var("COUPONS_OPEN_BROWSER") {
        settings.open_browser = matches!(v.as_str(), "1" | "true" | "yes");
    }
}
