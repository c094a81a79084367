use serde::{Deserialize, Serialize};

fn default_title() -> String {
    "Custom Input Component Examples".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

/// Settings for the showcase page.
///
/// Loaded from `showcase.toml` at startup. Every field has a default so
/// that a missing or incomplete file still yields a usable page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShowcaseConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Render every demo field right-to-left.
    #[serde(default)]
    pub force_rtl: bool,
    /// Log each change event emitted by a demo field.
    #[serde(default = "default_true")]
    pub log_changes: bool,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            log_level: default_log_level(),
            force_rtl: false,
            log_changes: true,
        }
    }
}

impl ShowcaseConfig {
    /// Normalized log level; unknown values fall back to `info`.
    pub fn level(&self) -> &'static str {
        match self.log_level.trim().to_ascii_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "warn" | "warning" => "warn",
            "error" => "error",
            _ => "info",
        }
    }
}
