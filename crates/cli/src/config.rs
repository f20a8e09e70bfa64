//! Start-up configuration read from the environment.

use sweetshop_observability::{LogConfig, LogFormat};

pub const LOG_FORMAT_VAR: &str = "SWEETSHOP_LOG_FORMAT";
pub const LOG_FILTER_VAR: &str = "SWEETSHOP_LOG";
pub const SEED_DEMO_VAR: &str = "SWEETSHOP_SEED_DEMO";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub log: LogConfig,
    /// Pre-load the demo catalog before the first prompt.
    pub seed_demo: bool,
    /// Problems found while reading the environment. Logged once tracing is
    /// initialized, since it is configured from this struct.
    pub warnings: Vec<String>,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            log: LogConfig {
                format: LogFormat::Pretty,
                // Quiet by default so logs do not bury the menu.
                default_filter: "warn".to_string(),
            },
            seed_demo: false,
            warnings: Vec::new(),
        }
    }
}

impl ShellConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup. Unset or unparseable values
    /// fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            match raw.parse::<LogFormat>() {
                Ok(format) => config.log.format = format,
                Err(e) => config
                    .warnings
                    .push(format!("{LOG_FORMAT_VAR}: {e}; using default")),
            }
        }
        if let Some(filter) = lookup(LOG_FILTER_VAR).filter(|f| !f.trim().is_empty()) {
            config.log.default_filter = filter;
        }
        if let Some(raw) = lookup(SEED_DEMO_VAR) {
            config.seed_demo = matches!(raw.trim().to_lowercase().as_str(), "1" | "true" | "yes");
        }

        config
    }
}
