//! Runtime configuration.
//!
//! Defaults match the public deployment; each field can be overridden from
//! the environment.
//!
//! # Example
//!
//! ```ignore
//! use luxxor::config::AppConfig;
//!
//! let config = AppConfig::from_env()?.with_mouse(false);
//! ```

use std::path::PathBuf;

use crate::error::{LuxxorError, LuxxorResult};

/// Relay that receives contact form posts.
pub const DEFAULT_FORM_ENDPOINT: &str = "https://api.web3forms.com/submit";

/// Public access key embedded in the marketing site's form.
pub const DEFAULT_FORM_ACCESS_KEY: &str = "d7147c83-f7f7-48fa-b609-471490843907";

/// Tracing filter used when `LUXXOR_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

pub const ENV_LOG: &str = "LUXXOR_LOG";
pub const ENV_FORM_ENDPOINT: &str = "LUXXOR_FORM_ENDPOINT";
pub const ENV_FORM_ACCESS_KEY: &str = "LUXXOR_FORM_ACCESS_KEY";
pub const ENV_NO_MOUSE: &str = "LUXXOR_NO_MOUSE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Contact form relay URL
    pub form_endpoint: String,
    /// `access_key` field sent with every contact submission
    pub form_access_key: String,
    /// Capture mouse clicks (disable to keep terminal text selection)
    pub enable_mouse: bool,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
    /// Log file; `None` disables logging
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            form_endpoint: DEFAULT_FORM_ENDPOINT.to_string(),
            form_access_key: DEFAULT_FORM_ACCESS_KEY.to_string(),
            enable_mouse: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: default_log_file(),
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults with environment overrides applied.
    pub fn from_env() -> LuxxorResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> LuxxorResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(filter) = lookup(ENV_LOG).filter(|v| !v.trim().is_empty()) {
            config.log_filter = filter;
        }
        if let Some(endpoint) = lookup(ENV_FORM_ENDPOINT) {
            if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                return Err(LuxxorError::Config {
                    key: ENV_FORM_ENDPOINT.to_string(),
                    message: format!("expected an http(s) URL, got '{}'", endpoint),
                });
            }
            config.form_endpoint = endpoint;
        }
        if let Some(key) = lookup(ENV_FORM_ACCESS_KEY).filter(|v| !v.is_empty()) {
            config.form_access_key = key;
        }
        if let Some(raw) = lookup(ENV_NO_MOUSE) {
            config.enable_mouse = !parse_flag(ENV_NO_MOUSE, &raw)?;
        }

        Ok(config)
    }

    pub fn with_form_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.form_endpoint = endpoint.into();
        self
    }

    pub fn with_mouse(mut self, enable: bool) -> Self {
        self.enable_mouse = enable;
        self
    }

    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }
}

fn parse_flag(key: &str, raw: &str) -> LuxxorResult<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(LuxxorError::Config {
            key: key.to_string(),
            message: format!("expected a boolean, got '{}'", other),
        }),
    }
}

/// `<data dir>/luxxor/luxxor.log`
fn default_log_file() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("luxxor").join("luxxor.log"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.form_endpoint, DEFAULT_FORM_ENDPOINT);
        assert_eq!(config.form_access_key, DEFAULT_FORM_ACCESS_KEY);
        assert!(config.enable_mouse);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_LOG, "luxxor=debug"),
            (ENV_FORM_ENDPOINT, "http://127.0.0.1:9000/submit"),
            (ENV_FORM_ACCESS_KEY, "test-key"),
            (ENV_NO_MOUSE, "yes"),
        ]))
        .unwrap();

        assert_eq!(config.log_filter, "luxxor=debug");
        assert_eq!(config.form_endpoint, "http://127.0.0.1:9000/submit");
        assert_eq!(config.form_access_key, "test-key");
        assert!(!config.enable_mouse);
    }

    #[test]
    fn test_bad_endpoint_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[(ENV_FORM_ENDPOINT, "ftp://x")]))
            .unwrap_err();
        assert!(matches!(err, LuxxorError::Config { ref key, .. } if key == ENV_FORM_ENDPOINT));
    }

    #[test]
    fn test_bad_flag_rejected() {
        assert!(AppConfig::from_lookup(lookup_from(&[(ENV_NO_MOUSE, "maybe")])).is_err());
        let config = AppConfig::from_lookup(lookup_from(&[(ENV_NO_MOUSE, "0")])).unwrap();
        assert!(config.enable_mouse);
    }

    #[test]
    fn test_builder_setters() {
        let config = AppConfig::new()
            .with_form_endpoint("http://localhost/submit")
            .with_mouse(false)
            .with_log_file(None);
        assert_eq!(config.form_endpoint, "http://localhost/submit");
        assert!(!config.enable_mouse);
        assert!(config.log_file.is_none());
    }
}
