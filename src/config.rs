use std::time::Duration;

use crate::api::INSTAGRAM_BASE_URL;
use crate::error::{InstagramError, Result};

/// Handle used when the caller does not name one.
pub const DEFAULT_HANDLE: &str = "labnol";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const BASE_URL_VAR: &str = "INSTAGRAM_BASE_URL";
pub const DEFAULT_HANDLE_VAR: &str = "INSTAGRAM_DEFAULT_HANDLE";
pub const TIMEOUT_SECS_VAR: &str = "INSTAGRAM_TIMEOUT_SECS";
pub const MUTE_HTTP_EXCEPTIONS_VAR: &str = "INSTAGRAM_MUTE_HTTP_EXCEPTIONS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetcherConfig {
    pub base_url: String,
    pub default_handle: String,
    pub timeout: Duration,
    pub mute_http_exceptions: bool,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: INSTAGRAM_BASE_URL.to_string(),
            default_handle: DEFAULT_HANDLE.to_string(),
            timeout: DEFAULT_TIMEOUT,
            mute_http_exceptions: true,
        }
    }
}

impl FetcherConfig {
    /// Reads the `INSTAGRAM_*` environment variables. Unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(base_url) = read(BASE_URL_VAR) {
            config.base_url = base_url;
        }

        if let Some(handle) = read(DEFAULT_HANDLE_VAR) {
            config.default_handle = handle;
        }

        if let Some(secs) = read(TIMEOUT_SECS_VAR) {
            let secs = secs.parse::<u64>().map_err(|err| {
                InstagramError::Config(format!("{TIMEOUT_SECS_VAR}={secs}: {err}"))
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(flag) = read(MUTE_HTTP_EXCEPTIONS_VAR) {
            config.mute_http_exceptions = parse_flag(MUTE_HTTP_EXCEPTIONS_VAR, &flag)?;
        }

        Ok(config)
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(InstagramError::Config(format!(
            "{key}={value}: expected true or false"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = FetcherConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, FetcherConfig::default());
        assert_eq!(config.default_handle, "labnol");
        assert_eq!(config.base_url, "https://www.instagram.com");
        assert!(config.mute_http_exceptions);
    }

    #[test]
    fn test_overrides_from_lookup() {
        let config = FetcherConfig::from_lookup(lookup_from(&[
            (BASE_URL_VAR, "http://localhost:9000"),
            (DEFAULT_HANDLE_VAR, " nasa "),
            (TIMEOUT_SECS_VAR, "5"),
            (MUTE_HTTP_EXCEPTIONS_VAR, "FALSE"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.default_handle, "nasa");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(!config.mute_http_exceptions);
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config =
            FetcherConfig::from_lookup(lookup_from(&[(DEFAULT_HANDLE_VAR, "   ")])).unwrap();
        assert_eq!(config.default_handle, DEFAULT_HANDLE);
    }

    #[test]
    fn test_invalid_timeout_is_config_error() {
        let result = FetcherConfig::from_lookup(lookup_from(&[(TIMEOUT_SECS_VAR, "soon")]));
        assert!(matches!(result, Err(InstagramError::Config(_))));
    }

    #[test]
    fn test_invalid_flag_is_config_error() {
        let result =
            FetcherConfig::from_lookup(lookup_from(&[(MUTE_HTTP_EXCEPTIONS_VAR, "maybe")]));
        assert!(matches!(result, Err(InstagramError::Config(_))));
    }
}
