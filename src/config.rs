//! Application Configuration
//!
//! Settings baked in at build time through environment variables, with
//! defaults for local development.

use log::LevelFilter;

const DEFAULT_API_URL: &str = "http://localhost:5000/api";
const DEFAULT_REDIRECT_DELAY_MS: u32 = 1500;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Base URL of the HelpBridge HTTP API, without trailing slash
    pub api_base_url: String,
    pub log_level: LevelFilter,
    /// Pause between a successful registration and the redirect
    pub redirect_delay_ms: u32,
    /// Settings that fell back to their default
    pub defaulted: Vec<&'static str>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_sources(None, None, None)
    }
}

impl AppConfig {
    pub fn load() -> Self {
        Self::from_sources(
            option_env!("HELPBRIDGE_API_URL"),
            option_env!("HELPBRIDGE_LOG_LEVEL"),
            option_env!("HELPBRIDGE_REDIRECT_DELAY_MS"),
        )
    }

    pub fn from_sources(api_url: Option<&str>, log_level: Option<&str>, redirect_delay: Option<&str>) -> Self {
        let mut defaulted = Vec::new();

        let api_base_url = match api_url.map(str::trim).filter(|s| !s.is_empty()) {
            Some(url) => url.trim_end_matches('/').to_string(),
            None => {
                defaulted.push("HELPBRIDGE_API_URL");
                DEFAULT_API_URL.to_string()
            }
        };

        let log_level = match log_level.and_then(|s| s.trim().parse().ok()) {
            Some(level) => level,
            None => {
                defaulted.push("HELPBRIDGE_LOG_LEVEL");
                LevelFilter::Info
            }
        };

        let redirect_delay_ms = match redirect_delay.and_then(|s| s.trim().parse().ok()) {
            Some(ms) => ms,
            None => {
                defaulted.push("HELPBRIDGE_REDIRECT_DELAY_MS");
                DEFAULT_REDIRECT_DELAY_MS
            }
        };

        Self {
            api_base_url,
            log_level,
            redirect_delay_ms,
            defaulted,
        }
    }

    /// Full URL for an API path such as `auth/login`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }

    /// Report the effective configuration once logging is up
    pub fn log_summary(&self) {
        log::info!("[Config] api={} level={}", self.api_base_url, self.log_level);
        for key in &self.defaulted {
            log::info!("[Config] {} not set, using default", key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.redirect_delay_ms, DEFAULT_REDIRECT_DELAY_MS);
        assert_eq!(config.defaulted.len(), 3);
    }

    #[test]
    fn test_explicit_values() {
        let config = AppConfig::from_sources(Some("https://api.helpbridge.org/v1/"), Some("debug"), Some("0"));
        assert_eq!(config.api_base_url, "https://api.helpbridge.org/v1");
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.redirect_delay_ms, 0);
        assert!(config.defaulted.is_empty());
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = AppConfig::from_sources(Some("  "), Some("chatty"), Some("soon"));
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.defaulted.len(), 3);
    }

    #[test]
    fn test_endpoint_joins_once() {
        let config = AppConfig::from_sources(Some("http://x/api"), None, None);
        assert_eq!(config.endpoint("auth/login"), "http://x/api/auth/login");
        assert_eq!(config.endpoint("/needs/3"), "http://x/api/needs/3");
    }
}
