use std::str::FromStr;

/// Fallback used when `VITE_API_URL` is unset or empty at build time
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Build-time variable holding the API base URL
pub const API_URL_ENV: &str = "VITE_API_URL";

const DEFAULT_ENVIRONMENT: &str = "development";

/// Resolves the API base URL from an optional environment value.
///
/// Any non-empty value is returned untouched (no scheme/host/port checks,
/// no trimming). `None` and `Some("")` both fall back to [`DEFAULT_API_URL`].
pub fn resolve_api_url(env_value: Option<&str>) -> String {
    match env_value {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => DEFAULT_API_URL.to_string(),
    }
}

/// Client configuration, built once at startup and handed to the root
/// component. Every component reaches it through the config context.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_url: String,
    pub log_level: log::Level,
    pub environment: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            log_level: log::Level::Info,
            environment: DEFAULT_ENVIRONMENT.to_string(),
        }
    }
}

impl AppConfig {
    /// Loads the configuration from variables captured at compile time
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("VITE_API_URL"),
            option_env!("LOG_LEVEL"),
            option_env!("APP_ENV"),
        )
    }

    pub fn from_values(
        api_url: Option<&str>,
        log_level: Option<&str>,
        environment: Option<&str>,
    ) -> Self {
        Self {
            api_url: resolve_api_url(api_url),
            log_level: log_level
                .and_then(|level| log::Level::from_str(level).ok())
                .unwrap_or(log::Level::Info),
            environment: environment
                .filter(|env| !env.is_empty())
                .unwrap_or(DEFAULT_ENVIRONMENT)
                .to_string(),
        }
    }
}

/// Joins the base URL and an API path with exactly one `/` between them
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_value_is_used_verbatim() {
        for value in ["https://api.example.com", "http://10.0.0.4:8080", "not a url", " "] {
            assert_eq!(resolve_api_url(Some(value)), value);
        }
    }

    #[test]
    fn unset_value_falls_back_to_localhost() {
        assert_eq!(resolve_api_url(None), "http://localhost:5000");
    }

    #[test]
    fn empty_value_falls_back_to_localhost() {
        assert_eq!(resolve_api_url(Some("")), "http://localhost:5000");
    }

    #[test]
    fn from_values_applies_defaults() {
        let config = AppConfig::from_values(None, None, None);
        assert_eq!(config, AppConfig::default());

        let config = AppConfig::from_values(Some("https://api.example.com"), Some("debug"), Some("production"));
        assert_eq!(config.api_url, "https://api.example.com");
        assert_eq!(config.log_level, log::Level::Debug);
        assert_eq!(config.environment, "production");
    }

    #[test]
    fn unparseable_log_level_defaults_to_info() {
        let config = AppConfig::from_values(None, Some("loud"), Some(""));
        assert_eq!(config.log_level, log::Level::Info);
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn join_url_uses_single_slash() {
        assert_eq!(join_url("https://api.example.com/", "/api/health"), "https://api.example.com/api/health");
        assert_eq!(join_url("https://api.example.com", "api/plans"), "https://api.example.com/api/plans");
        assert_eq!(join_url(DEFAULT_API_URL, "/api/login"), "http://localhost:5000/api/login");
    }
}
