use std::{env, time::Duration};

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file (default: "sysparam.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[cfg_attr(not(feature = "sqlite"), allow(dead_code))]
    pub sqlite_path: String,
    /// Maker recorded when a submit carries no `x-user-id` (default: "USER001")
    pub default_maker: String,
    /// Checker recorded when a transition carries no `x-user-id` (default: "CHECKER001")
    pub default_checker: String,
    /// Token returned by a successful verification (default: "mock-jwt-token")
    pub mock_token: String,
    /// Load the demo records at startup (default: false)
    pub seed_demo_data: bool,
    pub log_format: LogFormat,
    /// Request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQLITE_PATH` - SQLite database path (default: "sysparam.db")
    /// - `DEFAULT_MAKER` - fallback maker identity (default: "USER001")
    /// - `DEFAULT_CHECKER` - fallback checker identity (default: "CHECKER001")
    /// - `MOCK_TOKEN` - token issued by `/api/auth/verify` (default: "mock-jwt-token")
    /// - `SEED_DEMO_DATA` - load demo records (default: false)
    /// - `LOG_FORMAT` - `pretty` or `json` (default: "pretty")
    /// - `REQUEST_TIMEOUT_SECONDS` - request timeout (default: 10)
    pub fn from_env() -> Self {
        Self {
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "sysparam.db".to_string()),
            default_maker: env::var("DEFAULT_MAKER").unwrap_or_else(|_| "USER001".to_string()),
            default_checker: env::var("DEFAULT_CHECKER")
                .unwrap_or_else(|_| "CHECKER001".to_string()),
            mock_token: env::var("MOCK_TOKEN").unwrap_or_else(|_| "mock-jwt-token".to_string()),
            seed_demo_data: env::var("SEED_DEMO_DATA")
                .ok()
                .and_then(|v| parse_bool(&v))
                .unwrap_or(false),
            log_format: env::var("LOG_FORMAT")
                .map(|v| LogFormat::parse(&v))
                .unwrap_or_default(),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Get request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_timeout_conversion() {
        let config = Config {
            request_timeout_seconds: 30,
            ..Config::from_env()
        };

        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_default_values() {
        // Clear environment variables to test defaults
        env::remove_var("SQLITE_PATH");
        env::remove_var("DEFAULT_MAKER");
        env::remove_var("DEFAULT_CHECKER");
        env::remove_var("MOCK_TOKEN");
        env::remove_var("SEED_DEMO_DATA");
        env::remove_var("LOG_FORMAT");
        env::remove_var("REQUEST_TIMEOUT_SECONDS");

        let config = Config::from_env();

        assert_eq!(config.sqlite_path, "sysparam.db");
        assert_eq!(config.default_maker, "USER001");
        assert_eq!(config.default_checker, "CHECKER001");
        assert_eq!(config.mock_token, "mock-jwt-token");
        assert!(!config.seed_demo_data);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(config.request_timeout_seconds, 10);
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" 1 "), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("anything"), LogFormat::Pretty);
    }
}
