/*
 * Responsibility
 * - APP_ENV の解釈 (development / production)
 * - 環境変数の読み込みヘルパー (不正値なら起動失敗)
 */
use std::net::SocketAddr;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    pub fn from_env() -> Self {
        Self::parse(std::env::var("APP_ENV").ok().as_deref())
    }

    pub fn parse(raw: Option<&str>) -> Self {
        match raw.unwrap_or("development").to_ascii_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

/// Reads `key` and parses it, falling back to `default` when unset.
///
/// A value that is set but does not parse is an error rather than a silent
/// fallback, so a typo in a deployment manifest fails startup.
pub fn parse_or<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    parse_value(key, std::env::var(key).ok().as_deref(), default)
}

/// Reads `key` as a non-empty string, falling back to `default` when unset.
pub fn string_or(key: &'static str, default: &str) -> Result<String, ConfigError> {
    non_empty_value(key, std::env::var(key).ok().as_deref(), default)
}

pub fn parse_value<T: FromStr>(
    key: &'static str,
    raw: Option<&str>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid(key)),
    }
}

pub fn non_empty_value(
    key: &'static str,
    raw: Option<&str>,
    default: &str,
) -> Result<String, ConfigError> {
    match raw.map(str::trim) {
        None => Ok(default.to_string()),
        Some("") => Err(ConfigError::Invalid(key)),
        Some(v) => Ok(v.to_string()),
    }
}

/// Binds on all interfaces, the way the services run inside containers.
pub fn listen_addr(port: u16) -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], port))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_env_accepts_short_and_long_production_names() {
        assert_eq!(AppEnv::parse(Some("production")), AppEnv::Production);
        assert_eq!(AppEnv::parse(Some("PROD")), AppEnv::Production);
        assert_eq!(AppEnv::parse(Some("staging")), AppEnv::Development);
        assert_eq!(AppEnv::parse(None), AppEnv::Development);
    }

    #[test]
    fn parse_value_rejects_garbage_instead_of_defaulting() {
        assert_eq!(parse_value::<u16>("PORT", None, 8080), Ok(8080));
        assert_eq!(parse_value::<u16>("PORT", Some(" 9000 "), 8080), Ok(9000));
        assert_eq!(
            parse_value::<u16>("PORT", Some("eighty"), 8080),
            Err(ConfigError::Invalid("PORT"))
        );
    }

    #[test]
    fn non_empty_value_rejects_blank_override() {
        assert_eq!(
            non_empty_value("SERVICE_NAME", None, "svc").as_deref(),
            Ok("svc")
        );
        assert_eq!(
            non_empty_value("SERVICE_NAME", Some("  "), "svc"),
            Err(ConfigError::Invalid("SERVICE_NAME"))
        );
    }
}
