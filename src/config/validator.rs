//! Checks applied to raw env values before they become config.

use crate::error::ConfigError;

/// Accepts absolute http(s) URLs and strips any trailing slash.
pub fn normalize_api_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let url = reqwest::Url::parse(trimmed).map_err(|_| ConfigError::InvalidUrl(raw.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(raw.to_string()));
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

pub fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: "PORTAL_PORT",
        message: format!("'{}' is not a port number", raw),
    })
}

pub fn parse_body_limit(raw: &str) -> Result<usize, ConfigError> {
    let n: usize = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: "PORTAL_BODY_LIMIT",
        message: format!("'{}' is not a byte count", raw),
    })?;
    if n == 0 {
        return Err(ConfigError::InvalidValue {
            key: "PORTAL_BODY_LIMIT",
            message: "must be greater than zero".into(),
        });
    }
    Ok(n)
}
