//! Configuration loading from the process environment.

use std::env;

use thiserror::Error;
use url::Url;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable naming the cron aggregation API.
pub const CRON_API_VAR: &str = "CRON_API";

/// Environment variable overriding the producer-list source URL.
pub const CUSTOM_CHAIN_VAR: &str = "CUSTOMCHAIN";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment override did not parse as a URL.
    #[error("invalid URL in {var}: {source}")]
    InvalidUrl {
        var: &'static str,
        source: url::ParseError,
    },

    /// Semantic validation rejected the assembled configuration.
    #[error("validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load the configuration from compiled defaults and environment overrides.
///
/// Reads the environment exactly once, before any routing exists. Every
/// failure here is startup-fatal; the process must not begin serving with a
/// partial configuration.
pub fn load() -> Result<AppConfig, ConfigError> {
    let cron_api = env::var(CRON_API_VAR).ok();
    let custom_chain = env::var(CUSTOM_CHAIN_VAR).ok();
    from_overrides(cron_api.as_deref(), custom_chain.as_deref())
}

/// Assemble a configuration from compiled defaults plus the given overrides.
///
/// Deterministic core of [`load`], separated so tests can exercise override
/// handling without touching the process environment.
pub(crate) fn from_overrides(
    cron_api: Option<&str>,
    custom_chain: Option<&str>,
) -> Result<AppConfig, ConfigError> {
    let mut config = AppConfig::default();

    if let Some(raw) = cron_api {
        let url = parse_override(CRON_API_VAR, raw)?;
        config.cron.api_url = Some(url);
    }

    // The override retargets the producer list only; the chain client stays
    // bound to the first reserved endpoint.
    if let Some(raw) = custom_chain {
        config.producer_list_url = parse_override(CUSTOM_CHAIN_VAR, raw)?;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

fn parse_override(var: &'static str, raw: &str) -> Result<Url, ConfigError> {
    raw.parse()
        .map_err(|source| ConfigError::InvalidUrl { var, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RESERVED_ENDPOINT;

    #[test]
    fn test_defaults_without_overrides() {
        let config = from_overrides(None, None).unwrap();

        let reserved: Url = RESERVED_ENDPOINT.parse().unwrap();
        assert_eq!(config.endpoints, vec![reserved.clone()]);
        assert_eq!(config.chain_client.http_endpoint, reserved);
        assert_eq!(config.producer_list_url, reserved);
        assert!(config.cron.api_url.is_none());
    }

    #[test]
    fn test_cron_api_override() {
        let config = from_overrides(Some("http://cron.internal:9000"), None).unwrap();
        assert_eq!(
            config.cron.api_url,
            Some("http://cron.internal:9000".parse().unwrap())
        );
    }

    #[test]
    fn test_chain_override_leaves_primary_binding() {
        let config = from_overrides(None, Some("http://10.1.1.1:8888")).unwrap();

        assert_eq!(
            config.producer_list_url,
            "http://10.1.1.1:8888".parse().unwrap()
        );
        // The client options still reference the first reserved endpoint.
        assert_eq!(config.chain_client.http_endpoint, config.endpoints[0]);
        assert_eq!(
            config.endpoints[0],
            RESERVED_ENDPOINT.parse::<Url>().unwrap()
        );
    }

    #[test]
    fn test_invalid_override_rejected() {
        let err = from_overrides(Some("not a url"), None).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidUrl { var: CRON_API_VAR, .. }
        ));
    }

    #[test]
    fn test_load_reads_environment() {
        // The only test touching these variables; the rest go through
        // from_overrides to stay independent of process state.
        env::set_var(CRON_API_VAR, "http://cron.example:1234");
        env::set_var(CUSTOM_CHAIN_VAR, "http://chain.example:5678");

        let config = load().unwrap();

        env::remove_var(CRON_API_VAR);
        env::remove_var(CUSTOM_CHAIN_VAR);

        assert_eq!(
            config.cron.api_url,
            Some("http://cron.example:1234".parse().unwrap())
        );
        assert_eq!(
            config.producer_list_url,
            "http://chain.example:5678".parse().unwrap()
        );
        assert_eq!(config.chain_client.http_endpoint, config.endpoints[0]);
    }
}
