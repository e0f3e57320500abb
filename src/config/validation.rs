//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (URL parsing is handled by the loader)
//! - Check the primary-endpoint binding of the chain client
//! - Validate value ranges
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig -> Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::AppConfig;

/// A single semantic defect in a configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The reserved node list is empty.
    #[error("endpoint list is empty; at least one reserved node is required")]
    NoEndpoints,

    /// The chain client is not bound to the first reserved node.
    #[error("chain client endpoint {actual} is not the primary endpoint {expected}")]
    PrimaryEndpointMismatch { expected: String, actual: String },

    /// A zero amount scale would collapse every token amount.
    #[error("amount scale must be non-zero")]
    ZeroAmountScale,

    /// Nothing to bind the listener to.
    #[error("listener bind address is empty")]
    EmptyBindAddress,
}

/// Check the semantic invariants of a configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match config.endpoints.first() {
        None => errors.push(ValidationError::NoEndpoints),
        Some(primary) => {
            if config.chain_client.http_endpoint != *primary {
                errors.push(ValidationError::PrimaryEndpointMismatch {
                    expected: primary.to_string(),
                    actual: config.chain_client.http_endpoint.to_string(),
                });
            }
        }
    }

    if config.amount_scale == 0 {
        errors.push(ValidationError::ZeroAmountScale);
    }

    if config.listener.bind_address.is_empty() {
        errors.push(ValidationError::EmptyBindAddress);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_endpoints_rejected() {
        let mut config = AppConfig::default();
        config.endpoints.clear();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors, vec![ValidationError::NoEndpoints]);
    }

    #[test]
    fn test_rebound_chain_client_rejected() {
        let mut config = AppConfig::default();
        config.chain_client.http_endpoint = "http://10.0.0.1:8888".parse().unwrap();

        let errors = validate_config(&config).unwrap_err();
        assert!(matches!(
            errors[0],
            ValidationError::PrimaryEndpointMismatch { .. }
        ));
    }

    #[test]
    fn test_all_errors_reported() {
        let mut config = AppConfig::default();
        config.endpoints.clear();
        config.amount_scale = 0;
        config.listener.bind_address.clear();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
