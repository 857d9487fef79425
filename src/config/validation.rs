//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde and clap handle syntactic)
//! - Validate value ranges (timeout > 0, host is an IP literal)
//! - Detect route collisions between the relay and the fixed routes
//! - Keep asset names inside the asset root
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs before the listener is bound

use std::net::IpAddr;
use std::path::{Component, Path};
use thiserror::Error;

use crate::config::schema::ServerConfig;
use crate::http::HEALTH_ROUTE;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.host `{0}` is not an IP address")]
    InvalidHost(String),

    #[error("relay.timeout_secs must be greater than zero")]
    ZeroTimeout,

    #[error("relay.route `{0}` must start with `/`")]
    RelativeRoute(String),

    #[error("relay.route `{0}` collides with a built-in route")]
    RouteCollision(String),

    #[error("asset name `{0}` must be a non-empty path inside the asset root")]
    InvalidAssetName(String),
}

/// Check a configuration, collecting every problem found.
pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.host.parse::<IpAddr>().is_err() {
        errors.push(ValidationError::InvalidHost(config.listener.host.clone()));
    }

    if config.relay.timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    let route = &config.relay.route;
    if !route.starts_with('/') {
        errors.push(ValidationError::RelativeRoute(route.clone()));
    } else if route == "/" || route == HEALTH_ROUTE {
        errors.push(ValidationError::RouteCollision(route.clone()));
    }

    let names = std::iter::once(&config.assets.entry_document)
        .chain(config.assets.required_files.iter());
    for name in names {
        if !is_contained(name) {
            errors.push(ValidationError::InvalidAssetName(name.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_contained(name: &str) -> bool {
    !name.is_empty()
        && Path::new(name)
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
