//! TCP listener setup.
//!
//! # Responsibilities
//! - Bind the configured host, letting the OS pick the port when it is `0`
//! - Keep that socket for serving instead of releasing and re-binding it
//! - Render the operator-facing URL for the bound port

use std::net::{IpAddr, SocketAddr};
use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ListenerConfig;

/// Error type for listener operations.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// The configured host is not an IP literal.
    #[error("invalid listener host `{0}`")]
    InvalidHost(String),

    /// Failed to bind to address.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// Bind the listener the server will accept on.
pub async fn bind_listener(config: &ListenerConfig) -> Result<TcpListener, ListenerError> {
    let ip: IpAddr = config
        .host
        .parse()
        .map_err(|_| ListenerError::InvalidHost(config.host.clone()))?;
    let addr = SocketAddr::new(ip, config.port);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ListenerError::Bind { addr, source })?;
    let local_addr = listener
        .local_addr()
        .map_err(|source| ListenerError::Bind { addr, source })?;

    tracing::info!(
        address = %local_addr,
        ephemeral = config.port == 0,
        "Listener bound"
    );
    Ok(listener)
}

/// URL the frontend is reachable at.
pub fn local_url(addr: SocketAddr) -> String {
    format!("http://localhost:{}", addr.port())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ephemeral_port_is_assigned() {
        let listener = bind_listener(&ListenerConfig::default()).await.unwrap();
        let addr = listener.local_addr().unwrap();
        assert_ne!(addr.port(), 0);
        assert!(addr.ip().is_loopback());
    }

    #[tokio::test]
    async fn test_port_in_use_is_bind_error() {
        let first = bind_listener(&ListenerConfig::default()).await.unwrap();
        let taken = first.local_addr().unwrap().port();

        let config = ListenerConfig {
            host: "127.0.0.1".into(),
            port: taken,
            ..ListenerConfig::default()
        };
        let err = bind_listener(&config).await.unwrap_err();
        assert!(matches!(err, ListenerError::Bind { .. }));
    }

    #[tokio::test]
    async fn test_invalid_host() {
        let config = ListenerConfig {
            host: "not-an-ip".into(),
            ..ListenerConfig::default()
        };
        assert!(matches!(
            bind_listener(&config).await,
            Err(ListenerError::InvalidHost(_))
        ));
    }

    #[test]
    fn test_local_url() {
        let addr: SocketAddr = "127.0.0.1:51234".parse().unwrap();
        assert_eq!(local_url(addr), "http://localhost:51234");
    }
}
