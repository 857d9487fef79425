//! Shutdown coordination.
//!
//! One `Shutdown` per process. The server subscribes to it; `main` wires
//! Ctrl+C into it. A first interrupt starts a graceful stop, a second one
//! ends the process immediately with status 0.

use tokio::sync::broadcast;
use tokio::task::JoinHandle;

/// Broadcast trigger for stopping the server.
#[derive(Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Receiver that resolves once `trigger` is called.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Ask every subscriber to stop.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Route Ctrl+C into this coordinator.
    ///
    /// The first interrupt triggers a graceful stop. A second interrupt,
    /// arriving while in-flight requests drain, exits the process.
    pub fn watch_ctrl_c(&self) -> JoinHandle<()> {
        let shutdown = self.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to install Ctrl+C handler");
                return;
            }
            tracing::info!("Interrupt received, stopping");
            shutdown.trigger();

            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::warn!("Second interrupt, exiting without draining");
                std::process::exit(0);
            }
        })
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_trigger_reaches_subscribers() {
        let shutdown = Shutdown::new();
        let mut a = shutdown.subscribe();
        let mut b = shutdown.clone().subscribe();

        shutdown.trigger();
        assert!(a.recv().await.is_ok());
        assert!(b.recv().await.is_ok());
    }

    #[tokio::test]
    async fn test_trigger_without_subscribers_is_harmless() {
        let shutdown = Shutdown::new();
        shutdown.trigger();

        let mut late = shutdown.subscribe();
        assert!(late.try_recv().is_err());
    }
}
