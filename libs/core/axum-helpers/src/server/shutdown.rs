use tokio::signal;
use tokio::sync::watch;
use tracing::{error, info};

/// One-way shutdown flag shared by the server and its cleanup task.
///
/// Cloning shares the flag. Waiters that subscribe after the flag was
/// raised return immediately.
#[derive(Clone, Debug)]
pub struct ShutdownCoordinator {
    flag: watch::Sender<bool>,
}

impl ShutdownCoordinator {
    pub fn new() -> Self {
        let (flag, _) = watch::channel(false);
        Self { flag }
    }

    /// Raises the flag; returns `false` if it was already raised.
    pub fn trigger(&self) -> bool {
        let first = self.flag.send_if_modified(|raised| !std::mem::replace(raised, true));
        if first {
            info!("Initiating graceful shutdown");
        }
        first
    }

    pub fn is_triggered(&self) -> bool {
        *self.flag.borrow()
    }

    /// Completes once [`trigger`](Self::trigger) has been called.
    pub async fn triggered(&self) {
        let mut rx = self.flag.subscribe();
        // The sender lives in `self`, so the channel cannot close here.
        let _ = rx.wait_for(|raised| *raised).await;
    }

    /// Raises the flag on SIGINT or SIGTERM.
    pub async fn trigger_on_signal(self) {
        shutdown_signal().await;
        self.trigger();
    }
}

impl Default for ShutdownCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

/// Completes on SIGINT or SIGTERM.
///
/// A handler that cannot be installed is logged and never fires.
pub async fn shutdown_signal() {
    let interrupt = async {
        match signal::ctrl_c().await {
            Ok(()) => "SIGINT",
            Err(e) => {
                error!(error = %e, "Could not listen for SIGINT");
                std::future::pending().await
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                "SIGTERM"
            }
            Err(e) => {
                error!(error = %e, "Could not listen for SIGTERM");
                std::future::pending().await
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<&'static str>();

    let received = tokio::select! {
        name = interrupt => name,
        name = terminate => name,
    };
    info!(signal = received, "Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_trigger_only_counts_once() {
        let coordinator = ShutdownCoordinator::new();

        assert!(!coordinator.is_triggered());
        assert!(coordinator.trigger());
        assert!(!coordinator.trigger());
        assert!(coordinator.is_triggered());
    }

    #[tokio::test]
    async fn test_waiters_wake_on_trigger() {
        let coordinator = ShutdownCoordinator::new();
        let waiter = {
            let c = coordinator.clone();
            tokio::spawn(async move { c.triggered().await })
        };

        coordinator.trigger();
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .unwrap()
            .unwrap();
    }

    #[tokio::test]
    async fn test_late_waiter_returns_immediately() {
        let coordinator = ShutdownCoordinator::new();
        coordinator.trigger();

        tokio::time::timeout(Duration::from_millis(100), coordinator.triggered())
            .await
            .unwrap();
    }
}
