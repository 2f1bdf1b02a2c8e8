// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Cancellation for the poll loop.

use std::sync::Arc;

use tokio::sync::watch;

/// Creates a connected trigger/signal pair.
///
/// # Examples
///
/// ```
/// use bh1750_poll::poller::shutdown;
///
/// let (trigger, signal) = shutdown::channel();
/// assert!(!signal.is_triggered());
///
/// trigger.trigger();
/// assert!(signal.is_triggered());
/// ```
#[must_use]
pub fn channel() -> (ShutdownTrigger, ShutdownSignal) {
    let (tx, rx) = watch::channel(false);
    (ShutdownTrigger { tx: Arc::new(tx) }, ShutdownSignal { rx })
}

/// Requests shutdown of every connected [`ShutdownSignal`].
#[derive(Debug, Clone)]
pub struct ShutdownTrigger {
    tx: Arc<watch::Sender<bool>>,
}

impl ShutdownTrigger {
    /// Fires the shutdown request. Firing more than once has no effect.
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }
}

/// Resolves once shutdown has been requested.
///
/// If every trigger is dropped without firing, the signal never resolves.
#[derive(Debug, Clone)]
pub struct ShutdownSignal {
    rx: watch::Receiver<bool>,
}

impl ShutdownSignal {
    /// Returns a signal that never fires.
    #[must_use]
    pub fn never() -> Self {
        let (_, rx) = watch::channel(false);
        Self { rx }
    }

    /// Returns true if shutdown has been requested.
    #[must_use]
    pub fn is_triggered(&self) -> bool {
        *self.rx.borrow()
    }

    /// Waits until shutdown is requested.
    pub async fn triggered(&mut self) {
        if self.rx.wait_for(|triggered| *triggered).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

/// Returns a signal that fires on the first `SIGINT`.
///
/// The handler is installed before this function returns, so an interrupt
/// arriving at any later point (including during the first bus transaction)
/// is turned into a shutdown request instead of terminating the process.
/// Must be called from within a tokio runtime.
///
/// # Errors
///
/// Returns error if the signal handler cannot be registered.
#[cfg(unix)]
pub fn on_interrupt() -> std::io::Result<ShutdownSignal> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let (trigger, signal) = channel();
    tokio::spawn(async move {
        if interrupt.recv().await.is_some() {
            tracing::info!("Interrupt received, shutting down");
            trigger.trigger();
        }
    });
    Ok(signal)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn triggered_resolves_after_trigger() {
        let (trigger, mut signal) = channel();

        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            trigger.trigger();
        });

        tokio::time::timeout(Duration::from_secs(1), signal.triggered())
            .await
            .unwrap();
        assert!(signal.is_triggered());
    }

    #[tokio::test]
    async fn already_triggered_resolves_immediately() {
        let (trigger, mut signal) = channel();
        trigger.trigger();
        trigger.trigger();

        signal.triggered().await;
        assert!(signal.is_triggered());
    }

    #[tokio::test]
    async fn trigger_after_drop_of_clone_still_fires() {
        let (trigger, mut signal) = channel();
        let clone = trigger.clone();
        drop(trigger);

        clone.trigger();
        signal.triggered().await;
    }

    #[tokio::test(start_paused = true)]
    async fn never_does_not_resolve() {
        let mut signal = ShutdownSignal::never();
        let result = tokio::time::timeout(Duration::from_mins(1), signal.triggered()).await;
        assert!(result.is_err());
        assert!(!signal.is_triggered());
    }

    #[tokio::test(start_paused = true)]
    async fn dropped_trigger_never_resolves() {
        let (trigger, mut signal) = channel();
        drop(trigger);

        let result = tokio::time::timeout(Duration::from_mins(1), signal.triggered()).await;
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn interrupt_before_first_yield_fires_signal() {
        let mut signal = on_interrupt().unwrap();

        // Raised before the spawned listener has ever been polled
        let status = std::process::Command::new("kill")
            .args(["-INT", &std::process::id().to_string()])
            .status()
            .unwrap();
        assert!(status.success());

        tokio::time::timeout(Duration::from_secs(5), signal.triggered())
            .await
            .unwrap();
        assert!(signal.is_triggered());
    }
}
