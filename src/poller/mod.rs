// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The poll loop.
//!
//! A [`Poller`] repeatedly measures, writes one line per reading to an
//! output sink, publishes the reading on its [`EventBus`], and waits for the
//! configured interval. It runs until its [`ShutdownSignal`] fires; the wait
//! between polls is interrupted immediately when that happens.
//!
//! By default any failed measurement ends the loop with the error
//! ([`FailurePolicy::Abort`]). With [`FailurePolicy::LogAndContinue`] bus
//! and reading errors are logged and the next interval is attempted as
//! usual; output errors always end the loop.
//!
//! ```no_run
//! use bh1750_poll::poller::{Poller, PollerConfig, shutdown};
//! use bh1750_poll::protocol::{BusConfig, I2cTransport};
//! use bh1750_poll::sensor::Bh1750;
//! use embedded_hal::i2c::I2c;
//!
//! # async fn example<I: I2c>(bus: I) -> bh1750_poll::Result<()> {
//! let sensor = Bh1750::new(I2cTransport::new(bus), BusConfig::DEFAULT_ADDRESS);
//! let mut poller = Poller::new(sensor, PollerConfig::new());
//!
//! let (trigger, signal) = shutdown::channel();
//! tokio::spawn(async move {
//!     let _ = tokio::signal::ctrl_c().await;
//!     trigger.trigger();
//! });
//!
//! let summary = poller.run(&mut std::io::stdout(), signal).await?;
//! println!("{} readings", summary.polls());
//! # Ok(())
//! # }
//! ```

mod config;
pub mod shutdown;

pub use config::{FailurePolicy, PollerConfig};
pub use shutdown::{ShutdownSignal, ShutdownTrigger};

use std::io::Write;

use crate::error::{Error, Result};
use crate::event::{EventBus, PollEvent};
use crate::protocol::Transport;
use crate::sensor::{Bh1750, Reading};

/// Counters reported when the loop stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollSummary {
    polls: u64,
    failures: u64,
}

impl PollSummary {
    /// Returns the number of successful polls.
    #[must_use]
    pub fn polls(&self) -> u64 {
        self.polls
    }

    /// Returns the number of failed polls that were skipped.
    #[must_use]
    pub fn failures(&self) -> u64 {
        self.failures
    }
}

/// Drives a sensor in a fixed-interval loop.
#[derive(Debug)]
pub struct Poller<T> {
    sensor: Bh1750<T>,
    config: PollerConfig,
    events: EventBus,
}

impl<T: Transport> Poller<T> {
    /// Creates a poller that owns `sensor`.
    #[must_use]
    pub fn new(sensor: Bh1750<T>, config: PollerConfig) -> Self {
        Self {
            sensor,
            config,
            events: EventBus::new(),
        }
    }

    /// Returns the event bus readings are published on.
    #[must_use]
    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Takes one measurement, writes its line to `out` and publishes it.
    ///
    /// # Errors
    ///
    /// Returns error if the measurement fails or the line cannot be written.
    pub async fn poll_once<W: Write>(&mut self, out: &mut W) -> Result<Reading> {
        let reading = self.sensor.read().await?;
        writeln!(out, "{reading}")?;
        out.flush()?;
        tracing::debug!(lux = reading.lux().value(), level = %reading.level(), "Light level read");
        self.events.publish(PollEvent::Reading(reading.clone()));
        Ok(reading)
    }

    /// Polls until `shutdown` fires.
    ///
    /// # Errors
    ///
    /// Returns the first error that the failure policy does not absorb.
    pub async fn run<W: Write>(
        &mut self,
        out: &mut W,
        mut shutdown: ShutdownSignal,
    ) -> Result<PollSummary> {
        let mut summary = PollSummary::default();
        tracing::info!(
            address = self.sensor.address(),
            interval = ?self.config.interval(),
            policy = ?self.config.failure_policy(),
            "Starting poll loop"
        );

        while !shutdown.is_triggered() {
            match self.poll_once(out).await {
                Ok(_) => summary.polls += 1,
                Err(err @ (Error::Transport(_) | Error::Reading(_)))
                    if self.config.failure_policy() == FailurePolicy::LogAndContinue =>
                {
                    tracing::warn!(error = %err, "Poll failed, retrying next interval");
                    self.events.publish(PollEvent::Failed {
                        error: err.to_string(),
                        recoverable: true,
                    });
                    summary.failures += 1;
                }
                Err(err) => {
                    tracing::error!(error = %err, "Poll failed, stopping");
                    self.events.publish(PollEvent::Failed {
                        error: err.to_string(),
                        recoverable: false,
                    });
                    return Err(err);
                }
            }

            tokio::select! {
                () = shutdown.triggered() => {}
                () = tokio::time::sleep(self.config.interval()) => {}
            }
        }

        tracing::info!(
            polls = summary.polls,
            failures = summary.failures,
            "Poll loop stopped"
        );
        Ok(summary)
    }
}
