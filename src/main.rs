// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Print the BH1750 light level every half second until interrupted.
//!
//! Readings go to stdout, diagnostics to stderr. The bus is `/dev/i2c-1`
//! and the sensor address `0x23`.

use bh1750_poll::poller::shutdown;
use bh1750_poll::{Bh1750, BusConfig, I2cTransport, Poller, PollerConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let signal = shutdown::on_interrupt()?;

    let bus = BusConfig::new();
    let transport = I2cTransport::open(&bus)?;
    let sensor = Bh1750::new(transport, bus.address());
    let mut poller = Poller::new(sensor, PollerConfig::new());

    let summary = poller.run(&mut std::io::stdout(), signal).await?;
    tracing::debug!(polls = summary.polls(), "Exiting");
    Ok(())
}
