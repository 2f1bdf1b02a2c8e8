// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `bh1750_poll` - Poll a BH1750 ambient light sensor over I2C.
//!
//! The crate reads the sensor in one-time high-resolution mode, converts the
//! two result bytes to lux, sorts the value into one of five light levels,
//! and prints one line per reading:
//!
//! ```text
//! Light Level : 213.33 lx (Medium)
//! ```
//!
//! # Layers
//!
//! - [`types`]: pure conversion (`RawReading` to [`Lux`] to [`LightLevel`])
//! - [`protocol`]: the bus [`Transport`](protocol::Transport) and its I2C
//!   implementation
//! - [`sensor`]: the [`Bh1750`] driver owning a transport
//! - [`poller`]: the fixed-interval loop with explicit shutdown
//! - [`event`]: broadcast of readings to other tasks
//!
//! # Quick Start
//!
//! Any `embedded-hal` 1.0 I2C bus can carry the sensor. On Linux,
//! `I2cTransport::open` opens a `/dev/i2c-N` node directly (feature `linux`).
//!
//! ```no_run
//! use bh1750_poll::{Bh1750, BusConfig, I2cTransport, Poller, PollerConfig};
//! use bh1750_poll::poller::shutdown;
//! use embedded_hal::i2c::I2c;
//!
//! async fn poll<I: I2c>(bus: I) -> bh1750_poll::Result<()> {
//!     let sensor = Bh1750::new(I2cTransport::new(bus), BusConfig::DEFAULT_ADDRESS);
//!     let mut poller = Poller::new(sensor, PollerConfig::new());
//!
//!     let (_trigger, signal) = shutdown::channel();
//!     poller.run(&mut std::io::stdout(), signal).await?;
//!     Ok(())
//! }
//! ```
//!
//! # Conversion Only
//!
//! ```
//! use bh1750_poll::{LightLevel, Lux, RawReading};
//!
//! let lux = Lux::from_raw(RawReading::new(0x02, 0xd0));
//! assert_eq!(LightLevel::from(lux), LightLevel::Bright);
//! ```

pub mod command;
pub mod error;
pub mod event;
pub mod poller;
pub mod protocol;
pub mod sensor;
pub mod types;

pub use command::Instruction;
pub use error::{ConfigError, Error, ReadingError, Result, TransportError};
pub use event::{EventBus, PollEvent};
pub use poller::{FailurePolicy, PollSummary, Poller, PollerConfig};
pub use protocol::{BusConfig, I2cTransport, Transport};
pub use sensor::{Bh1750, Reading};
pub use types::{LightLevel, Lux, RawReading, convert_to_lux};
