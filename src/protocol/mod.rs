// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Two-wire bus transports.
//!
//! The sensor driver talks to the hardware only through the [`Transport`]
//! trait, so tests and other platforms can substitute their own bus.
//!
//! # Transports
//!
//! - [`I2cTransport`]: any `embedded-hal` 1.0 I2C bus; on Linux it can be
//!   opened directly from a `/dev/i2c-N` device node.

mod i2c;

pub use i2c::{BusConfig, I2cTransport};

use crate::error::TransportError;

/// A bus capable of the transactions the sensor needs.
///
/// Implementations perform exactly one bus transaction per call and do not
/// retry.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Writes a single byte to the device.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the transaction cannot complete.
    async fn write_byte(&mut self, address: u8, byte: u8) -> Result<(), TransportError>;

    /// Writes `command` to the device, then reads back a block of data.
    ///
    /// The returned bytes are passed on unchecked; callers validate the
    /// length.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the transaction cannot complete.
    async fn read_block(&mut self, address: u8, command: u8) -> Result<Vec<u8>, TransportError>;
}

impl<T: Transport> Transport for &mut T {
    async fn write_byte(&mut self, address: u8, byte: u8) -> Result<(), TransportError> {
        (**self).write_byte(address, byte).await
    }

    async fn read_block(&mut self, address: u8, command: u8) -> Result<Vec<u8>, TransportError> {
        (**self).read_block(address, command).await
    }
}
