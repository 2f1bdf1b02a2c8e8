// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! I2C transport built on `embedded-hal`.

use embedded_hal::i2c::{ErrorKind, I2c};

use crate::error::{ConfigError, TransportError};
use crate::protocol::Transport;
use crate::types::RawReading;

// ============================================================================
// BusConfig - Where the sensor lives
// ============================================================================

/// Location of the sensor on the system.
///
/// # Examples
///
/// ```
/// use bh1750_poll::protocol::BusConfig;
///
/// // Raspberry Pi defaults: bus 1, ADDR pin low
/// let config = BusConfig::new();
/// assert_eq!(config.path(), "/dev/i2c-1");
/// assert_eq!(config.address(), 0x23);
///
/// // ADDR pin pulled high, older board revision
/// let config = BusConfig::new()
///     .with_path("/dev/i2c-0")
///     .with_address(BusConfig::ALTERNATE_ADDRESS)
///     .unwrap();
/// assert_eq!(config.address(), 0x5c);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusConfig {
    path: String,
    address: u8,
}

impl BusConfig {
    /// Default bus device node.
    pub const DEFAULT_PATH: &'static str = "/dev/i2c-1";
    /// Sensor address with the ADDR pin low.
    pub const DEFAULT_ADDRESS: u8 = 0x23;
    /// Sensor address with the ADDR pin high.
    pub const ALTERNATE_ADDRESS: u8 = 0x5c;

    /// Creates a configuration with the default path and address.
    #[must_use]
    pub fn new() -> Self {
        Self {
            path: Self::DEFAULT_PATH.to_string(),
            address: Self::DEFAULT_ADDRESS,
        }
    }

    /// Sets the bus device node.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Sets the 7-bit device address.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidAddress` for reserved addresses
    /// (outside `0x08..=0x77`).
    pub fn with_address(mut self, address: u8) -> Result<Self, ConfigError> {
        if !(0x08..=0x77).contains(&address) {
            return Err(ConfigError::InvalidAddress(address));
        }
        self.address = address;
        Ok(self)
    }

    /// Returns the bus device node.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the device address.
    #[must_use]
    pub fn address(&self) -> u8 {
        self.address
    }
}

impl Default for BusConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// I2cTransport
// ============================================================================

/// Transport over an `embedded-hal` I2C bus.
///
/// Block reads are issued as a single combined transaction: the command
/// byte is written, then two bytes are read after a repeated start.
///
/// # Examples
///
/// ```no_run
/// # #[cfg(feature = "linux")]
/// # fn example() -> Result<(), bh1750_poll::error::TransportError> {
/// use bh1750_poll::protocol::{BusConfig, I2cTransport};
///
/// let transport = I2cTransport::open(&BusConfig::new())?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct I2cTransport<I> {
    bus: I,
}

impl<I: I2c> I2cTransport<I> {
    /// Wraps an already opened bus.
    #[must_use]
    pub fn new(bus: I) -> Self {
        Self { bus }
    }

    /// Releases the underlying bus.
    #[must_use]
    pub fn into_inner(self) -> I {
        self.bus
    }
}

#[cfg(feature = "linux")]
impl I2cTransport<linux_embedded_hal::I2cdev> {
    /// Opens the Linux I2C device node named in `config`.
    ///
    /// # Errors
    ///
    /// Returns `TransportError::Open` if the device node cannot be opened.
    pub fn open(config: &BusConfig) -> Result<Self, TransportError> {
        let bus = linux_embedded_hal::I2cdev::new(config.path()).map_err(|e| {
            TransportError::Open {
                path: config.path().to_string(),
                message: e.to_string(),
            }
        })?;
        tracing::debug!(path = config.path(), "Opened I2C bus");
        Ok(Self::new(bus))
    }
}

impl<I: I2c> Transport for I2cTransport<I> {
    async fn write_byte(&mut self, address: u8, byte: u8) -> Result<(), TransportError> {
        tracing::trace!(address, byte, "I2C write");
        self.bus
            .write(address, &[byte])
            .map_err(|e| map_bus_error(address, &e))
    }

    async fn read_block(&mut self, address: u8, command: u8) -> Result<Vec<u8>, TransportError> {
        let mut buf = [0u8; RawReading::LEN];
        self.bus
            .write_read(address, &[command], &mut buf)
            .map_err(|e| map_bus_error(address, &e))?;
        tracing::trace!(address, command, data = ?buf, "I2C block read");
        Ok(buf.to_vec())
    }
}

fn map_bus_error<E: embedded_hal::i2c::Error>(address: u8, err: &E) -> TransportError {
    match err.kind() {
        ErrorKind::NoAcknowledge(_) => TransportError::NoAcknowledge { address },
        ErrorKind::ArbitrationLoss => TransportError::ArbitrationLoss,
        _ => TransportError::Bus(format!("{err:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = BusConfig::default();
        assert_eq!(config.path(), BusConfig::DEFAULT_PATH);
        assert_eq!(config.address(), BusConfig::DEFAULT_ADDRESS);
    }

    #[test]
    fn config_accepts_valid_addresses() {
        assert!(BusConfig::new().with_address(0x08).is_ok());
        assert!(BusConfig::new().with_address(0x77).is_ok());
    }

    #[test]
    fn config_rejects_reserved_addresses() {
        assert_eq!(
            BusConfig::new().with_address(0x07),
            Err(ConfigError::InvalidAddress(0x07))
        );
        assert_eq!(
            BusConfig::new().with_address(0x78),
            Err(ConfigError::InvalidAddress(0x78))
        );
    }

    #[test]
    fn config_with_path() {
        let config = BusConfig::new().with_path("/dev/i2c-0");
        assert_eq!(config.path(), "/dev/i2c-0");
        assert_eq!(config.address(), 0x23);
    }

    #[test]
    fn maps_no_acknowledge() {
        let err = map_bus_error(
            0x23,
            &ErrorKind::NoAcknowledge(embedded_hal::i2c::NoAcknowledgeSource::Address),
        );
        assert_eq!(err, TransportError::NoAcknowledge { address: 0x23 });
    }

    #[test]
    fn maps_arbitration_loss() {
        let err = map_bus_error(0x23, &ErrorKind::ArbitrationLoss);
        assert_eq!(err, TransportError::ArbitrationLoss);
    }

    #[test]
    fn maps_other_errors_to_bus() {
        let err = map_bus_error(0x23, &ErrorKind::Bus);
        assert!(matches!(err, TransportError::Bus(_)));
    }
}
