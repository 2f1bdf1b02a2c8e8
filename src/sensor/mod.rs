// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! BH1750 ambient light sensor driver.
//!
//! The driver owns its [`Transport`] for its whole lifetime; there is no
//! shared bus handle. Measurements use one-time high-resolution mode: each
//! [`Bh1750::read`] issues the `0x20` opcode and reads the two result bytes
//! back in the same transaction.
//!
//! ```no_run
//! use bh1750_poll::protocol::{BusConfig, I2cTransport};
//! use bh1750_poll::sensor::Bh1750;
//! use embedded_hal::i2c::I2c;
//!
//! # async fn example<I: I2c>(bus: I) -> bh1750_poll::Result<()> {
//! let mut sensor = Bh1750::new(I2cTransport::new(bus), BusConfig::DEFAULT_ADDRESS);
//!
//! let reading = sensor.read().await?;
//! println!("{reading}");
//! # Ok(())
//! # }
//! ```

mod reading;

pub use reading::Reading;

use crate::command::Instruction;
use crate::error::Result;
use crate::protocol::Transport;
use crate::types::RawReading;

/// A BH1750 sensor reachable through a transport.
#[derive(Debug)]
pub struct Bh1750<T> {
    transport: T,
    address: u8,
}

impl<T: Transport> Bh1750<T> {
    /// Creates a driver for the sensor at `address`.
    #[must_use]
    pub fn new(transport: T, address: u8) -> Self {
        Self { transport, address }
    }

    /// Returns the device address.
    #[must_use]
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Returns a reference to the transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Releases the transport.
    #[must_use]
    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Wakes the sensor up.
    ///
    /// # Errors
    ///
    /// Returns error if the bus transaction fails.
    pub async fn power_on(&mut self) -> Result<()> {
        self.send(Instruction::PowerOn).await
    }

    /// Puts the sensor into its low-power state.
    ///
    /// # Errors
    ///
    /// Returns error if the bus transaction fails.
    pub async fn power_down(&mut self) -> Result<()> {
        self.send(Instruction::PowerDown).await
    }

    /// Clears the data register.
    ///
    /// The sensor ignores this instruction while powered down, so it is
    /// preceded by a power-on.
    ///
    /// # Errors
    ///
    /// Returns error if either bus transaction fails.
    pub async fn reset(&mut self) -> Result<()> {
        self.send(Instruction::PowerOn).await?;
        self.send(Instruction::Reset).await
    }

    /// Performs a one-time high-resolution measurement and returns the raw
    /// bytes.
    ///
    /// # Errors
    ///
    /// Returns `Error::Transport` if the bus transaction fails, or
    /// `Error::Reading` if the sensor does not answer with exactly two bytes.
    pub async fn read_raw(&mut self) -> Result<RawReading> {
        let bytes = self
            .transport
            .read_block(self.address, Instruction::OneTimeHighRes.opcode())
            .await?;
        let raw = RawReading::try_from(bytes.as_slice())?;
        tracing::trace!(raw = %raw, "Measurement received");
        Ok(raw)
    }

    /// Performs a measurement and converts it.
    ///
    /// # Errors
    ///
    /// Same as [`Bh1750::read_raw`].
    pub async fn read(&mut self) -> Result<Reading> {
        self.read_raw().await.map(Reading::from_raw)
    }

    async fn send(&mut self, instruction: Instruction) -> Result<()> {
        tracing::debug!(instruction = %instruction, address = self.address, "Sending instruction");
        self.transport
            .write_byte(self.address, instruction.opcode())
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::error::{Error, ReadingError, TransportError};
    use crate::types::LightLevel;

    #[derive(Debug, Default)]
    struct ScriptedBus {
        responses: VecDeque<std::result::Result<Vec<u8>, TransportError>>,
        writes: Vec<(u8, u8)>,
        reads: Vec<(u8, u8)>,
    }

    impl ScriptedBus {
        fn answering(responses: Vec<std::result::Result<Vec<u8>, TransportError>>) -> Self {
            Self {
                responses: responses.into(),
                ..Self::default()
            }
        }
    }

    impl Transport for ScriptedBus {
        async fn write_byte(
            &mut self,
            address: u8,
            byte: u8,
        ) -> std::result::Result<(), TransportError> {
            self.writes.push((address, byte));
            Ok(())
        }

        async fn read_block(
            &mut self,
            address: u8,
            command: u8,
        ) -> std::result::Result<Vec<u8>, TransportError> {
            self.reads.push((address, command));
            self.responses
                .pop_front()
                .unwrap_or(Err(TransportError::Bus("script exhausted".into())))
        }
    }

    #[tokio::test]
    async fn read_uses_one_time_high_res_opcode() {
        let mut sensor = Bh1750::new(ScriptedBus::answering(vec![Ok(vec![1, 0])]), 0x23);

        let reading = sensor.read().await.unwrap();

        assert_eq!(reading.raw(), RawReading::new(1, 0));
        assert_eq!(reading.level(), LightLevel::Medium);
        assert_eq!(sensor.transport().reads, vec![(0x23, 0x20)]);
        assert!(sensor.transport().writes.is_empty());
    }

    #[tokio::test]
    async fn short_response_is_invalid_reading() {
        let mut sensor = Bh1750::new(ScriptedBus::answering(vec![Ok(vec![1])]), 0x23);

        let err = sensor.read().await.unwrap_err();

        assert!(matches!(
            err,
            Error::Reading(ReadingError::InvalidLength {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[tokio::test]
    async fn long_response_is_invalid_reading() {
        let mut sensor = Bh1750::new(ScriptedBus::answering(vec![Ok(vec![1, 2, 3])]), 0x23);

        assert!(matches!(
            sensor.read_raw().await,
            Err(Error::Reading(ReadingError::InvalidLength { actual: 3, .. }))
        ));
    }

    #[tokio::test]
    async fn transport_error_propagates() {
        let mut sensor = Bh1750::new(
            ScriptedBus::answering(vec![Err(TransportError::NoAcknowledge { address: 0x23 })]),
            0x23,
        );

        assert!(matches!(
            sensor.read().await,
            Err(Error::Transport(TransportError::NoAcknowledge { address: 0x23 }))
        ));
    }

    #[tokio::test]
    async fn power_instructions() {
        let mut sensor = Bh1750::new(ScriptedBus::default(), 0x5c);

        sensor.power_on().await.unwrap();
        sensor.power_down().await.unwrap();

        assert_eq!(sensor.transport().writes, vec![(0x5c, 0x01), (0x5c, 0x00)]);
    }

    #[tokio::test]
    async fn reset_powers_on_first() {
        let mut sensor = Bh1750::new(ScriptedBus::default(), 0x23);

        sensor.reset().await.unwrap();

        let bus = sensor.into_transport();
        assert_eq!(bus.writes, vec![(0x23, 0x01), (0x23, 0x07)]);
    }
}
