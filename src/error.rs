// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the `bh1750_poll` crate.
//!
//! The hierarchy mirrors the layers of the program: bus transactions fail
//! with [`TransportError`], malformed sensor responses with [`ReadingError`],
//! and rejected settings with [`ConfigError`]. Failures to write the console
//! line surface as [`Error::Output`].

use thiserror::Error;

/// The main error type for this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The bus transaction could not complete.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The sensor returned data that cannot be converted.
    #[error("invalid reading: {0}")]
    Reading(#[from] ReadingError),

    /// A configuration value was rejected.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Writing a reading to the output failed.
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Errors raised by the two-wire bus transport.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The bus controller could not be opened.
    #[error("failed to open bus {path}: {message}")]
    Open {
        /// Device node of the bus controller.
        path: String,
        /// Description of the failure.
        message: String,
    },

    /// No device acknowledged the address.
    #[error("no acknowledge from device at 0x{address:02x}")]
    NoAcknowledge {
        /// 7-bit device address.
        address: u8,
    },

    /// Another bus master won arbitration.
    #[error("bus arbitration lost")]
    ArbitrationLoss,

    /// Any other bus-level failure.
    #[error("bus error: {0}")]
    Bus(String),
}

/// Errors caused by malformed sensor data.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReadingError {
    /// The transport returned the wrong number of bytes.
    #[error("expected {expected} bytes from sensor, got {actual}")]
    InvalidLength {
        /// Number of bytes a measurement consists of.
        expected: usize,
        /// Number of bytes actually received.
        actual: usize,
    },
}

/// Errors related to configuration values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The device address is outside the usable 7-bit range.
    #[error("address 0x{0:02x} is outside the 7-bit range [0x08, 0x77]")]
    InvalidAddress(u8),

    /// The poll interval must be non-zero.
    #[error("poll interval must be greater than zero")]
    ZeroInterval,
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
