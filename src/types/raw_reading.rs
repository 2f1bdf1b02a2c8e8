// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Raw measurement bytes as returned by the sensor.

use std::fmt;

use serde::Serialize;

use crate::error::ReadingError;

/// The two data bytes of a single measurement, most significant first.
///
/// # Examples
///
/// ```
/// use bh1750_poll::types::RawReading;
///
/// let raw = RawReading::try_from([0x01, 0x00].as_slice()).unwrap();
/// assert_eq!(raw.high(), 0x01);
/// assert_eq!(raw.count(), 256);
///
/// // Anything but exactly two bytes is rejected
/// assert!(RawReading::try_from([0x01].as_slice()).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RawReading {
    high: u8,
    low: u8,
}

impl RawReading {
    /// Number of bytes in a measurement.
    pub const LEN: usize = 2;

    /// Creates a raw reading from its high and low bytes.
    #[must_use]
    pub const fn new(high: u8, low: u8) -> Self {
        Self { high, low }
    }

    /// Returns the most significant byte.
    #[must_use]
    pub const fn high(&self) -> u8 {
        self.high
    }

    /// Returns the least significant byte.
    #[must_use]
    pub const fn low(&self) -> u8 {
        self.low
    }

    /// Returns the 16-bit sensor count `low + 256 * high`.
    #[must_use]
    pub fn count(&self) -> u16 {
        u16::from_be_bytes([self.high, self.low])
    }
}

impl From<[u8; 2]> for RawReading {
    fn from([high, low]: [u8; 2]) -> Self {
        Self::new(high, low)
    }
}

impl TryFrom<&[u8]> for RawReading {
    type Error = ReadingError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        match *bytes {
            [high, low] => Ok(Self::new(high, low)),
            _ => Err(ReadingError::InvalidLength {
                expected: Self::LEN,
                actual: bytes.len(),
            }),
        }
    }
}

impl fmt::Display for RawReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[0x{:02x}, 0x{:02x}]", self.high, self.low)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_is_big_endian() {
        assert_eq!(RawReading::new(0, 0).count(), 0);
        assert_eq!(RawReading::new(0, 1).count(), 1);
        assert_eq!(RawReading::new(1, 0).count(), 256);
        assert_eq!(RawReading::new(0xff, 0xff).count(), u16::MAX);
    }

    #[test]
    fn try_from_exact_length() {
        let raw = RawReading::try_from([0x12, 0x34].as_slice()).unwrap();
        assert_eq!(raw, RawReading::new(0x12, 0x34));
    }

    #[test]
    fn try_from_short_slice() {
        let err = RawReading::try_from([0x12].as_slice()).unwrap_err();
        assert_eq!(
            err,
            ReadingError::InvalidLength {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn try_from_long_slice() {
        let err = RawReading::try_from([0x12, 0x34, 0x56].as_slice()).unwrap_err();
        assert_eq!(
            err,
            ReadingError::InvalidLength {
                expected: 2,
                actual: 3
            }
        );
    }

    #[test]
    fn try_from_empty_slice() {
        assert!(RawReading::try_from([].as_slice()).is_err());
    }

    #[test]
    fn display_hex() {
        assert_eq!(RawReading::new(0x01, 0xa0).to_string(), "[0x01, 0xa0]");
    }
}
