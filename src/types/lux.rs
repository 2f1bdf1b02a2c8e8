// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Illuminance values derived from raw sensor counts.

use std::fmt;

use serde::Serialize;

use super::RawReading;
use crate::error::ReadingError;

/// Illuminance in lux.
///
/// Values produced by [`Lux::from_raw`] follow the sensor's datasheet
/// conversion: the 16-bit count divided by the measurement accuracy factor
/// of 1.2.
///
/// # Examples
///
/// ```
/// use bh1750_poll::types::{Lux, RawReading};
///
/// let lux = Lux::from_raw(RawReading::new(1, 0));
/// assert!((lux.value() - 256.0 / 1.2).abs() < 1e-9);
/// assert_eq!(lux.to_string(), "213.33 lx");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Lux(f64);

impl Lux {
    /// Divisor converting sensor counts to lux.
    pub const ACCURACY_FACTOR: f64 = 1.2;

    /// Wraps a lux value.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Converts a raw measurement to lux.
    #[must_use]
    pub fn from_raw(raw: RawReading) -> Self {
        Self(f64::from(raw.count()) / Self::ACCURACY_FACTOR)
    }

    /// Returns the value in lux.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl From<RawReading> for Lux {
    fn from(raw: RawReading) -> Self {
        Self::from_raw(raw)
    }
}

impl fmt::Display for Lux {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} lx", self.0)
    }
}

/// Converts the bytes of a block read to lux.
///
/// # Errors
///
/// Returns [`ReadingError::InvalidLength`] unless `bytes` holds exactly two
/// bytes.
///
/// # Examples
///
/// ```
/// use bh1750_poll::types::convert_to_lux;
///
/// assert_eq!(convert_to_lux(&[0, 0]).unwrap().value(), 0.0);
/// assert!(convert_to_lux(&[0, 0, 0]).is_err());
/// ```
pub fn convert_to_lux(bytes: &[u8]) -> Result<Lux, ReadingError> {
    RawReading::try_from(bytes).map(Lux::from_raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected(high: u8, low: u8) -> f64 {
        (f64::from(low) + 256.0 * f64::from(high)) / 1.2
    }

    #[test]
    fn zero_bytes_are_zero_lux() {
        assert!(Lux::from_raw(RawReading::new(0, 0)).value().abs() < f64::EPSILON);
    }

    #[test]
    fn high_byte_weighs_256() {
        let lux = Lux::from_raw(RawReading::new(1, 0)).value();
        assert!((lux - 213.333_333_333).abs() < 1e-6);
    }

    #[test]
    fn matches_formula_for_every_byte_pair() {
        for high in 0..=u8::MAX {
            for low in 0..=u8::MAX {
                let lux = Lux::from_raw(RawReading::new(high, low)).value();
                assert!((lux - expected(high, low)).abs() <= f64::EPSILON * lux.max(1.0));
            }
        }
    }

    #[test]
    fn maximum_count() {
        let lux = Lux::from_raw(RawReading::new(0xff, 0xff)).value();
        assert!((lux - 54_612.5).abs() < 1e-9);
    }

    #[test]
    fn convert_rejects_wrong_length() {
        assert_eq!(
            convert_to_lux(&[1]),
            Err(ReadingError::InvalidLength {
                expected: 2,
                actual: 1
            })
        );
        assert!(convert_to_lux(&[1, 2, 3, 4]).is_err());
    }

    #[test]
    fn display_two_decimals() {
        assert_eq!(Lux::new(600.0).to_string(), "600.00 lx");
        assert_eq!(Lux::new(0.004).to_string(), "0.00 lx");
    }
}
