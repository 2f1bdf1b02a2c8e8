// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! A single converted measurement.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::types::{LightLevel, Lux, RawReading};

/// One measurement: the raw bytes, their lux value and category.
///
/// The [`Display`](fmt::Display) form is the console line printed by the
/// poller.
///
/// # Examples
///
/// ```
/// use bh1750_poll::sensor::Reading;
/// use bh1750_poll::types::{LightLevel, RawReading};
///
/// let reading = Reading::from_raw(RawReading::new(1, 0));
/// assert_eq!(reading.level(), LightLevel::Medium);
/// assert_eq!(reading.to_string(), "Light Level : 213.33 lx (Medium)");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    raw: RawReading,
    lux: Lux,
    level: LightLevel,
    taken_at: DateTime<Utc>,
}

impl Reading {
    /// Converts a raw measurement taken now.
    #[must_use]
    pub fn from_raw(raw: RawReading) -> Self {
        Self::from_raw_at(raw, Utc::now())
    }

    /// Converts a raw measurement taken at `taken_at`.
    #[must_use]
    pub fn from_raw_at(raw: RawReading, taken_at: DateTime<Utc>) -> Self {
        let lux = Lux::from_raw(raw);
        Self {
            raw,
            lux,
            level: LightLevel::from(lux),
            taken_at,
        }
    }

    /// Returns the bytes the sensor sent.
    #[must_use]
    pub fn raw(&self) -> RawReading {
        self.raw
    }

    /// Returns the illuminance.
    #[must_use]
    pub fn lux(&self) -> Lux {
        self.lux
    }

    /// Returns the light category.
    #[must_use]
    pub fn level(&self) -> LightLevel {
        self.level
    }

    /// Returns when the measurement was taken.
    #[must_use]
    pub fn taken_at(&self) -> DateTime<Utc> {
        self.taken_at
    }
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Light Level : {} ({})", self.lux, self.level)
    }
}
