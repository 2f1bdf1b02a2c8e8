// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Human-readable light level categories.

use std::fmt;

use serde::Serialize;

use super::Lux;

/// Coarse category of an illuminance value.
///
/// Bands are right-closed: a value exactly on a threshold belongs to the
/// band below it.
///
/// | lux              | level       |
/// |------------------|-------------|
/// | > 1000           | `TooBright` |
/// | (500, 1000]      | `Bright`    |
/// | (100, 500]       | `Medium`    |
/// | (10, 100]        | `Dark`      |
/// | <= 10            | `TooDark`   |
///
/// # Examples
///
/// ```
/// use bh1750_poll::types::LightLevel;
///
/// assert_eq!(LightLevel::categorize(1200.0), LightLevel::TooBright);
/// assert_eq!(LightLevel::categorize(1000.0), LightLevel::Bright);
/// assert_eq!(LightLevel::categorize(10.0).as_str(), "Too Dark");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LightLevel {
    /// Above 1000 lx.
    #[serde(rename = "Too Bright")]
    TooBright,
    /// Above 500 lx, up to 1000 lx.
    Bright,
    /// Above 100 lx, up to 500 lx.
    Medium,
    /// Above 10 lx, up to 100 lx.
    Dark,
    /// 10 lx or less, including zero, negative and NaN inputs.
    #[serde(rename = "Too Dark")]
    TooDark,
}

impl LightLevel {
    /// Thresholds checked top-down; the first exceeded one wins.
    const BANDS: [(f64, Self); 4] = [
        (1000.0, Self::TooBright),
        (500.0, Self::Bright),
        (100.0, Self::Medium),
        (10.0, Self::Dark),
    ];

    /// Maps a lux value to its category.
    #[must_use]
    pub fn categorize(lux: f64) -> Self {
        Self::BANDS
            .iter()
            .find(|(threshold, _)| lux > *threshold)
            .map_or(Self::TooDark, |(_, level)| *level)
    }

    /// Returns the display label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TooBright => "Too Bright",
            Self::Bright => "Bright",
            Self::Medium => "Medium",
            Self::Dark => "Dark",
            Self::TooDark => "Too Dark",
        }
    }
}

impl From<Lux> for LightLevel {
    fn from(lux: Lux) -> Self {
        Self::categorize(lux.value())
    }
}

impl fmt::Display for LightLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
