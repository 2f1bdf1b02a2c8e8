// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for light measurements.
//!
//! Everything in this module is pure: converting bytes to lux and lux to a
//! category never touches the bus.
//!
//! # Types
//!
//! - [`RawReading`] - The two data bytes of a measurement
//! - [`Lux`] - Illuminance derived from a raw reading
//! - [`LightLevel`] - Five-way category of an illuminance value

mod light_level;
mod lux;
mod raw_reading;

pub use light_level::LightLevel;
pub use lux::{Lux, convert_to_lux};
pub use raw_reading::RawReading;
