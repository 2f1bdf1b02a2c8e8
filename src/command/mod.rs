// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! BH1750 instruction set.
//!
//! Every interaction with the sensor starts with a single opcode byte
//! written to its address.
//!
//! | Instruction | Opcode | Effect |
//! |-------------|--------|--------|
//! | [`Instruction::PowerDown`] | `0x00` | Enter low-power state |
//! | [`Instruction::PowerOn`] | `0x01` | Wait for a measurement command |
//! | [`Instruction::Reset`] | `0x07` | Clear the data register (powered on only) |
//! | [`Instruction::OneTimeHighRes`] | `0x20` | Measure once at 1 lx resolution, then power down |
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//! use bh1750_poll::command::Instruction;
//!
//! let cmd = Instruction::OneTimeHighRes;
//! assert_eq!(cmd.opcode(), 0x20);
//! assert_eq!(cmd.measurement_time(), Some(Duration::from_millis(120)));
//! ```

use std::fmt;
use std::time::Duration;

/// An opcode understood by the sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// No active state.
    PowerDown,
    /// Waiting for a measurement command.
    PowerOn,
    /// Reset the data register value.
    Reset,
    /// One-time high-resolution measurement (mode 1).
    OneTimeHighRes,
}

impl Instruction {
    /// Returns the byte written to the bus.
    #[must_use]
    pub const fn opcode(&self) -> u8 {
        match self {
            Self::PowerDown => 0x00,
            Self::PowerOn => 0x01,
            Self::Reset => 0x07,
            Self::OneTimeHighRes => 0x20,
        }
    }

    /// Returns the typical conversion time for measurement instructions.
    #[must_use]
    pub const fn measurement_time(&self) -> Option<Duration> {
        match self {
            Self::OneTimeHighRes => Some(Duration::from_millis(120)),
            Self::PowerDown | Self::PowerOn | Self::Reset => None,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::PowerDown => "PowerDown",
            Self::PowerOn => "PowerOn",
            Self::Reset => "Reset",
            Self::OneTimeHighRes => "OneTimeHighRes",
        };
        write!(f, "{name} (0x{:02x})", self.opcode())
    }
}

impl From<Instruction> for u8 {
    fn from(instruction: Instruction) -> Self {
        instruction.opcode()
    }
}
