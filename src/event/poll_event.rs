// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Poll loop event types.

use serde::Serialize;

use crate::sensor::Reading;

/// Outcome of one poll, as seen by subscribers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PollEvent {
    /// A measurement was taken and printed.
    Reading(Reading),

    /// The poll failed.
    Failed {
        /// Description of the failure.
        error: String,
        /// Whether the loop keeps running after this failure.
        recoverable: bool,
    },
}

impl PollEvent {
    /// Returns the reading, if this event carries one.
    #[must_use]
    pub fn reading(&self) -> Option<&Reading> {
        match self {
            Self::Reading(reading) => Some(reading),
            Self::Failed { .. } => None,
        }
    }
}
