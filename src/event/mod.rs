// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Events published by the poll loop.
//!
//! The [`EventBus`] uses tokio's broadcast channel so any number of tasks
//! can observe readings without parsing the console output.
//!
//! # Examples
//!
//! ```
//! use bh1750_poll::event::{EventBus, PollEvent};
//! use bh1750_poll::sensor::Reading;
//! use bh1750_poll::types::RawReading;
//!
//! let bus = EventBus::new();
//! let mut rx = bus.subscribe();
//!
//! bus.publish(PollEvent::Reading(Reading::from_raw(RawReading::new(0, 0))));
//! assert!(rx.try_recv().is_ok());
//! ```

mod event_bus;
mod poll_event;

pub use event_bus::EventBus;
pub use poll_event::PollEvent;
