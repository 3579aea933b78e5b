// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Tooltip: a headless tooltip engine.
//!
//! ## Overview
//!
//! [`Tooltip`] decides when a tooltip is open. It reacts to pointer and focus
//! events on the trigger and content, pointer moves and key presses at
//! document level, and its own open/close delay timers:
//!
//! - Hovering or focusing the trigger opens after [`TooltipConfig::open_delay`].
//! - Leaving the hover region closes after [`TooltipConfig::close_delay`],
//!   but only if the pointer opened the tooltip. The hover region is the
//!   convex hull of the trigger and content, so crossing the gap between them
//!   does not close it.
//! - Blurring the trigger closes, unless the pointer is in the hover region.
//! - `Escape` and pressing the trigger close at once.
//!
//! Tooltips sharing a [`GroupKey`] exclude each other: opening one closes the
//! other. See [`group`] for the registry.
//!
//! Time is read from a [`Clock`] and timers fire only from
//! [`Tooltip::poll`], so the engine is fully deterministic under a
//! [`ManualClock`].
//!
//! ## Example
//!
//! ```
//! use core::time::Duration;
//! use understory_headless::event::PointerKind;
//! use understory_headless::timer::ManualClock;
//! use understory_tooltip::{Tooltip, TooltipConfig};
//!
//! let clock = ManualClock::new();
//! let mut tooltip = Tooltip::new(TooltipConfig::default(), false, clock.clone());
//!
//! tooltip.trigger_pointer_enter(PointerKind::Mouse);
//! clock.advance(Duration::from_millis(500));
//! tooltip.poll();
//! assert!(!tooltip.is_open());
//!
//! clock.advance(Duration::from_millis(500));
//! tooltip.poll();
//! assert!(tooltip.is_open());
//! ```
//!
//! [`Clock`]: understory_headless::timer::Clock
//! [`ManualClock`]: understory_headless::timer::ManualClock

extern crate alloc;

pub mod config;
pub mod descriptors;
pub mod group;
pub mod tooltip;

pub use config::{GroupKey, OpenReason, TooltipConfig};
pub use tooltip::Tooltip;
