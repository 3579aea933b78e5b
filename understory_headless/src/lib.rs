// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Headless: shared primitives for headless widget engines.
//!
//! ## Overview
//!
//! A headless widget owns behavior, not markup. The engines built on this crate
//! (slider, tooltip, toggle) hold state, turn input events into state changes,
//! and describe the attributes their elements should carry. Everything that
//! touches a real element tree is delegated to the host through small traits.
//!
//! This crate provides the vocabulary those engines share:
//!
//! - [`value`]: [`Value`](value::Value), state owned by the widget
//!   ([`OwnedValue`](value::OwnedValue)) or delegated to the caller
//!   ([`ExternalValue`](value::ExternalValue)).
//! - [`descriptor`]: [`ElementDescriptor`](descriptor::ElementDescriptor), the
//!   attribute/event snapshot for one widget part.
//! - [`element`]: [`ElementLookup`](element::ElementLookup), the host's element
//!   geometry and focus, plus an in-memory [`ElementMap`](element::ElementMap).
//! - [`hull`]: convex hover regions over element boxes.
//! - [`timer`]: single-shot [`Timer`](timer::Timer)s polled against a
//!   [`Clock`](timer::Clock).
//! - [`event`]: keys, modifiers, pointer kinds and handler [`Outcome`](event::Outcome)s.
//! - [`overlay`]: floating-position and portal collaborators.
//! - [`id`]: generated element ids.
//!
//! ## Threading
//!
//! Engines are single-threaded and event-driven. Nothing here blocks, sleeps
//! or spawns; time advances only when the host polls.
//!
//! Geometry uses [`kurbo`] types throughout.

extern crate alloc;

pub mod descriptor;
pub mod element;
pub mod error;
pub mod event;
pub mod hull;
pub mod id;
pub mod overlay;
pub mod timer;
pub mod value;

pub use kurbo;

pub use error::{ConfigError, ValueError};
