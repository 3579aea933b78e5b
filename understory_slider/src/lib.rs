// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Slider: a headless slider engine.
//!
//! ## Overview
//!
//! [`Slider`] keeps an ordered list of values, one per thumb, inside
//! `[min, max]` and aligned to `step`. It turns document-level pointer input
//! and per-thumb key presses into value updates, and derives everything a
//! host needs to draw the widget: thumb and tick placements, the range
//! highlight, and [`ElementDescriptor`]s for each part.
//!
//! Thumbs never cross. Dragging a thumb past its neighbors moves its value to
//! the slot that keeps the values ordered and hands the drag (and keyboard
//! focus) to the thumb in that slot.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_headless::element::ElementMap;
//! use understory_headless::event::PointerButton;
//! use understory_slider::{Slider, SliderConfig};
//!
//! let config = SliderConfig { root_id: Some("volume".into()), ..SliderConfig::default() };
//! let mut slider = Slider::new(config, vec![20.0, 80.0]);
//!
//! // The host mirrors its layout: a 100px track with two thumbs.
//! let mut host = ElementMap::new();
//! host.insert("volume", None, Rect::new(0.0, 0.0, 100.0, 10.0));
//! host.insert("volume-thumb-0", Some("volume"), Rect::new(18.0, 0.0, 22.0, 10.0));
//! host.insert("volume-thumb-1", Some("volume"), Rect::new(78.0, 0.0, 82.0, 10.0));
//!
//! // Grab the first thumb and drag it past the second.
//! slider.pointer_down(Point::new(20.0, 5.0), PointerButton::Primary, "volume", &mut host);
//! slider.pointer_move(Point::new(90.0, 5.0), &mut host);
//! slider.pointer_up();
//!
//! assert_eq!(slider.values(), [80.0, 90.0]);
//! assert_eq!(slider.active_thumb(), Some(1));
//! assert_eq!(host.focused(), Some("volume-thumb-1"));
//! ```
//!
//! [`ElementDescriptor`]: understory_headless::descriptor::ElementDescriptor

extern crate alloc;

pub mod config;
pub mod descriptors;
pub mod layout;
pub mod slider;
pub mod snap;
pub mod ticks;

pub use config::{Direction, Orientation, SliderConfig};
pub use slider::{Slider, SliderState};
pub use ticks::Tick;
