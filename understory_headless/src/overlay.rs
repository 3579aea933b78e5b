// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overlay collaborators: floating positioning and portals.
//!
//! ## Overview
//!
//! Floating content (a tooltip bubble, a popover) needs two services the
//! engines do not implement:
//!
//! - A [`Positioner`] computes coordinates for a floating element relative to
//!   an anchor and keeps them current until torn down.
//! - A [`Portal`] relocates the floating element to another place in the host
//!   tree.
//!
//! Both hand back a [`Teardown`]. Engines hold the teardown while the overlay
//! is live and run it exactly once when the overlay should disappear.
//!
//! The configuration types mirror common floating-position options; their
//! meaning is defined by the positioner, not by this crate.

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::element::ElementLookup;

/// Where a floating element sits relative to its anchor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Placement {
    /// Above, centered.
    #[default]
    Top,
    /// Above, aligned to the start edge.
    TopStart,
    /// Above, aligned to the end edge.
    TopEnd,
    /// Right, centered.
    Right,
    /// Right, aligned to the start edge.
    RightStart,
    /// Right, aligned to the end edge.
    RightEnd,
    /// Below, centered.
    Bottom,
    /// Below, aligned to the start edge.
    BottomStart,
    /// Below, aligned to the end edge.
    BottomEnd,
    /// Left, centered.
    Left,
    /// Left, aligned to the start edge.
    LeftStart,
    /// Left, aligned to the end edge.
    LeftEnd,
}

impl Placement {
    /// The side of the anchor the element is placed on.
    pub const fn side(self) -> Self {
        match self {
            Self::Top | Self::TopStart | Self::TopEnd => Self::Top,
            Self::Right | Self::RightStart | Self::RightEnd => Self::Right,
            Self::Bottom | Self::BottomStart | Self::BottomEnd => Self::Bottom,
            Self::Left | Self::LeftStart | Self::LeftEnd => Self::Left,
        }
    }
}

/// CSS-like positioning strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Positioned relative to the nearest positioned ancestor.
    #[default]
    Absolute,
    /// Positioned relative to the viewport.
    Fixed,
}

/// Explicit offsets overriding the gutter.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloatingOffset {
    /// Distance along the placement axis.
    pub main_axis: Option<f64>,
    /// Distance across the placement axis.
    pub cross_axis: Option<f64>,
}

/// Options forwarded to a [`Positioner`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloatingConfig {
    /// Preferred placement.
    pub placement: Placement,
    /// Positioning strategy.
    pub strategy: Strategy,
    /// Explicit offsets.
    pub offset: Option<FloatingOffset>,
    /// Gap between anchor and floating element.
    pub gutter: f64,
    /// Padding kept from viewport edges when checking overflow.
    pub overflow_padding: f64,
    /// Flip to the opposite side on overflow.
    pub flip: bool,
    /// Allow the floating element to overlap its anchor when shifting.
    pub overlap: bool,
    /// Match the anchor's width.
    pub same_width: bool,
    /// Shrink to fit the viewport.
    pub fit_viewport: bool,
}

impl Default for FloatingConfig {
    fn default() -> Self {
        Self {
            placement: Placement::Top,
            strategy: Strategy::Absolute,
            offset: None,
            gutter: 5.0,
            overflow_padding: 8.0,
            flip: true,
            overlap: false,
            same_width: false,
            fit_viewport: false,
        }
    }
}

impl FloatingConfig {
    /// Default options with a specific placement.
    pub fn placed(placement: Placement) -> Self {
        Self {
            placement,
            ..Self::default()
        }
    }
}

/// Destination for a portal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PortalTarget {
    /// The nearest ancestor marked as a portal destination, or the body when
    /// there is none. See [`PortalTarget::resolve`].
    #[default]
    Auto,
    /// The document body.
    Body,
    /// The first element matching a selector.
    Selector(String),
    /// A specific element, by id.
    Element(String),
}

impl PortalTarget {
    /// Resolve [`PortalTarget::Auto`] against the ancestors of `element`.
    ///
    /// Other targets are returned unchanged. The walk starts at the element's
    /// parent, so an element never portals into itself.
    pub fn resolve<L: ElementLookup + ?Sized>(&self, host: &L, element: &str) -> Self {
        if *self != Self::Auto {
            return self.clone();
        }
        // Parent links are host-supplied; stop at the first repeated id.
        let mut seen: Vec<&str> = Vec::new();
        let mut cur = host.parent(element);
        while let Some(id) = cur {
            if id == element || seen.contains(&id) {
                break;
            }
            if host.is_portal(id) {
                return Self::Element(id.to_string());
            }
            seen.push(id);
            cur = host.parent(id);
        }
        Self::Body
    }
}

/// Deferred cleanup for a live overlay effect.
pub struct Teardown(Option<Box<dyn FnOnce()>>);

impl Teardown {
    /// Wrap a cleanup closure.
    pub fn new(f: impl FnOnce() + 'static) -> Self {
        Self(Some(Box::new(f)))
    }

    /// A teardown that does nothing.
    pub fn noop() -> Self {
        Self(None)
    }

    /// Run the cleanup. Subsequent calls do nothing.
    pub fn run(&mut self) {
        if let Some(f) = self.0.take() {
            f();
        }
    }
}

impl fmt::Debug for Teardown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Teardown")
            .field(&if self.0.is_some() { "pending" } else { "done" })
            .finish()
    }
}

/// Computes and maintains the position of a floating element.
pub trait Positioner {
    /// Start positioning `floating` against `anchor`.
    fn attach(&mut self, anchor: &str, floating: &str, config: &FloatingConfig) -> Teardown;
}

/// Relocates an element to a portal destination.
pub trait Portal {
    /// Move `element` under `target`.
    fn mount(&mut self, element: &str, target: &PortalTarget) -> Teardown;
}

/// A positioner and portal that do nothing, for hosts without overlays.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOverlay;

impl Positioner for NoOverlay {
    fn attach(&mut self, _anchor: &str, _floating: &str, _config: &FloatingConfig) -> Teardown {
        Teardown::noop()
    }
}

impl Portal for NoOverlay {
    fn mount(&mut self, _element: &str, _target: &PortalTarget) -> Teardown {
        Teardown::noop()
    }
}
