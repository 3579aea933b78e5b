// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placement of the range highlight, thumbs and ticks on the track.
//!
//! Everything here is expressed as an edge of the root plus a percentage, the
//! way an absolutely positioned child would be styled. The `min` end of the
//! track is the left edge (horizontal, ltr), the right edge (horizontal, rtl),
//! the bottom edge (vertical, ltr) or the top edge (vertical, rtl).

use alloc::format;
use alloc::string::String;
use kurbo::Rect;

use crate::config::{Direction, Orientation};

/// An edge of the slider root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Left edge.
    Left,
    /// Right edge.
    Right,
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
}

impl Edge {
    /// The CSS property positioning against this edge.
    pub const fn property(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

/// The edge the `min` end of the track sits on.
pub const fn start_edge(orientation: Orientation, direction: Direction) -> Edge {
    match (orientation, direction) {
        (Orientation::Horizontal, Direction::Ltr) => Edge::Left,
        (Orientation::Horizontal, Direction::Rtl) => Edge::Right,
        (Orientation::Vertical, Direction::Ltr) => Edge::Bottom,
        (Orientation::Vertical, Direction::Rtl) => Edge::Top,
    }
}

/// Where an element sits on the track.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
    /// Edge the element is positioned against.
    pub edge: Edge,
    /// Distance from that edge, in percent of the track.
    pub percent: f64,
    /// CSS `translate` value centering (or offsetting) the element.
    pub translate: String,
}

/// Placement of a thumb at `percent` along the track, centered on the value.
pub fn thumb_placement(orientation: Orientation, direction: Direction, percent: f64) -> Placement {
    let translate = match (orientation, direction) {
        (Orientation::Horizontal, Direction::Ltr) => "-50% 0",
        (Orientation::Horizontal, Direction::Rtl) => "50% 0",
        (Orientation::Vertical, Direction::Ltr) => "0 50%",
        (Orientation::Vertical, Direction::Rtl) => "0 -50%",
    };
    Placement {
        edge: start_edge(orientation, direction),
        percent,
        translate: String::from(translate),
    }
}

/// Placement of a tick at `percent`, shifted by `offset` percent of its size.
pub fn tick_placement(
    orientation: Orientation,
    direction: Direction,
    percent: f64,
    offset: f64,
) -> Placement {
    let translate = match (orientation, direction) {
        (Orientation::Horizontal, Direction::Ltr) => format!("{}% 0", signed(offset)),
        (Orientation::Horizontal, Direction::Rtl) => format!("{}% 0", signed(-offset)),
        (Orientation::Vertical, Direction::Ltr) => format!("0 {}%", signed(-offset)),
        (Orientation::Vertical, Direction::Rtl) => format!("0 {}%", signed(offset)),
    };
    Placement {
        edge: start_edge(orientation, direction),
        percent,
        translate,
    }
}

// Avoid rendering `-0`.
fn signed(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}

/// Insets of the range highlight from each edge of the root, in percent.
///
/// Only the two edges on the track axis are set.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RangeInsets {
    /// Inset from the left edge.
    pub left: Option<f64>,
    /// Inset from the right edge.
    pub right: Option<f64>,
    /// Inset from the top edge.
    pub top: Option<f64>,
    /// Inset from the bottom edge.
    pub bottom: Option<f64>,
}

/// Insets for a highlight spanning from `start` percent to `end` percent.
///
/// `start` is measured from the `min` end, `end` from the `max` end.
pub fn range_insets(
    orientation: Orientation,
    direction: Direction,
    start: f64,
    end: f64,
) -> RangeInsets {
    match (orientation, direction) {
        (Orientation::Horizontal, Direction::Ltr) => RangeInsets {
            left: Some(start),
            right: Some(end),
            ..RangeInsets::default()
        },
        (Orientation::Horizontal, Direction::Rtl) => RangeInsets {
            left: Some(end),
            right: Some(start),
            ..RangeInsets::default()
        },
        (Orientation::Vertical, Direction::Ltr) => RangeInsets {
            top: Some(end),
            bottom: Some(start),
            ..RangeInsets::default()
        },
        (Orientation::Vertical, Direction::Rtl) => RangeInsets {
            top: Some(start),
            bottom: Some(end),
            ..RangeInsets::default()
        },
    }
}

/// Coordinates of the `min` and `max` ends of the track within `root`.
///
/// Horizontal tracks return x coordinates, vertical tracks y coordinates
/// (growing downwards).
pub fn track_ends(orientation: Orientation, direction: Direction, root: Rect) -> (f64, f64) {
    match (orientation, direction) {
        (Orientation::Horizontal, Direction::Ltr) => (root.x0, root.x1),
        (Orientation::Horizontal, Direction::Rtl) => (root.x1, root.x0),
        (Orientation::Vertical, Direction::Ltr) => (root.y1, root.y0),
        (Orientation::Vertical, Direction::Rtl) => (root.y0, root.y1),
    }
}
