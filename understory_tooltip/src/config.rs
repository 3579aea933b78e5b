// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip configuration.

use alloc::string::String;
use core::time::Duration;

use understory_headless::overlay::{FloatingConfig, Placement, PortalTarget};

/// Why a tooltip opened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OpenReason {
    /// The pointer entered the trigger or the content.
    Pointer,
    /// The trigger received keyboard focus.
    Focus,
}

/// Key under which tooltips exclude each other.
///
/// At most one tooltip per key is open at any time.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GroupKey {
    /// A named group.
    Named(String),
    /// The shared group of every tooltip that opted into exclusivity without
    /// naming a group.
    Global,
}

impl From<&str> for GroupKey {
    fn from(name: &str) -> Self {
        Self::Named(String::from(name))
    }
}

impl From<String> for GroupKey {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

/// Options for a [`Tooltip`](crate::Tooltip).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TooltipConfig {
    /// Delay between an open request and the tooltip opening. Default 1s.
    pub open_delay: Duration,
    /// Delay between a close request and the tooltip closing. Default zero.
    pub close_delay: Duration,
    /// Close immediately when the trigger is pressed. Default `true`.
    pub close_on_pointer_down: bool,
    /// Close immediately on `Escape`. Default `true`.
    pub close_on_escape: bool,
    /// Keep the content rendered (and positioned) while closed.
    pub force_visible: bool,
    /// Only the trigger keeps the tooltip open; the content is not hoverable.
    pub disable_hoverable_content: bool,
    /// Exclusivity group.
    pub group: Option<GroupKey>,
    /// Portal destination for the content. The default, [`PortalTarget::Auto`],
    /// picks the nearest `data-portal` ancestor or the body. `None` leaves the
    /// content in place.
    pub portal: Option<PortalTarget>,
    /// Positioning of the content against the trigger. `None` disables it.
    pub positioning: Option<FloatingConfig>,
    /// Side length of the arrow, in pixels. Default 8.
    pub arrow_size: f64,
    /// Id of the trigger element. Generated when `None`.
    pub trigger_id: Option<String>,
    /// Id of the content element. Generated when `None`.
    pub content_id: Option<String>,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            open_delay: Duration::from_millis(1000),
            close_delay: Duration::ZERO,
            close_on_pointer_down: true,
            close_on_escape: true,
            force_visible: false,
            disable_hoverable_content: false,
            group: None,
            portal: Some(PortalTarget::Auto),
            positioning: Some(FloatingConfig::placed(Placement::Bottom)),
            arrow_size: 8.0,
            trigger_id: None,
            content_id: None,
        }
    }
}
