// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element descriptors for the tooltip parts.

use alloc::format;
use understory_headless::descriptor::{ElementDescriptor, Style};
use understory_headless::event::EventKind;

use crate::tooltip::Tooltip;

/// Part name of the trigger.
pub const TRIGGER_PART: &str = "tooltip-trigger";
/// Part name of the content.
pub const CONTENT_PART: &str = "tooltip-content";
/// Part name of the arrow.
pub const ARROW_PART: &str = "tooltip-arrow";

impl Tooltip {
    fn data_state(&self) -> &'static str {
        if self.is_open() { "open" } else { "closed" }
    }

    /// Descriptor for the trigger.
    ///
    /// Key presses go to [`Tooltip::trigger_key_down`]; the other events map
    /// to the `trigger_*` handlers of the same name.
    pub fn trigger_element(&self) -> ElementDescriptor {
        ElementDescriptor::new(TRIGGER_PART)
            .with("id", self.trigger_id())
            .with("aria-describedby", self.content_id())
            .with("data-state", self.data_state())
            .on(EventKind::PointerDown)
            .on(EventKind::PointerEnter)
            .on(EventKind::PointerLeave)
            .on(EventKind::Focus)
            .on(EventKind::Blur)
            .on(EventKind::KeyDown)
    }

    /// Descriptor for the content.
    pub fn content_element(&self) -> ElementDescriptor {
        let hidden = self.is_hidden();
        let portal = self.config().portal.is_some();
        let d = ElementDescriptor::new(CONTENT_PART)
            .with("role", "tooltip")
            .with("tabindex", -1)
            .with("id", self.content_id())
            .flag("hidden", hidden)
            .flag("data-portal", portal)
            .with("data-state", self.data_state())
            .on(EventKind::PointerEnter)
            .on(EventKind::PointerDown);
        if hidden {
            d.with("style", Style::new().set("display", "none"))
        } else {
            d
        }
    }

    /// Descriptor for the arrow, a square of the configured size.
    ///
    /// The size can be overridden with the `--arrow-size` custom property.
    pub fn arrow_element(&self) -> ElementDescriptor {
        let size = format!("var(--arrow-size, {}px)", self.config().arrow_size);
        ElementDescriptor::new(ARROW_PART)
            .flag("data-arrow", true)
            .with(
                "style",
                Style::new()
                    .set("position", "absolute")
                    .set("width", &size)
                    .set("height", &size),
            )
    }
}
