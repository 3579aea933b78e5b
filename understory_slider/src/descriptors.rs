// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element descriptors for the slider parts.
//!
//! The root and range carry no handlers: pointer input is delivered at
//! document level through [`Slider::pointer_down`] and friends. Thumbs ask for
//! key presses, routed to [`Slider::key_down`] with the thumb's index.

use alloc::format;
use alloc::vec::Vec;
use understory_headless::descriptor::{ElementDescriptor, Style};
use understory_headless::event::EventKind;

use crate::config::Orientation;
use crate::layout::{self, Placement};
use crate::slider::Slider;
use crate::ticks::Tick;

/// Part name of the root element.
pub const ROOT_PART: &str = "slider";
/// Part name of the range highlight.
pub const RANGE_PART: &str = "slider-range";
/// Part name of a thumb.
pub const THUMB_PART: &str = "slider-thumb";
/// Part name of a tick mark.
pub const TICK_PART: &str = "slider-tick";

fn placed(style: Style, placement: &Placement) -> Style {
    style
        .set(placement.edge.property(), format!("{}%", placement.percent))
        .set("translate", &placement.translate)
}

impl Slider {
    /// Descriptor for the root element.
    pub fn root_element(&self) -> ElementDescriptor {
        let touch_action = match (self.is_disabled(), self.orientation()) {
            (true, _) => None,
            (false, Orientation::Horizontal) => Some("pan-y"),
            (false, Orientation::Vertical) => Some("pan-x"),
        };
        ElementDescriptor::new(ROOT_PART)
            .with("id", self.root_id())
            .with("dir", self.direction().as_str())
            .flag("disabled", self.is_disabled())
            .flag("data-disabled", self.is_disabled())
            .with("data-orientation", self.orientation().as_str())
            .with(
                "style",
                Style::new()
                    .set("position", "relative")
                    .set_opt("touch-action", touch_action),
            )
    }

    /// Descriptor for the range highlight.
    pub fn range_element(&self) -> ElementDescriptor {
        let insets = self.range_insets();
        let pct = |v: Option<f64>| v.map(|v| format!("{v}%"));
        let style = Style::new()
            .set("position", "absolute")
            .set_opt("left", pct(insets.left))
            .set_opt("right", pct(insets.right))
            .set_opt("top", pct(insets.top))
            .set_opt("bottom", pct(insets.bottom));
        ElementDescriptor::new(RANGE_PART).with("style", style)
    }

    /// Descriptor for thumb `index`.
    pub fn thumb_element(&self, index: usize) -> ElementDescriptor {
        let value = self.thumb_value(index);
        let style = placed(Style::new().set("position", "absolute"), &self.thumb_placement(index));
        ElementDescriptor::new(THUMB_PART)
            .with("id", self.thumb_id(index))
            .with("role", "slider")
            .with("aria-valuemin", self.min())
            .with("aria-valuemax", self.max())
            .with("aria-valuenow", value)
            .with("aria-disabled", self.is_disabled())
            .with("aria-orientation", self.orientation().as_str())
            .with("tabindex", if self.is_disabled() { -1 } else { 0 })
            .with("style", style)
            .with("data-value", value)
            .on(EventKind::KeyDown)
    }

    /// Descriptors for every thumb.
    pub fn thumb_elements(&self) -> Vec<ElementDescriptor> {
        (0..self.thumb_count()).map(|i| self.thumb_element(i)).collect()
    }

    /// Descriptors for every tick mark.
    pub fn tick_elements(&self) -> Vec<ElementDescriptor> {
        self.ticks().iter().map(|t| self.tick_element(t)).collect()
    }

    fn tick_element(&self, tick: &Tick) -> ElementDescriptor {
        let placement = layout::tick_placement(
            self.orientation(),
            self.direction(),
            tick.position,
            tick.offset,
        );
        ElementDescriptor::new(TICK_PART)
            .with("style", placed(Style::new().set("position", "absolute"), &placement))
            .flag("data-bounded", tick.bounded == Some(true))
            .with("data-value", tick.value)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use understory_headless::descriptor::AttrValue;

    use crate::config::{Direction, SliderConfig};

    use super::*;

    fn slider(config: SliderConfig, values: Vec<f64>) -> Slider {
        Slider::new(
            SliderConfig {
                root_id: Some("s".into()),
                ..config
            },
            values,
        )
    }

    #[test]
    fn root_reflects_orientation_and_disabled() {
        let s = slider(SliderConfig::default(), vec![10.0]);
        let root = s.root_element();
        assert_eq!(root.get_str("id").as_deref(), Some("s"));
        assert_eq!(root.get_str("dir").as_deref(), Some("ltr"));
        assert_eq!(
            root.get_str("style").as_deref(),
            Some("position: relative; touch-action: pan-y;")
        );
        assert_eq!(root.get("disabled"), None);

        let s = slider(
            SliderConfig {
                disabled: true,
                orientation: Orientation::Vertical,
                ..SliderConfig::default()
            },
            vec![10.0],
        );
        let root = s.root_element();
        assert_eq!(root.get("data-disabled"), Some(&AttrValue::Present));
        assert_eq!(root.get_str("data-orientation").as_deref(), Some("vertical"));
        assert_eq!(root.get_str("style").as_deref(), Some("position: relative;"));
    }

    #[test]
    fn thumb_carries_value_and_placement() {
        let s = slider(
            SliderConfig {
                direction: Direction::Rtl,
                ..SliderConfig::default()
            },
            vec![25.0, 75.0],
        );
        let thumbs = s.thumb_elements();
        assert_eq!(thumbs.len(), 2);
        let t = &thumbs[1];
        assert_eq!(t.get_str("id").as_deref(), Some("s-thumb-1"));
        assert_eq!(t.get("aria-valuenow"), Some(&AttrValue::Number(75.0)));
        assert_eq!(t.get("tabindex"), Some(&AttrValue::Number(0.0)));
        assert_eq!(t.get("aria-disabled"), Some(&AttrValue::Bool(false)));
        assert_eq!(
            t.get_str("style").as_deref(),
            Some("position: absolute; right: 75%; translate: 50% 0;")
        );
        assert!(t.handles(EventKind::KeyDown));
    }

    #[test]
    fn range_spans_selected_values() {
        let s = slider(SliderConfig::default(), vec![20.0, 70.0]);
        assert_eq!(
            s.range_element().get_str("style").as_deref(),
            Some("position: absolute; left: 20%; right: 30%;")
        );
    }

    #[test]
    fn ticks_mark_bounded_range() {
        let s = slider(
            SliderConfig {
                max: 9.0,
                step: 3.0,
                ..SliderConfig::default()
            },
            vec![3.0, 6.0],
        );
        let ticks = s.tick_elements();
        assert_eq!(ticks.len(), 4);
        assert_eq!(ticks[0].get("data-bounded"), None);
        assert_eq!(ticks[1].get("data-bounded"), Some(&AttrValue::Present));
        assert_eq!(ticks[2].get("data-bounded"), Some(&AttrValue::Present));
        assert_eq!(ticks[3].get("data-bounded"), None);
        assert_eq!(
            ticks[0].get_str("style").as_deref(),
            Some("position: absolute; left: 0%; translate: 0% 0;")
        );
        assert_eq!(
            ticks[3].get_str("style").as_deref(),
            Some("position: absolute; left: 100%; translate: -100% 0;")
        );
    }
}
