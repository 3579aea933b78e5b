// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slider engine.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use kurbo::Point;
use understory_headless::ConfigError;
use understory_headless::element::ElementLookup;
use understory_headless::event::{Key, KeyEvent, Modifiers, Outcome, PointerButton};
use understory_headless::id::id_or_generate;
use understory_headless::value::Value;

use crate::config::{Direction, Orientation, SliderConfig};
use crate::layout::{self, Placement, RangeInsets};
use crate::snap::{pointer_to_value, position, snap};
use crate::ticks::{self, Tick};

/// A plain snapshot of a slider's state.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderState {
    /// One value per thumb, in thumb order.
    pub values: Vec<f64>,
    /// Inclusive lower bound.
    pub min: f64,
    /// Inclusive upper bound.
    pub max: f64,
    /// Step size.
    pub step: f64,
    /// Track axis.
    pub orientation: Orientation,
    /// Track direction.
    pub direction: Direction,
    /// Whether input is ignored.
    pub disabled: bool,
}

/// A headless slider with one or more thumbs.
///
/// The slider owns (or borrows through an [`ExternalValue`]) an ordered list
/// of values, one per thumb. Input handlers keep that list non-decreasing:
/// when a thumb is pushed past its neighbors its value moves to the slot that
/// keeps the order and that slot becomes the active thumb, so the handle under
/// the pointer (or keyboard focus) keeps moving in the same direction.
///
/// Thumb elements are identified as `<root id>-thumb-<index>`; the host must
/// give them those ids for pointer and focus handling to find them.
///
/// [`ExternalValue`]: understory_headless::value::ExternalValue
#[derive(Debug)]
pub struct Slider {
    values: Value<Vec<f64>>,
    min: f64,
    max: f64,
    step: f64,
    orientation: Orientation,
    direction: Direction,
    disabled: bool,
    root_id: String,
    active_thumb: Option<usize>,
    dragging: bool,
}

impl Slider {
    /// Create a slider without validating `config`.
    ///
    /// Existing values are snapped to the configured steps.
    pub fn new(config: SliderConfig, values: impl Into<Value<Vec<f64>>>) -> Self {
        let mut slider = Self {
            values: values.into(),
            min: config.min,
            max: config.max,
            step: config.step,
            orientation: config.orientation,
            direction: config.direction,
            disabled: config.disabled,
            root_id: id_or_generate(config.root_id),
            active_thumb: None,
            dragging: false,
        };
        slider.settle();
        slider
    }

    /// Create a slider, rejecting a configuration that fails
    /// [`SliderConfig::validate`].
    pub fn try_new(
        config: SliderConfig,
        values: impl Into<Value<Vec<f64>>>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config, values))
    }

    /// A snapshot of the current state.
    pub fn state(&self) -> SliderState {
        SliderState {
            values: self.values(),
            min: self.min,
            max: self.max,
            step: self.step,
            orientation: self.orientation,
            direction: self.direction,
            disabled: self.disabled,
        }
    }

    /// Current values, one per thumb.
    pub fn values(&self) -> Vec<f64> {
        self.values.get()
    }

    /// Replace all values. They are snapped afterwards.
    pub fn set_values(&mut self, values: Vec<f64>) {
        self.values.set_or_warn(values, "slider values");
        self.settle();
    }

    /// Number of thumbs. An empty value list still renders one thumb.
    pub fn thumb_count(&self) -> usize {
        self.values.get().len().max(1)
    }

    /// Value of thumb `index`, or `min` if there is none.
    pub fn thumb_value(&self, index: usize) -> f64 {
        self.values.get().get(index).copied().unwrap_or(self.min)
    }

    /// Id of the root element.
    pub fn root_id(&self) -> &str {
        &self.root_id
    }

    /// Id of thumb `index`.
    pub fn thumb_id(&self, index: usize) -> String {
        format!("{}-thumb-{index}", self.root_id)
    }

    /// Inclusive lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Inclusive upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Step size.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Track axis.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Track direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Whether input is ignored.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// The thumb that pointer moves currently drive.
    pub fn active_thumb(&self) -> Option<usize> {
        self.active_thumb
    }

    /// Whether a pointer drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Change the lower bound and re-snap.
    pub fn set_min(&mut self, min: f64) {
        self.min = min;
        self.settle();
    }

    /// Change the upper bound and re-snap.
    pub fn set_max(&mut self, max: f64) {
        self.max = max;
        self.settle();
    }

    /// Change the step and re-snap.
    pub fn set_step(&mut self, step: f64) {
        self.step = step;
        self.settle();
    }

    /// Change the track axis.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    /// Change the track direction.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Enable or disable input. Disabling ends any drag.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.dragging = false;
        }
    }

    /// Percentage of the track up to `value`.
    pub fn position(&self, value: f64) -> f64 {
        position(value, self.min, self.max)
    }

    /// Edge insets of the range highlight.
    ///
    /// A single thumb highlights from the `min` end up to the thumb.
    pub fn range_insets(&self) -> RangeInsets {
        let values = self.thumb_values();
        let low = values.iter().copied().fold(f64::INFINITY, f64::min);
        let high = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let start = if values.len() > 1 {
            self.position(low)
        } else {
            0.0
        };
        let end = 100.0 - self.position(high);
        layout::range_insets(self.orientation, self.direction, start, end)
    }

    /// Placement of thumb `index`.
    pub fn thumb_placement(&self, index: usize) -> Placement {
        let percent = self.position(self.thumb_value(index));
        layout::thumb_placement(self.orientation, self.direction, percent)
    }

    /// Tick marks for the current bounds, step and values.
    pub fn ticks(&self) -> Vec<Tick> {
        ticks::ticks(self.min, self.max, self.step, &self.values.get())
    }

    /// Move thumb `index` towards `raw`.
    ///
    /// Pushing a thumb past one or more neighbors moves its value into the
    /// slot that keeps the list ordered, shifting the passed values by one.
    /// The thumb at that slot becomes active and is focused through `host`.
    /// Otherwise the thumb takes the snapped value. NaN is ignored.
    pub fn update_thumb<L: ElementLookup + ?Sized>(&mut self, index: usize, raw: f64, host: &mut L) {
        if raw.is_nan() {
            tracing::debug!(target: "understory::slider", index, "ignoring NaN thumb value");
            return;
        }
        if let Some(target) = self.write_thumb(index, raw) {
            let id = self.thumb_id(target);
            if !host.focus(&id) {
                tracing::debug!(target: "understory::slider", %id, "swapped thumb has no element");
            }
        }
        self.settle();
    }

    /// Write `raw` into the value list. Returns the new active index after a swap.
    fn write_thumb(&mut self, index: usize, raw: f64) -> Option<usize> {
        let mut values = self.values.get();
        if values.is_empty() {
            let len = index.checked_add(1)?;
            if values.try_reserve_exact(len).is_err() {
                tracing::warn!(target: "understory::slider", index, "thumb index out of range");
                return None;
            }
            values.resize(len, self.min);
            values[index] = raw;
            self.values.set_or_warn(values, "slider values");
            return None;
        }

        let current = *values.get(index)?;
        if raw == current {
            return None;
        }
        // Number of neighbors `raw` passes on each side.
        let below = if raw < current {
            values[..index].iter().rev().take_while(|&&v| raw < v).count()
        } else {
            0
        };
        let above = if raw > current {
            values[index + 1..].iter().take_while(|&&v| raw > v).count()
        } else {
            0
        };
        if below > 0 {
            return self.swap(values, index, index - below, raw);
        }
        if above > 0 {
            return self.swap(values, index, index + above, raw);
        }

        values[index] = snap(raw, self.min, self.max, self.step);
        self.values.set_or_warn(values, "slider values");
        None
    }

    // Moves the thumb to `target`, shifting the passed neighbors by one slot.
    // Values and the active index change together or not at all.
    fn swap(&mut self, mut values: Vec<f64>, index: usize, target: usize, raw: f64) -> Option<usize> {
        values.remove(index);
        values.insert(target, raw);
        if let Err(err) = self.values.set(values) {
            tracing::warn!(target: "understory::slider", %err, "thumb swap ignored");
            return None;
        }
        self.active_thumb = Some(target);
        tracing::debug!(target: "understory::slider", from = index, to = target, "thumbs swapped");
        Some(target)
    }

    /// Re-snap every value to the current bounds and step.
    pub fn settle(&mut self) {
        let values = self.values.get();
        let snapped: Vec<f64> = values
            .iter()
            .map(|&v| snap(v, self.min, self.max, self.step))
            .collect();
        if snapped != values {
            self.values.set_or_warn(snapped, "slider values");
        }
    }

    /// The thumb whose center is nearest `point` along the track axis.
    ///
    /// Every thumb is blurred first. Ties go to the lower index; thumbs without
    /// an element are skipped.
    pub fn closest_thumb<L: ElementLookup + ?Sized>(&self, point: Point, host: &mut L) -> Option<usize> {
        let mut closest: Option<(usize, f64)> = None;
        for index in 0..self.thumb_count() {
            let id = self.thumb_id(index);
            let Some(bounds) = host.bounds(&id) else {
                continue;
            };
            host.blur(&id);
            let center = bounds.center();
            let distance = match self.orientation {
                Orientation::Horizontal => (point.x - center.x).abs(),
                Orientation::Vertical => (point.y - center.y).abs(),
            };
            if closest.is_none_or(|(_, best)| distance < best) {
                closest = Some((index, distance));
            }
        }
        closest.map(|(index, _)| index)
    }

    /// Handle a document-level pointer press.
    ///
    /// Only primary presses on `target` inside the root start a drag: the
    /// closest thumb becomes active and focused, and jumps to the pointer.
    pub fn pointer_down<L: ElementLookup + ?Sized>(
        &mut self,
        point: Point,
        button: PointerButton,
        target: &str,
        host: &mut L,
    ) -> Outcome {
        if self.disabled || button != PointerButton::Primary {
            return Outcome::Continue;
        }
        let Some(closest) = self.closest_thumb(point, host) else {
            return Outcome::Continue;
        };
        if host.bounds(&self.root_id).is_none() || !host.contains(&self.root_id, target) {
            return Outcome::Continue;
        }

        self.active_thumb = Some(closest);
        host.focus(&self.thumb_id(closest));
        self.dragging = true;
        self.pointer_move(point, host);
        Outcome::PreventDefault
    }

    /// Handle a document-level pointer move. Only acts while dragging.
    pub fn pointer_move<L: ElementLookup + ?Sized>(&mut self, point: Point, host: &mut L) -> Outcome {
        if self.disabled || !self.dragging {
            return Outcome::Continue;
        }
        let (Some(active), Some(root)) = (self.active_thumb, host.bounds(&self.root_id)) else {
            return Outcome::PreventDefault;
        };
        host.focus(&self.thumb_id(active));

        let (start, end) = layout::track_ends(self.orientation, self.direction, root);
        let coordinate = match self.orientation {
            Orientation::Horizontal => point.x,
            Orientation::Vertical => point.y,
        };
        match pointer_to_value(coordinate, start, end, self.min, self.max, self.step) {
            Some(value) => {
                tracing::trace!(target: "understory::slider", active, value, "pointer resolved");
                self.update_thumb(active, value, host);
            }
            None => {
                tracing::trace!(target: "understory::slider", active, coordinate, "pointer past last step");
            }
        }
        Outcome::PreventDefault
    }

    /// Handle a document-level pointer release. Ends the drag.
    pub fn pointer_up(&mut self) {
        self.dragging = false;
    }

    /// Handle the pointer leaving the document. Ends the drag.
    pub fn pointer_leave(&mut self) {
        self.dragging = false;
    }

    /// Handle a key press on thumb `index`.
    ///
    /// `Home`/`End` jump to the bounds. Arrows step towards the bound they
    /// point at, or jump to it with [`Modifiers::META`]. Left/right only apply
    /// to horizontal sliders; `rtl` reverses them, and on vertical sliders it
    /// also reverses up/down.
    pub fn key_down<L: ElementLookup + ?Sized>(
        &mut self,
        index: usize,
        event: KeyEvent,
        host: &mut L,
    ) -> Outcome {
        if self.disabled {
            return Outcome::Continue;
        }
        let v = self.thumb_value(index);
        let extend = event.modifiers.contains(Modifiers::META);
        let ltr = self.direction == Direction::Ltr;
        let horizontal = self.orientation == Orientation::Horizontal;
        let top_to_bottom = !horizontal && !ltr;

        let target = match event.key {
            Key::Home => Some(self.min),
            Key::End => Some(self.max),
            Key::ArrowLeft | Key::ArrowRight if !horizontal => return Outcome::Continue,
            // Left decreases in ltr; right decreases in rtl.
            Key::ArrowLeft | Key::ArrowRight => {
                self.arrow_target(v, extend, ltr == (event.key == Key::ArrowLeft))
            }
            // Up decreases only on top-to-bottom tracks.
            Key::ArrowUp | Key::ArrowDown => {
                self.arrow_target(v, extend, top_to_bottom == (event.key == Key::ArrowUp))
            }
            _ => return Outcome::Continue,
        };
        if let Some(target) = target {
            self.update_thumb(index, target, host);
        }
        Outcome::PreventDefault
    }

    fn arrow_target(&self, v: f64, extend: bool, decrease: bool) -> Option<f64> {
        match (extend, decrease) {
            (true, true) => Some(self.min),
            (true, false) => Some(self.max),
            (false, true) => (v > self.min).then_some(v - self.step),
            (false, false) => (v < self.max).then_some(v + self.step),
        }
    }

    /// Values as thumbs see them: an empty list reads as one thumb at `min`.
    pub(crate) fn thumb_values(&self) -> Vec<f64> {
        let values = self.values.get();
        if values.is_empty() {
            alloc::vec![self.min]
        } else {
            values
        }
    }
}
