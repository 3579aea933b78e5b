// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider configuration.

use alloc::string::String;

use understory_headless::ConfigError;

/// Axis along which the slider track runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Left to right (or right to left with [`Direction::Rtl`]).
    #[default]
    Horizontal,
    /// Bottom to top (or top to bottom with [`Direction::Rtl`]).
    Vertical,
}

/// Reading direction of the track.
///
/// For vertical sliders, [`Direction::Rtl`] makes the track start at the top.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Values increase from the start edge.
    #[default]
    Ltr,
    /// Values increase from the end edge.
    Rtl,
}

impl Direction {
    /// The value of the `dir` attribute.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl Orientation {
    /// The value of `aria-orientation` / `data-orientation`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

/// Static options for a [`Slider`](crate::Slider).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SliderConfig {
    /// Inclusive lower bound. Default `0`.
    pub min: f64,
    /// Inclusive upper bound. Default `100`.
    pub max: f64,
    /// Distance between valid values, measured from `min`. Default `1`.
    pub step: f64,
    /// Track axis.
    pub orientation: Orientation,
    /// Track direction.
    pub direction: Direction,
    /// Ignore all input while set.
    pub disabled: bool,
    /// Id of the root element. Generated when `None`.
    pub root_id: Option<String>,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
            orientation: Orientation::Horizontal,
            direction: Direction::Ltr,
            disabled: false,
            root_id: None,
        }
    }
}

impl SliderConfig {
    /// Check the numeric options.
    ///
    /// [`Slider::new`](crate::Slider::new) does not call this; it trusts its
    /// input and clamps where it can. Use [`Slider::try_new`](crate::Slider::try_new)
    /// for configuration that comes from outside the program.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.min.is_finite() {
            return Err(ConfigError::NonFinite("min"));
        }
        if !self.max.is_finite() {
            return Err(ConfigError::NonFinite("max"));
        }
        if !self.step.is_finite() {
            return Err(ConfigError::NonFinite("step"));
        }
        if self.step <= 0.0 {
            return Err(ConfigError::NonPositiveStep(self.step));
        }
        if self.min > self.max {
            return Err(ConfigError::InvertedRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}
