// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick marks along the track.

use alloc::vec::Vec;

/// One tick mark.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tick {
    /// Index of the tick, from the `min` end.
    pub index: usize,
    /// Slider value the tick stands for.
    pub value: f64,
    /// Distance from the `min` end of the track, in percent.
    pub position: f64,
    /// Translation along the track, in percent of the tick's own size.
    ///
    /// `0` for the first tick, `-100` for the last, `-50` in between, so the
    /// end ticks stay inside the track.
    pub offset: f64,
    /// Whether the tick lies inside the selected range.
    ///
    /// `None` when the slider has no values.
    pub bounded: Option<bool>,
}

/// Number of ticks for a track from `min` to `max`.
///
/// One tick per step, plus a closing tick when the range is a whole number of
/// steps.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Tick counts are small, non-negative integers."
)]
pub fn tick_count(min: f64, max: f64, step: f64) -> usize {
    let difference = max - min;
    let count = (difference / step).ceil();
    let closing = if difference % step == 0.0 { 1.0 } else { 0.0 };
    let count = count + closing;
    if !count.is_finite() || count <= 0.0 {
        return 0;
    }
    count as usize
}

/// All ticks for the track, with their `bounded` flag computed against `values`.
pub fn ticks(min: f64, max: f64, step: f64, values: &[f64]) -> Vec<Tick> {
    let count = tick_count(min, max, step);
    let difference = max - min;
    let low = values.iter().copied().fold(f64::INFINITY, f64::min);
    let high = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    (0..count)
        .map(|index| {
            let value = min + index as f64 * step;
            let position = if difference == 0.0 {
                0.0
            } else {
                index as f64 * (step / difference) * 100.0
            };
            let offset = if index == 0 {
                0.0
            } else if index == count - 1 {
                -100.0
            } else {
                -50.0
            };
            let bounded = match values {
                [] => None,
                [only] => Some(value <= *only),
                _ => Some(low <= value && value <= high),
            };
            Tick {
                index,
                value,
                position,
                offset,
                bounded,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closing_tick_only_on_whole_steps() {
        assert_eq!(tick_count(0.0, 8.0, 3.0), 3);
        assert_eq!(tick_count(0.0, 9.0, 3.0), 4);
        assert_eq!(tick_count(0.0, 100.0, 1.0), 101);
    }

    #[test]
    fn degenerate_range_has_one_tick() {
        let t = ticks(5.0, 5.0, 1.0, &[5.0]);
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].position, 0.0);
        assert_eq!(t[0].offset, 0.0);
    }

    #[test]
    fn positions_and_offsets() {
        let t = ticks(0.0, 9.0, 3.0, &[]);
        let positions: Vec<f64> = t.iter().map(|t| t.position.round()).collect();
        assert_eq!(positions, [0.0, 33.0, 67.0, 100.0]);
        let offsets: Vec<f64> = t.iter().map(|t| t.offset).collect();
        assert_eq!(offsets, [0.0, -50.0, -50.0, -100.0]);
        assert!(t.iter().all(|t| t.bounded.is_none()));
    }

    #[test]
    fn single_value_bounds_from_min() {
        let t = ticks(0.0, 9.0, 3.0, &[4.0]);
        let bounded: Vec<Option<bool>> = t.iter().map(|t| t.bounded).collect();
        assert_eq!(bounded, [Some(true), Some(true), Some(false), Some(false)]);
    }

    #[test]
    fn range_bounds_between_values() {
        let t = ticks(0.0, 9.0, 3.0, &[6.0, 3.0]);
        let bounded: Vec<Option<bool>> = t.iter().map(|t| t.bounded).collect();
        assert_eq!(bounded, [Some(false), Some(true), Some(true), Some(false)]);
    }
}
