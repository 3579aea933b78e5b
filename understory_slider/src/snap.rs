// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Step snapping and pointer-to-value resolution.
//!
//! Both functions round "half up": a value exactly halfway between two steps
//! goes to the upper one. Steps are measured from `min`, so `min` itself is
//! always a valid value while `max` is valid only when it lands on a step or
//! the clamp puts it there.

/// Clamp `value` to `[min, max]` and round it to the nearest step.
///
/// NaN clamps to `min`. The result is idempotent: snapping a snapped value
/// returns it unchanged.
///
/// ```
/// use understory_slider::snap::snap;
///
/// assert_eq!(snap(8.0, 0.0, 10.0, 3.0), 9.0);
/// assert_eq!(snap(-5.0, 0.0, 10.0, 3.0), 0.0);
/// assert_eq!(snap(10.0, 0.0, 10.0, 4.0), 10.0);
/// ```
pub fn snap(value: f64, min: f64, max: f64, step: f64) -> f64 {
    // `f64::max` returns the non-NaN operand, which sends NaN to `min`.
    let value = value.max(min).min(max);
    let mut current_step = ((value - min) / step).floor();
    let midpoint = min + current_step * step + step / 2.0;
    if value >= midpoint {
        current_step += 1.0;
    }
    (min + current_step * step).min(max)
}

/// Resolve a pointer coordinate on the track axis to a slider value.
///
/// `start` and `end` are the coordinates of the track's minimum and maximum
/// ends; they may be in either order. Coordinates beyond the track resolve to
/// the nearest bound. Inside the track the interpolated value is snapped, and
/// a snapped value above `max` is discarded (`None`), leaving the thumb where
/// it was. A zero-length track resolves nothing.
pub fn pointer_to_value(
    coordinate: f64,
    start: f64,
    end: f64,
    min: f64,
    max: f64,
    step: f64,
) -> Option<f64> {
    let span = end - start;
    if span == 0.0 {
        return None;
    }
    let fraction = (coordinate - start) / span;
    let value = fraction * (max - min) + min;
    if !value.is_finite() {
        return None;
    }
    if value < min {
        return Some(min);
    }
    if value > max {
        return Some(max);
    }

    let current_step = ((value - min) / step).floor();
    let midpoint = min + current_step * step + step / 2.0;
    let next_midpoint = min + (current_step + 1.0) * step + step / 2.0;
    let snapped = if value >= midpoint && value < next_midpoint {
        (current_step + 1.0) * step + min
    } else {
        current_step * step + min
    };
    (snapped <= max).then_some(snapped)
}

/// Percentage of the track covered up to `value`.
///
/// A degenerate range (`max == min`) puts every value at `0`.
pub fn position(value: f64, min: f64, max: f64) -> f64 {
    if max == min {
        return 0.0;
    }
    (value - min) / (max - min) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn snap_rounds_half_up() {
        assert_eq!(snap(8.0, 0.0, 10.0, 3.0), 9.0);
        assert_eq!(snap(7.4, 0.0, 10.0, 3.0), 6.0);
        assert_eq!(snap(7.5, 0.0, 10.0, 3.0), 9.0);
        assert_eq!(snap(25.0, 0.0, 100.0, 10.0), 30.0);
    }

    #[test]
    fn snap_clamps_to_bounds() {
        assert_eq!(snap(-5.0, 0.0, 10.0, 3.0), 0.0);
        assert_eq!(snap(10.9, 0.0, 10.0, 3.0), 9.0);
        assert_eq!(snap(11.0, 0.0, 10.0, 4.0), 10.0);
        assert_eq!(snap(f64::NAN, 2.0, 10.0, 1.0), 2.0);
    }

    #[test]
    fn snap_is_measured_from_min() {
        assert_eq!(snap(6.0, 1.0, 20.0, 4.0), 5.0);
        assert_eq!(snap(7.0, 1.0, 20.0, 4.0), 9.0);
    }

    #[test]
    fn pointer_outside_track_hits_bounds() {
        assert_eq!(pointer_to_value(-10.0, 0.0, 100.0, 0.0, 50.0, 5.0), Some(0.0));
        assert_eq!(pointer_to_value(120.0, 0.0, 100.0, 0.0, 50.0, 5.0), Some(50.0));
    }

    #[test]
    fn pointer_inside_track_snaps() {
        // 43% of 0..=50 is 21.5, closest step of 5 is 20.
        assert_eq!(pointer_to_value(43.0, 0.0, 100.0, 0.0, 50.0, 5.0), Some(20.0));
        // 45% is 22.5, exactly halfway: round up.
        assert_eq!(pointer_to_value(45.0, 0.0, 100.0, 0.0, 50.0, 5.0), Some(25.0));
    }

    #[test]
    fn pointer_on_reversed_track() {
        // Vertical track: start (min) at the bottom, y grows downwards.
        assert_eq!(pointer_to_value(100.0, 100.0, 0.0, 0.0, 100.0, 1.0), Some(0.0));
        assert_eq!(pointer_to_value(25.0, 100.0, 0.0, 0.0, 100.0, 1.0), Some(75.0));
    }

    #[test]
    fn pointer_discards_values_past_max() {
        // 0..=10 step 4: the track end resolves to 10, whose next step is 12.
        assert_eq!(pointer_to_value(100.0, 0.0, 100.0, 0.0, 10.0, 4.0), None);
        assert_eq!(pointer_to_value(95.0, 0.0, 100.0, 0.0, 10.0, 4.0), Some(8.0));
        assert_eq!(pointer_to_value(10.0, 5.0, 5.0, 0.0, 10.0, 1.0), None);
    }

    #[test]
    fn degenerate_range_positions_at_zero() {
        assert_eq!(position(5.0, 5.0, 5.0), 0.0);
        assert_eq!(position(25.0, 0.0, 100.0), 25.0);
    }

    proptest! {
        #[test]
        fn snap_is_idempotent(
            v in -1.0e4..1.0e4_f64,
            min in -1.0e3..1.0e3_f64,
            span in 0.0..1.0e3_f64,
            step in 0.01..100.0_f64
        ) {
            let max = min + span;
            let once = snap(v, min, max, step);
            prop_assert_eq!(snap(once, min, max, step), once);
        }

        #[test]
        fn snap_stays_in_bounds(
            v in -1.0e4..1.0e4_f64,
            min in -1.0e3..1.0e3_f64,
            span in 0.0..1.0e3_f64,
            step in 0.01..100.0_f64
        ) {
            let max = min + span;
            let s = snap(v, min, max, step);
            prop_assert!(min <= s && s <= max);
        }
    }
}
