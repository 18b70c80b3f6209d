// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Duration model for camera transitions.

use crate::MoveKind;

/// Travel cost below which a transition is considered already-arrived.
pub(crate) const ARRIVAL_EPSILON: f64 = 1e-6;

/// Tuning for mapping travel cost to animation duration.
///
/// Durations grow linearly with travel cost from a base, scaled per
/// [`MoveKind`], and are capped so far-away destinations never produce an
/// excessively long animation. For a fixed kind the mapping is monotonic:
/// a farther destination never animates faster.
///
/// # Example
///
/// ```
/// use viewfinder_motion::{MotionTuning, MoveKind};
///
/// let tuning = MotionTuning::default();
/// let near = tuning.duration_ms(100.0, MoveKind::PanTilt);
/// let far = tuning.duration_ms(2000.0, MoveKind::PanTilt);
/// assert!(near < far);
/// assert!(far <= tuning.max_ms());
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MotionTuning {
    base_ms: f64,
    per_unit_ms: f64,
    max_ms: f64,
}

impl MotionTuning {
    /// Creates a tuning from a base duration, a per-cost-unit increment,
    /// and a hard cap, all in milliseconds.
    ///
    /// Non-finite or negative values fall back to the defaults.
    #[must_use]
    pub fn new(base_ms: f64, per_unit_ms: f64, max_ms: f64) -> Self {
        let default = Self::default();
        let sane = |v: f64, fallback: f64| if v.is_finite() && v >= 0.0 { v } else { fallback };
        let base_ms = sane(base_ms, default.base_ms);
        let per_unit_ms = sane(per_unit_ms, default.per_unit_ms);
        let max_ms = sane(max_ms, default.max_ms).max(base_ms);
        Self {
            base_ms,
            per_unit_ms,
            max_ms,
        }
    }

    /// Returns the base duration in milliseconds.
    #[must_use]
    pub fn base_ms(&self) -> f64 {
        self.base_ms
    }

    /// Returns the duration cap in milliseconds.
    #[must_use]
    pub fn max_ms(&self) -> f64 {
        self.max_ms
    }

    /// Maps a travel cost and movement kind to a duration in milliseconds.
    ///
    /// A cost at or below the arrival epsilon yields zero: equal-destination
    /// requests resolve instantly with no frames scheduled.
    #[must_use]
    pub fn duration_ms(&self, cost: f64, kind: MoveKind) -> f64 {
        if !cost.is_finite() || cost <= ARRIVAL_EPSILON {
            return 0.0;
        }
        let raw = (self.base_ms + self.per_unit_ms * cost) * kind.duration_scale();
        raw.min(self.max_ms)
    }
}

impl Default for MotionTuning {
    fn default() -> Self {
        Self {
            base_ms: 320.0,
            per_unit_ms: 0.45,
            max_ms: 1400.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_is_monotonic_per_kind() {
        let tuning = MotionTuning::default();
        for kind in MoveKind::ALL {
            let mut prev = 0.0;
            for cost in [0.0, 1.0, 50.0, 400.0, 3000.0, 50_000.0] {
                let d = tuning.duration_ms(cost, kind);
                assert!(d >= prev, "{kind:?} not monotonic at cost {cost}");
                prev = d;
            }
        }
    }

    #[test]
    fn duration_is_capped() {
        let tuning = MotionTuning::default();
        for kind in MoveKind::ALL {
            assert!(tuning.duration_ms(1e9, kind) <= tuning.max_ms());
        }
    }

    #[test]
    fn zero_cost_is_instant() {
        let tuning = MotionTuning::default();
        assert_eq!(tuning.duration_ms(0.0, MoveKind::PanTilt), 0.0);
        assert_eq!(tuning.duration_ms(1e-9, MoveKind::DollyZoom), 0.0);
    }

    #[test]
    fn non_finite_cost_is_instant() {
        let tuning = MotionTuning::default();
        assert_eq!(tuning.duration_ms(f64::NAN, MoveKind::PanTilt), 0.0);
        assert_eq!(tuning.duration_ms(f64::INFINITY, MoveKind::PanTilt), 0.0);
    }

    #[test]
    fn kind_scales_order_durations() {
        let tuning = MotionTuning::default();
        let cost = 500.0;
        let cut = tuning.duration_ms(cost, MoveKind::MatchCut);
        let pan = tuning.duration_ms(cost, MoveKind::PanTilt);
        let dolly = tuning.duration_ms(cost, MoveKind::DollyZoom);
        assert!(cut < pan);
        assert!(pan < dolly);
    }

    #[test]
    fn degenerate_tuning_falls_back_to_defaults() {
        let tuning = MotionTuning::new(f64::NAN, -3.0, f64::INFINITY);
        let default = MotionTuning::default();
        assert_eq!(tuning.base_ms(), default.base_ms());
        assert_eq!(tuning.max_ms(), default.max_ms());
    }

    #[test]
    fn cap_never_undercuts_base() {
        let tuning = MotionTuning::new(500.0, 0.1, 100.0);
        assert_eq!(tuning.max_ms(), 500.0);
    }
}
