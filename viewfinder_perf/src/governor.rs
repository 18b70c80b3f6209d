// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The adaptive quality governor.

use crate::{FrameSampler, QualityLevel};

/// Tuning for the quality governor.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GovernorTuning {
    /// Rolling window size in frames.
    pub window: usize,
    /// Downgrade when the rolling average drops below this rate.
    pub warn_fps: f64,
    /// Upgrade when the rolling average recovers above this rate.
    pub recover_fps: f64,
    /// Consecutive frames a breach must persist before acting.
    pub sustain_frames: u32,
    /// Minimum milliseconds between consecutive quality changes.
    pub min_change_interval_ms: f64,
}

impl Default for GovernorTuning {
    fn default() -> Self {
        Self {
            window: 60,
            warn_fps: 45.0,
            recover_fps: 55.0,
            sustain_frames: 30,
            min_change_interval_ms: 2000.0,
        }
    }
}

/// A quality transition decided by the governor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct QualityChange {
    /// The level before the change.
    pub from: QualityLevel,
    /// The level after the change.
    pub to: QualityLevel,
}

/// Watches frame timing and walks the quality ladder.
///
/// The governor is debounced three ways, so quality never flaps:
///
/// - it judges only a **full** rolling window, never single frames;
/// - a breach must persist for `sustain_frames` consecutive frames;
/// - consecutive changes are separated by `min_change_interval_ms`.
///
/// Recovery never overshoots the ceiling — the level the governor was
/// constructed with, normally the device's initially detected recommended
/// level.
///
/// The governor is a plain value constructed and owned by the application
/// root; independent instances can coexist (and do, in parallel tests).
///
/// # Example
///
/// ```
/// use viewfinder_perf::{GovernorTuning, QualityGovernor, QualityLevel};
///
/// let tuning = GovernorTuning {
///     window: 4,
///     sustain_frames: 6,
///     min_change_interval_ms: 0.0,
///     ..GovernorTuning::default()
/// };
/// let mut governor = QualityGovernor::new(QualityLevel::High, tuning);
///
/// // Sustained 30ms frames (33fps) force a downgrade.
/// let mut change = None;
/// for _ in 0..10 {
///     change = change.or(governor.sample(30.0));
/// }
/// assert_eq!(change.unwrap().to, QualityLevel::Medium);
/// ```
#[derive(Clone, Debug)]
pub struct QualityGovernor {
    sampler: FrameSampler,
    tuning: GovernorTuning,
    level: QualityLevel,
    ceiling: QualityLevel,
    below_streak: u32,
    above_streak: u32,
    since_change_ms: f64,
    changes: u64,
}

impl QualityGovernor {
    /// Creates a governor starting (and capped) at `initial`.
    #[must_use]
    pub fn new(initial: QualityLevel, tuning: GovernorTuning) -> Self {
        Self {
            sampler: FrameSampler::new(tuning.window),
            tuning,
            level: initial,
            ceiling: initial,
            below_streak: 0,
            above_streak: 0,
            // Allow an immediate first change once evidence accumulates.
            since_change_ms: tuning.min_change_interval_ms,
            changes: 0,
        }
    }

    /// Returns the current quality level.
    #[must_use]
    pub fn level(&self) -> QualityLevel {
        self.level
    }

    /// Returns the recovery ceiling.
    #[must_use]
    pub fn ceiling(&self) -> QualityLevel {
        self.ceiling
    }

    /// Returns how many quality changes have been made.
    #[must_use]
    pub fn changes(&self) -> u64 {
        self.changes
    }

    /// Returns the rolling average fps, once the window is full.
    #[must_use]
    pub fn average_fps(&self) -> Option<f64> {
        if self.sampler.is_full() {
            self.sampler.average_fps()
        } else {
            None
        }
    }

    /// Feeds one frame duration and returns a quality change, if due.
    ///
    /// Call once per frame with the frame's duration in milliseconds.
    pub fn sample(&mut self, frame_ms: f64) -> Option<QualityChange> {
        if frame_ms.is_finite() && frame_ms >= 0.0 {
            self.since_change_ms += frame_ms;
        }
        self.sampler.push(frame_ms);
        if !self.sampler.is_full() {
            return None;
        }

        let fps = self.sampler.average_fps()?;
        if fps < self.tuning.warn_fps {
            self.below_streak += 1;
            self.above_streak = 0;
        } else if fps > self.tuning.recover_fps {
            self.above_streak += 1;
            self.below_streak = 0;
        } else {
            // Neutral band between the thresholds: evidence for neither.
            self.below_streak = 0;
            self.above_streak = 0;
        }

        if self.since_change_ms < self.tuning.min_change_interval_ms {
            return None;
        }

        if self.below_streak >= self.tuning.sustain_frames {
            if let Some(lower) = self.level.step_down() {
                return Some(self.commit(lower));
            }
            self.below_streak = 0;
        } else if self.above_streak >= self.tuning.sustain_frames {
            if let Some(higher) = self.level.step_up()
                && higher <= self.ceiling
            {
                return Some(self.commit(higher));
            }
            self.above_streak = 0;
        }
        None
    }

    fn commit(&mut self, to: QualityLevel) -> QualityChange {
        let change = QualityChange {
            from: self.level,
            to,
        };
        self.level = to;
        self.below_streak = 0;
        self.above_streak = 0;
        self.since_change_ms = 0.0;
        self.changes += 1;
        change
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // `sustain_frames` deliberately exceeds `window`: a lone spike can
    // depress at most `window` consecutive averages, so it can never
    // satisfy the sustain requirement on its own.
    fn fast_tuning() -> GovernorTuning {
        GovernorTuning {
            window: 4,
            warn_fps: 45.0,
            recover_fps: 55.0,
            sustain_frames: 6,
            min_change_interval_ms: 0.0,
        }
    }

    /// Feeds `n` identical frames and returns the first change observed.
    fn feed(governor: &mut QualityGovernor, frame_ms: f64, n: usize) -> Option<QualityChange> {
        let mut change = None;
        for _ in 0..n {
            change = change.or(governor.sample(frame_ms));
        }
        change
    }

    #[test]
    fn sustained_slowness_downgrades() {
        let mut governor = QualityGovernor::new(QualityLevel::High, fast_tuning());
        // Window fills after 4 frames, then 6 sustained breaches commit.
        let change = feed(&mut governor, 30.0, 10);
        assert_eq!(
            change,
            Some(QualityChange {
                from: QualityLevel::High,
                to: QualityLevel::Medium,
            })
        );
        assert_eq!(governor.level(), QualityLevel::Medium);
    }

    #[test]
    fn single_spike_does_not_downgrade() {
        let mut governor = QualityGovernor::new(QualityLevel::High, fast_tuning());
        // Healthy frames fill the window first.
        assert_eq!(feed(&mut governor, 16.0, 8), None);
        // One catastrophic frame depresses the average only while it stays
        // in the window, which is shorter than the sustain requirement.
        assert_eq!(governor.sample(250.0), None);
        assert_eq!(feed(&mut governor, 16.0, 12), None);
        assert_eq!(governor.level(), QualityLevel::High);
    }

    #[test]
    fn judgment_waits_for_a_full_window() {
        let mut governor = QualityGovernor::new(QualityLevel::High, fast_tuning());
        assert_eq!(governor.sample(100.0), None);
        assert_eq!(governor.sample(100.0), None);
        assert_eq!(governor.sample(100.0), None);
        assert_eq!(governor.average_fps(), None);
    }

    #[test]
    fn recovery_upgrades_but_never_past_ceiling() {
        let mut governor = QualityGovernor::new(QualityLevel::High, fast_tuning());
        // Long sustained slowness walks down two steps.
        feed(&mut governor, 30.0, 18);
        assert_eq!(governor.level(), QualityLevel::Low);

        // Recover all the way back up to the ceiling.
        feed(&mut governor, 10.0, 60);
        assert_eq!(governor.level(), QualityLevel::High);

        // Sustained excellence never exceeds the initial ceiling.
        assert_eq!(feed(&mut governor, 10.0, 60), None);
        assert_eq!(governor.level(), QualityLevel::High);
    }

    #[test]
    fn rate_limit_spaces_out_changes() {
        let tuning = GovernorTuning {
            min_change_interval_ms: 10_000.0,
            ..fast_tuning()
        };
        let mut governor = QualityGovernor::new(QualityLevel::Highest, tuning);
        // The interval starts satisfied: the first downgrade lands normally.
        let first = feed(&mut governor, 30.0, 10);
        assert_eq!(
            first.map(|c| c.to),
            Some(QualityLevel::High),
            "first downgrade should land"
        );

        // 10 more slow frames = 300ms elapsed, far below the interval:
        // no second change yet even though the breach persists.
        let second = feed(&mut governor, 30.0, 10);
        assert_eq!(second, None);

        // Enough frames to cross the interval: the next change lands.
        let third = feed(&mut governor, 30.0, 330);
        assert_eq!(
            third,
            Some(QualityChange {
                from: QualityLevel::High,
                to: QualityLevel::Medium,
            })
        );
        assert_eq!(governor.changes(), 2);
    }

    #[test]
    fn bottom_of_ladder_saturates() {
        let mut governor = QualityGovernor::new(QualityLevel::Minimal, fast_tuning());
        assert_eq!(feed(&mut governor, 50.0, 40), None);
        assert_eq!(governor.level(), QualityLevel::Minimal);
    }

    #[test]
    fn neutral_band_resets_streaks() {
        let mut governor = QualityGovernor::new(QualityLevel::High, fast_tuning());
        // 20ms = 50fps sits between warn (45) and recover (55).
        assert_eq!(feed(&mut governor, 20.0, 40), None);
        assert_eq!(governor.level(), QualityLevel::High);
    }
}
