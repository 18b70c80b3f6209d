// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Provider configuration.

use kurbo::Size;
use viewfinder_motion::{DrivePolicy, MotionTuning};
use viewfinder_perf::{DeviceSignals, GovernorTuning, QualityLevel};
use viewfinder_radial::RadialTuning;

/// Everything the provider needs from the embedder at construction.
///
/// All fields have sensible defaults; hosts typically override `view_size`
/// and `signals` and leave the rest alone.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CanvasConfig {
    /// Device size of the view in pixels.
    pub view_size: Size,
    /// Duration model for camera movements.
    pub motion: MotionTuning,
    /// Radial menu gesture tuning.
    pub radial: RadialTuning,
    /// Quality governor tuning.
    pub governor: GovernorTuning,
    /// Maximum pending updates per frame.
    pub queue_len: usize,
    /// Device capability signals for the initial quality level.
    pub signals: DeviceSignals,
    /// Screen-space pixels one arrow-key pan step covers.
    pub pan_step_px: f64,
    /// Scale multiplier per zoom step.
    pub zoom_step_factor: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            view_size: Size::new(1280.0, 720.0),
            motion: MotionTuning::default(),
            radial: RadialTuning::default(),
            governor: GovernorTuning::default(),
            queue_len: 128,
            signals: DeviceSignals::default(),
            pan_step_px: 160.0,
            zoom_step_factor: 1.25,
        }
    }
}

/// Maps a quality level to the camera drive's behavior.
///
/// Reduced quality spends fewer frames per transition (shorter durations)
/// and gives up the compound movement paths; it never disables easing, so
/// the worst case is "less cinematic", not "teleporting".
#[must_use]
pub fn drive_policy_for(quality: QualityLevel) -> DrivePolicy {
    match quality {
        QualityLevel::Highest | QualityLevel::High => DrivePolicy::new(1.0, true),
        QualityLevel::Medium => DrivePolicy::new(0.85, true),
        QualityLevel::Low => DrivePolicy::new(0.6, false),
        QualityLevel::Minimal => DrivePolicy::new(0.35, false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lower_quality_means_shorter_and_simpler() {
        let mut prev = drive_policy_for(QualityLevel::Highest);
        for level in [
            QualityLevel::High,
            QualityLevel::Medium,
            QualityLevel::Low,
            QualityLevel::Minimal,
        ] {
            let policy = drive_policy_for(level);
            assert!(policy.duration_scale() <= prev.duration_scale());
            prev = policy;
        }
        assert!(!drive_policy_for(QualityLevel::Low).compound_paths());
        assert!(drive_policy_for(QualityLevel::High).compound_paths());
    }
}
