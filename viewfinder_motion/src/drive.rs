// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The camera drive: a two-state animation machine.

use viewfinder_space::{CameraPose, CanvasBounds, travel_cost};

use crate::tuning::ARRIVAL_EPSILON;
use crate::{MotionTuning, MoveKind};

/// Behavior knobs the embedder derives from its current quality level.
///
/// The drive itself is quality-agnostic; embedders map their quality ladder
/// onto a policy. Reduced quality typically shortens durations (fewer frames
/// of animation work) and disables the compound movement paths.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DrivePolicy {
    duration_scale: f64,
    compound_paths: bool,
}

impl DrivePolicy {
    /// Creates a policy from a duration multiplier and whether compound
    /// movement paths (dolly-zoom, rack-focus) are allowed.
    ///
    /// The multiplier is clamped to `[0.1, 1.0]`; non-finite values fall
    /// back to `1.0`.
    #[must_use]
    pub fn new(duration_scale: f64, compound_paths: bool) -> Self {
        let duration_scale = if duration_scale.is_finite() {
            duration_scale.clamp(0.1, 1.0)
        } else {
            1.0
        };
        Self {
            duration_scale,
            compound_paths,
        }
    }

    /// Returns the duration multiplier.
    #[must_use]
    pub fn duration_scale(&self) -> f64 {
        self.duration_scale
    }

    /// Returns `true` if compound movement paths are allowed.
    #[must_use]
    pub fn compound_paths(&self) -> bool {
        self.compound_paths
    }
}

impl Default for DrivePolicy {
    fn default() -> Self {
        Self {
            duration_scale: 1.0,
            compound_paths: true,
        }
    }
}

/// Result of submitting a movement request to the drive.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DriveStart {
    /// The destination coincides with the current pose (after clamping);
    /// the pose should be committed immediately, no frames are scheduled.
    Instant(CameraPose),
    /// An animation began (or superseded the in-flight one).
    Animating {
        /// Total duration of the new animation in milliseconds.
        duration_ms: f64,
    },
}

#[derive(Copy, Clone, Debug)]
struct Animation {
    start: CameraPose,
    end: CameraPose,
    kind: MoveKind,
    duration_ms: f64,
    elapsed_ms: f64,
}

/// Drives the camera toward a destination pose over repeated ticks.
///
/// The drive holds at most one animation. A new [`request`](Self::request)
/// supersedes the in-flight one immediately, restarting from the pose the
/// caller passes as `current` — the caller's last committed (interpolated)
/// pose — so an interruption never jumps backward.
///
/// The drive never mutates external state: each [`tick`](Self::tick) yields
/// the pose the embedder should commit (at high priority, so camera frames
/// are never starved by lower-priority queued work). The final tick of an
/// animation yields exactly the clamped destination, with no floating-point
/// residue.
///
/// # Example
///
/// ```
/// use kurbo::{Point, Rect};
/// use viewfinder_motion::{CameraDrive, DriveStart, MoveKind};
/// use viewfinder_space::{CameraPose, CanvasBounds};
///
/// let bounds = CanvasBounds::new(Rect::new(0.0, 0.0, 2000.0, 2000.0), 0.25, 4.0);
/// let mut drive = CameraDrive::default();
///
/// let current = CameraPose::new(Point::new(100.0, 100.0), 1.0);
/// let target = CameraPose::new(Point::new(900.0, 400.0), 2.0);
/// let started = drive.request(current, target, MoveKind::PanTilt, &bounds);
/// assert!(matches!(started, DriveStart::Animating { .. }));
///
/// // Run to completion with 16ms frames.
/// let mut last = current;
/// while let Some(pose) = drive.tick(16.0) {
///     last = pose;
/// }
/// assert_eq!(last, bounds.clamp(target));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CameraDrive {
    animation: Option<Animation>,
    tuning: MotionTuning,
    policy: DrivePolicy,
}

impl CameraDrive {
    /// Creates a drive with the given duration tuning.
    #[must_use]
    pub fn new(tuning: MotionTuning) -> Self {
        Self {
            animation: None,
            tuning,
            policy: DrivePolicy::default(),
        }
    }

    /// Replaces the drive policy.
    ///
    /// Takes effect on the next request; the in-flight animation keeps the
    /// path and duration it started with.
    pub fn set_policy(&mut self, policy: DrivePolicy) {
        self.policy = policy;
    }

    /// Returns the current policy.
    #[must_use]
    pub fn policy(&self) -> DrivePolicy {
        self.policy
    }

    /// Returns `true` while an animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Returns the destination of the in-flight animation, if any.
    #[must_use]
    pub fn target(&self) -> Option<CameraPose> {
        self.animation.map(|a| a.end)
    }

    /// Returns the kind of the in-flight animation, if any.
    #[must_use]
    pub fn kind(&self) -> Option<MoveKind> {
        self.animation.map(|a| a.kind)
    }

    /// Returns the in-flight animation's progress in `[0, 1]`, if any.
    #[must_use]
    pub fn progress(&self) -> Option<f64> {
        self.animation
            .map(|a| (a.elapsed_ms / a.duration_ms).clamp(0.0, 1.0))
    }

    /// Requests a movement from `current` toward `destination`.
    ///
    /// The destination is clamped into `bounds` first. A destination that
    /// coincides with `current` resolves instantly. Any in-flight animation
    /// is cancelled and superseded; the new animation starts from `current`,
    /// which callers supply as their last committed pose.
    pub fn request(
        &mut self,
        current: CameraPose,
        destination: CameraPose,
        kind: MoveKind,
        bounds: &CanvasBounds,
    ) -> DriveStart {
        let end = bounds.clamp(destination);
        let cost = travel_cost(current, end);
        if cost <= ARRIVAL_EPSILON {
            self.animation = None;
            return DriveStart::Instant(end);
        }

        let kind = if kind.is_compound() && !self.policy.compound_paths() {
            MoveKind::PanTilt
        } else {
            kind
        };
        let duration_ms = self.tuning.duration_ms(cost, kind) * self.policy.duration_scale();
        if duration_ms <= 0.0 {
            self.animation = None;
            return DriveStart::Instant(end);
        }

        self.animation = Some(Animation {
            start: current,
            end,
            kind,
            duration_ms,
            elapsed_ms: 0.0,
        });
        DriveStart::Animating { duration_ms }
    }

    /// Advances the in-flight animation by `dt_ms` milliseconds.
    ///
    /// Returns the pose to commit for this frame, or `None` when idle.
    /// Negative or non-finite `dt_ms` is treated as zero (the animation
    /// holds its current frame). The tick that reaches full progress yields
    /// the destination exactly and returns the drive to idle.
    pub fn tick(&mut self, dt_ms: f64) -> Option<CameraPose> {
        let animation = self.animation.as_mut()?;
        let dt = if dt_ms.is_finite() { dt_ms.max(0.0) } else { 0.0 };
        animation.elapsed_ms += dt;

        let t = animation.elapsed_ms / animation.duration_ms;
        if t >= 1.0 {
            let end = animation.end;
            self.animation = None;
            return Some(end);
        }
        let pose = animation
            .kind
            .pose_between(animation.start, animation.end, t);
        Some(pose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Point, Rect};

    fn bounds() -> CanvasBounds {
        CanvasBounds::new(Rect::new(0.0, 0.0, 4000.0, 3000.0), 0.25, 4.0)
    }

    fn run_to_completion(drive: &mut CameraDrive, start: CameraPose) -> CameraPose {
        let mut last = start;
        let mut guard = 0;
        while let Some(pose) = drive.tick(16.0) {
            last = pose;
            guard += 1;
            assert!(guard < 10_000, "animation failed to terminate");
        }
        last
    }

    #[test]
    fn completed_animation_snaps_to_clamped_destination() {
        let b = bounds();
        let mut drive = CameraDrive::default();
        let current = CameraPose::new(Point::new(100.0, 100.0), 1.0);
        // Destination is out of bounds; the drive must land on the clamp.
        let destination = CameraPose::new(Point::new(9999.0, 200.0), 9.0);

        drive.request(current, destination, MoveKind::ZoomIn, &b);
        let last = run_to_completion(&mut drive, current);

        assert_eq!(last, b.clamp(destination));
        assert!(!drive.is_animating());
    }

    #[test]
    fn equal_destination_resolves_instantly() {
        let b = bounds();
        let mut drive = CameraDrive::default();
        let current = CameraPose::new(Point::new(500.0, 500.0), 1.0);

        let start = drive.request(current, current, MoveKind::PanTilt, &b);
        assert_eq!(start, DriveStart::Instant(current));
        assert!(!drive.is_animating());
        assert_eq!(drive.tick(16.0), None);
    }

    #[test]
    fn interruption_restarts_from_committed_pose() {
        let b = bounds();
        let mut drive = CameraDrive::default();
        let current = CameraPose::new(Point::new(0.0, 0.0), 1.0);
        let a = CameraPose::new(Point::new(2000.0, 0.0), 1.0);
        let c = CameraPose::new(Point::new(0.0, 2000.0), 1.0);

        drive.request(current, a, MoveKind::PanTilt, &b);
        let mut committed = current;
        for _ in 0..10 {
            committed = drive.tick(16.0).unwrap();
        }
        assert!(committed.center.x > 0.0);

        // Supersede mid-flight: the new animation starts where we are.
        drive.request(committed, c, MoveKind::PanTilt, &b);
        let first = drive.tick(0.0).unwrap();
        assert!(first.approx_eq(&committed, 1e-9));

        let last = run_to_completion(&mut drive, committed);
        assert_eq!(last, c);
    }

    #[test]
    fn supersession_keeps_a_single_animation() {
        let b = bounds();
        let mut drive = CameraDrive::default();
        let current = CameraPose::new(Point::new(0.0, 0.0), 1.0);
        let a = CameraPose::new(Point::new(1000.0, 0.0), 1.0);
        let c = CameraPose::new(Point::new(0.0, 1000.0), 1.0);

        drive.request(current, a, MoveKind::PanTilt, &b);
        drive.request(current, c, MoveKind::PanTilt, &b);

        assert_eq!(drive.target(), Some(c));
        let last = run_to_completion(&mut drive, current);
        assert_eq!(last, c);
    }

    #[test]
    fn tick_is_robust_to_bad_dt() {
        let b = bounds();
        let mut drive = CameraDrive::default();
        let current = CameraPose::new(Point::new(0.0, 0.0), 1.0);
        let a = CameraPose::new(Point::new(1000.0, 0.0), 1.0);

        drive.request(current, a, MoveKind::PanTilt, &b);
        let p1 = drive.tick(16.0).unwrap();
        let p2 = drive.tick(f64::NAN).unwrap();
        let p3 = drive.tick(-50.0).unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p2, p3);
        assert!(drive.is_animating());
    }

    #[test]
    fn one_giant_tick_completes_immediately() {
        let b = bounds();
        let mut drive = CameraDrive::default();
        let current = CameraPose::new(Point::new(0.0, 0.0), 1.0);
        let a = CameraPose::new(Point::new(1000.0, 500.0), 2.0);

        drive.request(current, a, MoveKind::DollyZoom, &b);
        assert_eq!(drive.tick(60_000.0), Some(a));
        assert!(!drive.is_animating());
    }

    #[test]
    fn economy_policy_degrades_compound_kinds() {
        let b = bounds();
        let mut drive = CameraDrive::default();
        drive.set_policy(DrivePolicy::new(0.5, false));

        let current = CameraPose::new(Point::new(0.0, 0.0), 1.0);
        let a = CameraPose::new(Point::new(1000.0, 0.0), 2.0);
        drive.request(current, a, MoveKind::DollyZoom, &b);
        assert_eq!(drive.kind(), Some(MoveKind::PanTilt));
    }

    #[test]
    fn economy_policy_shortens_durations() {
        let b = bounds();
        let current = CameraPose::new(Point::new(0.0, 0.0), 1.0);
        let a = CameraPose::new(Point::new(1000.0, 0.0), 1.0);

        let mut full = CameraDrive::default();
        let mut economy = CameraDrive::default();
        economy.set_policy(DrivePolicy::new(0.5, true));

        let DriveStart::Animating { duration_ms: d_full } =
            full.request(current, a, MoveKind::PanTilt, &b)
        else {
            panic!("expected animation");
        };
        let DriveStart::Animating { duration_ms: d_eco } =
            economy.request(current, a, MoveKind::PanTilt, &b)
        else {
            panic!("expected animation");
        };
        assert!((d_eco - d_full * 0.5).abs() < 1e-9);
    }

    #[test]
    fn progress_reports_fractional_completion() {
        let b = bounds();
        let mut drive = CameraDrive::default();
        let current = CameraPose::new(Point::new(0.0, 0.0), 1.0);
        let a = CameraPose::new(Point::new(1000.0, 0.0), 1.0);

        assert_eq!(drive.progress(), None);
        let DriveStart::Animating { duration_ms } =
            drive.request(current, a, MoveKind::PanTilt, &b)
        else {
            panic!("expected animation");
        };
        drive.tick(duration_ms / 4.0);
        let progress = drive.progress().unwrap();
        assert!((progress - 0.25).abs() < 1e-9);
    }
}
