// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas bounds and pose clamping.

use kurbo::{Point, Rect};

use crate::CameraPose;

/// Fallback scale range used when a caller supplies a degenerate one.
const DEFAULT_MIN_SCALE: f64 = 0.25;
const DEFAULT_MAX_SCALE: f64 = 4.0;

/// The legal region for camera poses.
///
/// `CanvasBounds` constrains the camera center to a canvas-space rectangle
/// and the scale to a closed range. Keeping the *center* inside the content
/// rectangle guarantees the view always overlaps content, whatever the view
/// size; no pan or zoom can strand the viewport on empty canvas.
///
/// Clamping is idempotent: `clamp(clamp(p)) == clamp(p)` for every pose,
/// including non-finite ones.
///
/// # Example
///
/// ```
/// use kurbo::{Point, Rect};
/// use viewfinder_space::{CameraPose, CanvasBounds};
///
/// let bounds = CanvasBounds::new(Rect::new(0.0, 0.0, 1000.0, 600.0), 0.5, 2.0);
///
/// let wild = CameraPose::new(Point::new(-200.0, 9000.0), 17.0);
/// let tame = bounds.clamp(wild);
/// assert_eq!(tame.center, Point::new(0.0, 600.0));
/// assert_eq!(tame.scale, 2.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CanvasBounds {
    rect: Rect,
    min_scale: f64,
    max_scale: f64,
}

impl CanvasBounds {
    /// Creates bounds from a content rectangle and a scale range.
    ///
    /// The rectangle is normalized so that `x0 <= x1` and `y0 <= y1`. The
    /// scale range is normalized so that `min_scale <= max_scale`; if either
    /// end is non-finite or non-positive the range falls back to
    /// `[0.25, 4.0]`.
    #[must_use]
    pub fn new(rect: Rect, min_scale: f64, max_scale: f64) -> Self {
        let rect = rect.abs();
        let valid = min_scale.is_finite()
            && max_scale.is_finite()
            && min_scale > 0.0
            && max_scale > 0.0;
        let (min_scale, max_scale) = if !valid {
            (DEFAULT_MIN_SCALE, DEFAULT_MAX_SCALE)
        } else if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        Self {
            rect,
            min_scale,
            max_scale,
        }
    }

    /// Returns the content rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Returns the minimum allowed scale.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Returns the maximum allowed scale.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Clamps a pose into these bounds.
    ///
    /// Non-finite center coordinates fall back to the corresponding bounds
    /// center coordinate; a non-finite or non-positive scale falls back to
    /// the minimum scale. The result is always a valid pose.
    #[must_use]
    pub fn clamp(&self, pose: CameraPose) -> CameraPose {
        let center = self.rect.center();
        let x = if pose.center.x.is_finite() {
            pose.center.x.clamp(self.rect.x0, self.rect.x1)
        } else {
            center.x
        };
        let y = if pose.center.y.is_finite() {
            pose.center.y.clamp(self.rect.y0, self.rect.y1)
        } else {
            center.y
        };
        let scale = if pose.scale.is_finite() && pose.scale > 0.0 {
            pose.scale.clamp(self.min_scale, self.max_scale)
        } else {
            self.min_scale
        };
        CameraPose::new(Point::new(x, y), scale)
    }

    /// Returns `true` if the pose is already inside these bounds.
    #[must_use]
    pub fn contains(&self, pose: CameraPose) -> bool {
        self.clamp(pose) == pose
    }
}
