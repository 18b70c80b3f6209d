// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Camera pose and the travel-cost metric.

use kurbo::Point;

/// Weight of the zoom term in [`travel_cost`], in canvas units per doubling.
///
/// A factor-of-two scale change contributes as much cost as panning this many
/// canvas units. Chosen so that pure zoom transitions between adjacent detail
/// levels animate on the same time scale as a one-section pan.
const ZOOM_COST_WEIGHT: f64 = 600.0;

/// The camera transform over the canvas plane.
///
/// A pose is the point of the canvas under the view center plus a uniform
/// scale (canvas-to-screen magnification). `scale == 1.0` maps one canvas
/// unit to one device pixel; larger values zoom in.
///
/// Poses are plain values. The state layer owning the current pose is
/// expected to clamp through [`CanvasBounds::clamp`](crate::CanvasBounds::clamp)
/// before storing, so a stored pose is always finite and in bounds.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CameraPose {
    /// Canvas point under the center of the view.
    pub center: Point,
    /// Uniform canvas-to-screen magnification.
    pub scale: f64,
}

impl CameraPose {
    /// The identity pose: canvas origin under the view center, no zoom.
    pub const IDENTITY: Self = Self {
        center: Point::ZERO,
        scale: 1.0,
    };

    /// Creates a pose from a center point and scale.
    #[must_use]
    pub const fn new(center: Point, scale: f64) -> Self {
        Self { center, scale }
    }

    /// Returns `true` if the center coordinates and scale are all finite
    /// and the scale is positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.center.is_finite() && self.scale.is_finite() && self.scale > 0.0
    }

    /// Returns `true` if two poses coincide within `epsilon` on both the
    /// center coordinates and the scale.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.center.x - other.center.x).abs() <= epsilon
            && (self.center.y - other.center.y).abs() <= epsilon
            && (self.scale - other.scale).abs() <= epsilon
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Scalar measure of the distance between two poses.
///
/// The cost combines the translation distance between the centers with a
/// zoom term proportional to how far the scale ratio is from `1.0`. It is:
///
/// - zero exactly when the poses are equal,
/// - symmetric in its arguments,
/// - strictly increasing in translation distance for a fixed scale pair.
///
/// Invalid poses (non-finite, non-positive scale) contribute no zoom term;
/// callers clamp poses before animating, so this is a defensive total-ness
/// guarantee rather than an expected path.
#[must_use]
pub fn travel_cost(from: CameraPose, to: CameraPose) -> f64 {
    let pan = (to.center - from.center).hypot();
    let pan = if pan.is_finite() { pan } else { 0.0 };

    let zoom = if from.scale > 0.0
        && to.scale > 0.0
        && from.scale.is_finite()
        && to.scale.is_finite()
    {
        let (lo, hi) = if from.scale <= to.scale {
            (from.scale, to.scale)
        } else {
            (to.scale, from.scale)
        };
        // Ratio-based: a doubling costs one weight unit regardless of the
        // absolute scale, without needing transcendental functions.
        (hi / lo - 1.0) * ZOOM_COST_WEIGHT
    } else {
        0.0
    };

    pan + zoom
}
