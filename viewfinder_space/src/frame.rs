// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Screen/canvas coordinate conversion for a view of a given size.

use kurbo::{Affine, Point, Rect, Size};

use crate::CameraPose;

/// A view of a fixed pixel size onto the canvas plane.
///
/// `Viewframe` knows only the device size of the view; combined with a
/// [`CameraPose`] it produces the affine transforms mapping canvas
/// coordinates into screen (device pixel) coordinates and back. The camera
/// center always lands on the view center.
///
/// Conversions are total: a non-finite input point, or an invalid pose,
/// yields the canvas origin (for [`screen_to_canvas`](Self::screen_to_canvas))
/// or the view center (for [`canvas_to_screen`](Self::canvas_to_screen))
/// instead of propagating NaN into caller state.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewframe {
    size: Size,
}

impl Viewframe {
    /// Creates a view frame of the given device size.
    ///
    /// Non-finite or negative dimensions are replaced with zero.
    #[must_use]
    pub fn new(size: Size) -> Self {
        let w = if size.width.is_finite() { size.width.max(0.0) } else { 0.0 };
        let h = if size.height.is_finite() { size.height.max(0.0) } else { 0.0 };
        Self {
            size: Size::new(w, h),
        }
    }

    /// Returns the device size of the view.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the view center in screen coordinates.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.size.width / 2.0, self.size.height / 2.0)
    }

    /// Returns the canvas→screen transform for a pose.
    ///
    /// Invalid poses produce the identity transform.
    #[must_use]
    pub fn canvas_to_screen_transform(&self, pose: CameraPose) -> Affine {
        if !pose.is_valid() {
            return Affine::IDENTITY;
        }
        Affine::translate(self.center().to_vec2())
            * Affine::scale(pose.scale)
            * Affine::translate(-pose.center.to_vec2())
    }

    /// Converts a canvas-space point into screen coordinates.
    ///
    /// A non-finite point or invalid pose yields the view center.
    #[must_use]
    pub fn canvas_to_screen(&self, pt: Point, pose: CameraPose) -> Point {
        if !pt.is_finite() || !pose.is_valid() {
            return self.center();
        }
        self.canvas_to_screen_transform(pose) * pt
    }

    /// Converts a screen-space point into canvas coordinates.
    ///
    /// A non-finite point or invalid pose yields the canvas origin.
    #[must_use]
    pub fn screen_to_canvas(&self, pt: Point, pose: CameraPose) -> Point {
        if !pt.is_finite() || !pose.is_valid() {
            return Point::ZERO;
        }
        self.canvas_to_screen_transform(pose).inverse() * pt
    }

    /// Returns the canvas-space rectangle currently visible through the view.
    ///
    /// Invalid poses yield a zero-area rectangle at the canvas origin.
    #[must_use]
    pub fn visible_canvas_rect(&self, pose: CameraPose) -> Rect {
        if !pose.is_valid() {
            return Rect::ZERO;
        }
        let half_w = self.size.width / (2.0 * pose.scale);
        let half_h = self.size.height / (2.0 * pose.scale);
        Rect::new(
            pose.center.x - half_w,
            pose.center.y - half_h,
            pose.center.x + half_w,
            pose.center.y + half_h,
        )
    }
}
