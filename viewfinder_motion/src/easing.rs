// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed-form easing curves.
//!
//! All curves are polynomial so the crate stays `no_std` without a math
//! backend. Each curve maps `0.0` to `0.0` and `1.0` to `1.0` and is
//! monotonically non-decreasing on `[0, 1]`; input outside that range is
//! clamped.

/// A time-remapping curve for animation progress.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Easing {
    /// No remapping.
    Linear,
    /// Slow start, `t³`.
    EaseInCubic,
    /// Slow stop, `1 - (1-t)³`.
    #[default]
    EaseOutCubic,
    /// Slow start and stop, cubic on both halves.
    EaseInOutCubic,
    /// Pronounced slow stop, `1 - (1-t)⁵`.
    EaseOutQuint,
}

impl Easing {
    /// Remaps linear progress `t` through this curve.
    ///
    /// `t` is clamped to `[0, 1]`; non-finite input is treated as `0.0`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        match self {
            Self::Linear => t,
            Self::EaseInCubic => t * t * t,
            Self::EaseOutCubic => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - u * u * u / 2.0
                }
            }
            Self::EaseOutQuint => {
                let u = 1.0 - t;
                1.0 - u * u * u * u * u
            }
        }
    }
}
