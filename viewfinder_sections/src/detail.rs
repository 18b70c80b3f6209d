// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Detail levels as a step function of camera scale.

/// How much content a section should render at the current zoom.
///
/// A coarse step function of camera scale, not a continuous value: the few
/// wide bands mean sections only re-render their content when the camera
/// crosses a threshold, not on every zoom frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DetailLevel {
    /// Title card only; the section is a distant thumbnail.
    Placeholder,
    /// Headline content without media.
    Reduced,
    /// Normal reading view.
    Standard,
    /// Everything, including media and embellishments.
    Full,
}

impl DetailLevel {
    /// Scale thresholds between levels, in ascending order.
    const THRESHOLDS: [(f64, Self); 3] = [
        (0.35, Self::Reduced),
        (0.7, Self::Standard),
        (1.4, Self::Full),
    ];

    /// Returns the detail level for a camera scale.
    ///
    /// Non-finite or non-positive scales map to
    /// [`Placeholder`](Self::Placeholder).
    #[must_use]
    pub fn for_scale(scale: f64) -> Self {
        if !scale.is_finite() || scale <= 0.0 {
            return Self::Placeholder;
        }
        let mut level = Self::Placeholder;
        for (threshold, candidate) in Self::THRESHOLDS {
            if scale >= threshold {
                level = candidate;
            }
        }
        level
    }
}
