// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ordered quality ladder.

/// Discrete visual-complexity tier.
///
/// Ordered from least to most expensive. The governor walks this ladder one
/// step at a time; consumers (camera drive, section renderers) read the
/// current level to decide how much animation and embellishment to spend.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QualityLevel {
    /// Bare essentials; static transitions only where possible.
    Minimal,
    /// Reduced animation and effects.
    Low,
    /// Balanced default.
    Medium,
    /// Full animation, most effects.
    High,
    /// Everything on.
    Highest,
}

impl QualityLevel {
    /// All levels, ascending.
    pub const ALL: [Self; 5] = [
        Self::Minimal,
        Self::Low,
        Self::Medium,
        Self::High,
        Self::Highest,
    ];

    /// Returns the next level down, or `None` at the bottom.
    #[must_use]
    pub const fn step_down(self) -> Option<Self> {
        match self {
            Self::Minimal => None,
            Self::Low => Some(Self::Minimal),
            Self::Medium => Some(Self::Low),
            Self::High => Some(Self::Medium),
            Self::Highest => Some(Self::High),
        }
    }

    /// Returns the next level up, or `None` at the top.
    #[must_use]
    pub const fn step_up(self) -> Option<Self> {
        match self {
            Self::Minimal => Some(Self::Low),
            Self::Low => Some(Self::Medium),
            Self::Medium => Some(Self::High),
            Self::High => Some(Self::Highest),
            Self::Highest => None,
        }
    }
}
