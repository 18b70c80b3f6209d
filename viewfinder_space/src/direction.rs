// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compass directions on the canvas plane.

use core::f64::consts::FRAC_1_SQRT_2;

use kurbo::Vec2;

/// One of the eight compass directions.
///
/// Directions follow screen convention: the canvas y-axis grows downward,
/// so [`North`](Self::North) points toward negative y.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Compass {
    /// Up.
    North,
    /// Up-right.
    NorthEast,
    /// Right.
    East,
    /// Down-right.
    SouthEast,
    /// Down.
    South,
    /// Down-left.
    SouthWest,
    /// Left.
    West,
    /// Up-left.
    NorthWest,
}

impl Compass {
    /// All directions, clockwise from [`North`](Self::North).
    pub const ALL: [Self; 8] = [
        Self::North,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::South,
        Self::SouthWest,
        Self::West,
        Self::NorthWest,
    ];

    /// Unit vector of this direction in screen convention.
    #[must_use]
    pub const fn unit(self) -> Vec2 {
        match self {
            Self::North => Vec2::new(0.0, -1.0),
            Self::NorthEast => Vec2::new(FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
            Self::East => Vec2::new(1.0, 0.0),
            Self::SouthEast => Vec2::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2),
            Self::South => Vec2::new(0.0, 1.0),
            Self::SouthWest => Vec2::new(-FRAC_1_SQRT_2, FRAC_1_SQRT_2),
            Self::West => Vec2::new(-1.0, 0.0),
            Self::NorthWest => Vec2::new(-FRAC_1_SQRT_2, -FRAC_1_SQRT_2),
        }
    }

    /// Returns this direction's position in [`Compass::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::North => 0,
            Self::NorthEast => 1,
            Self::East => 2,
            Self::SouthEast => 3,
            Self::South => 4,
            Self::SouthWest => 5,
            Self::West => 6,
            Self::NorthWest => 7,
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::North => Self::South,
            Self::NorthEast => Self::SouthWest,
            Self::East => Self::West,
            Self::SouthEast => Self::NorthWest,
            Self::South => Self::North,
            Self::SouthWest => Self::NorthEast,
            Self::West => Self::East,
            Self::NorthWest => Self::SouthEast,
        }
    }

    /// Returns the direction nearest to `v`, or `None` for a zero or
    /// non-finite vector.
    ///
    /// Nearest is decided by dot product against the unit vectors, so no
    /// trigonometry is involved. Exact ties resolve to the earlier entry in
    /// [`Compass::ALL`] (clockwise from north).
    #[must_use]
    pub fn nearest(v: Vec2) -> Option<Self> {
        if !v.x.is_finite() || !v.y.is_finite() || (v.x == 0.0 && v.y == 0.0) {
            return None;
        }
        let mut best = Self::North;
        let mut best_dot = f64::NEG_INFINITY;
        for dir in Self::ALL {
            let dot = dir.unit().dot(v);
            if dot > best_dot {
                best = dir;
                best_dot = dot;
            }
        }
        Some(best)
    }
}
