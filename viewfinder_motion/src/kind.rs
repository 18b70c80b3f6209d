// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Movement kinds and their interpolation paths.

use kurbo::Point;
use viewfinder_space::CameraPose;

use crate::Easing;

/// Named camera movement style.
///
/// A kind determines the easing applied to the translation and zoom
/// components of a transition, and a duration scale. The two components are
/// eased independently, which is what distinguishes the compound kinds:
/// [`DollyZoom`](Self::DollyZoom) leads with zoom and trails translation,
/// [`RackFocus`](Self::RackFocus) does the opposite. Every kind lands
/// exactly on the destination at full progress.
///
/// [`PanTilt`](Self::PanTilt) is the default and the universal fallback:
/// requests naming an unrecognized kind degrade to it rather than fail, so
/// navigation always succeeds even when the cinematic style can't be
/// honored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum MoveKind {
    /// Straight pan across the canvas, easing out.
    #[default]
    PanTilt,
    /// Move toward the destination while magnifying.
    ZoomIn,
    /// Pull back from the destination.
    ZoomOut,
    /// Zoom leads, translation trails.
    DollyZoom,
    /// Translation leads, zoom trails.
    RackFocus,
    /// Short, symmetric cut between matched framings.
    MatchCut,
}

impl MoveKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::PanTilt,
        Self::ZoomIn,
        Self::ZoomOut,
        Self::DollyZoom,
        Self::RackFocus,
        Self::MatchCut,
    ];

    /// Parses a kebab-case kind name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "pan-tilt" => Some(Self::PanTilt),
            "zoom-in" => Some(Self::ZoomIn),
            "zoom-out" => Some(Self::ZoomOut),
            "dolly-zoom" => Some(Self::DollyZoom),
            "rack-focus" => Some(Self::RackFocus),
            "match-cut" => Some(Self::MatchCut),
            _ => None,
        }
    }

    /// Parses a kind name, degrading unrecognized names to [`PanTilt`](Self::PanTilt).
    #[must_use]
    pub fn parse_lossy(name: &str) -> Self {
        Self::parse(name).unwrap_or_default()
    }

    /// Returns the kebab-case name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PanTilt => "pan-tilt",
            Self::ZoomIn => "zoom-in",
            Self::ZoomOut => "zoom-out",
            Self::DollyZoom => "dolly-zoom",
            Self::RackFocus => "rack-focus",
            Self::MatchCut => "match-cut",
        }
    }

    /// Returns `true` for kinds whose translation and zoom curves differ.
    #[must_use]
    pub const fn is_compound(self) -> bool {
        matches!(self, Self::DollyZoom | Self::RackFocus)
    }

    /// Duration multiplier relative to [`PanTilt`](Self::PanTilt).
    #[must_use]
    pub const fn duration_scale(self) -> f64 {
        match self {
            Self::PanTilt => 1.0,
            Self::ZoomIn | Self::ZoomOut => 0.9,
            Self::DollyZoom => 1.25,
            Self::RackFocus => 1.1,
            Self::MatchCut => 0.45,
        }
    }

    /// Easing applied to the translation component.
    #[must_use]
    pub const fn translation_easing(self) -> Easing {
        match self {
            Self::PanTilt => Easing::EaseOutCubic,
            Self::ZoomIn | Self::ZoomOut => Easing::EaseInOutCubic,
            Self::DollyZoom => Easing::EaseInOutCubic,
            Self::RackFocus => Easing::EaseOutQuint,
            Self::MatchCut => Easing::EaseInOutCubic,
        }
    }

    /// Easing applied to the zoom component.
    #[must_use]
    pub const fn zoom_easing(self) -> Easing {
        match self {
            Self::DollyZoom => Easing::EaseOutCubic,
            Self::RackFocus => Easing::EaseInCubic,
            other => other.translation_easing(),
        }
    }

    /// Interpolates a pose between `start` and `end` at linear progress `t`.
    ///
    /// Translation interpolates linearly in canvas space under the kind's
    /// translation easing. Zoom interpolates linearly in *inverse* scale
    /// (apparent world size) under the kind's zoom easing, which gives a
    /// perceptually even zoom without transcendental functions. `t` outside
    /// `[0, 1]` is clamped; `t >= 1` returns `end` exactly.
    #[must_use]
    pub fn pose_between(self, start: CameraPose, end: CameraPose, t: f64) -> CameraPose {
        if !(t < 1.0) {
            return end;
        }
        let tt = self.translation_easing().apply(t);
        let tz = self.zoom_easing().apply(t);

        let center = Point::new(
            start.center.x + (end.center.x - start.center.x) * tt,
            start.center.y + (end.center.y - start.center.y) * tt,
        );
        let scale = if start.scale > 0.0 && end.scale > 0.0 {
            let inv = (1.0 / start.scale) + ((1.0 / end.scale) - (1.0 / start.scale)) * tz;
            1.0 / inv
        } else {
            end.scale
        };
        CameraPose::new(center, scale)
    }
}
