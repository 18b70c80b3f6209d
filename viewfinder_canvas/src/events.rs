// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Subscription events and interest masks.

use viewfinder_motion::MoveKind;
use viewfinder_perf::QualityLevel;
use viewfinder_sections::SectionId;
use viewfinder_space::CameraPose;

bitflags::bitflags! {
    /// Which event classes a subscriber wants to hear about.
    ///
    /// A minimap typically subscribes to `POSE`, a renderer to
    /// `POSE | QUALITY`, a debug overlay to `ALL`.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct EventMask: u8 {
        /// Camera pose commits.
        const POSE = 1 << 0;
        /// Focused-section changes.
        const FOCUS = 1 << 1;
        /// Quality-level changes.
        const QUALITY = 1 << 2;
        /// Camera animation start/settle.
        const MOTION = 1 << 3;
        /// Everything.
        const ALL = Self::POSE.bits() | Self::FOCUS.bits() | Self::QUALITY.bits() | Self::MOTION.bits();
    }
}

/// An observable state change, delivered synchronously during the frame
/// flush that produced it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CanvasEvent {
    /// The camera pose was committed.
    PoseChanged(CameraPose),
    /// The focused section changed.
    FocusChanged(Option<SectionId>),
    /// The quality level changed.
    QualityChanged(QualityLevel),
    /// A camera animation began.
    MotionStarted {
        /// The movement kind actually driving the animation (after any
        /// quality degradation).
        kind: MoveKind,
        /// Total planned duration in milliseconds.
        duration_ms: f64,
    },
    /// The camera animation reached its destination.
    MotionSettled,
}

impl CanvasEvent {
    /// The mask bit this event falls under.
    #[must_use]
    pub fn mask(&self) -> EventMask {
        match self {
            Self::PoseChanged(_) => EventMask::POSE,
            Self::FocusChanged(_) => EventMask::FOCUS,
            Self::QualityChanged(_) => EventMask::QUALITY,
            Self::MotionStarted { .. } | Self::MotionSettled => EventMask::MOTION,
        }
    }
}

/// Handle returned by subscription, used to unsubscribe.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);
