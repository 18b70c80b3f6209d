// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Actions flowing through the update queue.

use alloc::string::String;
use core::fmt;

use kurbo::{Point, Vec2};
use viewfinder_motion::MoveKind;
use viewfinder_perf::QualityLevel;
use viewfinder_queue::Priority;
use viewfinder_sections::SectionId;
use viewfinder_space::CameraPose;

/// Destination of a movement request.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MoveTarget {
    /// A section's focus pose.
    Section(SectionId),
    /// An arbitrary pose (keyboard pans, zoom steps).
    Pose(CameraPose),
}

/// A state mutation request.
///
/// Every mutation of canvas state flows through the update queue as one of
/// these; nothing writes state outside a frame flush. Each action carries an
/// intrinsic [`Priority`]: camera commits are frame-critical, user intents
/// are normal, diagnostics are deferred.
#[derive(Clone, Debug, PartialEq)]
pub enum CanvasAction {
    /// Commit a camera pose (emitted by the drive each animation frame).
    CommitPose(CameraPose),
    /// Begin (or supersede) a camera movement.
    RequestMove {
        /// Where to go.
        target: MoveTarget,
        /// How to get there.
        kind: MoveKind,
    },
    /// Pan by a screen-space delta (converted at apply time using the
    /// then-current scale).
    PanBy(Vec2),
    /// Zoom in (positive) or out (negative) by discrete steps.
    ZoomStep(i32),
    /// Zoom by a factor keeping a screen anchor point fixed (wheel/pinch).
    ZoomAbout {
        /// Scale multiplier; values above `1.0` zoom in.
        factor: f64,
        /// Screen-space point that should stay put.
        anchor: Point,
    },
    /// Set the focused section directly, without moving the camera.
    SetFocus(Option<SectionId>),
    /// Change the quality level.
    SetQuality(QualityLevel),
    /// Record an interaction diagnostic.
    Note {
        /// Static diagnostic label.
        label: &'static str,
        /// Observed latency in milliseconds.
        latency_ms: f64,
    },
}

impl CanvasAction {
    /// The queue priority this action is enqueued at.
    #[must_use]
    pub fn priority(&self) -> Priority {
        match self {
            Self::CommitPose(_) => Priority::High,
            Self::RequestMove { .. }
            | Self::PanBy(_)
            | Self::ZoomStep(_)
            | Self::ZoomAbout { .. }
            | Self::SetFocus(_)
            | Self::SetQuality(_) => Priority::Normal,
            Self::Note { .. } => Priority::Low,
        }
    }
}

/// A navigation request named a section this layout doesn't have.
///
/// This is a configuration error for the embedding application's error
/// boundary, not a recoverable navigation state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownSection {
    name: String,
}

impl UnknownSection {
    pub(crate) fn new(name: &str) -> Self {
        Self { name: name.into() }
    }

    /// The section name that failed to resolve.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for UnknownSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown section {:?}", self.name)
    }
}

impl core::error::Error for UnknownSection {}
