// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewfinder Motion: camera movement kinds, easing, and the drive machine.
//!
//! This crate animates a [`CameraPose`](viewfinder_space::CameraPose)
//! between destinations. It provides:
//!
//! - [`MoveKind`]: six named, cinematography-flavored movement styles.
//!   Kinds differ in *path*, not just timing — translation and zoom are
//!   eased independently, so a dolly-zoom genuinely leads with zoom while a
//!   rack-focus leads with translation.
//! - [`Easing`]: closed-form polynomial curves (`no_std` clean, no math
//!   backend required).
//! - [`MotionTuning`]: the distance→duration model — monotonic per kind,
//!   capped, instant for zero travel.
//! - [`CameraDrive`]: the Idle/Animating state machine. One animation at a
//!   time; a new request deterministically supersedes the in-flight one and
//!   continues from the caller's current pose, so interruptions never snap
//!   backward. The final tick lands exactly on the clamped destination.
//!
//! The drive is scheduler-agnostic: the embedder calls
//! [`CameraDrive::tick`] from whatever frame source it has (browser
//! animation frames, a game loop, or a test harness stepping synthetic
//! time), and commits the yielded poses through its own state layer.
//!
//! ## Quick start
//!
//! ```
//! use kurbo::{Point, Rect};
//! use viewfinder_motion::{CameraDrive, MoveKind};
//! use viewfinder_space::{CameraPose, CanvasBounds};
//!
//! let bounds = CanvasBounds::new(Rect::new(0.0, 0.0, 3000.0, 2000.0), 0.25, 4.0);
//! let mut drive = CameraDrive::default();
//!
//! let here = CameraPose::new(Point::new(200.0, 200.0), 1.0);
//! let there = CameraPose::new(Point::new(1500.0, 800.0), 2.0);
//! drive.request(here, there, MoveKind::parse_lossy("dolly-zoom"), &bounds);
//!
//! let mut pose = here;
//! while let Some(next) = drive.tick(16.0) {
//!     pose = next;
//! }
//! assert_eq!(pose, bounds.clamp(there));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod drive;
mod easing;
mod kind;
mod tuning;

pub use drive::{CameraDrive, DrivePolicy, DriveStart};
pub use easing::Easing;
pub use kind::MoveKind;
pub use tuning::MotionTuning;
