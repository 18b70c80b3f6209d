// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewfinder Canvas: the state provider composing the navigation core.
//!
//! This crate owns the canvas session: the camera pose, the focused
//! section, and the quality level, plus the machinery that mutates them.
//! It wires together the other Viewfinder crates:
//!
//! - every mutation is a [`CanvasAction`] enqueued on the
//!   priority-batched update queue and applied during [`CanvasProvider::frame`]
//!   — at most one visual update per frame, camera commits first;
//! - movement requests go to the camera drive, which emits high-priority
//!   pose commits each frame until it settles exactly on the destination;
//! - the radial quick-menu and the keyboard bindings resolve to the *same*
//!   movement requests, so pointer-driven and keyboard-only sessions reach
//!   identical poses;
//! - frame durations feed the quality governor, whose changes adjust both
//!   the session quality level and the drive's animation policy;
//! - observers subscribe with an [`EventMask`] and hear committed changes
//!   synchronously within the producing frame.
//!
//! The provider is deliberately host-agnostic: no clocks, no event loop,
//! no rendering. A browser shell calls [`CanvasProvider::frame`] from its
//! animation-frame callback; a test harness calls it with synthetic deltas
//! and gets fully deterministic behavior.
//!
//! ## Quick start
//!
//! ```
//! use viewfinder_canvas::{CanvasConfig, CanvasProvider, NavKey};
//! use viewfinder_motion::MoveKind;
//! use viewfinder_sections::SectionLayout;
//!
//! let mut provider = CanvasProvider::new(SectionLayout::portfolio(), CanvasConfig::default());
//!
//! // External navigation UI jumps by name.
//! provider.navigate_to("projects", MoveKind::DollyZoom).unwrap();
//!
//! // Keyboard input goes through the same movement path.
//! provider.key(NavKey::Plus);
//!
//! // The host drives frames; everything applies on frame boundaries.
//! for _ in 0..300 {
//!     provider.frame(16.0);
//! }
//! assert!(!provider.is_animating());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod action;
mod config;
mod events;
mod keys;
mod provider;

pub use action::{CanvasAction, MoveTarget, UnknownSection};
pub use config::{CanvasConfig, drive_policy_for};
pub use events::{CanvasEvent, EventMask, SubscriptionId};
pub use keys::{NavCommand, NavKey, command_for};
pub use provider::{CanvasDebugInfo, CanvasProvider, CanvasState};
