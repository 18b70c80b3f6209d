// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewfinder Space: canvas-space camera primitives.
//!
//! This crate provides the small, headless coordinate model shared by the
//! rest of the Viewfinder workspace:
//!
//! - [`CameraPose`]: the camera transform over the canvas plane, expressed
//!   as a center point plus a uniform scale.
//! - [`CanvasBounds`]: the legal region for camera poses, with idempotent
//!   clamping that is total over non-finite input.
//! - [`Viewframe`]: conversion between screen (device pixel) coordinates
//!   and canvas coordinates for a given pose.
//! - [`travel_cost`]: a scalar measure of how far apart two poses are,
//!   combining translation distance with a zoom-ratio term. Animation
//!   duration models are built on top of it.
//! - [`Compass`]: the eight screen-convention compass directions, with
//!   trig-free nearest-direction lookup. Shared by the section layout and
//!   the radial quick-menu.
//!
//! It does **not** own any animation or scheduling. Callers are expected to:
//! - Hold the current [`CameraPose`] in their own state layer.
//! - Clamp every pose through [`CanvasBounds::clamp`] before storing it.
//! - Derive per-frame transforms with [`Viewframe`] when rendering or
//!   hit-testing.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use viewfinder_space::{CameraPose, CanvasBounds, Viewframe};
//!
//! let bounds = CanvasBounds::new(Rect::new(0.0, 0.0, 3200.0, 1800.0), 0.25, 4.0);
//! let frame = Viewframe::new(Size::new(1280.0, 720.0));
//!
//! // A pose outside the canvas is pulled back in.
//! let pose = bounds.clamp(CameraPose::new(Point::new(-500.0, 900.0), 1.0));
//! assert_eq!(pose.center, Point::new(0.0, 900.0));
//!
//! // Convert the screen center back into canvas space: it is the camera center.
//! let canvas_pt = frame.screen_to_canvas(Point::new(640.0, 360.0), pose);
//! assert!((canvas_pt - pose.center).hypot() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - The camera is axis-aligned with a **uniform** scale; rotation is out of
//!   scope for the canvas navigation model.
//! - All functions are pure and deterministic. Malformed (non-finite) input
//!   never panics and never produces a non-finite result; each function
//!   documents its fallback.
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod direction;
mod frame;
mod pose;

pub use bounds::CanvasBounds;
pub use direction::Compass;
pub use frame::Viewframe;
pub use pose::{CameraPose, travel_cost};
