// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewfinder Sections: spatial layout of content sections on the canvas.
//!
//! Sections are the destinations of canvas navigation: each occupies a
//! fixed rectangle on the canvas plane, assigned from a grid table at
//! startup and immutable for the session. This crate provides:
//!
//! - [`SectionLayout`]: a validated, immutable table mapping section names
//!   to grid cells, canvas rectangles, and camera focus poses. It also
//!   derives the [`CanvasBounds`](viewfinder_space::CanvasBounds) the
//!   camera is clamped against, and resolves compass directions to
//!   neighboring sections for the radial quick-menu.
//! - [`DetailLevel`]: a coarse step function of camera scale that tells a
//!   section how much content to render, chosen so zooming doesn't churn
//!   re-renders.
//!
//! Content itself is out of scope: a section here is a *place*, and the
//! embedder maps each [`SectionId`] to whatever it renders there.
//!
//! ## Quick start
//!
//! ```
//! use viewfinder_sections::{DetailLevel, SectionLayout};
//! use viewfinder_space::Compass;
//!
//! let layout = SectionLayout::portfolio();
//! let hero = layout.id("hero").unwrap();
//!
//! // The radial menu asks: what lies east of the hero section?
//! let east = layout.target_in_direction(hero, Compass::East).unwrap();
//! assert_eq!(layout.get(east).unwrap().name(), "about");
//!
//! // Zoomed out far enough, sections render as placeholders.
//! assert_eq!(DetailLevel::for_scale(0.2), DetailLevel::Placeholder);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod detail;
mod layout;

pub use detail::DetailLevel;
pub use layout::{GridCell, LayoutError, Section, SectionId, SectionLayout, SectionSpec};
