// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewfinder Perf: adaptive quality from measured frame performance.
//!
//! Frame-rate degradation is not an error in the canvas navigation system —
//! it is a first-class signal. This crate turns frame timings into discrete
//! quality decisions:
//!
//! - [`FrameSampler`]: rolling window over recent frame durations.
//! - [`QualityLevel`]: the ordered ladder of visual-complexity tiers.
//! - [`QualityGovernor`]: debounced, rate-limited ladder walking — a single
//!   slow frame never changes anything, sustained degradation steps quality
//!   down, sustained recovery steps it back up but never past the initial
//!   ceiling.
//! - [`classify`] / [`DeviceTier`]: pure, data-driven device-capability
//!   classification that picks the starting level.
//! - [`InteractionRecorder`]: observational latency diagnostics for the
//!   navigation affordances.
//!
//! All decisions are driven by values the host passes in (frame durations,
//! device signals); nothing here reads a clock or a platform API, so every
//! policy is deterministic under test.
//!
//! ## Quick start
//!
//! ```
//! use viewfinder_perf::{DeviceSignals, GovernorTuning, QualityGovernor, classify};
//!
//! let tier = classify(DeviceSignals::default());
//! let mut governor = QualityGovernor::new(tier.initial_quality(), GovernorTuning::default());
//!
//! // Feed one frame duration per frame; apply any change it returns.
//! if let Some(change) = governor.sample(16.7) {
//!     // renderer.set_quality(change.to);
//!     let _ = change;
//! }
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod device;
mod diag;
mod governor;
mod quality;
mod sampler;

pub use device::{DeviceSignals, DeviceTier, classify};
pub use diag::{InteractionRecorder, InteractionStats};
pub use governor::{GovernorTuning, QualityChange, QualityGovernor};
pub use quality::QualityLevel;
pub use sampler::FrameSampler;
