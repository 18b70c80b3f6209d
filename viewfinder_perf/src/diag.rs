// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observational interaction diagnostics.
//!
//! The navigation layer reports how users reach destinations (which
//! activation method, how long from activation to selection). Nothing in
//! the system changes behavior based on these records; they exist so an
//! embedder can inspect interaction patterns in a debug overlay or log.

use hashbrown::HashMap;

/// Aggregate latency statistics for one interaction label.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InteractionStats {
    /// Number of recorded interactions.
    pub count: u64,
    /// Mean latency in milliseconds.
    pub mean_ms: f64,
    /// Largest recorded latency in milliseconds.
    pub max_ms: f64,
}

#[derive(Copy, Clone, Debug, Default)]
struct Accumulator {
    count: u64,
    total_ms: f64,
    max_ms: f64,
}

/// Records labeled interaction latencies.
///
/// Labels are static strings chosen by the embedder (for example
/// `"radial.hold-press"`). The recorder is a plain constructor-injected
/// value; each provider owns its own instance.
#[derive(Clone, Debug, Default)]
pub struct InteractionRecorder {
    by_label: HashMap<&'static str, Accumulator>,
}

impl InteractionRecorder {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one interaction under `label`.
    ///
    /// Non-finite or negative latencies are recorded as zero so the count
    /// stays truthful even when a host clock misbehaves.
    pub fn record(&mut self, label: &'static str, latency_ms: f64) {
        let latency_ms = if latency_ms.is_finite() && latency_ms >= 0.0 {
            latency_ms
        } else {
            0.0
        };
        let acc = self.by_label.entry(label).or_default();
        acc.count += 1;
        acc.total_ms += latency_ms;
        acc.max_ms = acc.max_ms.max(latency_ms);
    }

    /// Returns statistics for a label, if anything was recorded under it.
    #[must_use]
    pub fn stats(&self, label: &str) -> Option<InteractionStats> {
        let acc = self.by_label.get(label)?;
        #[expect(clippy::cast_precision_loss, reason = "interaction counts are small")]
        let count = acc.count as f64;
        Some(InteractionStats {
            count: acc.count,
            mean_ms: acc.total_ms / count,
            max_ms: acc.max_ms,
        })
    }

    /// Returns the total number of recorded interactions across labels.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.by_label.values().map(|acc| acc.count).sum()
    }
}
