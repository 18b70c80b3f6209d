// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rolling frame-duration sampling.

use alloc::vec::Vec;

/// Fixed-capacity rolling window over recent frame durations.
///
/// The sampler keeps the last `capacity` frame durations (milliseconds) and
/// exposes their rolling average. Judgments based on the average should
/// wait for [`is_full`](Self::is_full): a half-filled window over-weights
/// the first frames after startup or a reset.
#[derive(Clone, Debug)]
pub struct FrameSampler {
    samples: Vec<f64>,
    capacity: usize,
    next: usize,
    filled: usize,
    sum: f64,
}

impl FrameSampler {
    /// Creates a sampler over the last `capacity` frames.
    ///
    /// A capacity of zero is treated as one.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: Vec::with_capacity(capacity),
            capacity,
            next: 0,
            filled: 0,
            sum: 0.0,
        }
    }

    /// Returns the window capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of samples currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.filled
    }

    /// Returns `true` if no samples have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filled == 0
    }

    /// Returns `true` once the window holds `capacity` samples.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.filled == self.capacity
    }

    /// Records one frame duration in milliseconds.
    ///
    /// Non-finite or negative durations are discarded.
    pub fn push(&mut self, frame_ms: f64) {
        if !frame_ms.is_finite() || frame_ms < 0.0 {
            return;
        }
        if self.filled < self.capacity {
            self.samples.push(frame_ms);
            self.filled += 1;
            self.sum += frame_ms;
        } else {
            self.sum += frame_ms - self.samples[self.next];
            self.samples[self.next] = frame_ms;
        }
        self.next = (self.next + 1) % self.capacity;
    }

    /// Returns the rolling average frame duration in milliseconds.
    #[must_use]
    pub fn average_ms(&self) -> Option<f64> {
        if self.filled == 0 {
            return None;
        }
        #[expect(clippy::cast_precision_loss, reason = "window sizes are small")]
        let count = self.filled as f64;
        Some(self.sum / count)
    }

    /// Returns the rolling average frame rate in frames per second.
    #[must_use]
    pub fn average_fps(&self) -> Option<f64> {
        let ms = self.average_ms()?;
        if ms <= 0.0 {
            return None;
        }
        Some(1000.0 / ms)
    }

    /// Forgets all samples.
    pub fn reset(&mut self) {
        self.samples.clear();
        self.next = 0;
        self.filled = 0;
        self.sum = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sampler_has_no_average() {
        let sampler = FrameSampler::new(4);
        assert!(sampler.is_empty());
        assert_eq!(sampler.average_ms(), None);
        assert_eq!(sampler.average_fps(), None);
    }

    #[test]
    fn average_over_partial_window() {
        let mut sampler = FrameSampler::new(4);
        sampler.push(10.0);
        sampler.push(20.0);
        assert_eq!(sampler.len(), 2);
        assert!(!sampler.is_full());
        assert_eq!(sampler.average_ms(), Some(15.0));
    }

    #[test]
    fn old_samples_roll_out() {
        let mut sampler = FrameSampler::new(3);
        for ms in [10.0, 10.0, 10.0] {
            sampler.push(ms);
        }
        assert!(sampler.is_full());
        assert_eq!(sampler.average_ms(), Some(10.0));

        sampler.push(40.0); // replaces the first 10.0
        assert_eq!(sampler.average_ms(), Some(20.0));
    }

    #[test]
    fn fps_inverts_milliseconds() {
        let mut sampler = FrameSampler::new(2);
        sampler.push(16.0);
        sampler.push(16.0);
        let fps = sampler.average_fps().unwrap();
        assert!((fps - 62.5).abs() < 1e-9);
    }

    #[test]
    fn bad_samples_are_discarded() {
        let mut sampler = FrameSampler::new(4);
        sampler.push(f64::NAN);
        sampler.push(-5.0);
        sampler.push(f64::INFINITY);
        assert!(sampler.is_empty());
        sampler.push(8.0);
        assert_eq!(sampler.average_ms(), Some(8.0));
    }

    #[test]
    fn reset_empties_the_window() {
        let mut sampler = FrameSampler::new(2);
        sampler.push(5.0);
        sampler.push(6.0);
        sampler.reset();
        assert!(sampler.is_empty());
        assert_eq!(sampler.average_ms(), None);
    }

    #[test]
    fn zero_capacity_is_bumped_to_one() {
        let mut sampler = FrameSampler::new(0);
        assert_eq!(sampler.capacity(), 1);
        sampler.push(7.0);
        sampler.push(9.0);
        assert_eq!(sampler.average_ms(), Some(9.0));
    }
}
