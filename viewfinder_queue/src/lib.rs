// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewfinder Queue: priority-batched frame update queue.
//!
//! State mutations in the Viewfinder canvas flow through a single queue that
//! is flushed exactly once per frame. Batching rapid input (pointer moves,
//! wheel ticks) onto frame boundaries guarantees at most one visual update
//! per frame and keeps mutation strictly ordered.
//!
//! The queue is deliberately lossy under pressure: it holds at most
//! `max_len` entries, and when full it evicts the oldest entry of the lowest
//! priority present — searching [`Priority::Low`], then [`Priority::Normal`],
//! never [`Priority::High`]. Overflow is a degrade-gracefully policy, not an
//! error; drops are visible through [`QueueStats`].
//!
//! ## Ordering
//!
//! [`UpdateQueue::flush`] applies all `High` entries before any `Normal`,
//! and all `Normal` before any `Low`. Within a priority, insertion order is
//! preserved.
//!
//! ## Quick start
//!
//! ```
//! use viewfinder_queue::{Priority, UpdateQueue};
//!
//! let mut queue = UpdateQueue::new(64);
//! queue.enqueue("pan", Priority::Normal);
//! queue.enqueue("commit-pose", Priority::High);
//! queue.enqueue("diagnostics", Priority::Low);
//!
//! let mut applied = Vec::new();
//! queue.flush(|item| applied.push(item));
//! assert_eq!(applied, vec!["commit-pose", "pan", "diagnostics"]);
//! assert!(queue.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use smallvec::SmallVec;

/// Inline capacity for queued entries.
///
/// A typical frame carries a handful of updates; the inline buffer avoids
/// heap allocation until input gets unusually busy.
const INLINE_ENTRIES: usize = 8;

/// Priority class of a queued update.
///
/// Ordered: `Low < Normal < High`. Camera pose commits use `High` so they
/// are never starved by gesture or diagnostic traffic.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    /// Deferred work: diagnostics, detail prefetch hints.
    Low,
    /// Ordinary interaction updates.
    Normal,
    /// Frame-critical updates; never evicted, never starved.
    High,
}

/// Counters describing queue throughput and drop behavior.
///
/// Drops are policy, not failure; these counters exist so embedders can
/// observe pressure without the queue ever surfacing an error.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct QueueStats {
    /// Total entries applied by [`UpdateQueue::flush`].
    pub processed: u64,
    /// Total entries dropped by the eviction policy.
    pub dropped: u64,
    /// Number of flushes performed.
    pub flushes: u64,
    /// Largest queue length observed.
    pub high_water: usize,
}

#[derive(Debug)]
struct Entry<T> {
    item: T,
    priority: Priority,
    seq: u64,
}

/// A bounded, priority-batched update queue.
///
/// See the [crate docs](crate) for the eviction and ordering contract.
#[derive(Debug)]
pub struct UpdateQueue<T> {
    entries: SmallVec<[Entry<T>; INLINE_ENTRIES]>,
    max_len: usize,
    next_seq: u64,
    stats: QueueStats,
}

impl<T> UpdateQueue<T> {
    /// Creates a queue holding at most `max_len` entries.
    ///
    /// A `max_len` of zero is treated as one; a queue that can hold nothing
    /// would silently discard every update.
    #[must_use]
    pub fn new(max_len: usize) -> Self {
        Self {
            entries: SmallVec::new(),
            max_len: max_len.max(1),
            next_seq: 0,
            stats: QueueStats::default(),
        }
    }

    /// Returns the configured maximum length.
    #[must_use]
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Returns the number of pending entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entries are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the throughput/drop counters.
    #[must_use]
    pub fn stats(&self) -> QueueStats {
        self.stats
    }

    /// Inserts an update, evicting under pressure per the queue policy.
    ///
    /// Returns `true` if the update was admitted. When the queue is full:
    ///
    /// - the oldest `Low` entry is evicted, else the oldest `Normal`;
    /// - `High` entries are never evicted. If only `High` entries remain, an
    ///   incoming `Low`/`Normal` update is itself dropped, while an incoming
    ///   `High` update is admitted even though the queue temporarily exceeds
    ///   `max_len` — frame-critical updates are never lost.
    pub fn enqueue(&mut self, item: T, priority: Priority) -> bool {
        if self.entries.len() >= self.max_len {
            match self.eviction_victim() {
                Some(index) => {
                    self.entries.remove(index);
                    self.stats.dropped += 1;
                }
                None if priority < Priority::High => {
                    self.stats.dropped += 1;
                    return false;
                }
                None => {}
            }
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry {
            item,
            priority,
            seq,
        });
        self.stats.high_water = self.stats.high_water.max(self.entries.len());
        true
    }

    /// Applies all pending entries in priority order and clears the queue.
    ///
    /// All `High` entries are applied before any `Normal`, and all `Normal`
    /// before any `Low`; within a priority, insertion order is preserved.
    /// Call this exactly once per frame so that state mutation stays on the
    /// frame boundary.
    pub fn flush(&mut self, mut apply: impl FnMut(T)) {
        self.entries
            .sort_by_key(|entry| (core::cmp::Reverse(entry.priority), entry.seq));
        let n = self.entries.len();
        for entry in self.entries.drain(..) {
            apply(entry.item);
        }
        self.stats.processed += n as u64;
        self.stats.flushes += 1;
    }

    /// Discards all pending entries without applying them.
    pub fn clear(&mut self) {
        let n = self.entries.len();
        self.entries.clear();
        self.stats.dropped += n as u64;
    }

    /// Index of the entry the eviction policy would remove, if any.
    fn eviction_victim(&self) -> Option<usize> {
        for class in [Priority::Low, Priority::Normal] {
            let victim = self
                .entries
                .iter()
                .enumerate()
                .filter(|(_, entry)| entry.priority == class)
                .min_by_key(|(_, entry)| entry.seq)
                .map(|(index, _)| index);
            if victim.is_some() {
                return victim;
            }
        }
        None
    }
}
