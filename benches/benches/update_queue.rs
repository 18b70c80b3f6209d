// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Enqueue/flush throughput for the frame update queue.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use viewfinder_queue::{Priority, UpdateQueue};

fn mixed_priorities(n: usize) -> impl Iterator<Item = (u64, Priority)> {
    (0..n as u64).map(|i| {
        let priority = match i % 10 {
            0 => Priority::High,
            1..=7 => Priority::Normal,
            _ => Priority::Low,
        };
        (i, priority)
    })
}

fn bench_enqueue_flush(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_queue");

    group.bench_function("enqueue_flush_64", |b| {
        b.iter(|| {
            let mut queue = UpdateQueue::new(128);
            for (item, priority) in mixed_priorities(64) {
                queue.enqueue(black_box(item), priority);
            }
            let mut sum = 0_u64;
            queue.flush(|item| sum += item);
            black_box(sum)
        });
    });

    group.bench_function("pressure_1000_into_128", |b| {
        b.iter(|| {
            let mut queue = UpdateQueue::new(128);
            for (item, priority) in mixed_priorities(1000) {
                queue.enqueue(black_box(item), priority);
            }
            let mut applied = 0_usize;
            queue.flush(|_| applied += 1);
            black_box((applied, queue.stats().dropped))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_enqueue_flush);
criterion_main!(benches);
