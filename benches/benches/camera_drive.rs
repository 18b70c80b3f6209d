// Copyright 2026 the Viewfinder Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Full-animation tick cost for the camera drive and the composed provider.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use viewfinder_canvas::{CanvasConfig, CanvasProvider};
use viewfinder_motion::{CameraDrive, MoveKind};
use viewfinder_sections::SectionLayout;
use viewfinder_space::{CameraPose, CanvasBounds};

fn bench_drive(c: &mut Criterion) {
    let bounds = CanvasBounds::new(Rect::new(0.0, 0.0, 4000.0, 3000.0), 0.25, 4.0);
    let start = CameraPose::new(Point::new(100.0, 100.0), 1.0);
    let end = CameraPose::new(Point::new(3500.0, 2500.0), 2.0);

    let mut group = c.benchmark_group("camera_drive");
    for kind in [MoveKind::PanTilt, MoveKind::DollyZoom] {
        group.bench_function(kind.name(), |b| {
            b.iter(|| {
                let mut drive = CameraDrive::default();
                drive.request(start, end, kind, &bounds);
                let mut last = start;
                while let Some(pose) = drive.tick(black_box(16.0)) {
                    last = pose;
                }
                black_box(last)
            });
        });
    }
    group.finish();
}

fn bench_provider_frame(c: &mut Criterion) {
    c.bench_function("provider_navigate_and_settle", |b| {
        b.iter(|| {
            let mut provider =
                CanvasProvider::new(SectionLayout::portfolio(), CanvasConfig::default());
            provider
                .navigate_to(black_box("contact"), MoveKind::RackFocus)
                .unwrap();
            for _ in 0..120 {
                provider.frame(16.0);
            }
            black_box(provider.state().pose)
        });
    });
}

criterion_group!(benches, bench_drive, bench_provider_frame);
criterion_main!(benches);
