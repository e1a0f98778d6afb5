//! Benchmarks for the alignment pass.
//!
//! Run with: cargo bench -p dragline-snap

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use dragline_snap::{Axis, PositionData, Rect, SnapConfig, SnapEngine, aggregate_axis};
use std::hint::black_box;

/// Lay out `n` siblings on a loose grid so some candidates land near.
fn make_rects(n: usize) -> Vec<Rect> {
    (0..n)
        .map(|i| {
            let col = (i % 8) as f64;
            let row = (i / 8) as f64;
            Rect::new(col * 97.0, row * 63.0, 80.0, 48.0)
        })
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("snap/aggregate_axis");

    for n in [4, 16, 64, 256] {
        let compares: Vec<PositionData> = make_rects(n)
            .into_iter()
            .enumerate()
            .map(|(i, r)| PositionData::with_index(r, i))
            .collect();
        let moving = PositionData::new(Rect::new(101.0, 65.0, 80.0, 48.0));

        group.bench_with_input(BenchmarkId::new("siblings", n), &compares, |b, compares| {
            b.iter(|| {
                black_box(aggregate_axis(
                    &moving,
                    compares,
                    Axis::X,
                    Axis::X.anchors(),
                    6.0,
                ))
            })
        });
    }

    group.finish();
}

fn bench_drag_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("snap/drag_tick");
    let engine = SnapEngine::new(SnapConfig::default());

    for n in [4, 16, 64, 256] {
        let rects = make_rects(n);
        let session = engine
            .begin_drag(&rects, 0, Some(Rect::from_size(1600.0, 1200.0)))
            .expect("valid session");
        let moving = Rect::new(101.0, 65.0, 80.0, 48.0);

        group.bench_with_input(BenchmarkId::new("siblings", n), &session, |b, session| {
            b.iter(|| black_box(session.tick(moving).expect("valid tick")))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_aggregate, bench_drag_tick);
criterion_main!(benches);
