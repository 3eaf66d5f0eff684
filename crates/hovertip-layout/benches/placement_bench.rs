//! Benchmarks for the placement hot path.
//!
//! Run with: cargo bench -p hovertip-layout

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hovertip_core::geometry::{Point, Rect, Size, Viewport};
use hovertip_layout::{compute_cursor_position, resolve, PlacementOptions, Side};
use std::hint::black_box;

// ============================================================================
// resolve
// ============================================================================

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement/resolve");

    let tooltip = Size::new(320.0, 80.0);
    let viewport = Viewport::new(1280.0, 720.0);
    let opts = PlacementOptions::default();

    let cases = [
        ("fits_above", Rect::new(600.0, 300.0, 100.0, 20.0)),
        ("flips_below", Rect::new(600.0, 20.0, 100.0, 20.0)),
        ("clamps_right_edge", Rect::new(1250.0, 300.0, 20.0, 20.0)),
    ];

    for (name, trigger) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), &trigger, |b, &trigger| {
            b.iter(|| {
                resolve(
                    black_box(trigger),
                    black_box(tooltip),
                    black_box(viewport),
                    black_box(&opts),
                )
            })
        });
    }

    group.finish();
}

fn bench_resolve_all_sides(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement/sides");

    let trigger = Rect::new(600.0, 300.0, 100.0, 20.0);
    let tooltip = Size::new(320.0, 80.0);
    let viewport = Viewport::new(1280.0, 720.0);

    for side in [Side::Above, Side::Below, Side::Left, Side::Right] {
        let opts = PlacementOptions::preferring(side);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{side:?}")),
            &opts,
            |b, opts| {
                b.iter(|| {
                    resolve(
                        black_box(trigger),
                        black_box(tooltip),
                        black_box(viewport),
                        black_box(opts),
                    )
                })
            },
        );
    }

    group.finish();
}

// ============================================================================
// cursor anchoring (called on every pointer move)
// ============================================================================

fn bench_cursor_position(c: &mut Criterion) {
    let tooltip = Size::new(320.0, 80.0);
    let viewport = Viewport::new(1280.0, 720.0);
    let opts = PlacementOptions::default();

    c.bench_function("placement/cursor", |b| {
        b.iter(|| {
            compute_cursor_position(
                black_box(Point::new(640.0, 360.0)),
                black_box(tooltip),
                black_box(viewport),
                black_box(&opts),
            )
        })
    });
}

criterion_group!(
    benches,
    bench_resolve,
    bench_resolve_all_sides,
    bench_cursor_position
);
criterion_main!(benches);
