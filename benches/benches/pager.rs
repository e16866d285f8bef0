// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Size};
use understory_pager::{
    DefaultCurve, DepthCurve, Pager, PagerOptions, Panel, TransitionCurve, ZoomOutCurve,
};
use understory_pager_tabs::{LabelTemplate, TabStrip};

const SIZE: Size = Size::new(1280.0, 720.0);

fn pager_with(len: usize, curve: impl TransitionCurve + 'static) -> Pager<usize> {
    let panels = (0..len).map(|i| Panel::new(i).with_title(format!("Page {i}")));
    let mut pager = Pager::new(panels, SIZE, PagerOptions::default().with_overscroll(true))
        .expect("non-empty");
    pager.set_transition(curve);
    pager
}

fn bench_scroll_to(c: &mut Criterion) {
    let mut group = c.benchmark_group("pager/scroll_to");

    // Every scroll evaluates the curve for every panel, so cost grows with page count.
    for len in [8usize, 64, 512] {
        group.throughput(Throughput::Elements(len as u64));

        let mut pager = pager_with(len, DefaultCurve);
        group.bench_function(BenchmarkId::new("default", len), |b| {
            b.iter(|| {
                pager.scroll_to(black_box(1.37));
                black_box(pager.container_offset());
            });
        });

        let mut pager = pager_with(len, ZoomOutCurve);
        group.bench_function(BenchmarkId::new("zoom_out", len), |b| {
            b.iter(|| {
                pager.scroll_to(black_box(1.37));
                black_box(pager.container_offset());
            });
        });

        let mut pager = pager_with(len, DepthCurve);
        group.bench_function(BenchmarkId::new("depth", len), |b| {
            b.iter(|| {
                pager.scroll_to(black_box(1.37));
                black_box(pager.container_offset());
            });
        });
    }

    group.finish();
}

fn bench_swipe(c: &mut Criterion) {
    let mut group = c.benchmark_group("pager/swipe");

    // A full drag, release, and settle: ~30 moves followed by the snap animation.
    for len in [8usize, 64] {
        group.bench_with_input(BenchmarkId::new("drag_and_settle", len), &len, |b, &len| {
            b.iter_batched(
                || pager_with(len, DefaultCurve),
                |mut pager| {
                    pager.pointer_down(Point::new(900.0, 360.0));
                    for step in 0..30 {
                        pager.pointer_move(Point::new(900.0 - f64::from(step) * 20.0, 362.0));
                    }
                    pager.pointer_up();
                    while pager.tick() {}
                    black_box(pager.selected_index());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_page_set_with_tabs(c: &mut Criterion) {
    let mut group = c.benchmark_group("pager/page_set");

    // Insert then remove near the front; each mutation rebuilds the attached tab strip.
    for len in [8usize, 64, 512] {
        group.bench_with_input(BenchmarkId::new("insert_remove", len), &len, |b, &len| {
            b.iter_batched(
                || {
                    let pager = pager_with(len, DefaultCurve);
                    let tabs = TabStrip::attach(&pager, LabelTemplate);
                    (pager, tabs)
                },
                |(mut pager, tabs)| {
                    pager.insert(1, Panel::new(usize::MAX).with_title("New"));
                    let removed = pager.remove(1);
                    black_box((removed, tabs.len()));
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_scroll_to,
    bench_swipe,
    bench_page_set_with_tabs
);
criterion_main!(benches);
