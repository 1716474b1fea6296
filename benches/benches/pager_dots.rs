// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Size;
use understory_pager_dots::{
    DotStyle, PaginationWindowController, ScrollTargetCalculator, ScrollTargetConfig,
};

fn fresh(page_count: usize) -> PaginationWindowController {
    PaginationWindowController::new(page_count, DotStyle::default(), 0)
        .unwrap()
        .with_render_size(Size::new(320.0, 24.0))
}

fn bench_single_page_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("pager_dots/single_page_sweep");

    // One `advance_to` per page, there and back, as a swipe stream would arrive.
    // Every third step retargets the whole strip, so cost grows with the page count.
    for page_count in [16usize, 128, 1_024] {
        group.throughput(Throughput::Elements(2 * page_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(page_count),
            &page_count,
            |b, &page_count| {
                b.iter_batched(
                    || fresh(page_count),
                    |mut dots| {
                        for page in (1..page_count).chain((0..page_count - 1).rev()) {
                            black_box(dots.advance_to(page).unwrap());
                        }
                        black_box(dots);
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_long_jump(c: &mut Criterion) {
    let mut group = c.benchmark_group("pager_dots/long_jump");

    // A single call that walks the whole strip one unit step at a time.
    for page_count in [16usize, 128, 1_024] {
        group.bench_with_input(
            BenchmarkId::from_parameter(page_count),
            &page_count,
            |b, &page_count| {
                b.iter_batched(
                    || fresh(page_count),
                    |mut dots| {
                        black_box(dots.advance_to(page_count - 1).unwrap());
                        black_box(dots);
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_scroll_target_updates(c: &mut Criterion) {
    let mut group = c.benchmark_group("pager_dots/scroll_target");
    let count = 4_096usize;
    group.throughput(Throughput::Elements(count as u64));

    group.bench_function("update_sweep", |b| {
        b.iter_batched(
            || ScrollTargetCalculator::new(ScrollTargetConfig::default()).unwrap(),
            |mut scroll| {
                for current in 0..count {
                    black_box(scroll.update(current, count));
                }
                black_box(scroll);
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_single_page_sweep,
    bench_long_jump,
    bench_scroll_target_updates
);
criterion_main!(benches);
