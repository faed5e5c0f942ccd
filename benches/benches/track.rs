// Copyright 2025 the Slidetrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use slidetrack_carousel::{Track, offset_for_index};

fn widths(len: usize) -> Vec<f64> {
    // Mildly uneven widths so the prefix sum is not trivially constant.
    (0..len).map(|i| 80.0 + (i % 7) as f64 * 10.0).collect()
}

fn bench_offset_for_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("track/offset_for_index");

    for len in [16usize, 256, 4_096] {
        let widths = widths(len);
        let last = len - 1;
        group.throughput(Throughput::Elements(1));

        group.bench_with_input(BenchmarkId::new("last_clamped", len), &widths, |b, w| {
            b.iter(|| black_box(offset_for_index(black_box(last), 400.0, w, true)));
        });

        let track = Track::from_widths(400.0, widths.clone());
        group.bench_with_input(BenchmarkId::new("track_last", len), &track, |b, t| {
            b.iter(|| black_box(t.offset_for(black_box(last), true)));
        });
    }

    group.finish();
}

fn bench_nearest_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("track/nearest_index");

    // Release snapping scans every item once.
    for len in [16usize, 256, 4_096] {
        let track = Track::from_widths(400.0, widths(len));
        let live = track.offset_for(len / 2, false) - 13.0;
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::from_parameter(len), &track, |b, t| {
            b.iter(|| black_box(t.nearest_index(black_box(live))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_offset_for_index, bench_nearest_index);
criterion_main!(benches);
