// Copyright 2025 the Slidetrack Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::convert::Infallible;
use std::cell::Cell;
use std::rc::Rc;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use slidetrack_signal::Signal;

fn bench_publish_fan_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("signal/publish");

    // Up to four subscribers stay inline; larger counts spill to the heap.
    for subscribers in [1usize, 4, 16, 64] {
        let signal: Signal<usize, Infallible> = Signal::new();
        let hits = Rc::new(Cell::new(0_usize));
        let handles: Vec<_> = (0..subscribers)
            .map(|_| {
                let hits = hits.clone();
                signal
                    .subscribe(move |v: &usize| {
                        hits.set(hits.get().wrapping_add(*v));
                        Ok(())
                    })
                    .unwrap()
            })
            .collect();
        group.throughput(Throughput::Elements(subscribers as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(subscribers),
            &signal,
            |b, signal| {
                let mut value = 0_usize;
                b.iter(|| {
                    value = value.wrapping_add(1);
                    signal.publish(black_box(value)).unwrap();
                });
            },
        );

        black_box(hits.get());
        drop(handles);
    }

    group.finish();
}

criterion_group!(benches, bench_publish_fan_out);
criterion_main!(benches);
