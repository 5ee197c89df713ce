//! Benchmarks for sequence emission.
//!
//! Run with: cargo bench -p termseq --bench emit_bench

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use termseq::Emitter;

fn bench_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("emit/primitive");
    let mut out = Emitter::new(Vec::with_capacity(4096));

    group.bench_function("hide_cursor", |b| {
        b.iter(|| {
            out.get_mut().clear();
            out.hide_cursor().unwrap();
            black_box(out.get_ref());
        })
    });

    group.bench_function("move_cursor", |b| {
        b.iter(|| {
            out.get_mut().clear();
            out.move_cursor(black_box(24), black_box(80)).unwrap();
            black_box(out.get_ref());
        })
    });

    group.bench_function("set_window_title", |b| {
        b.iter(|| {
            out.get_mut().clear();
            out.set_window_title(black_box("termseq bench")).unwrap();
            black_box(out.get_ref());
        })
    });

    group.finish();
}

fn bench_clear_lines(c: &mut Criterion) {
    let mut group = c.benchmark_group("emit/clear_lines");
    let mut out = Emitter::new(Vec::with_capacity(64 * 1024));

    for n in [1u16, 24, 200] {
        group.throughput(Throughput::Elements(u64::from(n)));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                out.get_mut().clear();
                out.clear_lines(n).unwrap();
                black_box(out.get_ref());
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_primitives, bench_clear_lines);
criterion_main!(benches);
