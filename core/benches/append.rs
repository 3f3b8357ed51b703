//! Benchmarks for append growth vs. preallocated capacity
//!
//! Run with: `cargo bench --bench append`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use strand_core::Slice;

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");

    for size in [16usize, 256, 1024, 4096] {
        group.bench_with_input(BenchmarkId::new("grow_from_nil", size), &size, |b, &size| {
            b.iter(|| {
                let mut s = Slice::<i64>::new();
                for i in 0..size {
                    s = s.append([black_box(i as i64)]);
                }
                black_box(s.len());
            });
        });

        group.bench_with_input(BenchmarkId::new("preallocated", size), &size, |b, &size| {
            b.iter(|| {
                let mut s = Slice::<i64>::with_len_and_cap(0, size);
                for i in 0..size {
                    s = s.append([black_box(i as i64)]);
                }
                black_box(s.len());
            });
        });
    }

    group.finish();
}

fn bench_copy(c: &mut Criterion) {
    let src = Slice::from_values((0..4096).map(i64::from));
    let dst = Slice::<i64>::with_len(4096);

    c.bench_function("copy_from_4096", |b| {
        b.iter(|| {
            black_box(dst.copy_from(&src));
        });
    });
}

criterion_group!(benches, bench_append, bench_copy);
criterion_main!(benches);
