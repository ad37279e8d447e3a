//! # Lock Benchmarks
//!
//! Compare the four spin locks (and the unprotected baseline) on the summation
//! workload at several thread counts

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use spinlock_bench::{
    BackoffLock, Experiment, Guarded, LockKind, RawLock, SpinLock, TasLock, TtasLock, Workload,
};

const WORKLOAD: Workload = Workload::sum(1, 100_000);

fn bench_contended_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("contended_sum");
    group.sample_size(10);

    for threads in [2, 4, 8] {
        group.bench_with_input(BenchmarkId::new("No Lock", threads), &threads, |b, &threads| {
            b.iter(|| black_box(Experiment::unguarded(threads, WORKLOAD).run().unwrap()));
        });

        for lock in LockKind::ALL {
            group.bench_with_input(BenchmarkId::new(lock.name(), threads), &threads, |b, &threads| {
                b.iter(|| {
                    let report = Experiment::locked(lock, threads, WORKLOAD).run().unwrap();
                    assert!(report.is_correct());
                    black_box(report)
                });
            });
        }
    }

    group.finish();
}

fn bench_uncontended<L: RawLock>(c: &mut Criterion) {
    let guarded = Guarded::<L, u64>::default();
    c.bench_function(&format!("uncontended/{}", L::NAME), |b| {
        b.iter(|| guarded.with_lock(|n| *n = black_box(*n + 1)));
    });
}

fn bench_uncontended_all(c: &mut Criterion) {
    bench_uncontended::<SpinLock>(c);
    bench_uncontended::<TasLock>(c);
    bench_uncontended::<TtasLock>(c);
    bench_uncontended::<BackoffLock>(c);
}

criterion_group!(benches, bench_contended_sum, bench_uncontended_all);
criterion_main!(benches);
