use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use memobench::adapter::CacheAdapter;
use memobench::adapters::{FxMapMemo, LruMemo, MokaMemo};
use memobench::workload;

const KEYS: u64 = 1024;

fn populated<A: CacheAdapter>(mut adapter: A) -> A {
    for input in 0..KEYS {
        adapter.call(input).expect("populate");
    }
    adapter
}

fn bench_populated_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("populated_get");

    group.bench_function("fx_hashmap", |b| {
        b.iter_batched(
            || populated(FxMapMemo::new(workload::expensive_call)),
            |mut adapter| {
                for input in 0..KEYS {
                    let _ = std::hint::black_box(adapter.call(std::hint::black_box(input)));
                }
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("lru", |b| {
        b.iter_batched(
            || populated(LruMemo::try_new(KEYS as usize, workload::expensive_call).unwrap()),
            |mut adapter| {
                for input in 0..KEYS {
                    let _ = std::hint::black_box(adapter.call(std::hint::black_box(input)));
                }
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("moka", |b| {
        b.iter_batched(
            || populated(MokaMemo::new(KEYS, workload::expensive_call)),
            |mut adapter| {
                for input in 0..KEYS {
                    let _ = std::hint::black_box(adapter.call(std::hint::black_box(input)));
                }
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_cold_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("cold_set");

    group.bench_function("fx_hashmap", |b| {
        b.iter_batched(
            || FxMapMemo::new(workload::expensive_call),
            |mut adapter| {
                for input in 0..KEYS {
                    let _ = std::hint::black_box(adapter.call(std::hint::black_box(input)));
                }
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("lru", |b| {
        b.iter_batched(
            || LruMemo::try_new(KEYS as usize, workload::expensive_call).unwrap(),
            |mut adapter| {
                for input in 0..KEYS {
                    let _ = std::hint::black_box(adapter.call(std::hint::black_box(input)));
                }
            },
            BatchSize::SmallInput,
        )
    });

    group.bench_function("moka", |b| {
        b.iter_batched(
            || MokaMemo::new(KEYS, workload::expensive_call),
            |mut adapter| {
                for input in 0..KEYS {
                    let _ = std::hint::black_box(adapter.call(std::hint::black_box(input)));
                }
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_populated_get, bench_cold_set);
criterion_main!(benches);
