use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use cursor_collections::{MultiMap, UniqueMap};
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn bench_insert_fresh_100k(c: &mut Criterion) {
    c.bench_function("unique_map::insert_fresh_100k", |b| {
        b.iter_batched(
            UniqueMap::<String, u64>::new,
            |mut m| {
                for (i, x) in lcg(1).take(100_000).enumerate() {
                    let _ = m.insert(key(x), i as u64);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_insert_reserved_100k(c: &mut Criterion) {
    c.bench_function("unique_map::insert_reserved_100k", |b| {
        b.iter_batched(
            || {
                let mut m = UniqueMap::<String, u64>::new();
                m.reserve(100_000);
                m
            },
            |mut m| {
                for (i, x) in lcg(2).take(100_000).enumerate() {
                    let _ = m.insert(key(x), i as u64);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_find_hit_10k(c: &mut Criterion) {
    c.bench_function("unique_map::find_hit_10k_on_100k", |b| {
        let mut m = UniqueMap::new();
        let keys: Vec<String> = lcg(7).take(100_000).map(key).collect();
        for (i, k) in keys.iter().enumerate() {
            m.insert(k.clone(), i as u64);
        }
        let probes: Vec<&String> = keys.iter().step_by(10).take(10_000).collect();
        b.iter(|| {
            let mut hits = 0u64;
            for k in &probes {
                if m.contains_key(k.as_str()) {
                    hits += 1;
                }
            }
            black_box(hits)
        })
    });
}

fn bench_find_miss_10k(c: &mut Criterion) {
    c.bench_function("unique_map::find_miss_10k_on_100k", |b| {
        let mut m = UniqueMap::new();
        for (i, x) in lcg(11).take(100_000).enumerate() {
            m.insert(key(x), i as u64);
        }
        let probes: Vec<String> = lcg(0xdead).take(10_000).map(|x| format!("m{x:016x}")).collect();
        b.iter(|| {
            let mut hits = 0u64;
            for k in &probes {
                if m.contains_key(k.as_str()) {
                    hits += 1;
                }
            }
            black_box(hits)
        })
    });
}

fn bench_erase_random_10k(c: &mut Criterion) {
    c.bench_function("unique_map::erase_10k_of_100k", |b| {
        b.iter_batched(
            || {
                let mut m = UniqueMap::new();
                let keys: Vec<String> = lcg(13).take(100_000).map(key).collect();
                for (i, k) in keys.iter().enumerate() {
                    m.insert(k.clone(), i as u64);
                }
                let victims: Vec<String> =
                    keys.iter().step_by(10).take(10_000).cloned().collect();
                (m, victims)
            },
            |(mut m, victims)| {
                for k in &victims {
                    let _ = m.erase(k.as_str());
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_rehash_100k(c: &mut Criterion) {
    c.bench_function("unique_map::rehash_100k_to_1m_buckets", |b| {
        b.iter_batched(
            || {
                let mut m = UniqueMap::new();
                for (i, x) in lcg(17).take(100_000).enumerate() {
                    m.insert(key(x), i as u64);
                }
                m
            },
            |mut m| {
                m.rehash(1 << 20);
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_iterate_100k(c: &mut Criterion) {
    c.bench_function("unique_map::iterate_100k", |b| {
        let mut m = UniqueMap::new();
        for (i, x) in lcg(19).take(100_000).enumerate() {
            m.insert(key(x), i as u64);
        }
        b.iter(|| {
            let mut acc = 0u64;
            for (_, v) in m.iter() {
                acc = acc.wrapping_add(*v);
            }
            black_box(acc)
        })
    });
}

fn bench_multi_insert_duplicates(c: &mut Criterion) {
    c.bench_function("multi_map::insert_100k_over_1k_keys", |b| {
        b.iter_batched(
            MultiMap::<String, u64>::new,
            |mut m| {
                for (i, x) in lcg(23).take(100_000).enumerate() {
                    let _ = m.insert(key(x % 1000), i as u64);
                }
                black_box(m)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(12)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1))
}

criterion_group! {
    name = benches_insert;
    config = bench_config();
    targets = bench_insert_fresh_100k, bench_insert_reserved_100k
}
criterion_group! {
    name = benches_ops;
    config = bench_config();
    targets = bench_find_hit_10k,
              bench_find_miss_10k,
              bench_erase_random_10k,
              bench_rehash_100k,
              bench_iterate_100k,
              bench_multi_insert_duplicates
}
criterion_main!(benches_insert, benches_ops);
