use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sentinel_collections::{LinkedDeque, OSTreeMap};
use std::collections::{BTreeMap, VecDeque};

const N: usize = 10_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

// ─── Map Benchmarks ─────────────────────────────────────────────────────────

fn bench_map_insert_ordered(c: &mut Criterion) {
    let keys = ordered_keys(N);

    let mut group = c.benchmark_group("map_insert_ordered");

    group.bench_function(BenchmarkId::new("OSTreeMap", N), |b| {
        b.iter(|| {
            let mut map = OSTreeMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.finish();
}

fn bench_map_insert_random(c: &mut Criterion) {
    let keys = random_keys(N);

    let mut group = c.benchmark_group("map_insert_random");

    group.bench_function(BenchmarkId::new("OSTreeMap", N), |b| {
        b.iter(|| {
            let mut map = OSTreeMap::new();
            for &k in &keys {
                map.insert(k, k);
            }
            map
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            let mut map = BTreeMap::new();
            for &k in &keys {
                map.entry(k).or_insert(k);
            }
            map
        });
    });

    group.finish();
}

fn bench_map_get_random(c: &mut Criterion) {
    let keys = random_keys(N);
    let os_map: OSTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

    let mut group = c.benchmark_group("map_get_random");

    group.bench_function(BenchmarkId::new("OSTreeMap", N), |b| {
        b.iter(|| {
            for k in &keys {
                black_box(os_map.get(k));
            }
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            for k in &keys {
                black_box(bt_map.get(k));
            }
        });
    });

    group.finish();
}

fn bench_map_remove_random(c: &mut Criterion) {
    let keys = random_keys(N);

    let mut group = c.benchmark_group("map_remove_random");

    group.bench_function(BenchmarkId::new("OSTreeMap", N), |b| {
        b.iter_batched(
            || keys.iter().map(|&k| (k, k)).collect::<OSTreeMap<i64, i64>>(),
            |mut map| {
                for k in &keys {
                    map.remove(k);
                }
                map
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter_batched(
            || keys.iter().map(|&k| (k, k)).collect::<BTreeMap<i64, i64>>(),
            |mut map| {
                for k in &keys {
                    map.remove(k);
                }
                map
            },
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_map_kth(c: &mut Criterion) {
    let keys = random_keys(N);
    let os_map: OSTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let ranks: Vec<usize> = (1..=os_map.len()).step_by(97).collect();

    let mut group = c.benchmark_group("map_kth");

    group.bench_function(BenchmarkId::new("OSTreeMap", N), |b| {
        b.iter(|| {
            for &k in &ranks {
                black_box(os_map.get_at(os_map.kth(k)).ok());
            }
        });
    });

    // BTreeMap has no rank index; walking the iterator is the baseline.
    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            for &k in &ranks {
                black_box(bt_map.iter().nth(k - 1));
            }
        });
    });

    group.finish();
}

fn bench_map_rank(c: &mut Criterion) {
    let keys = random_keys(N);
    let os_map: OSTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let bt_map: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();
    let probes: Vec<i64> = keys.iter().step_by(97).copied().collect();

    let mut group = c.benchmark_group("map_rank");

    group.bench_function(BenchmarkId::new("OSTreeMap", N), |b| {
        b.iter(|| {
            for k in &probes {
                black_box(os_map.rank(k));
            }
        });
    });

    group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
        b.iter(|| {
            for k in &probes {
                black_box(bt_map.range(..=k).count());
            }
        });
    });

    group.finish();
}

// ─── Deque Benchmarks ───────────────────────────────────────────────────────

fn bench_deque_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("deque_push_pop");

    group.bench_function(BenchmarkId::new("LinkedDeque", N), |b| {
        b.iter(|| {
            let mut deque = LinkedDeque::new();
            for i in 0..N as i64 {
                if i % 2 == 0 {
                    deque.push_back(i);
                } else {
                    deque.push_front(i);
                }
            }
            while let Ok(v) = deque.pop_front() {
                black_box(v);
            }
            deque
        });
    });

    group.bench_function(BenchmarkId::new("VecDeque", N), |b| {
        b.iter(|| {
            let mut deque = VecDeque::new();
            for i in 0..N as i64 {
                if i % 2 == 0 {
                    deque.push_back(i);
                } else {
                    deque.push_front(i);
                }
            }
            while let Some(v) = deque.pop_front() {
                black_box(v);
            }
            deque
        });
    });

    group.finish();
}

fn bench_deque_insert_middle(c: &mut Criterion) {
    let mut group = c.benchmark_group("deque_insert_middle");

    // A held position makes each splice O(1); VecDeque shifts half its
    // elements per insert.
    group.bench_function(BenchmarkId::new("LinkedDeque", N), |b| {
        b.iter(|| {
            let mut deque: LinkedDeque<i64> = (0..N as i64).collect();
            let middle = deque.advance(deque.begin(), (N / 2) as isize).ok();
            if let Some(middle) = middle {
                for i in 0..N as i64 {
                    let _ = deque.insert(middle, i);
                }
            }
            deque
        });
    });

    group.bench_function(BenchmarkId::new("VecDeque", N), |b| {
        b.iter(|| {
            let mut deque: VecDeque<i64> = (0..N as i64).collect();
            for i in 0..N as i64 {
                let index = N / 2 + i as usize;
                deque.insert(index, i);
            }
            deque
        });
    });

    group.finish();
}

fn bench_deque_iter(c: &mut Criterion) {
    let linked: LinkedDeque<i64> = (0..N as i64).collect();
    let vec_deque: VecDeque<i64> = (0..N as i64).collect();

    let mut group = c.benchmark_group("deque_iter");

    group.bench_function(BenchmarkId::new("LinkedDeque", N), |b| {
        b.iter(|| black_box(linked.iter().sum::<i64>()));
    });

    group.bench_function(BenchmarkId::new("VecDeque", N), |b| {
        b.iter(|| black_box(vec_deque.iter().sum::<i64>()));
    });

    group.finish();
}

// ─── Criterion Groups ───────────────────────────────────────────────────────

criterion_group!(map_crud_benches, bench_map_insert_ordered, bench_map_insert_random, bench_map_get_random, bench_map_remove_random,);

criterion_group!(map_order_statistic_benches, bench_map_kth, bench_map_rank,);

criterion_group!(deque_benches, bench_deque_push_pop, bench_deque_insert_middle, bench_deque_iter,);

criterion_main!(map_crud_benches, map_order_statistic_benches, deque_benches,);
