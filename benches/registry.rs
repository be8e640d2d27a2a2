// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of win96-help and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use win96_help::model::MinimizedTaskRecord;
use win96_help::store::{upsert, FolderStore, MemoryStore, TaskRegistryStore};

mod fixtures;

use fixtures::{Case, TempDir};

fn env_usize(name: &str, default: usize) -> usize {
    std::env::var(name).ok().and_then(|raw| raw.trim().parse::<usize>().ok()).unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name).ok().and_then(|raw| raw.trim().parse::<u64>().ok()).unwrap_or(default)
}

fn config() -> Criterion {
    let sample_size = env_usize("BENCH_SAMPLE_SIZE", 60).clamp(10, 200);
    let warmup_secs = env_u64("BENCH_WARMUP_SECS", 3).clamp(1, 60);
    let measurement_secs = env_u64("BENCH_MEASUREMENT_SECS", 5).clamp(1, 120);

    Criterion::default()
        .sample_size(sample_size)
        .warm_up_time(Duration::from_secs(warmup_secs))
        .measurement_time(Duration::from_secs(measurement_secs))
}

fn seeded<S: win96_help::store::KeyValueStore>(
    store: S,
    records: &[MinimizedTaskRecord],
) -> TaskRegistryStore<S> {
    let mut registry = TaskRegistryStore::new(store);
    registry.save(records).expect("seed registry");
    registry
}

// Benchmark identity (keep stable):
// - Group names: `registry.upsert`, `registry.minimize`
// - Case IDs after the `/` stay stable so results remain comparable over time.
fn benches_upsert(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry.upsert");

    for (id, case) in [("small", Case::Small), ("large", Case::Large)] {
        let records = fixtures::registry(case);
        let existing = records[0].clone();
        group.bench_function(format!("move_to_end_{id}"), |b| {
            b.iter(|| black_box(upsert(black_box(&records), black_box(existing.clone()))))
        });

        let fresh = MinimizedTaskRecord::help("/algoViz/new", "New", "/algoViz/new");
        group.bench_function(format!("append_{id}"), |b| {
            b.iter(|| black_box(upsert(black_box(&records), black_box(fresh.clone()))))
        });
    }
    group.finish();
}

fn benches_minimize(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry.minimize");

    for (id, case) in [("small", Case::Small), ("large", Case::Large)] {
        let records = fixtures::registry(case);

        group.bench_function(format!("memory_{id}"), |b| {
            b.iter_batched_ref(
                || seeded(MemoryStore::new(), &records),
                |registry| {
                    let outcome = registry.minimize(
                        "/algoViz/page-0000",
                        "Page 0",
                        "/algoViz/page-0000?tab=glossary",
                    );
                    black_box(outcome.registry.len())
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("folder_{id}"), |b| {
            b.iter_batched_ref(
                || {
                    let tmp = TempDir::new(&format!("registry_minimize_{id}"));
                    let registry = seeded(FolderStore::new(tmp.path()), &records);
                    (tmp, registry)
                },
                |(_tmp, registry)| {
                    let outcome = registry.minimize(
                        "/algoViz/page-0000",
                        "Page 0",
                        "/algoViz/page-0000?tab=glossary",
                    );
                    black_box(outcome.persisted)
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = config();
    targets = benches_upsert, benches_minimize
}
criterion_main!(benches);
