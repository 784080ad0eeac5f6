//! Resolution benchmarks.
//!
//! Run with: `cargo bench -p hermes-config`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hermes_config::{ConfigStore, Definition, Registry, ScopeId, StoreOptions};
use hermes_core::Kind;

/// A store with `num_settings` Long settings and a single chain of `depth`
/// scopes below the root. Returns the store and the deepest scope.
fn build_store(num_settings: usize, depth: usize) -> (ConfigStore, ScopeId) {
    let mut registry = Registry::new();
    for i in 0..num_settings {
        registry
            .define(Definition::new(format!("setting_{i}"), Kind::Long, 0_i64))
            .unwrap();
    }

    let options = StoreOptions {
        max_scope_depth: depth.max(1),
        ..Default::default()
    };
    let mut store = ConfigStore::with_options(registry, options).unwrap();

    let mut scope = store.root();
    for level in 0..depth {
        scope = store.create_scope(scope, &format!("level{level}")).unwrap();
    }

    // Override at the root only, so lookups from the leaf walk the full chain.
    store.set_local(store.root(), "setting_0", 42_i64).unwrap();

    (store, scope)
}

fn bench_local_hit(c: &mut Criterion) {
    let (mut store, leaf) = build_store(100, 4);
    store.set_local(leaf, "setting_1", 7_i64).unwrap();

    c.bench_function("local_hit", |b| {
        b.iter(|| black_box(store.get_long(leaf, "setting_1")));
    });
}

fn bench_default_fallback(c: &mut Criterion) {
    let (store, leaf) = build_store(100, 4);

    c.bench_function("default_fallback", |b| {
        b.iter(|| black_box(store.get_long(leaf, "setting_50")));
    });
}

fn bench_miss(c: &mut Criterion) {
    let (store, leaf) = build_store(100, 4);

    c.bench_function("miss", |b| {
        b.iter(|| black_box(store.get_long(leaf, "no_such_setting")));
    });
}

fn bench_depth_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("depth_scaling");

    for depth in [1, 2, 4, 8, 16] {
        let (store, leaf) = build_store(100, depth);

        group.bench_with_input(BenchmarkId::new("root_override", depth), &depth, |b, _| {
            b.iter(|| black_box(store.get_long(leaf, "setting_0")));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_local_hit,
    bench_default_fallback,
    bench_miss,
    bench_depth_scaling
);
criterion_main!(benches);
