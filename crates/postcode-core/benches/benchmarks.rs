use criterion::{criterion_group, criterion_main, Criterion};
use postcode_core::prelude::*;
use postcode_core::{CanonicalCity, CanonicalState};
use std::hint::black_box;

/// 16 states x 250 cities x 4 postcodes, roughly the size of the national set.
fn synthetic_db() -> PostcodeDb {
    let states = (0..16)
        .map(|s| CanonicalState {
            name: format!("State {s}"),
            code: format!("S{s:02}"),
            cities: (0..250)
                .map(|c| CanonicalCity {
                    name: format!("Bandar {s}-{c}"),
                    postcodes: (0..4)
                        .map(|p| format!("{:05}", s * 5000 + c * 4 + p))
                        .collect(),
                })
                .collect(),
        })
        .collect();
    PostcodeDb::from_states(states)
}

fn bench_queries(c: &mut Criterion) {
    let db = synthetic_db();

    c.bench_function("lookup_by_postcode", |b| {
        b.iter(|| db.lookup_by_postcode(black_box(" 40123 ")))
    });
    c.bench_function("lookup_by_city", |b| {
        b.iter(|| db.lookup_by_city(black_box("BANDAR 8-30")))
    });
    c.bench_function("search_cities_full_scan", |b| {
        b.iter(|| db.search_cities(black_box("-249"), DEFAULT_SEARCH_LIMIT))
    });
    c.bench_function("search_cities_early_stop", |b| {
        b.iter(|| db.search_cities(black_box("bandar"), DEFAULT_SEARCH_LIMIT))
    });
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_indexes", |b| b.iter(synthetic_db));
}

criterion_group!(benches, bench_queries, bench_build);
criterion_main!(benches);
