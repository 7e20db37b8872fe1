//! Aggregation and validation performance benchmarks.
//!
//! Measures snapshot building and the quality-check pass over in-memory rows.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::prelude::*;
use thali::{AggregateConfig, Aggregator, RestaurantRow, ValidationEngine};

/// Generate rows with a fixed seed so runs are comparable.
fn generate_rows(count: usize) -> Vec<RestaurantRow> {
    let mut rng = StdRng::seed_from_u64(42);

    let cuisines = [
        vec!["North Indian"],
        vec!["North Indian", "Mughlai"],
        vec!["Chinese"],
        vec!["South Indian"],
        vec!["Fast Food"],
        vec!["Cafe", "Continental"],
    ];
    let places = [
        ("Khan Market", "New Delhi"),
        ("Connaught Place", "New Delhi"),
        ("Cyber Hub", "Gurgaon"),
        ("Sector 29", "Gurgaon"),
        ("Sector 18", "Noida"),
        ("Crown Plaza", "Faridabad"),
    ];

    (0..count)
        .map(|i| {
            let (locality, city) = places[rng.gen_range(0..places.len())];
            RestaurantRow {
                name: format!("Restaurant {}", i),
                cuisines: cuisines[rng.gen_range(0..cuisines.len())]
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                locality: locality.to_string(),
                city: city.to_string(),
                area_type: None,
                dining_rating: if rng.gen_bool(0.95) {
                    Some((rng.gen_range(20..=50) as f64) / 10.0)
                } else {
                    None
                },
                pricing_for_2: Some(rng.gen_range(2..=45) * 100),
                review_count: Some(rng.gen_range(0..2_000)),
            }
        })
        .collect()
}

fn bench_build_dataset(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_dataset");

    for count in [500, 5_000, 20_000].iter() {
        let rows = generate_rows(*count);
        let aggregator = Aggregator::with_config(AggregateConfig::default());

        group.bench_with_input(BenchmarkId::new("rows", count), &rows, |b, rows| {
            b.iter(|| {
                black_box(aggregator.build_dataset(rows, "bench", "generated", None))
            });
        });
    }

    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    let rows = generate_rows(5_000);
    let aggregator = Aggregator::new();
    let dataset = aggregator.build_dataset(&rows, "bench", "generated", None);
    let engine = ValidationEngine::new();

    c.bench_function("validate_snapshot", |b| {
        b.iter(|| black_box(engine.validate(&dataset)));
    });
}

criterion_group!(benches, bench_build_dataset, bench_validate);
criterion_main!(benches);
