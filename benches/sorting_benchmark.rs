use arrayhelpers::prelude::*;
use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::Rng;
use serde_json::{Value, json};
use std::hint::black_box;

struct Row {
    group: u32,
    score: f64,
    name: String,
}

arrayhelpers::field_accessible!(Row { group, score, name });

fn bench_json_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("JSON Records");
    group.sample_size(10);

    // Dataset generation
    let mut rng = rand::rng();
    let count = 10_000;

    let records: Vec<Value> = (0..count)
        .map(|_| {
            json!({
                "group": rng.random_range(0..16),
                "score": rng.random::<f64>(),
            })
        })
        .collect();
    let keys = [SortKey::asc("group"), SortKey::desc("score")];

    group.bench_function("multisort_mut (in-place)", |b| {
        b.iter_batched(
            || records.clone(),
            |mut data| multisort_mut(black_box(&mut data), &keys),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("multisort (indices)", |b| {
        b.iter(|| multisort(black_box(&records), &keys))
    });

    // Hand-written comparator over the same fields
    group.bench_function("slice::sort_by (stable)", |b| {
        b.iter_batched(
            || records.clone(),
            |mut data| {
                data.sort_by(|x, y| {
                    x["group"].as_i64().cmp(&y["group"].as_i64()).then_with(|| {
                        y["score"]
                            .as_f64()
                            .unwrap_or_default()
                            .total_cmp(&x["score"].as_f64().unwrap_or_default())
                    })
                })
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_struct_records(c: &mut Criterion) {
    let mut group = c.benchmark_group("Struct Records");
    group.sample_size(10);

    let mut rng = rand::rng();
    let count = 10_000;

    let make = |rng: &mut rand::rngs::ThreadRng| -> Vec<Row> {
        (0..count)
            .map(|_| Row {
                group: rng.random_range(0..16),
                score: rng.random(),
                name: (0..8).map(|_| rng.random_range('a'..='z')).collect(),
            })
            .collect()
    };
    let keys = [SortKey::asc("group"), SortKey::asc("name"), SortKey::desc("score")];

    group.bench_function("multisort_mut (in-place)", |b| {
        b.iter_batched(
            || make(&mut rng),
            |mut data| multisort_mut(black_box(&mut data), &keys),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_json_records, bench_struct_records);
criterion_main!(benches);
