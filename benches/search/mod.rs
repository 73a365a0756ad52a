use criterion::{black_box, criterion_group};

use super::util::{build_index, generate_probes, generate_sentences};

pub fn find_benchmark(c: &mut criterion::Criterion) {
    let mut random = rand::thread_rng();
    let index = build_index(generate_sentences(1000, &mut random));

    c.bench_function("find", |b| {
        b.iter_batched(
            || generate_probes(10, &mut rand::thread_rng()),
            |probes| {
                for probe in probes {
                    black_box(index.find(&probe).hits.len());
                }
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

pub fn find_approximate_benchmark(c: &mut criterion::Criterion) {
    let mut random = rand::thread_rng();
    let index = build_index(generate_sentences(1000, &mut random));

    c.bench_function("find_approximate", |b| {
        b.iter_batched(
            || generate_probes(10, &mut rand::thread_rng()),
            |probes| {
                for probe in probes {
                    black_box(index.find_approximate(&probe, 1).hits.len());
                }
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, find_benchmark, find_approximate_benchmark);
