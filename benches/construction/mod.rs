use criterion::{black_box, criterion_group};
use generalized_suffixtree::{GeneralizedIndex, NaiveBuilder, TreeBuilder};

use super::util::{build_index, generate_sentences};

fn build_naive_index(sentences: Vec<Vec<char>>) -> GeneralizedIndex<char, usize, NaiveBuilder> {
    let mut index = GeneralizedIndex::with_builder(NaiveBuilder::new());
    for (value, sentence) in sentences.into_iter().enumerate() {
        index.add(sentence, value).unwrap();
    }
    index
}

pub fn ukkonen_benchmark(c: &mut criterion::Criterion) {
    c.bench_function("build_ukkonen", |b| {
        b.iter_batched(
            || generate_sentences(100, &mut rand::thread_rng()),
            |sentences| black_box(build_index(sentences)),
            criterion::BatchSize::SmallInput,
        )
    });
}

pub fn naive_benchmark(c: &mut criterion::Criterion) {
    c.bench_function("build_naive", |b| {
        b.iter_batched(
            || generate_sentences(100, &mut rand::thread_rng()),
            |sentences| black_box(build_naive_index(sentences)),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, ukkonen_benchmark, naive_benchmark);
