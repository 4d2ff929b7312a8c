// Available modules
mod frequency_table;

// Used Modules
use criterion::{criterion_group, criterion_main, Criterion};
use frequency_table::*;

fn criterion_benchmark(c: &mut Criterion) {
    bench_load_words(c);
    bench_frequency_table(c);
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
