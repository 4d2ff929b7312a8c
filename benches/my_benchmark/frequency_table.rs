use criterion::{black_box, Criterion};
use word_length_stats::prelude::*;

/// Builds a deterministic word list where word `n` is the base-26 spelling of `n`.
fn generate_word_list(count: usize) -> String {
    let mut text = String::new();
    for mut n in 0..count {
        loop {
            text.push((b'a' + (n % 26) as u8) as char);
            n /= 26;
            if n == 0 {
                break;
            }
        }
        text.push('\n');
    }
    text
}

pub fn bench_load_words(c: &mut Criterion) {
    let word_counts = [1000, 10_000, 100_000];

    for &count in &word_counts {
        let text = generate_word_list(count);
        let id = &format!("word_set_from_text_{}", count);
        c.bench_function(id, |b| b.iter(|| WordSet::from_text(black_box(&text))));
    }
}

pub fn bench_frequency_table(c: &mut Criterion) {
    let word_counts = [1000, 10_000, 100_000];

    for &count in &word_counts {
        let words = WordSet::from_text(&generate_word_list(count));
        let id = &format!("frequency_table_from_words_{}", count);
        c.bench_function(id, |b| {
            b.iter(|| FrequencyTable::from_words(black_box(&words)))
        });

        let table = FrequencyTable::from_words(&words);
        println!("[{}] Length buckets: {}", id, table.len());
    }
}
