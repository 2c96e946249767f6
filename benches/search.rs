use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::io;
use unique_letter_words::{find_answers, search_single_threaded, Dictionary, SearchConfig};

fn synthetic_words(count: usize, len: usize) -> Vec<String> {
    let mut state = 0x2545f4914f6cdd1du64;
    (0..count)
        .map(|_| {
            (0..len)
                .map(|_| {
                    state ^= state << 13;
                    state ^= state >> 7;
                    state ^= state << 17;
                    (b'a' + (state % 26) as u8) as char
                })
                .collect()
        })
        .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let words = synthetic_words(2_000, 4);

    c.bench_function("load", |b| {
        b.iter(|| Dictionary::from_words(Some(4), black_box(&words)).unwrap())
    });

    let dictionary = Dictionary::from_words(Some(4), &words).unwrap();

    c.bench_function("three_words_single_threaded", |b| {
        b.iter(|| search_single_threaded(&dictionary, black_box(3), 4, io::sink()).unwrap())
    });

    let config = SearchConfig::new(3, 4, 4).unwrap();
    c.bench_function("three_words_four_threads", |b| {
        b.iter(|| find_answers(&dictionary, black_box(config), io::sink(), |_| {}).unwrap())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
