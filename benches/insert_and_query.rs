use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use string_tree::alphabet::{get_letter, ALPHABET, WORD_LEN};
use string_tree::Trie;

fn random_words(count: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (0..WORD_LEN).map(|_| get_letter(rng.gen_range(0..ALPHABET.len()))).collect())
        .collect()
}

fn build(words: &[String]) -> Trie {
    let mut trie = Trie::new();
    for word in words {
        trie.insert(word).unwrap();
    }
    trie
}

fn criterion_benchmark(c: &mut Criterion) {
    let words = random_words(20_000, 7);
    let trie = build(&words);

    c.bench_function("insert 20k", |b| b.iter(|| build(black_box(&words))));
    c.bench_function("contains 20k", |b| b.iter(|| {
        words.iter().filter(|w| trie.contains(black_box(w))).count()
    }));

    { let mut group = c.benchmark_group("enumerate");
        group.sample_size(10);
        group.bench_function("all words", |b| b.iter(|| trie.all_starting_with("")));
        group.bench_function("prefix 'ab'", |b| b.iter(|| trie.all_starting_with(black_box("ab"))));
        group.bench_function("compression ratio", |b| b.iter(|| trie.compression_ratio()));
    }

    c.bench_function("insert then remove 20k", |b| b.iter(|| {
        let mut trie = build(&words);
        words.iter().for_each(|w| { trie.remove(w); });
        trie
    }));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
