use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lcsubstr::{common_run, common_run_brute, longest_common_substring};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generate a random lowercase corpus and draw two substrings of `len`
/// from it, so the pair shares realistic partial overlaps.
fn corpus_pair(len: usize) -> (String, String) {
    let mut rng = StdRng::seed_from_u64(42);
    let corpus_len = len * 4;
    let corpus: String = (0..corpus_len)
        .map(|_| (b'a' + rng.gen_range(0..26u8)) as char)
        .collect();

    let start1 = rng.gen_range(0..corpus_len - len);
    let start2 = rng.gen_range(0..corpus_len - len);
    (
        corpus[start1..start1 + len].to_string(),
        corpus[start2..start2 + len].to_string(),
    )
}

fn bench_table_matcher(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_matcher");

    for len in [256, 1024, 4096, 16384] {
        let pair = corpus_pair(len);
        group.bench_with_input(BenchmarkId::new("string", len), &pair, |b, (s1, s2)| {
            b.iter(|| longest_common_substring(black_box(s1), black_box(s2)));
        });

        let chars = (
            pair.0.chars().collect::<Vec<char>>(),
            pair.1.chars().collect::<Vec<char>>(),
        );
        group.bench_with_input(BenchmarkId::new("chars", len), &chars, |b, (a, bs)| {
            b.iter(|| common_run(black_box(a), black_box(bs)));
        });
    }

    group.finish();
}

fn bench_brute_matcher(c: &mut Criterion) {
    let mut group = c.benchmark_group("brute_matcher");

    // The brute-force oracle is cubic; keep sizes small.
    for len in [64, 256, 1024] {
        let pair = corpus_pair(len);
        let chars = (
            pair.0.chars().collect::<Vec<char>>(),
            pair.1.chars().collect::<Vec<char>>(),
        );
        group.bench_with_input(BenchmarkId::new("chars", len), &chars, |b, (a, bs)| {
            b.iter(|| common_run_brute(black_box(a), black_box(bs)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_table_matcher, bench_brute_matcher);
criterion_main!(benches);
