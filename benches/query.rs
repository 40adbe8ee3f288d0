use std::io::Cursor;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use t9_engine::dict::{BuildOptions, WordIndex};
use t9_engine::t9::T9Engine;

/// Deterministic pseudo-words over a-z, `count` lines of `word rank score`.
fn bench_source(count: usize) -> String {
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    let mut text = String::new();
    for rank in 0..count {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        let len = 2 + (state % 7) as usize;
        let word: String = (0..len)
            .map(|i| (b'a' + ((state >> (i * 5)) % 26) as u8) as char)
            .collect();
        text.push_str(&format!("{word} {} {}\n", rank + 1, count - rank));
    }
    text
}

fn bench_build(c: &mut Criterion) {
    let text = bench_source(50_000);
    c.bench_function("index/build_50k", |b| {
        b.iter(|| WordIndex::from_reader(Cursor::new(text.as_bytes()), BuildOptions::default()))
    });
}

static INPUTS: &[(&str, &str)] = &[
    ("short", "26"),
    ("medium", "4663"),
    ("long", "2255373"),
    ("unmapped", "4061"),
];

fn bench_query(c: &mut Criterion) {
    let text = bench_source(50_000);
    let (index, _) =
        WordIndex::from_reader(Cursor::new(text.as_bytes()), BuildOptions::default()).unwrap();
    let engine = T9Engine::new(Arc::new(index));

    let mut group = c.benchmark_group("t9/query");
    for &(label, digits) in INPUTS {
        group.bench_with_input(BenchmarkId::new(label, digits.len()), &digits, |b, &digits| {
            b.iter(|| engine.query(digits));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_query);
criterion_main!(benches);
