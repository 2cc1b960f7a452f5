use criterion::{criterion_group, criterion_main, Criterion};
use std::collections::BTreeMap;
use wordplay_solver::WordGraph;

/// Generated words, so the benchmark does not need a word file
fn words() -> Vec<String> {
    let syllables = ["ba", "co", "di", "fu", "ga", "le", "mo", "ne", "ri", "st", "ta", "ve"];
    let mut words = Vec::new();
    for a in &syllables {
        for b in &syllables {
            words.push(format!("{}{}", a, b));
            for c in &syllables {
                words.push(format!("{}{}{}", a, b, c));
            }
        }
    }
    words
}

fn bench_build(c: &mut Criterion) {
    let words = words();
    c.bench_function("wordgraph.from_words", |b| {
        b.iter(|| WordGraph::from_words(&words).unwrap())
    });
}

fn bench_lookup(c: &mut Criterion) {
    let words = words();
    let graph = WordGraph::from_words(&words).unwrap();
    c.bench_function("wordgraph.lookup", |b| {
        b.iter(|| words.iter().filter(|word| graph.lookup(word)).count())
    });
}

fn bench_anagrams(c: &mut Criterion) {
    let graph = WordGraph::from_words(&words()).unwrap();
    let letters = ['a', 'e', 'i', 'o', 'r', 's', 't'];
    c.bench_function("wordgraph.anagrams_of", |b| {
        b.iter(|| graph.anagrams_of(&letters, 1, 6, &BTreeMap::new()))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let graph = WordGraph::from_words(&words()).unwrap();
    let bytes = graph.to_bytes();
    c.bench_function("wordgraph.from_bytes", |b| {
        b.iter(|| WordGraph::from_bytes(&bytes).unwrap())
    });
}

criterion_group!(benches, bench_build, bench_lookup, bench_anagrams, bench_snapshot);
criterion_main!(benches);
