use criterion::{criterion_group, criterion_main, Criterion};
use wordplay_solver::{Board, Execution, Rack, Solver, WordGraph};

const WORDS: &[&str] = &[
    "act", "aid", "air", "ant", "arc", "art", "ate", "cart", "cast", "cat", "date", "diet", "dine",
    "dirt", "ear", "eat", "edit", "nest", "net", "note", "oat", "ore", "rain", "rat", "rate",
    "read", "rest", "rice", "rid", "rise", "road", "rod", "rose", "rust", "sat", "sea", "seat",
    "set", "side", "sit", "star", "stare", "stone", "tar", "tea", "tear", "ten", "tide", "tie",
    "tin", "toe", "ton", "train", "tree", "trend", "trade",
];

const TEST_STATE: &[&str] = &[
    "...............",
    "...............",
    "...............",
    "...............",
    "...............",
    ".....r.........",
    ".....i.........",
    ".....stone.....",
    ".....e..o......",
    "........t......",
    "........e......",
    "...............",
    "...............",
    "...............",
    "...............",
];

fn bench_solutions(c: &mut Criterion, name: &str, rack: &str, execution: Execution) {
    let graph = WordGraph::from_words(WORDS).unwrap();
    let solver = Solver::new(&graph);
    let board = Board::default().with_state_from_strings(TEST_STATE).unwrap();
    let rack: Rack = rack.parse().unwrap();
    c.bench_function(&format!("solver.{}", name), |b| {
        b.iter(|| solver.solutions(&board, &rack, execution))
    });
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_solutions(c, "serial", "retains", Execution::Serial);
    bench_solutions(c, "parallel", "retains", Execution::Parallel);
}

fn slow_benchmarks(c: &mut Criterion) {
    bench_solutions(c, "blanks", "rat*s*e", Execution::Parallel);
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(60);
    targets = criterion_benchmark
}

criterion_group! {
    name = slow;
    config = Criterion::default()
        .sample_size(10);
    targets = slow_benchmarks
}

criterion_main!(benches, slow);
