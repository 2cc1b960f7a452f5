//! Play a few turns against yourself.
//!
//! Usage: `cargo run --example best_move [wordfile] [turns]`
//!
//! Without a word file a small built-in word list is used.
use anyhow::Result;
use log::info;
use rand::{rngs::StdRng, SeedableRng};
use std::env;
use std::time::Instant;
use wordplay_solver::{Board, Difficulty, Execution, Rack, Solver, TileBag, WordGraph};

const WORDS: &[&str] = &[
    "act", "aid", "air", "ant", "arc", "art", "ate", "cart", "cast", "cat", "date", "diet", "dine",
    "dirt", "ear", "eat", "edit", "nest", "net", "note", "oat", "ore", "rain", "rat", "rate",
    "read", "rest", "rice", "rid", "rise", "road", "rod", "rose", "rust", "sat", "sea", "seat",
    "set", "side", "sit", "star", "stare", "stone", "tar", "tea", "tear", "ten", "tide", "tie",
    "tin", "toe", "ton", "train", "tree", "trend", "trade",
];

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let t0 = Instant::now();
    let graph = match args.get(1) {
        Some(path) => WordGraph::from_file(path)?,
        None => WordGraph::from_words(WORDS)?,
    };
    println!(
        "Word graph with {} words and {} nodes took {:?}",
        graph.word_count(),
        graph.node_count(),
        t0.elapsed()
    );
    let turns: usize = match args.get(2) {
        Some(turns) => turns.parse()?,
        None => 5,
    };

    let solver = Solver::new(&graph);
    let mut board = Board::default();
    // seeded to get reproducible games
    let mut rng = StdRng::seed_from_u64(123);
    let mut bag = TileBag::from(board.tileset());
    let mut rack = Rack::new();

    for turn in 1..=turns {
        let wanted = board.rules().rack_size.saturating_sub(rack.len());
        rack.extend(bag.draw(wanted, &mut rng));
        if rack.is_empty() {
            break;
        }
        let t0 = Instant::now();
        let solutions = solver.solutions(&board, &rack, Execution::Parallel);
        let dt = t0.elapsed();
        println!(
            "Turn {} with \"{}\": {} solutions in {:?}",
            turn,
            rack,
            solutions.len(),
            dt
        );
        for solution in solutions.iter().take(5) {
            println!("  {}", solution);
        }
        match solver.solve(&solutions, Difficulty::Best) {
            Ok(best) => {
                let tiles = solver.play(&mut board, best)?;
                rack.remove_tiles(&tiles);
            }
            Err(err) => {
                info!("{}, exchanging all tiles", err);
                bag.put_back(&rack);
                rack.clear();
            }
        }
    }
    println!("{}", board);
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {:?}", err);
    }
}
