//! Benchmark mode: play many randomly generated boards with one player
//! and report timing/move-count statistics.
//!
//! Same min/max/average bookkeeping over repeated solves and the same
//! `term-painter`-highlighted summary output as a single `solve` run,
//! adapted to the per-move `Player` contract: each iteration runs its own
//! play loop rather than calling a single whole-board solve function, and
//! board geometry/color count are configurable rather than fixed.

use crate::cli::BenchArgs;
use crate::make_player;
use anyhow::Result;
use flood_it::board::Board;
use flood_it::solver::Player;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};
use term_painter::Color as TermColor;
use term_painter::ToStyle;

fn format_duration(d: Duration) -> String {
    let total_millis = d.as_millis();
    let minutes = total_millis / 60_000;
    let seconds = (total_millis % 60_000) as f64 / 1_000.0;
    format!("{}m{:.3}s", minutes, seconds)
}

pub fn run(args: &BenchArgs) -> Result<()> {
    info!(
        "benchmarking player '{}' over {} boards ({}x{}, {} colors)",
        args.player, args.count, args.width, args.height, args.colors
    );

    if args.count == 0 {
        anyhow::bail!("--count must be at least 1");
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut elapsed_total = Duration::ZERO;
    let mut min_time = Duration::MAX;
    let mut max_time = Duration::ZERO;
    let mut min_moves = 0usize;
    let mut max_moves = 0usize;
    let mut total_moves = 0usize;

    for _ in 0..args.count {
        let mut board = Board::random(args.height, args.width, args.colors, &mut rng)?;
        let mut player = make_player(&args.player, &mut rng)?;
        let origin = (0, 0);

        let start = Instant::now();
        let mut moves = 0usize;
        while !board.is_solved() {
            let mv = player.best_move(&board, origin, None, None)?;
            board = board.do_move(origin, mv);
            moves += 1;
        }
        let iter_time = start.elapsed();

        elapsed_total += iter_time;
        total_moves += moves;

        if iter_time > max_time {
            max_time = iter_time;
            max_moves = moves;
        }
        if iter_time < min_time {
            min_time = iter_time;
            min_moves = moves;
        }
    }

    println!("\n{}", TermColor::BrightWhite.bold().paint("----- Benchmark done -----"));
    println!(
        "+++ Time elapsed: {} (avg: {}, min: {}, max: {})",
        TermColor::BrightYellow.paint(format_duration(elapsed_total)),
        TermColor::BrightBlue.paint(format_duration(elapsed_total / args.count as u32)),
        TermColor::BrightBlue.paint(format_duration(min_time)),
        TermColor::BrightBlue.paint(format_duration(max_time)),
    );
    println!(
        "+++ Number of moves: {} ({:.2} on average, {} min, {} max)",
        TermColor::BrightYellow.paint(total_moves),
        total_moves as f64 / args.count as f64,
        min_moves,
        max_moves,
    );

    Ok(())
}
