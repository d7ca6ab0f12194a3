//! Driver: CLI parsing, random board generation, the play loop, and
//! textual rendering — all external to the core region-graph solver.
//!
//! CLI argument handling runs through `clap`, with a `make_player`
//! returning `Box<dyn Player>` and a per-move `Player` contract driving
//! the solve/bench loops.

mod bench;
mod cli;

use clap::Parser;
use cli::{Cli, Command, SolveArgs};
use flood_it::board::Board;
use flood_it::graph;
use flood_it::render;
use flood_it::solver::{GraphPlayer, GreedyPlayer, KurtPlayer, Player, RandomPlayer};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::thread;

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Command::Solve(args) => solve(args),
        Command::Bench(args) => bench::run(args),
    };

    if let Err(err) = result {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

/// Builds the named player. `rng` is the run's already-seeded handle (see
/// `solve`/`bench::run`); the random player draws a sub-seed from it so
/// `--seed` determinism covers the random player too, instead of falling
/// back to OS entropy regardless of `--seed`.
pub(crate) fn make_player(name: &str, rng: &mut StdRng) -> anyhow::Result<Box<dyn Player>> {
    match name {
        "random" => Ok(Box::new(RandomPlayer::new(StdRng::seed_from_u64(rng.gen())))),
        "greedy" => Ok(Box::new(GreedyPlayer)),
        "kurt" => Ok(Box::new(KurtPlayer)),
        "graph" => Ok(Box::new(GraphPlayer::new())),
        other => anyhow::bail!("Player '{}' does not exist!", other),
    }
}

fn solve(args: &SolveArgs) -> anyhow::Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    log::info!(
        "generating a {}x{} board with {} colors{}",
        args.width,
        args.height,
        args.colors,
        args.seed.map(|s| format!(" (seed {s})")).unwrap_or_default()
    );

    let mut board = Board::random(args.height, args.width, args.colors, &mut rng)?;
    let mut player = make_player(&args.player, &mut rng)?;
    let origin = (0, 0);

    if args.debug_graph {
        let region_graph = graph::Graph::build(&board);
        graph::print_debug(&board, &region_graph);
    }

    let mut moves = Vec::new();
    render::print_board(&board);

    while !board.is_solved() {
        let mv = player.best_move(&board, origin, None, None)?;
        board = board.do_move(origin, mv);
        moves.push(mv);

        println!();
        render::print_board(&board);

        if let Some(delay) = args.delay_duration() {
            thread::sleep(delay);
        }
    }

    println!();
    render::print_solution(&moves);

    Ok(())
}
