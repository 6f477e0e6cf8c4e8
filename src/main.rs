//! This crate contains the source code for the mazerun command-line generator.

#![expect(
    unused_crate_dependencies,
    reason = "The dependencies are used in the library crate."
)]

use clap::Parser;
use color_eyre::{eyre::Result, install};
use mazerun::{is_solvable, logging, random_seed, Dimensions, SeededEngine, Tuning};

/// Generate a maze level and print it as text.
///
/// Walls are drawn as `#`, open cells as `.`, the start as `S`, the goal as `G`, hazards as `X`
/// and collectibles as `*`.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Number of columns, outer walls included.
    #[arg(long, default_value_t = 15)]
    width: usize,
    /// Number of rows, outer walls included.
    #[arg(long, default_value_t = 15)]
    height: usize,
    /// Seed for the generator; a random one is drawn and printed when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Overlay a route from start to goal, drawn as `o`.
    #[arg(long)]
    solve: bool,
    /// Generation tuning.
    #[command(flatten)]
    tuning: Tuning,
}

fn main() -> Result<()> {
    install()?;
    logging::init()?;

    let cli = Cli::parse();
    let seed = cli.seed.unwrap_or_else(random_seed);

    let mut engine = SeededEngine::seeded(cli.tuning, seed)?;
    let level = engine.generate_level(Dimensions::new(cli.width, cli.height))?;
    let route = level.solution();

    println!("seed: {seed}");
    if cli.solve {
        println!("{}", level.sketch_with_route(route.as_deref().unwrap_or_default()));
    } else {
        println!("{level}");
    }

    let carved = is_solvable(level.maze(), level.start(), level.goal(), &[]);
    println!("solvable: {carved}");
    println!("solvable around hazards: {}", route.is_some());
    println!(
        "hazards: {}, collectibles: {}",
        level.entities().hazards.len(),
        level.entities().collectibles.len()
    );

    let shortfall = level.shortfall();
    if !shortfall.is_empty() {
        println!(
            "missing: {} hazards, {} collectibles",
            shortfall.hazards, shortfall.collectibles
        );
    }

    Ok(())
}
