//! Command-line runner: load settings, run the GA, log stats to CSV.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, Level};

use scalar_evo::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "scalar-evo", version, about = "Single-variable genetic algorithm optimizer")]
struct Args {
    /// Path to the key=value settings file (defaults apply if missing)
    #[arg(long, default_value = "config.txt")]
    config: PathBuf,

    /// Path for the per-generation statistics CSV
    #[arg(long, default_value = "output.csv")]
    output: PathBuf,

    /// Fixed RNG seed for a reproducible run (entropy-seeded if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let args = Args::parse();
    let settings = Settings::load(&args.config)
        .with_context(|| format!("failed to read settings from {}", args.config.display()))?;
    let engine = EvolutionEngine::new(settings)?;

    info!(
        objective = engine.objective().name(),
        pop_size = engine.settings().pop_size,
        generations = engine.settings().generations,
        "starting genetic algorithm"
    );

    let mut sink = CsvSink::create(&args.output)?;
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let started = Instant::now();
    let summary = engine.run(rng, &mut sink)?;
    let elapsed_ms = started.elapsed().as_millis() as u64;

    match summary.best {
        Some(best) => info!(
            elapsed_ms,
            best_fitness = best.fitness,
            best_individual = best.individual,
            "genetic algorithm finished"
        ),
        None => info!(elapsed_ms, "genetic algorithm finished without evaluating"),
    }

    Ok(())
}
