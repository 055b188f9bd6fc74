//! # scalar-evo
//!
//! A single-variable genetic algorithm optimizer.
//!
//! This library minimizes a scalar objective over one continuous decision
//! variable using a generational GA: tournament selection over the better
//! half of the ranked population, arithmetic (blend) crossover, adaptive
//! mutation whose magnitude decays over the run, and elitism. Every
//! generation emits a statistics row (best/average/worst fitness and
//! population diversity) to a pluggable sink.
//!
//! ## Quick Start
//!
//! ```rust
//! use scalar_evo::prelude::*;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let settings = Settings {
//!     pop_size: 40,
//!     generations: 50,
//!     delay_ms: 0,
//!     ..Settings::default()
//! };
//! let engine = EvolutionEngine::new(settings).unwrap();
//! let mut sink = MemorySink::new();
//! let summary = engine
//!     .run(StdRng::seed_from_u64(42), &mut sink)
//!     .unwrap();
//! assert_eq!(sink.rows().len(), 50);
//! assert!(summary.best.is_some());
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod fitness;
pub mod population;
pub mod stats;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::Settings;
    pub use crate::engine::{EvolutionEngine, Generations, RunSummary};
    pub use crate::error::{ConfigError, GaError, GaResult, SinkError};
    pub use crate::fitness::Objective;
    pub use crate::population::{FitnessRecord, Individual, Population};
    pub use crate::stats::{CsvSink, GenerationStats, MemorySink, StatsSink};
}
