//! Per-generation statistics and sinks
//!
//! Each generation produces one [`GenerationStats`] row. Sinks receive rows
//! in generation order; the engine stops the run if a sink rejects a row.

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::SinkError;
use crate::population::{FitnessRecord, Population};

/// Statistics for a single generation
///
/// Field order matches the CSV header:
/// `generation,best_fitness,avg_fitness,worst_fitness,diversity`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation index, starting at 0
    pub generation: usize,
    /// Lowest fitness in this generation
    pub best_fitness: f64,
    /// Mean fitness across the generation
    pub avg_fitness: f64,
    /// Highest fitness in this generation
    pub worst_fitness: f64,
    /// Population standard deviation of positions
    pub diversity: f64,
}

impl GenerationStats {
    /// Compute statistics from ranked records and the generation they
    /// describe.
    ///
    /// `records` must be the output of [`Population::rank`] for
    /// `population`: sorted ascending by fitness and non-empty.
    pub fn from_records(
        generation: usize,
        records: &[FitnessRecord],
        population: &Population,
    ) -> Self {
        debug_assert!(!records.is_empty());
        debug_assert_eq!(records.len(), population.len());

        let best_fitness = records[0].fitness;
        let worst_fitness = records[records.len() - 1].fitness;
        let avg_fitness =
            records.iter().map(|r| r.fitness).sum::<f64>() / records.len() as f64;

        Self {
            generation,
            best_fitness,
            avg_fitness,
            worst_fitness,
            diversity: population.spread(),
        }
    }
}

/// A consumer of per-generation statistics rows
pub trait StatsSink {
    /// Accept one completed generation's statistics
    fn record(&mut self, stats: &GenerationStats) -> Result<(), SinkError>;
}

/// CSV file sink
///
/// Writes the header on creation of the first row and flushes after every
/// row, so a killed process leaves a valid prefix of completed generations.
#[derive(Debug)]
pub struct CsvSink {
    writer: csv::Writer<File>,
    path: PathBuf,
}

impl CsvSink {
    /// Create (or truncate) a CSV file at `path`
    pub fn create(path: impl AsRef<Path>) -> Result<Self, SinkError> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path).map_err(|source| SinkError::Create {
            path: path.clone(),
            source,
        })?;
        Ok(Self {
            writer: csv::Writer::from_writer(file),
            path,
        })
    }

    /// Path of the underlying file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatsSink for CsvSink {
    fn record(&mut self, stats: &GenerationStats) -> Result<(), SinkError> {
        self.writer.serialize(stats)?;
        self.writer.flush().map_err(|source| SinkError::Flush {
            path: self.path.clone(),
            source,
        })
    }
}

/// In-memory sink collecting every row, mainly for tests and analysis
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    rows: Vec<GenerationStats>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// All rows recorded so far, in generation order
    pub fn rows(&self) -> &[GenerationStats] {
        &self.rows
    }

    /// Take the collected rows out of the sink
    pub fn into_rows(self) -> Vec<GenerationStats> {
        self.rows
    }
}

impl StatsSink for MemorySink {
    fn record(&mut self, stats: &GenerationStats) -> Result<(), SinkError> {
        self.rows.push(*stats);
        Ok(())
    }
}
