//! Evolution engine
//!
//! A generational GA over one real decision variable. Each generation the
//! engine evaluates and ranks the population, reports statistics, carries
//! the elites forward verbatim, and refills the rest via tournament
//! selection over the better half, arithmetic crossover, and an adaptive
//! mutation whose strength decays linearly over the run.

use std::thread;
use std::time::Duration;

use rand::Rng;
use tracing::info;

use crate::config::Settings;
use crate::error::{ConfigError, GaError};
use crate::fitness::Objective;
use crate::population::{FitnessRecord, Population};
use crate::stats::{GenerationStats, StatsSink};

/// Initial mutation step as a fraction of one unit; decays toward zero
/// as the run progresses.
const BASE_MUTATION_STRENGTH: f64 = 0.5;

/// How often the progress observer reports, in generations
const PROGRESS_INTERVAL: usize = 10;

/// Orchestrates a GA run for a validated [`Settings`]
#[derive(Clone, Debug)]
pub struct EvolutionEngine {
    settings: Settings,
    objective: Objective,
}

/// Outcome of a completed run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunSummary {
    /// Lowest-fitness record seen across the whole run; `None` only when
    /// the run was configured for zero generations.
    pub best: Option<FitnessRecord>,
    /// Number of generations completed
    pub generations: usize,
}

impl EvolutionEngine {
    /// Create an engine, validating the settings eagerly.
    ///
    /// Rejecting bad settings here guarantees the breeding loop never sees
    /// an empty tournament range.
    pub fn new(settings: Settings) -> Result<Self, ConfigError> {
        settings.validate()?;
        let objective = settings.objective;
        Ok(Self {
            settings,
            objective,
        })
    }

    /// The validated settings this engine runs with
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The resolved objective
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Start a run as a lazy, finite sequence of per-generation statistics.
    ///
    /// The iterator yields exactly `settings.generations` items. Each call
    /// draws a fresh initial population from `rng`; runs are not
    /// restartable. Dropping the iterator early abandons the run without
    /// further side effects.
    pub fn generations<R: Rng>(&self, mut rng: R) -> Generations<'_, R> {
        let population = Population::random(
            self.settings.pop_size,
            self.settings.min_bound,
            self.settings.max_bound,
            &mut rng,
        );
        Generations {
            engine: self,
            rng,
            population,
            generation: 0,
            best: None,
        }
    }

    /// Run to completion, emitting every generation's statistics to `sink`.
    ///
    /// Logs a progress line every tenth generation and sleeps the advisory
    /// `delay_ms` between generations (pacing only; computed results are
    /// unaffected). A sink failure aborts the run immediately.
    pub fn run<R: Rng, S: StatsSink>(&self, rng: R, sink: &mut S) -> Result<RunSummary, GaError> {
        let delay = Duration::from_millis(self.settings.delay_ms);
        let mut generations = self.generations(rng);

        while let Some(stats) = generations.next() {
            sink.record(&stats)?;

            if stats.generation % PROGRESS_INTERVAL == 0 {
                info!(
                    generation = stats.generation,
                    best = stats.best_fitness,
                    avg = stats.avg_fitness,
                    "generation complete"
                );
            }

            if !delay.is_zero() && stats.generation + 1 < self.settings.generations {
                thread::sleep(delay);
            }
        }

        Ok(RunSummary {
            best: generations.best(),
            generations: self.settings.generations,
        })
    }
}

/// Lazy sequence of generation statistics for one run
///
/// Produced by [`EvolutionEngine::generations`]. Holds the generation state
/// and the RNG stream for the run.
pub struct Generations<'e, R: Rng> {
    engine: &'e EvolutionEngine,
    rng: R,
    population: Population,
    generation: usize,
    best: Option<FitnessRecord>,
}

impl<R: Rng> Generations<'_, R> {
    /// Current generation state.
    ///
    /// After the iterator is exhausted this is the final constructed
    /// population, which is never evaluated itself.
    pub fn population(&self) -> &Population {
        &self.population
    }

    /// Index of the next generation to be evaluated
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Lowest-fitness record seen so far across all evaluated generations.
    ///
    /// This is the run's true minimum, tracked explicitly rather than read
    /// off any position in the final population.
    pub fn best(&self) -> Option<FitnessRecord> {
        self.best
    }

    /// Pick one parent: two independent uniform draws over the better half
    /// of the ranked records, keeping the lower-fitness contender.
    fn tournament(&mut self, records: &[FitnessRecord], half: usize) -> FitnessRecord {
        let a = records[self.rng.gen_range(0..half)];
        let b = records[self.rng.gen_range(0..half)];
        if a.fitness < b.fitness {
            a
        } else {
            b
        }
    }

    /// Build the next generation from the ranked current one.
    fn breed(&mut self, records: &[FitnessRecord]) -> Population {
        let settings = &self.engine.settings;
        let mut next = Population::with_capacity(settings.pop_size);

        for record in records.iter().take(settings.elite_count()) {
            next.push(record.individual);
        }

        // Selection pressure comes from the index range: both tournament
        // contenders are drawn from the better half of the ranked list.
        let half = settings.pop_size / 2;
        while next.len() < settings.pop_size {
            let parent1 = self.tournament(records, half);
            let parent2 = self.tournament(records, half);

            let mut child = if self.rng.gen::<f64>() < settings.crossover_rate {
                let alpha = self.rng.gen::<f64>();
                alpha * parent1.individual + (1.0 - alpha) * parent2.individual
            } else {
                parent1.individual
            };

            if self.rng.gen::<f64>() < settings.mutation_rate {
                let strength = BASE_MUTATION_STRENGTH
                    * (1.0 - self.generation as f64 / settings.generations as f64);
                child += self.rng.gen_range(-1.0..=1.0) * strength;
                child = child.clamp(settings.min_bound, settings.max_bound);
            }

            next.push(child);
        }

        next
    }
}

impl<R: Rng> Iterator for Generations<'_, R> {
    type Item = GenerationStats;

    fn next(&mut self) -> Option<GenerationStats> {
        if self.generation >= self.engine.settings.generations {
            return None;
        }

        let records = self.population.rank(self.engine.objective);
        let stats = GenerationStats::from_records(self.generation, &records, &self.population);

        let generation_best = records[0];
        if self
            .best
            .map_or(true, |b| generation_best.fitness < b.fitness)
        {
            self.best = Some(generation_best);
        }

        self.population = self.breed(&records);
        self.generation += 1;
        Some(stats)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.engine.settings.generations - self.generation;
        (remaining, Some(remaining))
    }
}

impl<R: Rng> ExactSizeIterator for Generations<'_, R> {}
