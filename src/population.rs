//! Population state
//!
//! A generation is an ordered sequence of candidate positions. The engine
//! replaces the whole population each generation; there is no in-place
//! mutation of generation state.

use rand::Rng;

use crate::fitness::Objective;

/// One candidate solution: a position on the real line within the
/// configured bounds. Candidates have no identity beyond their value.
pub type Individual = f64;

/// A candidate paired with its evaluated fitness
///
/// Records order by ascending fitness (minimization); ties keep encounter
/// order because ranking uses a stable sort.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitnessRecord {
    /// Objective value at `individual`
    pub fitness: f64,
    /// The evaluated candidate
    pub individual: Individual,
}

/// An ordered collection of candidate solutions
#[derive(Clone, Debug, PartialEq)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Create an empty population with the given capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            individuals: Vec::with_capacity(capacity),
        }
    }

    /// Draw `size` individuals uniformly from `[min, max]`
    pub fn random<R: Rng>(size: usize, min: f64, max: f64, rng: &mut R) -> Self {
        let individuals = (0..size).map(|_| rng.gen_range(min..=max)).collect();
        Self { individuals }
    }

    /// Add an individual
    pub fn push(&mut self, individual: Individual) {
        self.individuals.push(individual);
    }

    /// Population size
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Check if the population is empty
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Iterate over the individuals
    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter()
    }

    /// The individuals as a slice
    pub fn as_slice(&self) -> &[Individual] {
        &self.individuals
    }

    /// Mean position of the population
    pub fn mean_position(&self) -> f64 {
        if self.individuals.is_empty() {
            return 0.0;
        }
        self.individuals.iter().sum::<f64>() / self.individuals.len() as f64
    }

    /// Population standard deviation of positions, sqrt(mean((xᵢ − x̄)²)).
    ///
    /// This is the diversity metric reported in per-generation statistics.
    pub fn spread(&self) -> f64 {
        if self.individuals.is_empty() {
            return 0.0;
        }
        let mean = self.mean_position();
        let variance = self
            .individuals
            .iter()
            .map(|x| (x - mean) * (x - mean))
            .sum::<f64>()
            / self.individuals.len() as f64;
        variance.sqrt()
    }

    /// Evaluate every individual and stable-sort ascending by fitness.
    ///
    /// Index 0 of the result is the current best; the last index is the
    /// worst. The record list is rebuilt fresh each generation.
    pub fn rank(&self, objective: Objective) -> Vec<FitnessRecord> {
        let mut records: Vec<FitnessRecord> = self
            .individuals
            .iter()
            .map(|&individual| FitnessRecord {
                fitness: objective.evaluate(individual),
                individual,
            })
            .collect();
        records.sort_by(|a, b| {
            a.fitness
                .partial_cmp(&b.fitness)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        records
    }
}

impl std::ops::Index<usize> for Population {
    type Output = Individual;

    fn index(&self, index: usize) -> &Self::Output {
        &self.individuals[index]
    }
}

impl FromIterator<Individual> for Population {
    fn from_iter<I: IntoIterator<Item = Individual>>(iter: I) -> Self {
        Self {
            individuals: iter.into_iter().collect(),
        }
    }
}
