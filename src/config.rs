//! Run configuration
//!
//! Settings are constructed once at startup (defaults overridden by any
//! parsed config values) and never mutated afterwards. Parsing is lenient:
//! unknown keys are ignored and a recognized key with a malformed value is
//! skipped with a warning, so a partially valid file still applies.

use std::io;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;
use crate::fitness::Objective;

/// Configuration for a single GA run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Number of individuals per generation
    pub pop_size: usize,
    /// Number of generations to run
    pub generations: usize,
    /// Per-child mutation probability
    pub mutation_rate: f64,
    /// Per-child crossover probability
    pub crossover_rate: f64,
    /// Fraction of the population carried forward unmodified
    pub elite_ratio: f64,
    /// Advisory pacing delay between generations (milliseconds)
    pub delay_ms: u64,
    /// Objective function to minimize
    pub objective: Objective,
    /// Lower search bound (inclusive)
    pub min_bound: f64,
    /// Upper search bound (inclusive)
    pub max_bound: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            pop_size: 50,
            generations: 100,
            mutation_rate: 0.1,
            crossover_rate: 0.8,
            elite_ratio: 0.2,
            delay_ms: 100,
            objective: Objective::Rastrigin,
            min_bound: -5.12,
            max_bound: 5.12,
        }
    }
}

impl Settings {
    /// Load settings from a `key=value` file.
    ///
    /// A missing file yields the defaults verbatim; any other I/O error
    /// propagates to the caller.
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(text) => Ok(Self::parse(&text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Parse a line-oriented `key=value` source over the defaults.
    ///
    /// Recognized keys: `popSize`, `generations`, `mutationRate`,
    /// `crossoverRate`, `eliteRatio`, `delay`, `function`, `minBound`,
    /// `maxBound`. Blank lines, `#` comments, and unknown keys are ignored.
    pub fn parse(text: &str) -> Self {
        let mut settings = Self::default();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let (key, value) = (key.trim(), value.trim());
            match key {
                "popSize" => apply(key, value, &mut settings.pop_size),
                "generations" => apply(key, value, &mut settings.generations),
                "mutationRate" => apply(key, value, &mut settings.mutation_rate),
                "crossoverRate" => apply(key, value, &mut settings.crossover_rate),
                "eliteRatio" => apply(key, value, &mut settings.elite_ratio),
                "delay" => apply(key, value, &mut settings.delay_ms),
                "minBound" => apply(key, value, &mut settings.min_bound),
                "maxBound" => apply(key, value, &mut settings.max_bound),
                "function" => settings.objective = Objective::resolve(value),
                _ => {}
            }
        }
        settings
    }

    /// Validate all field constraints.
    ///
    /// Must be called before a run starts; the engine refuses settings that
    /// would make the tournament index range empty or the clamp degenerate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pop_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.pop_size));
        }
        for (field, value) in [
            ("mutationRate", self.mutation_rate),
            ("crossoverRate", self.crossover_rate),
            ("eliteRatio", self.elite_ratio),
        ] {
            if !(0.0..=1.0).contains(&value) || value.is_nan() {
                return Err(ConfigError::RateOutOfRange { field, value });
            }
        }
        if !self.min_bound.is_finite()
            || !self.max_bound.is_finite()
            || self.min_bound >= self.max_bound
        {
            return Err(ConfigError::InvalidBounds {
                min: self.min_bound,
                max: self.max_bound,
            });
        }
        Ok(())
    }

    /// Number of elite individuals carried into each new generation
    pub fn elite_count(&self) -> usize {
        (self.pop_size as f64 * self.elite_ratio) as usize
    }
}

/// Apply a parsed value to a settings field, skipping malformed input.
fn apply<T: FromStr>(key: &str, value: &str, field: &mut T) {
    match value.parse() {
        Ok(parsed) => *field = parsed,
        Err(_) => warn!(key, value, "skipping malformed settings line"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.pop_size, 50);
        assert_eq!(s.generations, 100);
        assert_eq!(s.mutation_rate, 0.1);
        assert_eq!(s.crossover_rate, 0.8);
        assert_eq!(s.elite_ratio, 0.2);
        assert_eq!(s.delay_ms, 100);
        assert_eq!(s.objective, Objective::Rastrigin);
        assert_eq!(s.min_bound, -5.12);
        assert_eq!(s.max_bound, 5.12);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_parse_overrides() {
        let s = Settings::parse(
            "popSize=80\n\
             generations=200\n\
             mutationRate=0.25\n\
             crossoverRate=0.9\n\
             eliteRatio=0.1\n\
             delay=0\n\
             function=ackley\n\
             minBound=-2.5\n\
             maxBound=2.5\n",
        );
        assert_eq!(s.pop_size, 80);
        assert_eq!(s.generations, 200);
        assert_eq!(s.mutation_rate, 0.25);
        assert_eq!(s.crossover_rate, 0.9);
        assert_eq!(s.elite_ratio, 0.1);
        assert_eq!(s.delay_ms, 0);
        assert_eq!(s.objective, Objective::Ackley);
        assert_eq!(s.min_bound, -2.5);
        assert_eq!(s.max_bound, 2.5);
    }

    #[test]
    fn test_parse_ignores_unknown_and_comments() {
        let s = Settings::parse(
            "# GA run settings\n\
             \n\
             tournamentSize=7\n\
             popSize=30\n\
             not a key value line\n",
        );
        assert_eq!(s.pop_size, 30);
        assert_eq!(s.generations, Settings::default().generations);
    }

    #[test]
    fn test_parse_skips_malformed_value_only() {
        // Lenient policy: the bad popSize line is dropped, the rest applies
        let s = Settings::parse("popSize=fifty\ngenerations=42\n");
        assert_eq!(s.pop_size, Settings::default().pop_size);
        assert_eq!(s.generations, 42);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let s = Settings::parse("  popSize = 12 \n function = sphere \n");
        assert_eq!(s.pop_size, 12);
        assert_eq!(s.objective, Objective::Sphere);
    }

    #[test]
    fn test_parse_unknown_function_falls_back() {
        let s = Settings::parse("function=schwefel\n");
        assert_eq!(s.objective, Objective::Rastrigin);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let s = Settings::load(dir.path().join("no-such-config.txt")).unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.txt");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "popSize=16").unwrap();
        writeln!(f, "function=rosenbrock").unwrap();
        drop(f);

        let s = Settings::load(&path).unwrap();
        assert_eq!(s.pop_size, 16);
        assert_eq!(s.objective, Objective::Rosenbrock);
    }

    #[test]
    fn test_validate_rejects_small_population() {
        for pop_size in [0, 1] {
            let s = Settings {
                pop_size,
                ..Settings::default()
            };
            assert_eq!(s.validate(), Err(ConfigError::PopulationTooSmall(pop_size)));
        }
    }

    #[test]
    fn test_validate_rejects_rates_outside_unit_interval() {
        let s = Settings {
            mutation_rate: 1.5,
            ..Settings::default()
        };
        assert_eq!(
            s.validate(),
            Err(ConfigError::RateOutOfRange {
                field: "mutationRate",
                value: 1.5
            })
        );

        let s = Settings {
            elite_ratio: -0.1,
            ..Settings::default()
        };
        assert!(matches!(
            s.validate(),
            Err(ConfigError::RateOutOfRange {
                field: "eliteRatio",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let s = Settings {
            min_bound: 5.0,
            max_bound: -5.0,
            ..Settings::default()
        };
        assert!(matches!(s.validate(), Err(ConfigError::InvalidBounds { .. })));

        let s = Settings {
            min_bound: 1.0,
            max_bound: 1.0,
            ..Settings::default()
        };
        assert!(matches!(s.validate(), Err(ConfigError::InvalidBounds { .. })));
    }

    #[test]
    fn test_validate_accepts_zero_generations() {
        let s = Settings {
            generations: 0,
            ..Settings::default()
        };
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_elite_count_truncates() {
        let s = Settings {
            pop_size: 4,
            elite_ratio: 0.5,
            ..Settings::default()
        };
        assert_eq!(s.elite_count(), 2);

        let s = Settings {
            pop_size: 5,
            elite_ratio: 0.5,
            ..Settings::default()
        };
        assert_eq!(s.elite_count(), 2);

        let s = Settings {
            pop_size: 7,
            elite_ratio: 0.0,
            ..Settings::default()
        };
        assert_eq!(s.elite_count(), 0);
    }
}
