//! Benchmark objectives
//!
//! A closed catalog of one-dimensional benchmark functions. All objectives
//! are pure and minimized: lower values are better, with a known minimum of
//! zero for every member of the catalog.

use std::f64::consts::{E, PI};

use serde::{Deserialize, Serialize};

/// A scalar objective function from the benchmark catalog
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Objective {
    /// rastrigin(x) = x² − 10·cos(2πx) + 10. Highly multimodal, optimum at 0.
    Rastrigin,
    /// sphere(x) = x². Unimodal, convex, optimum at 0.
    Sphere,
    /// rosenbrock(x) = (1−x)² + 100x². One-dimensional simplification.
    Rosenbrock,
    /// ackley(x) = −20·e^(−0.2·|x|) − e^(cos(2πx)) + 20 + e. Optimum at 0.
    Ackley,
}

impl Objective {
    /// Resolve an objective by name.
    ///
    /// Unrecognized names fall back to [`Objective::Rastrigin`]; this is the
    /// stated fallback policy rather than an error condition.
    pub fn resolve(name: &str) -> Self {
        match name {
            "sphere" => Self::Sphere,
            "rosenbrock" => Self::Rosenbrock,
            "ackley" => Self::Ackley,
            _ => Self::Rastrigin,
        }
    }

    /// Canonical lowercase name of this objective
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rastrigin => "rastrigin",
            Self::Sphere => "sphere",
            Self::Rosenbrock => "rosenbrock",
            Self::Ackley => "ackley",
        }
    }

    /// Evaluate the objective at `x` (value to be minimized)
    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            Self::Rastrigin => x * x - 10.0 * (2.0 * PI * x).cos() + 10.0,
            Self::Sphere => x * x,
            Self::Rosenbrock => (1.0 - x) * (1.0 - x) + 100.0 * x * x,
            Self::Ackley => {
                -20.0 * (-0.2 * x.abs()).exp() - (2.0 * PI * x).cos().exp() + 20.0 + E
            }
        }
    }

    /// Location of the known global minimum
    pub fn optimum(&self) -> f64 {
        match self {
            Self::Rastrigin | Self::Sphere | Self::Ackley => 0.0,
            // In the 1-D simplification the (1−x)² and 100x² terms compete;
            // the true minimizer sits near the origin, not at x = 1.
            Self::Rosenbrock => 1.0 / 101.0,
        }
    }
}

impl Default for Objective {
    fn default() -> Self {
        Self::Rastrigin
    }
}
