//! Random variables underpin the stochastic behavior of both schedulers.
//! The distributions used by the epidemic process, with their common
//! parameterizations, are wrapped in enums `Continuous`, `Boolean`, and
//! `Index`.

use rand::distributions::Distribution;
use rand_distr::{Bernoulli, Exp, Uniform};
use serde::{Deserialize, Serialize};

use super::UniformRNG;
use crate::utils::errors::SimulationError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Continuous {
    /// Exponential with rate `lambda` (mean `1 / lambda`)
    Exp { lambda: f64 },
    /// Range is inclusive of min, exclusive of max: [min, max)
    Uniform { min: f64, max: f64 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Boolean {
    Bernoulli { p: f64 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Index {
    /// Range is inclusive of min, exclusive of max: [min, max)
    Uniform { min: usize, max: usize },
}

impl Continuous {
    /// The generation of random variates drives stochastic behaviors during
    /// simulation execution.  This function requires the random number
    /// generator of the simulation, and produces a f64 random variate.
    pub fn random_variate(&self, uniform_rng: &mut UniformRNG) -> Result<f64, SimulationError> {
        match self {
            Continuous::Exp { lambda } => Ok(Exp::new(*lambda)?.sample(uniform_rng.rng())),
            Continuous::Uniform { min, max } => {
                if !(min < max) {
                    return Err(SimulationError::InvalidModelState);
                }
                Ok(Uniform::new(*min, *max).sample(uniform_rng.rng()))
            }
        }
    }
}

impl Boolean {
    /// The generation of random variates drives stochastic behaviors during
    /// simulation execution.  This function requires the random number
    /// generator of the simulation, and produces a boolean random variate.
    pub fn random_variate(&self, uniform_rng: &mut UniformRNG) -> Result<bool, SimulationError> {
        match self {
            Boolean::Bernoulli { p } => Ok(Bernoulli::new(*p)?.sample(uniform_rng.rng())),
        }
    }
}

impl Index {
    /// The generation of random variates drives stochastic behaviors during
    /// simulation execution.  This function requires the random number
    /// generator of the simulation, and produces a usize random variate.
    pub fn random_variate(&self, uniform_rng: &mut UniformRNG) -> Result<usize, SimulationError> {
        match self {
            Index::Uniform { min, max } => {
                if min >= max {
                    return Err(SimulationError::InvalidModelState);
                }
                Ok(Uniform::new(*min, *max).sample(uniform_rng.rng()))
            }
        }
    }
}
