use serde::{Deserialize, Serialize};

use super::Method;
use crate::input_modeling::uniform_rng::DEFAULT_SEED;
use crate::models::{Counts, Parameters};
use crate::output_analysis::{grid_steps, query_grid};
use crate::utils::errors::SimulationError;

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_dt() -> f64 {
    0.1
}

/// Everything needed to reproduce a run - initial counts, parameters,
/// horizon, output grid step, seed, and the scheduler to use.
///
/// ```yaml
/// initial:
///   susceptible: 990
///   infected: 10
///   recovered: 0
/// parameters:
///   beta: 0.05
///   contactRate: 10.0
///   recoveryRate: 0.25
/// tMax: 40.0
/// dt: 0.1
/// seed: 1234
/// method: agentBased
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    initial: Counts,
    parameters: Parameters,
    t_max: f64,
    #[serde(default = "default_dt")]
    dt: f64,
    #[serde(default = "default_seed")]
    seed: u64,
    #[serde(default)]
    method: Method,
}

impl Scenario {
    pub fn new(
        initial: Counts,
        parameters: Parameters,
        t_max: f64,
        method: Method,
    ) -> Result<Self, SimulationError> {
        let scenario = Self {
            initial,
            parameters,
            t_max,
            dt: default_dt(),
            seed: default_seed(),
            method,
        };
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_dt(mut self, dt: f64) -> Result<Self, SimulationError> {
        self.dt = dt;
        self.validate()?;
        Ok(self)
    }

    pub fn from_json(scenario: &str) -> Result<Self, SimulationError> {
        let scenario: Self = serde_json::from_str(scenario)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn from_yaml(scenario: &str) -> Result<Self, SimulationError> {
        let scenario: Self = serde_yaml::from_str(scenario)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Fail fast on any configuration that cannot produce a valid run.
    pub fn validate(&self) -> Result<(), SimulationError> {
        self.initial.validate()?;
        if self.initial.total() == 0 {
            return Err(SimulationError::InvalidInitialCounts(String::from(
                "the population is empty",
            )));
        }
        self.parameters.validate()?;
        if !(self.t_max.is_finite() && self.t_max > 0.0) {
            return Err(SimulationError::InvalidHorizon(self.t_max));
        }
        grid_steps(self.t_max, self.dt)?;
        if self.method == Method::AgentBased && self.initial.total() < 2 {
            return Err(SimulationError::PopulationTooSmall(self.initial.total()));
        }
        Ok(())
    }

    pub fn initial(&self) -> &Counts {
        &self.initial
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn t_max(&self) -> f64 {
        self.t_max
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn method(&self) -> Method {
        self.method
    }

    /// The output grid `0, dt, 2 dt, ...` up to `t_max`.
    pub fn query_grid(&self) -> Result<Vec<f64>, SimulationError> {
        query_grid(self.t_max, self.dt)
    }
}
