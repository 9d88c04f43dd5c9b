//! Event rates (propensities) of the two reaction channels, as functions of
//! the current compartment counts and the epidemic parameters.

use super::{Counts, Parameters, Transition};
use crate::utils::errors::SimulationError;

/// Mass-action infection rate, `beta * c * I * S / N`.  The population size
/// is recomputed from the counts on every call.
pub fn infection_rate(counts: &Counts, parameters: &Parameters) -> Result<f64, SimulationError> {
    let population = counts.total();
    if population == 0 {
        return Ok(0.0);
    }
    checked_rate(
        parameters.beta()
            * parameters.contact_rate()
            * counts.infected() as f64
            * counts.susceptible() as f64
            / population as f64,
    )
}

/// Recovery rate, `gamma * I`.
pub fn recovery_rate(counts: &Counts, parameters: &Parameters) -> Result<f64, SimulationError> {
    checked_rate(parameters.recovery_rate() * counts.infected() as f64)
}

fn checked_rate(rate: f64) -> Result<f64, SimulationError> {
    if rate.is_finite() && rate >= 0.0 {
        Ok(rate)
    } else {
        Err(SimulationError::NegativeRate(rate))
    }
}

/// The propensities of both channels in a single state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Propensities {
    infection: f64,
    recovery: f64,
}

impl Propensities {
    pub fn new(counts: &Counts, parameters: &Parameters) -> Result<Self, SimulationError> {
        Ok(Self {
            infection: infection_rate(counts, parameters)?,
            recovery: recovery_rate(counts, parameters)?,
        })
    }

    pub fn infection(&self) -> f64 {
        self.infection
    }

    pub fn recovery(&self) -> f64 {
        self.recovery
    }

    pub fn total(&self) -> f64 {
        self.infection + self.recovery
    }

    /// No reaction can fire from an absorbing state.
    pub fn is_absorbing(&self) -> bool {
        self.total() == 0.0
    }

    /// Select the channel for a draw `u` on [0, total).
    pub fn select(&self, u: f64) -> Transition {
        if u < self.infection {
            Transition::Infection
        } else {
            Transition::Recovery
        }
    }
}
