use serde::{Deserialize, Serialize};

use crate::utils::errors::SimulationError;

/// The two reaction channels of the SIR process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// S -> I
    Infection,
    /// I -> R
    Recovery,
}

/// Aggregate compartment counts.  The total `S + I + R` is fixed when the
/// counts are created, and `apply` is the only way to move individuals
/// between compartments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    susceptible: usize,
    infected: usize,
    recovered: usize,
}

impl Counts {
    pub fn new(susceptible: usize, infected: usize, recovered: usize) -> Self {
        Self {
            susceptible,
            infected,
            recovered,
        }
    }

    pub fn susceptible(&self) -> usize {
        self.susceptible
    }

    pub fn infected(&self) -> usize {
        self.infected
    }

    pub fn recovered(&self) -> usize {
        self.recovered
    }

    pub fn total(&self) -> usize {
        self.susceptible + self.infected + self.recovered
    }

    /// Rejects counts that cannot seed a run - an overflowing total.
    pub fn validate(&self) -> Result<(), SimulationError> {
        self.susceptible
            .checked_add(self.infected)
            .and_then(|partial| partial.checked_add(self.recovered))
            .map(|_| ())
            .ok_or_else(|| {
                SimulationError::InvalidInitialCounts(String::from(
                    "the total population overflows",
                ))
            })
    }

    /// Apply a single event to the counts.  A transition out of an empty
    /// compartment is a scheduling defect, and leaves the counts unchanged.
    pub fn apply(&mut self, transition: Transition) -> Result<(), SimulationError> {
        match transition {
            Transition::Infection => {
                self.susceptible = self
                    .susceptible
                    .checked_sub(1)
                    .ok_or(SimulationError::InvalidModelState)?;
                self.infected += 1;
            }
            Transition::Recovery => {
                self.infected = self
                    .infected
                    .checked_sub(1)
                    .ok_or(SimulationError::InvalidModelState)?;
                self.recovered += 1;
            }
        }
        Ok(())
    }
}
