use serde::{Deserialize, Serialize};

use crate::utils::errors::SimulationError;

/// Epidemic parameters, fixed for the duration of a run.  `beta` is the
/// per-contact transmission probability, `contact_rate` the rate at which
/// each individual makes contacts, and `recovery_rate` the rate at which an
/// infected individual recovers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameters {
    beta: f64,
    contact_rate: f64,
    recovery_rate: f64,
}

impl Parameters {
    pub fn new(beta: f64, contact_rate: f64, recovery_rate: f64) -> Result<Self, SimulationError> {
        let parameters = Self {
            beta,
            contact_rate,
            recovery_rate,
        };
        parameters.validate()?;
        Ok(parameters)
    }

    /// Deserialized parameters bypass `new`, so configuration loading calls
    /// this directly.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !(0.0..=1.0).contains(&self.beta) {
            return Err(SimulationError::InvalidTransmissionProbability(self.beta));
        }
        if !(self.contact_rate.is_finite() && self.contact_rate > 0.0) {
            return Err(SimulationError::InvalidContactRate(self.contact_rate));
        }
        if !(self.recovery_rate.is_finite() && self.recovery_rate > 0.0) {
            return Err(SimulationError::InvalidRecoveryRate(self.recovery_rate));
        }
        Ok(())
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn contact_rate(&self) -> f64 {
        self.contact_rate
    }

    pub fn recovery_rate(&self) -> f64 {
        self.recovery_rate
    }

    /// Basic reproduction number, `beta * c / gamma`.
    pub fn r0(&self) -> f64 {
        self.beta * self.contact_rate / self.recovery_rate
    }
}
