use crate::input_modeling::UniformRNG;
use crate::utils::errors::SimulationError;

/// The simulator provides a uniform random number generator and simulation
/// clock to the schedulers during the execution of a run
#[derive(Debug, Clone, Default)]
pub struct Services {
    uniform_rng: UniformRNG,
    global_time: f64,
}

impl Services {
    pub fn new(seed: u64) -> Self {
        Self {
            uniform_rng: UniformRNG::new(seed),
            global_time: 0.0,
        }
    }

    pub fn uniform_rng(&mut self) -> &mut UniformRNG {
        &mut self.uniform_rng
    }

    pub fn global_time(&self) -> f64 {
        self.global_time
    }

    /// Move the clock forward to `time`.  The clock never runs backwards.
    pub fn advance_to(&mut self, time: f64) -> Result<(), SimulationError> {
        if !time.is_finite() || time < self.global_time {
            return Err(SimulationError::EventSchedulingError);
        }
        self.global_time = time;
        Ok(())
    }

    /// Reset the clock to 0.0 for a new run.  The random number generator is
    /// not reset, so consecutive runs are distinct replications.
    pub fn reset_global_time(&mut self) {
        self.global_time = 0.0;
    }
}
