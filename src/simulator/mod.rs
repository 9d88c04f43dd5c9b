//! The simulator module provides the mechanics to generate sample paths of
//! the SIR process.  Two schedulers are available: `Gillespie`, the
//! Doob-Gillespie direct method over the aggregate counts, and `AgentBased`,
//! a cooperative process-based scheduler over individuals.  Both advance a
//! shared clock and draw from a single seeded random number generator,
//! provided through `Services`, and both produce an `EventLog`.
//!
//! `Simulation` and `WebSimulation` are used for Rust- and npm-based
//! projects, respectively.  The `Simulation` methods use the associated
//! struct types directly, while the `WebSimulation` provides an interface
//! with better JS/WASM compatibility.

use log::info;
use serde::{Deserialize, Serialize};

use crate::models::Transition;
use crate::output_analysis::{EventLog, TimeSeries};
use crate::utils::errors::SimulationError;
use crate::utils::set_panic_hook;

pub mod agents;
pub mod gillespie;
pub mod scenario;
pub mod services;
pub mod web;

pub use self::agents::{AgentBased, WaitQueue};
pub use self::gillespie::Gillespie;
pub use self::scenario::Scenario;
pub use self::services::Services;
pub use self::web::Simulation as WebSimulation;

/// The scheduler used to generate a sample path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Method {
    #[default]
    Gillespie,
    AgentBased,
}

/// The outcome of a single scheduler step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// An event changed the compartment counts
    Fired(Transition),
    /// An individual resumed and went back to waiting, without an event
    Continued,
    /// The run is over
    Terminated(Termination),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// No event can ever fire again
    Absorbed,
    /// The next event lies beyond the horizon
    Horizon,
    /// No individual is waiting on anything
    Exhausted,
}

/// The `Simulation` struct pairs a validated `Scenario` with the services
/// (random number generator and clock) used to run it.
#[derive(Debug, Clone)]
pub struct Simulation {
    scenario: Scenario,
    services: Services,
}

impl Simulation {
    /// This constructor method creates a simulation for a scenario, with
    /// the random number generator seeded from the scenario.
    pub fn post(scenario: Scenario) -> Result<Self, SimulationError> {
        set_panic_hook();
        scenario.validate()?;
        let services = Services::new(scenario.seed());
        Ok(Self { scenario, services })
    }

    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// An accessor method for the simulation global time.
    pub fn get_global_time(&self) -> f64 {
        self.services.global_time()
    }

    /// Generate one sample path.  The clock starts from 0.0 on every run,
    /// but the random number generator carries on from the previous run, so
    /// consecutive runs are independent replications.  The first run of a
    /// freshly posted simulation is fully determined by the scenario.
    pub fn run(&mut self) -> Result<EventLog, SimulationError> {
        let initial = *self.scenario.initial();
        let parameters = *self.scenario.parameters();
        let t_max = self.scenario.t_max();
        info!(
            "Running {:?} on {:?}, horizon {}",
            self.scenario.method(),
            initial,
            t_max
        );
        let event_log = match self.scenario.method() {
            Method::Gillespie => {
                Gillespie::new(initial, parameters, t_max, &mut self.services)?
                    .run(&mut self.services)?
            }
            Method::AgentBased => {
                AgentBased::new(initial, parameters, t_max, &mut self.services)?
                    .run(&mut self.services)?
            }
        };
        info!(
            "Run finished with {} events, final state {:?} at t = {}",
            event_log.event_count(),
            event_log.last().counts(),
            event_log.last().time()
        );
        Ok(event_log)
    }

    /// Generate one sample path, resampled onto the scenario's query grid.
    pub fn run_resampled(&mut self) -> Result<TimeSeries, SimulationError> {
        let query_times = self.scenario.query_grid()?;
        self.run()?.resample(&query_times)
    }

    /// Generate `replications` consecutive sample paths.
    pub fn replicate(&mut self, replications: usize) -> Result<Vec<EventLog>, SimulationError> {
        (0..replications).map(|_| self.run()).collect()
    }
}
