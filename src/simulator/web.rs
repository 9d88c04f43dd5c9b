use wasm_bindgen::prelude::*;

use crate::output_analysis::final_size_sample;
use crate::utils::set_panic_hook;

use super::{Scenario, Simulation as CoreSimulation};

/// The web `Simulation` provides JS/WASM-compatible interfaces to the core
/// `Simulation` struct.  For additional insight on these methods, refer to
/// the associated core `Simulation` methods.  Errors are unwrapped, instead
/// of returned, in the web `Simulation` methods.
#[wasm_bindgen]
pub struct Simulation {
    simulation: CoreSimulation,
}

#[wasm_bindgen]
impl Simulation {
    /// A JS/WASM interface for `Simulation.post`, which uses a JSON
    /// representation of the scenario.
    pub fn post_json(scenario: &str) -> Self {
        set_panic_hook();
        Self {
            simulation: CoreSimulation::post(Scenario::from_json(scenario).unwrap()).unwrap(),
        }
    }

    /// A JS/WASM interface for `Simulation.post`, which uses a YAML
    /// representation of the scenario.
    pub fn post_yaml(scenario: &str) -> Self {
        set_panic_hook();
        Self {
            simulation: CoreSimulation::post(Scenario::from_yaml(scenario).unwrap()).unwrap(),
        }
    }

    /// Get a JSON representation of the scenario.
    pub fn get_scenario_json(&self) -> String {
        serde_json::to_string_pretty(self.simulation.scenario()).unwrap()
    }

    /// Get a YAML representation of the scenario.
    pub fn get_scenario_yaml(&self) -> String {
        serde_yaml::to_string(self.simulation.scenario()).unwrap()
    }

    /// An interface to `Simulation.get_global_time`.
    pub fn get_global_time(&self) -> f64 {
        self.simulation.get_global_time()
    }

    /// A JS/WASM interface for `Simulation.run`, which converts the event
    /// log to a JSON string.
    pub fn run_json(&mut self) -> String {
        serde_json::to_string(&self.simulation.run().unwrap()).unwrap()
    }

    /// A JS/WASM interface for `Simulation.run`, which converts the event
    /// log to a YAML string.
    pub fn run_yaml(&mut self) -> String {
        serde_yaml::to_string(&self.simulation.run().unwrap()).unwrap()
    }

    /// A JS/WASM interface for `Simulation.run_resampled`, which converts
    /// the time series to JSON columns (`t`, `S`, `I`, `R`).
    pub fn run_resampled_json(&mut self) -> String {
        serde_json::to_string(&self.simulation.run_resampled().unwrap().to_columns()).unwrap()
    }

    /// A JS/WASM interface for `Simulation.run_resampled`, which converts
    /// the time series to YAML columns (`t`, `S`, `I`, `R`).
    pub fn run_resampled_yaml(&mut self) -> String {
        serde_yaml::to_string(&self.simulation.run_resampled().unwrap().to_columns()).unwrap()
    }

    /// A JS/WASM interface for `Simulation.replicate`, which summarizes the
    /// final epidemic sizes as a JSON string.
    pub fn replicate_final_sizes_json(&mut self, replications: usize) -> String {
        let event_logs = self.simulation.replicate(replications).unwrap();
        serde_json::to_string(&final_size_sample(&event_logs).unwrap()).unwrap()
    }
}
