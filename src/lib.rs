//! # Overview
//! "Episim" provides an exact stochastic simulation engine for the
//! susceptible-infected-recovered (SIR) epidemic process.  Sample paths of
//! the underlying continuous-time Markov chain are generated either at the
//! population level, with the Doob-Gillespie direct method, or at the
//! individual level, with a cooperative process-based discrete event
//! scheduler.
//!
//! This repository contains:
//!
//! * Input modeling, for seeded and reproducible random variates.
//! * Epidemic models - parameters, compartment counts, event rates, and
//! individuals.
//! * Simulator engine, with both schedulers and the scenario configuration
//! that drives them.
//! * Output analysis, for the event log, resampling onto a regular time
//! grid, and summary statistics across replications.
//!
//! Episim is compatible with a wide variety of compilation targets, including
//! WASM.
pub mod input_modeling;
pub mod models;
pub mod output_analysis;
pub mod simulator;
pub mod utils;
