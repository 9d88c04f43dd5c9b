//! The input modeling module provides the foundation for stochastic model
//! behaviors.  The module includes the handful of random variable
//! distributions the epidemic schedulers draw from, and a seeded structure
//! around random number generation.

pub mod random_variable;
pub mod uniform_rng;

pub use random_variable::Boolean as BooleanRandomVariable;
pub use random_variable::Continuous as ContinuousRandomVariable;
pub use random_variable::Index as IndexRandomVariable;
pub use uniform_rng::UniformRNG;
