//! The models module describes the epidemic process itself - the fixed
//! parameters, the aggregate compartment counts with their single event
//! application step, the event rates, and the individuals of the
//! agent-based model.

pub mod counts;
pub mod individual;
pub mod parameters;
pub mod rates;

pub use self::counts::{Counts, Transition};
pub use self::individual::{Individual, Status};
pub use self::parameters::Parameters;
pub use self::rates::Propensities;
