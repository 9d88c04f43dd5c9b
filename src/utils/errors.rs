use thiserror::Error;

/// `SimulationError` enumerates all possible errors returned by episim
#[derive(Error, Debug)]
pub enum SimulationError {
    /// Represents initial compartment counts that cannot seed a run
    #[error("The initial compartment counts are invalid: {0}")]
    InvalidInitialCounts(String),

    /// Represents a per-contact transmission probability outside of [0, 1]
    #[error("The transmission probability must lie in [0, 1], but was {0}")]
    InvalidTransmissionProbability(f64),

    /// Represents a contact rate that is not strictly positive
    #[error("The contact rate must be positive and finite, but was {0}")]
    InvalidContactRate(f64),

    /// Represents a recovery rate that is not strictly positive
    #[error("The recovery rate must be positive and finite, but was {0}")]
    InvalidRecoveryRate(f64),

    /// Represents a population too small for the agent-based contact process
    #[error("The agent-based model requires at least 2 individuals, but the population has {0}")]
    PopulationTooSmall(usize),

    /// Represents a simulation horizon that is not strictly positive
    #[error("The simulation horizon must be positive and finite, but was {0}")]
    InvalidHorizon(f64),

    /// Represents a query grid step that is not strictly positive
    #[error("The query grid step must be positive and finite, but was {0}")]
    InvalidStepSize(f64),

    /// Represents query times that are not finite and strictly increasing
    #[error("Query times must be finite and strictly increasing")]
    InvalidQueryTimes,

    /// Represents an event rate evaluated as negative or non-finite
    #[error("An event rate evaluated to {0}, which indicates malformed parameters")]
    NegativeRate(f64),

    /// Represents an invalid model state, such as a compartment underflow
    #[error("An invalid model state was encountered")]
    InvalidModelState,

    /// Represents an invalid state of event scheduling
    #[error("An invalid state was encountered, with respect to event scheduling")]
    EventSchedulingError,

    /// Represents an operation on an event log without any entries
    #[error("The event log is empty")]
    EmptyEventLog,

    /// Represents summary statistics requested over an empty sample
    #[error("A sample must contain at least one point")]
    EmptySample,

    /// Represents a failed conversion to num-traits Float
    #[error("Failed to convert to a Float value")]
    FloatConvError,

    /// Transparent serde_json errors
    #[error(transparent)]
    JSONError(#[from] serde_json::error::Error),

    /// Transparent serde_yaml errors
    #[error(transparent)]
    YAMLError(#[from] serde_yaml::Error),

    /// Transparent Exponential distribution errors
    #[error(transparent)]
    ExpError(#[from] rand_distr::ExpError),

    /// Transparent Bernoulli distribution errors
    #[error(transparent)]
    BernoulliError(#[from] rand_distr::BernoulliError),
}
