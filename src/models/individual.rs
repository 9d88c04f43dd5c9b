use serde::{Deserialize, Serialize};

/// Disease status of a single individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Susceptible,
    Infected,
    Recovered,
}

/// An individual of the agent-based model.  The status doubles as the phase
/// of the individual's process: susceptible individuals wait on contacts,
/// infected individuals wait on recovery, and recovered individuals never
/// wait again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Individual {
    id: usize,
    status: Status,
}

impl Individual {
    pub fn new(id: usize, status: Status) -> Self {
        Self { id, status }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_infected(&self) -> bool {
        self.status == Status::Infected
    }

    pub fn infect(&mut self) {
        self.status = Status::Infected;
    }

    pub fn recover(&mut self) {
        self.status = Status::Recovered;
    }
}
