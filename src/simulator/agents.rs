//! Individual-level scheduling.  Every individual is a small state machine
//! that repeatedly waits on a sampled timer: susceptible individuals wait on
//! their next contact, infected individuals wait on their recovery, and
//! recovered individuals never wait.  All pending wakeups share a single
//! `WaitQueue`, and a step resumes exactly one individual - the one with the
//! earliest wakeup - which then runs until it waits again or its process
//! ends.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{debug, trace};

use super::{Services, Step, Termination};
use crate::input_modeling::{BooleanRandomVariable, ContinuousRandomVariable, IndexRandomVariable};
use crate::models::{Counts, Individual, Parameters, Status, Transition};
use crate::output_analysis::EventLog;
use crate::utils::errors::SimulationError;

/// A pending resumption of an individual's process.
#[derive(Debug, Clone, Copy)]
pub struct Wakeup {
    time: f64,
    sequence: u64,
    individual: usize,
}

impl Wakeup {
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn individual(&self) -> usize {
        self.individual
    }
}

// Reversed, so that the max-heap pops the earliest wakeup.  Equal times pop
// in registration order.
impl Ord for Wakeup {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .time
            .total_cmp(&self.time)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for Wakeup {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Wakeup {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Wakeup {}

/// Time-ordered wakeups of all waiting individuals.
#[derive(Debug, Clone, Default)]
pub struct WaitQueue {
    wakeups: BinaryHeap<Wakeup>,
    registered: u64,
}

impl WaitQueue {
    pub fn register(&mut self, time: f64, individual: usize) {
        self.wakeups.push(Wakeup {
            time,
            sequence: self.registered,
            individual,
        });
        self.registered += 1;
    }

    pub fn peek(&self) -> Option<&Wakeup> {
        self.wakeups.peek()
    }

    pub fn pop(&mut self) -> Option<Wakeup> {
        self.wakeups.pop()
    }

    pub fn len(&self) -> usize {
        self.wakeups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wakeups.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct AgentBased {
    population: Vec<Individual>,
    counts: Counts,
    parameters: Parameters,
    t_max: f64,
    wait_queue: WaitQueue,
    event_log: EventLog,
}

impl AgentBased {
    /// Create the population from `initial` - susceptible individuals
    /// first, then infected, then recovered - and register the first wait of
    /// every individual that has one.  Initially recovered individuals get
    /// no process.  The clock in `services` is reset.
    pub fn new(
        initial: Counts,
        parameters: Parameters,
        t_max: f64,
        services: &mut Services,
    ) -> Result<Self, SimulationError> {
        initial.validate()?;
        parameters.validate()?;
        if !(t_max.is_finite() && t_max > 0.0) {
            return Err(SimulationError::InvalidHorizon(t_max));
        }
        // Contact selection draws someone other than self
        if initial.total() < 2 {
            return Err(SimulationError::PopulationTooSmall(initial.total()));
        }
        services.reset_global_time();
        let population = std::iter::repeat(Status::Susceptible)
            .take(initial.susceptible())
            .chain(std::iter::repeat(Status::Infected).take(initial.infected()))
            .chain(std::iter::repeat(Status::Recovered).take(initial.recovered()))
            .enumerate()
            .map(|(id, status)| Individual::new(id, status))
            .collect();
        let mut agent_based = Self {
            population,
            counts: initial,
            parameters,
            t_max,
            wait_queue: WaitQueue::default(),
            event_log: EventLog::new(initial),
        };
        (0..agent_based.population.len())
            .try_for_each(|index| agent_based.wait(index, services))?;
        Ok(agent_based)
    }

    pub fn counts(&self) -> &Counts {
        &self.counts
    }

    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    pub fn pending(&self) -> usize {
        self.wait_queue.len()
    }

    /// Resume the individual with the earliest wakeup.  The run ends when no
    /// wakeup is pending, or when the earliest one lies beyond the horizon;
    /// remaining wakeups are then abandoned.
    pub fn step(&mut self, services: &mut Services) -> Result<Step, SimulationError> {
        match self.wait_queue.peek() {
            None => {
                debug!("No pending wakeups at t = {}", services.global_time());
                return Ok(Step::Terminated(Termination::Exhausted));
            }
            Some(wakeup) if wakeup.time() > self.t_max => {
                debug!(
                    "Next wakeup of individual {} at t = {} is beyond the horizon, abandoning {} waits",
                    wakeup.individual(),
                    wakeup.time(),
                    self.wait_queue.len()
                );
                return Ok(Step::Terminated(Termination::Horizon));
            }
            Some(_) => {}
        }
        let wakeup = self
            .wait_queue
            .pop()
            .ok_or(SimulationError::EventSchedulingError)?;
        services.advance_to(wakeup.time())?;
        self.resume(wakeup.individual(), services)
    }

    /// Step until the run terminates, and hand over the event log.
    pub fn run(mut self, services: &mut Services) -> Result<EventLog, SimulationError> {
        while let Step::Fired(_) | Step::Continued = self.step(services)? {}
        Ok(self.event_log)
    }

    /// Run the resumed individual's logic up to its next wait, or to the end
    /// of its process.
    fn resume(&mut self, index: usize, services: &mut Services) -> Result<Step, SimulationError> {
        match self.population[index].status() {
            Status::Susceptible => {
                let contact = self.select_contact(index, services)?;
                let transmitted = self.population[contact].is_infected()
                    && BooleanRandomVariable::Bernoulli {
                        p: self.parameters.beta(),
                    }
                    .random_variate(services.uniform_rng())?;
                if transmitted {
                    self.population[index].infect();
                    self.apply(index, Transition::Infection, services.global_time())?;
                }
                // Infection moves straight on to the recovery wait
                self.wait(index, services)?;
                if transmitted {
                    Ok(Step::Fired(Transition::Infection))
                } else {
                    Ok(Step::Continued)
                }
            }
            Status::Infected => {
                self.population[index].recover();
                self.apply(index, Transition::Recovery, services.global_time())?;
                Ok(Step::Fired(Transition::Recovery))
            }
            // Recovered individuals never register a wakeup
            Status::Recovered => Err(SimulationError::EventSchedulingError),
        }
    }

    /// Register the next wait of an individual, according to its status.
    fn wait(&mut self, index: usize, services: &mut Services) -> Result<(), SimulationError> {
        let lambda = match self.population[index].status() {
            Status::Susceptible => self.parameters.contact_rate(),
            Status::Infected => self.parameters.recovery_rate(),
            Status::Recovered => return Ok(()),
        };
        let delay =
            ContinuousRandomVariable::Exp { lambda }.random_variate(services.uniform_rng())?;
        self.wait_queue
            .register(services.global_time() + delay, index);
        Ok(())
    }

    /// Draw a uniformly random individual other than `index`, by rejection.
    /// With a population of N >= 2 the expected number of draws is
    /// N / (N - 1).
    fn select_contact(&self, index: usize, services: &mut Services) -> Result<usize, SimulationError> {
        let variable = IndexRandomVariable::Uniform {
            min: 0,
            max: self.population.len(),
        };
        loop {
            let contact = variable.random_variate(services.uniform_rng())?;
            if contact != index {
                return Ok(contact);
            }
        }
    }

    fn apply(
        &mut self,
        index: usize,
        transition: Transition,
        time: f64,
    ) -> Result<(), SimulationError> {
        self.counts.apply(transition)?;
        trace!(
            "{:?} of individual {} at t = {}, counts {:?}",
            transition,
            self.population[index].id(),
            time,
            self.counts
        );
        self.event_log.record(time, self.counts)
    }
}
