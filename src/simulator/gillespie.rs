//! Population-level scheduling with the Doob-Gillespie direct method.  The
//! scheduler owns only the aggregate counts: each step draws the time to the
//! next reaction from the total propensity, then picks the reaction with
//! probability proportional to its own propensity.

use log::{debug, trace};

use super::{Services, Step, Termination};
use crate::input_modeling::ContinuousRandomVariable;
use crate::models::{Counts, Parameters, Propensities};
use crate::output_analysis::EventLog;
use crate::utils::errors::SimulationError;

#[derive(Debug, Clone)]
pub struct Gillespie {
    counts: Counts,
    parameters: Parameters,
    t_max: f64,
    event_log: EventLog,
}

impl Gillespie {
    /// Start a run from `initial` at time 0.  The clock in `services` is
    /// reset.
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
        services.reset_global_time();
        Ok(Self {
            counts: initial,
            parameters,
            t_max,
            event_log: EventLog::new(initial),
        })
    }

    pub fn counts(&self) -> &Counts {
        &self.counts
    }

    pub fn event_log(&self) -> &EventLog {
        &self.event_log
    }

    /// Fire the next reaction, unless the state is absorbing or the next
    /// reaction falls beyond the horizon.  Neither terminal case moves the
    /// clock or records an entry.
    pub fn step(&mut self, services: &mut Services) -> Result<Step, SimulationError> {
        let propensities = Propensities::new(&self.counts, &self.parameters)?;
        if propensities.is_absorbing() {
            debug!(
                "Absorbing state {:?} reached at t = {}",
                self.counts,
                services.global_time()
            );
            return Ok(Step::Terminated(Termination::Absorbed));
        }
        let until_next_event = ContinuousRandomVariable::Exp {
            lambda: propensities.total(),
        }
        .random_variate(services.uniform_rng())?;
        let time = services.global_time() + until_next_event;
        if time > self.t_max {
            debug!("Next reaction at t = {} is beyond the horizon", time);
            return Ok(Step::Terminated(Termination::Horizon));
        }
        services.advance_to(time)?;
        let selector = ContinuousRandomVariable::Uniform {
            min: 0.0,
            max: propensities.total(),
        }
        .random_variate(services.uniform_rng())?;
        let transition = propensities.select(selector);
        self.counts.apply(transition)?;
        trace!("{:?} at t = {}, counts {:?}", transition, time, self.counts);
        self.event_log.record(time, self.counts)?;
        Ok(Step::Fired(transition))
    }

    /// Step until the run terminates, and hand over the event log.
    pub fn run(mut self, services: &mut Services) -> Result<EventLog, SimulationError> {
        while let Step::Fired(_) = self.step(services)? {}
        Ok(self.event_log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Transition;

    fn parameters() -> Parameters {
        Parameters::new(0.05, 10.0, 0.25).unwrap()
    }

    #[test]
    fn no_infected_terminates_without_advancing_the_clock() {
        let mut services = Services::new(3);
        let mut gillespie =
            Gillespie::new(Counts::new(1000, 0, 0), parameters(), 40.0, &mut services).unwrap();
        assert_eq!(
            gillespie.step(&mut services).unwrap(),
            Step::Terminated(Termination::Absorbed)
        );
        assert_eq!(services.global_time(), 0.0);
        assert_eq!(gillespie.event_log().event_count(), 0);
    }

    #[test]
    fn single_infected_without_susceptibles_recovers() {
        let mut services = Services::new(3);
        let mut gillespie =
            Gillespie::new(Counts::new(0, 1, 9), parameters(), 1e9, &mut services).unwrap();
        assert_eq!(
            gillespie.step(&mut services).unwrap(),
            Step::Fired(Transition::Recovery)
        );
        assert_eq!(gillespie.counts(), &Counts::new(0, 0, 10));
        let time = services.global_time();
        assert_eq!(
            gillespie.step(&mut services).unwrap(),
            Step::Terminated(Termination::Absorbed)
        );
        assert_eq!(services.global_time(), time);
    }

    #[test]
    fn events_never_exceed_the_horizon() {
        let mut services = Services::new(11);
        let event_log = Gillespie::new(Counts::new(990, 10, 0), parameters(), 0.5, &mut services)
            .unwrap()
            .run(&mut services)
            .unwrap();
        assert!(event_log.last().time() <= 0.5);
        assert!(services.global_time() <= 0.5);
    }

    #[test]
    fn rejects_non_positive_horizon() {
        let mut services = Services::default();
        assert!(matches!(
            Gillespie::new(Counts::new(990, 10, 0), parameters(), 0.0, &mut services),
            Err(SimulationError::InvalidHorizon(_))
        ));
    }
}
