use episim::models::{Counts, Parameters};
use episim::output_analysis::{final_size_sample, EventLog, Snapshot};
use episim::simulator::{AgentBased, Gillespie, Method, Scenario, Services, Simulation};
use episim::utils::errors::SimulationError;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn reference_scenario(method: Method) -> Result<Scenario, SimulationError> {
    Ok(Scenario::new(
        Counts::new(990, 10, 0),
        Parameters::new(0.05, 10.0, 0.25)?,
        40.0,
        method,
    )?
    .with_seed(20240917))
}

fn assert_conserved(event_log: &EventLog, population: usize) {
    assert!(event_log
        .entries()
        .iter()
        .all(|entry| entry.counts().total() == population));
}

fn assert_monotone(event_log: &EventLog) {
    event_log.entries().windows(2).for_each(|pair| {
        let (before, after) = (pair[0].counts(), pair[1].counts());
        assert!(after.susceptible() <= before.susceptible());
        assert!(after.recovered() >= before.recovered());
    });
}

fn assert_strictly_increasing_from_zero(event_log: &EventLog) {
    let times = event_log.times();
    assert_eq!(times[0], 0.0);
    assert!(times.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn gillespie_reference_epidemic_resolves() -> Result<(), SimulationError> {
    init_logger();
    let mut simulation = Simulation::post(reference_scenario(Method::Gillespie)?)?;
    let event_log = simulation.run()?;
    assert_conserved(&event_log, 1000);
    assert_monotone(&event_log);
    assert_strictly_increasing_from_zero(&event_log);
    assert_eq!(event_log.initial().counts(), &Counts::new(990, 10, 0));
    assert!(event_log.last().time() <= 40.0);
    let last = event_log.last().counts();
    assert!(last.recovered() > 2 * last.infected());
    Ok(())
}

#[test]
fn agent_based_reference_epidemic_resolves() -> Result<(), SimulationError> {
    init_logger();
    let mut simulation = Simulation::post(reference_scenario(Method::AgentBased)?)?;
    let event_log = simulation.run()?;
    assert_conserved(&event_log, 1000);
    assert_monotone(&event_log);
    assert_strictly_increasing_from_zero(&event_log);
    assert!(event_log.last().time() <= 40.0);
    let last = event_log.last().counts();
    assert!(last.recovered() > 2 * last.infected());
    Ok(())
}

#[test]
fn runs_are_deterministic_per_scheduler() -> Result<(), SimulationError> {
    for method in [Method::Gillespie, Method::AgentBased] {
        let first = Simulation::post(reference_scenario(method)?)?.run()?;
        let second = Simulation::post(reference_scenario(method)?)?.run()?;
        assert_eq!(first, second);
        let other_seed = Simulation::post(reference_scenario(method)?.with_seed(7))?.run()?;
        assert_ne!(first, other_seed);
    }
    Ok(())
}

#[test]
fn gillespie_stops_at_absorption() -> Result<(), SimulationError> {
    let mut services = Services::new(99);
    let event_log = Gillespie::new(
        Counts::new(40, 10, 0),
        Parameters::new(0.05, 10.0, 0.25)?,
        1e6,
        &mut services,
    )?
    .run(&mut services)?;
    assert_eq!(event_log.last().counts().infected(), 0);
    // No further time advance once I == 0
    assert_eq!(services.global_time(), event_log.last().time());
    // Every event either infects or recovers, and each of the 10 initial
    // infections plus each new infection ends in one recovery
    let last = event_log.last().counts();
    assert_eq!(event_log.event_count(), (40 - last.susceptible()) + last.recovered());
    Ok(())
}

#[test]
fn gillespie_without_infected_never_starts() -> Result<(), SimulationError> {
    let mut simulation = Simulation::post(Scenario::new(
        Counts::new(1000, 0, 0),
        Parameters::new(0.05, 10.0, 0.25)?,
        40.0,
        Method::Gillespie,
    )?)?;
    let event_log = simulation.run()?;
    assert_eq!(event_log.event_count(), 0);
    assert_eq!(simulation.get_global_time(), 0.0);
    Ok(())
}

#[test]
fn agent_based_keeps_initially_recovered_inert() -> Result<(), SimulationError> {
    let mut services = Services::new(4);
    let agent_based = AgentBased::new(
        Counts::new(20, 5, 5),
        Parameters::new(0.3, 2.0, 1.0)?,
        50.0,
        &mut services,
    )?;
    assert_eq!(agent_based.pending(), 25);
    let event_log = agent_based.run(&mut services)?;
    assert_conserved(&event_log, 30);
    assert_monotone(&event_log);
    assert!(event_log
        .entries()
        .iter()
        .all(|entry| entry.counts().recovered() >= 5));
    Ok(())
}

#[test]
fn agent_based_without_susceptibles_exhausts() -> Result<(), SimulationError> {
    let mut services = Services::new(4);
    let event_log = AgentBased::new(
        Counts::new(0, 5, 5),
        Parameters::new(0.3, 2.0, 1.0)?,
        1e9,
        &mut services,
    )?
    .run(&mut services)?;
    assert_eq!(event_log.event_count(), 5);
    assert_eq!(event_log.last().counts(), &Counts::new(0, 0, 10));
    assert_eq!(services.global_time(), event_log.last().time());
    Ok(())
}

#[test]
fn agent_based_rejects_a_single_individual() -> Result<(), SimulationError> {
    let parameters = Parameters::new(0.05, 10.0, 0.25)?;
    assert!(matches!(
        Scenario::new(Counts::new(1, 0, 0), parameters, 40.0, Method::AgentBased),
        Err(SimulationError::PopulationTooSmall(1))
    ));
    let mut services = Services::default();
    assert!(matches!(
        AgentBased::new(Counts::new(0, 1, 0), parameters, 40.0, &mut services),
        Err(SimulationError::PopulationTooSmall(1))
    ));
    Ok(())
}

#[test]
fn resampling_holds_values_between_events() -> Result<(), SimulationError> {
    let event_log = EventLog::from_entries(vec![
        Snapshot::new(0.0, Counts::new(990, 10, 0)),
        Snapshot::new(0.2, Counts::new(989, 11, 0)),
    ])?;
    let time_series = event_log.resample(&[0.0, 0.1, 0.2, 0.3])?;
    let expected = [
        (0.0, Counts::new(990, 10, 0)),
        (0.1, Counts::new(990, 10, 0)),
        (0.2, Counts::new(989, 11, 0)),
        (0.3, Counts::new(989, 11, 0)),
    ];
    assert_eq!(time_series.len(), expected.len());
    time_series
        .points()
        .iter()
        .zip(expected.iter())
        .for_each(|(point, (time, counts))| {
            assert_eq!(point.time(), *time);
            assert_eq!(point.counts(), counts);
        });
    Ok(())
}

#[test]
fn resampled_runs_agree_with_the_event_log() -> Result<(), SimulationError> {
    let scenario = reference_scenario(Method::Gillespie)?.with_dt(1.0)?;
    let event_log = Simulation::post(scenario.clone())?.run()?;
    let time_series = Simulation::post(scenario)?.run_resampled()?;
    assert_eq!(time_series.len(), 41);
    time_series.points().iter().for_each(|point| {
        let latest = event_log
            .entries()
            .iter()
            .filter(|entry| entry.time() <= point.time())
            .last()
            .unwrap_or_else(|| event_log.initial());
        assert_eq!(point.counts(), latest.counts());
    });
    assert_eq!(
        time_series.points()[40].counts(),
        event_log.last().counts()
    );
    Ok(())
}

#[test]
fn schedulers_agree_on_mean_final_size() -> Result<(), SimulationError> {
    // Both schedulers sample the same process, so the mean final sizes of
    // a few replications should be close
    let scenario = |method| -> Result<Scenario, SimulationError> {
        Ok(Scenario::new(
            Counts::new(180, 20, 0),
            Parameters::new(0.1, 10.0, 0.5)?,
            200.0,
            method,
        )?
        .with_seed(31))
    };
    let gillespie = final_size_sample(&Simulation::post(scenario(Method::Gillespie)?)?.replicate(40)?)?;
    let agent_based =
        final_size_sample(&Simulation::post(scenario(Method::AgentBased)?)?.replicate(40)?)?;
    let difference = (gillespie.point_estimate_mean() - agent_based.point_estimate_mean()).abs();
    assert!(difference / gillespie.point_estimate_mean() < 0.1);
    assert!(gillespie.min() >= 20.0 && agent_based.min() >= 20.0);
    assert!(gillespie.max() <= 200.0 && agent_based.max() <= 200.0);
    Ok(())
}
