use serde::{Deserialize, Serialize};

use crate::models::Counts;
use crate::utils::errors::SimulationError;
use crate::utils::strictly_increasing;

/// A record of the compartment counts at a point in simulation time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    time: f64,
    #[serde(flatten)]
    counts: Counts,
}

impl Snapshot {
    pub fn new(time: f64, counts: Counts) -> Self {
        Self { time, counts }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn counts(&self) -> &Counts {
        &self.counts
    }
}

/// The append-only output of a scheduler run.  The first entry holds the
/// initial counts at time 0, and every later entry is the state right after
/// an event.  Entry times never decrease.  Deserialized logs go through the
/// same checks as `from_entries`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawEventLog")]
pub struct EventLog {
    entries: Vec<Snapshot>,
}

#[derive(Deserialize)]
struct RawEventLog {
    entries: Vec<Snapshot>,
}

impl TryFrom<RawEventLog> for EventLog {
    type Error = SimulationError;

    fn try_from(raw: RawEventLog) -> Result<Self, Self::Error> {
        Self::from_entries(raw.entries)
    }
}

impl EventLog {
    pub fn new(initial: Counts) -> Self {
        Self {
            entries: vec![Snapshot::new(0.0, initial)],
        }
    }

    /// Build an event log from previously recorded entries, for example a
    /// log produced elsewhere and handed over for resampling.
    pub fn from_entries(entries: Vec<Snapshot>) -> Result<Self, SimulationError> {
        let (first, rest) = entries.split_first().ok_or(SimulationError::EmptyEventLog)?;
        first.counts.validate()?;
        if !first.time.is_finite() {
            return Err(SimulationError::EventSchedulingError);
        }
        let mut event_log = Self::new(first.counts);
        event_log.entries[0].time = first.time;
        rest.iter()
            .try_for_each(|entry| event_log.record(entry.time, entry.counts))?;
        Ok(event_log)
    }

    /// Append the state after an event.  Going back in time, or changing the
    /// population size, is a scheduling defect.
    pub fn record(&mut self, time: f64, counts: Counts) -> Result<(), SimulationError> {
        counts.validate()?;
        let last = self.last();
        if !time.is_finite() || time < last.time {
            return Err(SimulationError::EventSchedulingError);
        }
        if counts.total() != last.counts.total() {
            return Err(SimulationError::InvalidModelState);
        }
        self.entries.push(Snapshot::new(time, counts));
        Ok(())
    }

    pub fn entries(&self) -> &[Snapshot] {
        &self.entries
    }

    pub fn initial(&self) -> &Snapshot {
        &self.entries[0]
    }

    pub fn last(&self) -> &Snapshot {
        &self.entries[self.entries.len() - 1]
    }

    /// The number of events recorded after the initial entry.
    pub fn event_count(&self) -> usize {
        self.entries.len() - 1
    }

    pub fn times(&self) -> Vec<f64> {
        self.entries.iter().map(|entry| entry.time).collect()
    }

    /// The earliest entry with the largest number of infected individuals.
    pub fn peak_infected(&self) -> &Snapshot {
        self.entries
            .iter()
            .fold(self.initial(), |peak, entry| {
                if entry.counts.infected() > peak.counts.infected() {
                    entry
                } else {
                    peak
                }
            })
    }

    /// Project the log onto `query_times` with last-value-held
    /// interpolation.  Each query takes the counts of the latest entry at or
    /// before it, and queries before the first entry take the initial
    /// counts.  The query times must be strictly increasing, which allows a
    /// single forward pass over the log.
    pub fn resample(&self, query_times: &[f64]) -> Result<TimeSeries, SimulationError> {
        if !strictly_increasing(query_times) {
            return Err(SimulationError::InvalidQueryTimes);
        }
        let mut cursor = 0;
        let points = query_times
            .iter()
            .map(|query_time| {
                while cursor + 1 < self.entries.len()
                    && self.entries[cursor + 1].time <= *query_time
                {
                    cursor += 1;
                }
                Snapshot::new(*query_time, self.entries[cursor].counts)
            })
            .collect();
        Ok(TimeSeries { points })
    }
}

/// Compartment counts on a regular time grid, ready for tabulation or
/// plotting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    points: Vec<Snapshot>,
}

/// Column-oriented form of a time series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Columns {
    pub t: Vec<f64>,
    #[serde(rename = "S")]
    pub s: Vec<usize>,
    #[serde(rename = "I")]
    pub i: Vec<usize>,
    #[serde(rename = "R")]
    pub r: Vec<usize>,
}

impl TimeSeries {
    pub fn points(&self) -> &[Snapshot] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn to_columns(&self) -> Columns {
        Columns {
            t: self.points.iter().map(Snapshot::time).collect(),
            s: self
                .points
                .iter()
                .map(|point| point.counts.susceptible())
                .collect(),
            i: self
                .points
                .iter()
                .map(|point| point.counts.infected())
                .collect(),
            r: self
                .points
                .iter()
                .map(|point| point.counts.recovered())
                .collect(),
        }
    }
}

/// The largest number of steps a query grid may span.
pub const MAX_GRID_STEPS: u32 = 10_000_000;

/// The number of `dt` steps from 0 to `t_max`, without building the grid.
/// A step size too small for the horizon is rejected, rather than
/// attempting an unbounded allocation.
pub fn grid_steps(t_max: f64, dt: f64) -> Result<usize, SimulationError> {
    if !(t_max.is_finite() && t_max > 0.0) {
        return Err(SimulationError::InvalidHorizon(t_max));
    }
    if !(dt.is_finite() && dt > 0.0) {
        return Err(SimulationError::InvalidStepSize(dt));
    }
    let steps = (t_max / dt + 1e-9).floor();
    if !steps.is_finite() || steps > f64::from(MAX_GRID_STEPS) {
        return Err(SimulationError::InvalidStepSize(dt));
    }
    Ok(steps as usize)
}

/// A regular query grid `0, dt, 2 dt, ...` up to and including `t_max`.
/// Grid points are computed as multiples of `dt`, so rounding error does not
/// accumulate along the grid.
pub fn query_grid(t_max: f64, dt: f64) -> Result<Vec<f64>, SimulationError> {
    let steps = grid_steps(t_max, dt)?;
    Ok((0..=steps).map(|step| step as f64 * dt).collect())
}
