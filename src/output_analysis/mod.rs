//! The output analysis module holds what a scheduler run produces and the
//! tools for consuming it.  The `EventLog` is the raw, irregularly timed
//! record of compartment counts; resampling it yields a `TimeSeries` on a
//! regular grid for external tabulation and plotting.  Replications of a
//! scenario are summarized with the `IndependentSample`.

use num_traits::Float;
use serde::{Deserialize, Serialize};

pub mod event_log;

pub use self::event_log::{grid_steps, query_grid, Columns, EventLog, Snapshot, TimeSeries, MAX_GRID_STEPS};

use crate::utils::errors::SimulationError;
use crate::utils::usize_to_float;

fn sum<T: Float>(points: &[T]) -> T
where
    f64: Into<T>,
{
    points.iter().fold(0.0.into(), |sum, point| sum + *point)
}

/// This function calculates the sample mean from a set of points - a simple
/// arithmetic mean.
fn sample_mean<T: Float>(points: &[T]) -> Result<T, SimulationError>
where
    f64: Into<T>,
{
    Ok(sum(points) / usize_to_float(points.len())?)
}

/// This function calculates sample variance, given a set of points and the
/// sample mean.
fn sample_variance<T: Float>(points: &[T], mean: &T) -> Result<T, SimulationError>
where
    f64: Into<T>,
{
    Ok(points
        .iter()
        .fold(0.0.into(), |acc, point| acc + (*point - *mean).powi(2))
        / usize_to_float(points.len())?)
}

/// The independent sample is for independent, identically-distributed (IID)
/// samples, such as one output per simulation replication.  Final epidemic
/// sizes across replications of a scenario are the typical use.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndependentSample<T: Float> {
    points: Vec<T>,
    mean: T,
    variance: T,
}

impl<T: Float> IndependentSample<T>
where
    f64: Into<T>,
{
    /// This constructor method creates an `IndependentSample` from a set of
    /// points.
    pub fn post(points: Vec<T>) -> Result<IndependentSample<T>, SimulationError> {
        if points.is_empty() {
            return Err(SimulationError::EmptySample);
        }
        let mean = sample_mean(&points)?;
        let variance = sample_variance(&points, &mean)?;
        Ok(IndependentSample {
            points,
            mean,
            variance,
        })
    }

    /// Return the sample mean.
    pub fn point_estimate_mean(&self) -> T {
        self.mean
    }

    /// Return the sample variance.
    pub fn variance(&self) -> T {
        self.variance
    }

    pub fn min(&self) -> T {
        self.points
            .iter()
            .fold(T::infinity(), |min, point| min.min(*point))
    }

    pub fn max(&self) -> T {
        self.points
            .iter()
            .fold(T::neg_infinity(), |max, point| max.max(*point))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// The final epidemic size - everyone ever infected - at the end of each
/// run, as an IID sample over the runs.
pub fn final_size_sample(event_logs: &[EventLog]) -> Result<IndependentSample<f64>, SimulationError> {
    IndependentSample::post(
        event_logs
            .iter()
            .map(|event_log| {
                let counts = event_log.last().counts();
                (counts.infected() + counts.recovered()) as f64
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Counts;

    fn epsilon() -> f64 {
        1e-12
    }

    #[test]
    fn sample_statistics() {
        let sample = IndependentSample::post(vec![1.0, 2.0, 3.0, 6.0]).unwrap();
        assert!((sample.point_estimate_mean() - 3.0).abs() < epsilon());
        assert!((sample.variance() - 3.5).abs() < epsilon());
        assert_eq!(sample.min(), 1.0);
        assert_eq!(sample.max(), 6.0);
        assert_eq!(sample.len(), 4);
    }

    #[test]
    fn empty_sample_is_an_error() {
        assert!(matches!(
            IndependentSample::<f64>::post(Vec::new()),
            Err(SimulationError::EmptySample)
        ));
    }

    #[test]
    fn final_sizes_count_everyone_ever_infected() {
        let mut first = EventLog::new(Counts::new(8, 2, 0));
        first.record(1.0, Counts::new(7, 2, 1)).unwrap();
        let mut second = EventLog::new(Counts::new(8, 2, 0));
        second.record(1.0, Counts::new(8, 1, 1)).unwrap();
        second.record(2.0, Counts::new(8, 0, 2)).unwrap();
        let sample = final_size_sample(&[first, second]).unwrap();
        assert!((sample.point_estimate_mean() - 2.5).abs() < epsilon());
    }
}
