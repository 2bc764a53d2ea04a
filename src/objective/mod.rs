//! Objective functions over schedules.
//!
//! An [`Objective`] maps a schedule to a scalar cost; lower is better.
//! Any `Fn(&Schedule<T>) -> f64` closure is an objective as well.

mod load;

pub use load::{LoadDeviation, Makespan};

use crate::schedule::Schedule;

/// Scores a schedule. Lower is better.
pub trait Objective<T>: Send + Sync {
    /// Cost of `schedule`.
    fn evaluate(&self, schedule: &Schedule<T>) -> f64;
}

impl<T, F> Objective<T> for F
where
    F: Fn(&Schedule<T>) -> f64 + Send + Sync,
{
    #[inline]
    fn evaluate(&self, schedule: &Schedule<T>) -> f64 {
        self(schedule)
    }
}
