//! Load-balance objectives.
//!
//! | Objective | Definition |
//! |-----------|------------|
//! | Makespan (C_max) | max_p load(p) |
//! | Load deviation | Σ_p \|mean load − load(p)\| |

use super::Objective;
use crate::schedule::{Schedule, TaskCost};

/// Maximum processor load (C_max).
///
/// # Examples
///
/// ```
/// use u_partition::objective::{Makespan, Objective};
/// use u_partition::schedule::Schedule;
///
/// let s = Schedule::from_processors(vec![vec![3, 1], vec![4]]).unwrap();
/// assert_eq!(Makespan.evaluate(&s), 4.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Makespan;

impl<T: TaskCost> Objective<T> for Makespan {
    fn evaluate(&self, schedule: &Schedule<T>) -> f64 {
        schedule.loads().into_iter().fold(0.0, f64::max)
    }
}

/// Total absolute deviation of processor loads from the mean load.
///
/// Zero exactly when every processor carries the same load. Unlike
/// [`Makespan`], every processor contributes, so moves that improve a
/// non-critical processor are still rewarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadDeviation;

impl<T: TaskCost> Objective<T> for LoadDeviation {
    fn evaluate(&self, schedule: &Schedule<T>) -> f64 {
        let loads = schedule.loads();
        let mean = loads.iter().sum::<f64>() / loads.len() as f64;
        loads.iter().map(|load| (mean - load).abs()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_makespan() {
        let s = Schedule::from_processors(vec![vec![2, 6], vec![4], vec![]]).unwrap();
        assert_eq!(Makespan.evaluate(&s), 8.0);
    }

    #[test]
    fn test_makespan_empty() {
        let s = Schedule::<u32>::new(3, vec![]).unwrap();
        assert_eq!(Makespan.evaluate(&s), 0.0);
    }

    #[test]
    fn test_load_deviation() {
        // loads 8, 4, 0 -> mean 4 -> |4-8| + 0 + |4-0| = 8
        let s = Schedule::from_processors(vec![vec![2, 6], vec![4], vec![]]).unwrap();
        assert!((LoadDeviation.evaluate(&s) - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_load_deviation_balanced() {
        let s = Schedule::from_processors(vec![vec![1.5, 2.5], vec![4.0]]).unwrap();
        assert!(LoadDeviation.evaluate(&s).abs() < 1e-10);
    }
}
