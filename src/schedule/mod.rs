//! Schedule state.
//!
//! A [`Schedule`] is an immutable assignment of tasks to a fixed number of
//! processors. Tasks keep an identity equal to their input position and
//! are only ever relocated, never created or destroyed.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 7
//! (Parallel Machine Models)

mod cost;
mod types;

pub use cost::TaskCost;
pub use types::{AssignmentKey, Relocation, Schedule};
