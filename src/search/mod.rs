//! Tabu Search over task partitions.
//!
//! Binds [`Schedule`](crate::schedule::Schedule), the relocation
//! [`neighborhood`](crate::neighborhood) and an
//! [`Objective`](crate::objective::Objective) to the generic
//! [`tabu`](crate::tabu) engine.

mod problem;

pub use problem::{solve, InitialAssignment, PartitionProblem};
