//! Parallel-machine task partitioning.
//!
//! A fixed number of processors is assigned a multiset of indivisible
//! tasks so as to minimize an objective such as the makespan.
//!
//! - **Schedule**: an immutable assignment of tasks to processors.
//! - **Neighborhood**: every schedule reachable by relocating exactly one
//!   task to a different processor, in a fixed canonical order.
//! - **Objective**: scalar cost of a schedule (makespan, load deviation,
//!   or any closure).
//! - **Tabu Search (TS)**: generic single-solution trajectory engine with
//!   a bounded tabu list and aspiration.
//! - **Search**: the partitioning problem bound to the tabu engine.
//!
//! # Example
//!
//! ```
//! use u_partition::objective::Makespan;
//! use u_partition::search::solve;
//! use u_partition::tabu::TabuConfig;
//!
//! let config = TabuConfig::default().with_max_iterations(200).with_seed(7);
//! let result = solve(3, vec![2, 6, 4, 5, 6, 7, 8, 5, 2], Makespan, &config).unwrap();
//! assert!(result.best_cost < 45.0);
//! println!("{}", result.best);
//! ```
//!
//! # Features
//!
//! - `parallel`: build and score neighborhoods on the rayon thread pool.
//! - `serde`: `Serialize`/`Deserialize` for schedules and configuration.

pub mod error;
pub mod neighborhood;
pub mod objective;
pub mod schedule;
pub mod search;
pub mod tabu;

pub use error::PartitionError;
