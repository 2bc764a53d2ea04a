//! Single-task relocation neighborhood.
//!
//! The neighborhood of a [`Schedule`](crate::schedule::Schedule) is every
//! schedule reachable by moving one task to a different processor. Its
//! size is `tasks × (processors − 1)` and it is regenerated on every
//! search iteration.

mod generator;

#[cfg(feature = "parallel")]
pub use generator::{par_neighbors, par_relocations};
pub use generator::{neighborhood_size, neighbors, relocations};
