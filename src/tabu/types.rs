//! Core trait for Tabu Search problems.

use std::hash::Hash;

use rand::Rng;

/// A candidate move produced by a neighborhood.
///
/// `key` identifies the move in the tabu list: once a move is taken its
/// key stays tabu for `tabu_tenure` iterations, and candidates carrying
/// an equal key are rejected unless aspiration admits them.
#[derive(Debug, Clone)]
pub struct TabuMove<S, K> {
    /// The resulting solution after applying this move.
    pub solution: S,
    /// Tabu attribute of this move.
    pub key: K,
    /// Cost of the resulting solution.
    pub cost: f64,
}

/// Defines a combinatorial optimization problem for Tabu Search.
///
/// Implementors specify:
/// - How to create an initial solution
/// - How to evaluate a solution's cost (lower is better)
/// - How to generate the neighborhood of a solution, in a deterministic
///   order; the runner breaks cost ties in favor of the earliest move
pub trait TabuProblem: Send + Sync {
    /// The solution type.
    type Solution: Clone + Send;

    /// Tabu attribute type of a move.
    type Key: Clone + Eq + Hash;

    /// Creates an initial solution.
    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Tabu attribute of a solution the search starts from, recorded
    /// before the first iteration. `None` records nothing.
    fn initial_key(&self, _solution: &Self::Solution) -> Option<Self::Key> {
        None
    }

    /// Evaluates the cost of a solution (lower is better).
    fn cost(&self, solution: &Self::Solution) -> f64;

    /// Generates neighboring solutions with their tabu keys and costs.
    fn neighbors<R: Rng>(
        &self,
        solution: &Self::Solution,
        rng: &mut R,
    ) -> Vec<TabuMove<Self::Solution, Self::Key>>;
}
