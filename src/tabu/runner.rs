//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Generate initial solution
//! 2. At each iteration:
//!    a. Generate neighborhood
//!    b. Select the best non-tabu move (or tabu move satisfying aspiration)
//!    c. Apply the move, add its key to the tabu list
//!    d. Update global best if improved
//! 3. Terminate after max iterations, stagnation, an empty neighborhood or
//!    external cancellation
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::config::TabuConfig;
use super::types::{TabuMove, TabuProblem};

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
pub struct TabuResult<S: Clone> {
    /// Best solution found.
    pub best: S,
    /// Cost of the best solution.
    pub best_cost: f64,
    /// Total iterations executed.
    pub iterations: usize,
    /// Iteration at which the best solution was found.
    pub best_iteration: usize,
    /// Whether the run was cancelled externally.
    pub cancelled: bool,
    /// Cost history (best cost at each iteration).
    pub cost_history: Vec<f64>,
}

/// Bounded FIFO of move keys with O(1) membership.
#[derive(Debug)]
struct TabuList<K> {
    queue: VecDeque<K>,
    set: HashSet<K>,
    capacity: usize,
}

impl<K: Clone + Eq + Hash> TabuList<K> {
    fn new(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
            set: HashSet::with_capacity(capacity),
            capacity,
        }
    }

    fn contains(&self, key: &K) -> bool {
        self.set.contains(key)
    }

    fn push(&mut self, key: K) {
        if self.capacity == 0 || self.set.contains(&key) {
            return;
        }
        if self.queue.len() >= self.capacity {
            if let Some(old) = self.queue.pop_front() {
                self.set.remove(&old);
            }
        }
        self.queue.push_back(key.clone());
        self.set.insert(key);
    }
}

/// Tabu Search runner.
#[derive(Debug, Clone, Copy)]
pub struct TabuRunner;

impl TabuRunner {
    /// Executes Tabu Search on the given problem.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_partition::tabu::{TabuConfig, TabuMove, TabuProblem, TabuRunner};
    /// use rand::Rng;
    ///
    /// // Walk the integers towards 5.
    /// struct Walk;
    /// impl TabuProblem for Walk {
    ///     type Solution = i32;
    ///     type Key = i32;
    ///     fn initial_solution<R: Rng>(&self, _rng: &mut R) -> i32 { 0 }
    ///     fn cost(&self, x: &i32) -> f64 { ((x - 5) * (x - 5)) as f64 }
    ///     fn neighbors<R: Rng>(&self, x: &i32, _rng: &mut R) -> Vec<TabuMove<i32, i32>> {
    ///         [x - 1, x + 1]
    ///             .into_iter()
    ///             .map(|y| TabuMove { solution: y, key: y, cost: self.cost(&y) })
    ///             .collect()
    ///     }
    /// }
    ///
    /// let result = TabuRunner::run(&Walk, &TabuConfig::default().with_seed(1));
    /// assert_eq!(result.best, 5);
    /// ```
    pub fn run<P: TabuProblem>(problem: &P, config: &TabuConfig) -> TabuResult<P::Solution> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs Tabu Search with an optional cancellation token, polled once
    /// per iteration.
    pub fn run_with_cancel<P: TabuProblem>(
        problem: &P,
        config: &TabuConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> TabuResult<P::Solution> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut current = problem.initial_solution(&mut rng);
        let mut best = current.clone();
        let mut best_cost = problem.cost(&current);
        let mut best_iteration = 0;

        let mut tabu = TabuList::new(config.tabu_tenure);
        if let Some(key) = problem.initial_key(&current) {
            tabu.push(key);
        }

        let mut cost_history = Vec::with_capacity(config.max_iterations);
        let mut no_improve_count = 0;
        let mut cancelled = false;

        log::debug!(
            "tabu search start: cost {best_cost}, max_iterations {}, tenure {}",
            config.max_iterations,
            config.tabu_tenure
        );

        for iteration in 0..config.max_iterations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            let neighbors = problem.neighbors(&current, &mut rng);

            if neighbors.is_empty() {
                log::debug!("empty neighborhood at iteration {iteration}");
                cost_history.push(best_cost);
                break;
            }

            let Some(mv) = select_move(&neighbors, &tabu, best_cost, config.aspiration) else {
                cost_history.push(best_cost);
                break;
            };

            tabu.push(mv.key.clone());
            current = mv.solution.clone();

            if mv.cost < best_cost {
                best = current.clone();
                best_cost = mv.cost;
                best_iteration = iteration;
                no_improve_count = 0;
                log::trace!("iteration {iteration}: new best {best_cost}");
            } else {
                no_improve_count += 1;
            }

            cost_history.push(best_cost);

            if no_improve_count >= config.max_no_improve {
                log::debug!("stagnated after {no_improve_count} non-improving iterations");
                break;
            }
        }

        log::debug!(
            "tabu search done: best {best_cost} at iteration {best_iteration} of {}",
            cost_history.len()
        );

        TabuResult {
            best,
            best_cost,
            iterations: cost_history.len(),
            best_iteration,
            cancelled,
            cost_history,
        }
    }
}

/// Picks the cheapest admissible move, first one winning ties.
///
/// A tabu move is admissible only under aspiration, when it beats the
/// global best. If nothing is admissible the cheapest move overall is
/// taken so the search never stalls.
fn select_move<'a, S, K: Clone + Eq + Hash>(
    neighbors: &'a [TabuMove<S, K>],
    tabu: &TabuList<K>,
    best_cost: f64,
    aspiration: bool,
) -> Option<&'a TabuMove<S, K>> {
    let mut chosen: Option<&TabuMove<S, K>> = None;

    for mv in neighbors {
        if tabu.contains(&mv.key) && !(aspiration && mv.cost < best_cost) {
            continue;
        }
        if chosen.map_or(true, |c| improves(mv.cost, c.cost)) {
            chosen = Some(mv);
        }
    }

    chosen.or_else(|| {
        neighbors
            .iter()
            .fold(None, |acc: Option<&TabuMove<S, K>>, mv| match acc {
                Some(c) if !improves(mv.cost, c.cost) => Some(c),
                _ => Some(mv),
            })
    })
}

/// Strict improvement with NaN ranked worst: a NaN never replaces a
/// number, and any number replaces a NaN.
#[inline]
fn improves(candidate: f64, incumbent: f64) -> bool {
    candidate < incumbent || (incumbent.is_nan() && !candidate.is_nan())
}
