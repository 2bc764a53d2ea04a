//! Task partitioning as a Tabu Search problem.

use rand::Rng;

use crate::error::PartitionError;
use crate::neighborhood;
use crate::objective::Objective;
use crate::schedule::{AssignmentKey, Schedule};
use crate::tabu::{TabuConfig, TabuMove, TabuProblem, TabuResult, TabuRunner};

/// How the search picks its starting schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitialAssignment {
    /// Every task on processor 0, in input order.
    #[default]
    FirstProcessor,
    /// Every task on a uniformly random processor (seeded by the run).
    Random,
}

/// Parallel-machine task partitioning over the single-task relocation
/// neighborhood.
///
/// Tabu keys are the assignments of visited schedules: a schedule that
/// was current within the last `tabu_tenure` iterations cannot be
/// re-entered unless aspiration admits it.
#[derive(Debug, Clone)]
pub struct PartitionProblem<T, O> {
    initial: Schedule<T>,
    objective: O,
    start: InitialAssignment,
    parallel: bool,
}

impl<T, O: Objective<T>> PartitionProblem<T, O> {
    /// Creates a problem over `tasks` on `processor_count` processors.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::NoProcessors`] if `processor_count` is 0.
    pub fn new(
        processor_count: usize,
        tasks: Vec<T>,
        objective: O,
    ) -> Result<Self, PartitionError> {
        Ok(Self {
            initial: Schedule::new(processor_count, tasks)?,
            objective,
            start: InitialAssignment::default(),
            parallel: false,
        })
    }

    /// Sets how the starting schedule is built.
    pub fn with_initial_assignment(mut self, start: InitialAssignment) -> Self {
        self.start = start;
        self
    }

    /// Builds and scores neighbors on the rayon pool. Has no effect unless
    /// the `parallel` feature is enabled.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Number of processors.
    pub fn processor_count(&self) -> usize {
        self.initial.processor_count()
    }

    /// The all-on-first-processor schedule.
    pub fn initial_schedule(&self) -> &Schedule<T> {
        &self.initial
    }

    /// The objective being minimized.
    pub fn objective(&self) -> &O {
        &self.objective
    }

    fn scored(&self, solution: Schedule<T>) -> TabuMove<Schedule<T>, AssignmentKey> {
        TabuMove {
            key: solution.key(),
            cost: self.objective.evaluate(&solution),
            solution,
        }
    }
}

impl<T, O> TabuProblem for PartitionProblem<T, O>
where
    T: Send + Sync,
    O: Objective<T>,
{
    type Solution = Schedule<T>;
    type Key = AssignmentKey;

    fn initial_solution<R: Rng>(&self, rng: &mut R) -> Schedule<T> {
        match self.start {
            InitialAssignment::FirstProcessor => self.initial.clone(),
            InitialAssignment::Random => self.initial.scatter(rng),
        }
    }

    fn initial_key(&self, solution: &Schedule<T>) -> Option<AssignmentKey> {
        Some(solution.key())
    }

    fn cost(&self, solution: &Schedule<T>) -> f64 {
        self.objective.evaluate(solution)
    }

    fn neighbors<R: Rng>(
        &self,
        solution: &Schedule<T>,
        _rng: &mut R,
    ) -> Vec<TabuMove<Schedule<T>, AssignmentKey>> {
        debug_assert!(solution
            .check_invariants(self.processor_count())
            .is_ok());

        if self.parallel {
            #[cfg(feature = "parallel")]
            {
                use rayon::prelude::*;

                return neighborhood::par_neighbors(solution)
                    .into_par_iter()
                    .map(|neighbor| self.scored(neighbor))
                    .collect();
            }
        }

        neighborhood::neighbors(solution)
            .into_iter()
            .map(|neighbor| self.scored(neighbor))
            .collect()
    }
}

/// Partitions `tasks` over `processor_count` processors, minimizing
/// `objective` with Tabu Search from the all-on-first-processor schedule.
///
/// # Errors
///
/// Returns [`PartitionError::InvalidConfig`] if `config` fails validation
/// and [`PartitionError::NoProcessors`] if `processor_count` is 0. No search
/// is started in either case.
///
/// # Examples
///
/// ```
/// use u_partition::objective::Makespan;
/// use u_partition::search::solve;
/// use u_partition::tabu::TabuConfig;
///
/// let config = TabuConfig::default().with_seed(1);
/// let result = solve(2, vec![3, 3, 2, 2, 2], Makespan, &config).unwrap();
/// assert_eq!(result.best_cost, 6.0);
/// ```
pub fn solve<T, O>(
    processor_count: usize,
    tasks: Vec<T>,
    objective: O,
    config: &TabuConfig,
) -> Result<TabuResult<Schedule<T>>, PartitionError>
where
    T: Send + Sync,
    O: Objective<T>,
{
    config.validate()?;
    let problem = PartitionProblem::new(processor_count, tasks, objective)?;
    Ok(TabuRunner::run(&problem, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::{LoadDeviation, Makespan};

    const TASKS: [u32; 17] = [2, 6, 4, 5, 6, 7, 8, 5, 2, 5, 6, 1, 2, 3, 2, 7, 9];

    fn config() -> TabuConfig {
        TabuConfig::default().with_seed(42)
    }

    #[test]
    fn test_solve_small_makespan_optimum() {
        let result = solve(2, vec![3u32, 3, 2, 2, 2], Makespan, &config()).unwrap();
        assert_eq!(result.best_cost, 6.0);
        assert!(result.best.check_invariants(2).is_ok());
    }

    #[test]
    fn test_solve_balances_load() {
        let result = solve(3, TASKS.to_vec(), LoadDeviation, &config()).unwrap();
        let best = &result.best;

        assert!(best.check_invariants(3).is_ok());
        assert_eq!(best.total_load(), 80.0);
        assert!(
            Makespan.evaluate(best) <= 30.0,
            "expected a balanced partition, got\n{best}"
        );
        let start = Schedule::new(3, TASKS.to_vec()).unwrap();
        assert!(result.best_cost < LoadDeviation.evaluate(&start));
    }

    #[test]
    fn test_solve_single_processor_stops_immediately() {
        let result = solve(1, vec![5u32, 6], Makespan, &config()).unwrap();
        assert_eq!(result.best.to_vecs(), vec![vec![5, 6]]);
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn test_solve_rejects_zero_processors() {
        let err = solve(0, vec![1u32], Makespan, &config()).unwrap_err();
        assert_eq!(err, PartitionError::NoProcessors);
    }

    #[test]
    fn test_solve_rejects_invalid_config() {
        let bad = config().with_max_iterations(0);
        let err = solve(2, vec![1u32], Makespan, &bad).unwrap_err();
        assert!(matches!(err, PartitionError::InvalidConfig(_)));
    }

    #[test]
    fn test_random_initial_assignment() {
        let problem = PartitionProblem::new(4, TASKS.to_vec(), Makespan)
            .unwrap()
            .with_initial_assignment(InitialAssignment::Random);
        let result = TabuRunner::run(&problem, &config().with_max_iterations(50));

        assert!(result.best.check_invariants(4).is_ok());
        assert!(result.best_cost >= 20.0);
    }

    #[test]
    fn test_neighbors_scored_in_canonical_order() {
        let problem = PartitionProblem::new(2, vec![3u32, 1, 4], Makespan).unwrap();
        let mut rng = rand::rng();
        let moves = problem.neighbors(problem.initial_schedule(), &mut rng);

        let costs: Vec<f64> = moves.iter().map(|m| m.cost).collect();
        assert_eq!(costs, vec![5.0, 7.0, 4.0]);
        let expected_neighbors = neighborhood::neighbors(problem.initial_schedule());
        for (mv, expected) in moves.iter().zip(expected_neighbors) {
            assert_eq!(mv.solution, expected);
            assert_eq!(mv.key, expected.key());
        }
    }

    #[test]
    fn test_best_kept_after_worsening_step() {
        // Step 1 moves 4 to processor 1 (makespan 4). Every step-2 move is
        // worse and the way back is tabu, so the best stays at step 1.
        let problem = PartitionProblem::new(2, vec![3u32, 1, 4], Makespan).unwrap();
        let result = TabuRunner::run(&problem, &config().with_max_iterations(2));
        assert_eq!(result.best.to_vecs(), vec![vec![3, 1], vec![4]]);
        assert_eq!(result.best_cost, 4.0);
        assert_eq!(result.best_iteration, 0);
        assert_eq!(result.cost_history, vec![4.0, 4.0]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let sequential = PartitionProblem::new(3, TASKS.to_vec(), LoadDeviation).unwrap();
        let parallel = sequential.clone().with_parallel(true);

        let a = TabuRunner::run(&sequential, &config());
        let b = TabuRunner::run(&parallel, &config());

        assert_eq!(a.best, b.best);
        assert_eq!(a.cost_history, b.cost_history);
    }
}
