//! Schedule state model.
//!
//! A [`Schedule`] assigns every task to exactly one of `P` processors.
//! Task values live in a single shared, immutable array; each processor
//! holds an immutable list of task identities (input positions). Deriving
//! a new schedule rebuilds only the lists that change and shares the rest,
//! so a single relocation costs O(|source| + |destination| + P) instead of
//! a deep copy of the whole assignment.

use std::fmt;
use std::sync::Arc;

use rand::Rng;

use super::cost::TaskCost;
use crate::error::PartitionError;

/// An assignment of tasks to processors.
///
/// Schedules are values: no operation mutates one in place. Every
/// transformation returns a new, independent schedule.
///
/// # Invariants
///
/// - There are exactly `processor_count() >= 1` processors, empty ones
///   included.
/// - Every task identity in `0..task_count()` appears on exactly one
///   processor, exactly once.
///
/// # Examples
///
/// ```
/// use u_partition::schedule::Schedule;
///
/// let schedule = Schedule::new(2, vec![3, 1, 4]).unwrap();
/// assert_eq!(schedule.to_vecs(), vec![vec![3, 1, 4], vec![]]);
/// ```
#[derive(Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule<T> {
    tasks: Arc<[T]>,
    assignment: Vec<Arc<[usize]>>,
}

// Manual impl: cloning shares the task array, so `T: Clone` is not needed.
impl<T> Clone for Schedule<T> {
    fn clone(&self) -> Self {
        Self {
            tasks: Arc::clone(&self.tasks),
            assignment: self.assignment.clone(),
        }
    }
}

/// A single-task move from one processor to another.
///
/// Records how a neighbor was derived from its parent schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Relocation {
    /// Identity (input position) of the moved task.
    pub task: usize,
    /// Processor the task was taken from.
    pub source: usize,
    /// Position of the task within the source processor before the move.
    pub position: usize,
    /// Processor the task was appended to.
    pub destination: usize,
}

/// Hashable identity of an assignment, independent of task values.
///
/// Two schedules over the same task list have equal keys exactly when
/// every processor holds the same task identities in the same order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssignmentKey(Vec<Arc<[usize]>>);

impl<T> Schedule<T> {
    /// Creates the initial schedule: every task on processor 0, in input
    /// order, and all other processors empty.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::NoProcessors`] if `processor_count` is 0.
    pub fn new(processor_count: usize, tasks: Vec<T>) -> Result<Self, PartitionError> {
        if processor_count == 0 {
            return Err(PartitionError::NoProcessors);
        }

        let empty: Arc<[usize]> = Arc::from(Vec::new());
        let mut assignment = vec![empty; processor_count];
        assignment[0] = (0..tasks.len()).collect();

        Ok(Self {
            tasks: tasks.into(),
            assignment,
        })
    }

    /// Creates a schedule that places every task on a uniformly random
    /// processor. Tasks keep their input order within a processor.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::NoProcessors`] if `processor_count` is 0.
    pub fn random<R: Rng>(
        processor_count: usize,
        tasks: Vec<T>,
        rng: &mut R,
    ) -> Result<Self, PartitionError> {
        Ok(Self::new(processor_count, tasks)?.scatter(rng))
    }

    /// Builds a schedule from explicit per-processor task lists.
    ///
    /// Task identities are assigned in concatenation order: processor 0's
    /// tasks first, then processor 1's, and so on.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::NoProcessors`] if `processors` is empty.
    pub fn from_processors(processors: Vec<Vec<T>>) -> Result<Self, PartitionError> {
        if processors.is_empty() {
            return Err(PartitionError::NoProcessors);
        }

        let mut tasks = Vec::with_capacity(processors.iter().map(Vec::len).sum());
        let mut assignment: Vec<Arc<[usize]>> = Vec::with_capacity(processors.len());
        for list in processors {
            let start = tasks.len();
            tasks.extend(list);
            assignment.push((start..tasks.len()).collect());
        }

        Ok(Self {
            tasks: tasks.into(),
            assignment,
        })
    }

    /// Returns a schedule over the same tasks with every task moved to a
    /// uniformly random processor.
    pub fn scatter<R: Rng>(&self, rng: &mut R) -> Self {
        let mut lists = vec![Vec::new(); self.processor_count()];
        for id in 0..self.tasks.len() {
            let processor = rng.random_range(0..lists.len());
            lists[processor].push(id);
        }

        Self {
            tasks: Arc::clone(&self.tasks),
            assignment: lists.into_iter().map(Arc::<[usize]>::from).collect(),
        }
    }

    /// Number of processors.
    #[inline]
    pub fn processor_count(&self) -> usize {
        self.assignment.len()
    }

    /// Total number of tasks across all processors.
    #[inline]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// All task values, indexed by task identity.
    #[inline]
    pub fn all_tasks(&self) -> &[T] {
        &self.tasks
    }

    /// Value of the task with the given identity.
    ///
    /// # Panics
    ///
    /// Panics if `id >= task_count()`.
    #[inline]
    pub fn task(&self, id: usize) -> &T {
        &self.tasks[id]
    }

    /// Task identities assigned to `processor`, in assignment order.
    ///
    /// # Panics
    ///
    /// Panics if `processor >= processor_count()`.
    #[inline]
    pub fn task_ids(&self, processor: usize) -> &[usize] {
        &self.assignment[processor]
    }

    /// Task values assigned to `processor`, in assignment order.
    ///
    /// # Panics
    ///
    /// Panics if `processor >= processor_count()`.
    pub fn tasks(&self, processor: usize) -> impl Iterator<Item = &T> + '_ {
        self.assignment[processor].iter().map(move |&id| &self.tasks[id])
    }

    /// Processor currently holding the task with the given identity.
    pub fn processor_of(&self, task: usize) -> Option<usize> {
        self.assignment
            .iter()
            .position(|list| list.contains(&task))
    }

    /// Hashable key of this assignment, used to remember visited states.
    pub fn key(&self) -> AssignmentKey {
        AssignmentKey(self.assignment.clone())
    }

    /// Moves the task at `position` on `source` to the end of
    /// `destination`, returning the resulting schedule.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::InvalidRelocation`] if either processor
    /// is out of range, `position` is out of range, or
    /// `source == destination`.
    pub fn relocate(
        &self,
        source: usize,
        position: usize,
        destination: usize,
    ) -> Result<Self, PartitionError> {
        let processors = self.processor_count();
        if source >= processors
            || destination >= processors
            || source == destination
            || position >= self.assignment[source].len()
        {
            return Err(PartitionError::InvalidRelocation {
                source_processor: source,
                position,
                destination,
            });
        }
        Ok(self.apply_relocation(source, position, destination).1)
    }

    /// Unchecked relocation shared by [`relocate`](Self::relocate) and the
    /// neighborhood generator. Indices must be valid and distinct.
    pub(crate) fn apply_relocation(
        &self,
        source: usize,
        position: usize,
        destination: usize,
    ) -> (Relocation, Self) {
        let from = &self.assignment[source];
        let task = from[position];

        let mut remaining = Vec::with_capacity(from.len() - 1);
        remaining.extend_from_slice(&from[..position]);
        remaining.extend_from_slice(&from[position + 1..]);

        let to = &self.assignment[destination];
        let mut extended = Vec::with_capacity(to.len() + 1);
        extended.extend_from_slice(to);
        extended.push(task);

        let mut assignment = self.assignment.clone();
        assignment[source] = remaining.into();
        assignment[destination] = extended.into();

        let relocation = Relocation {
            task,
            source,
            position,
            destination,
        };
        let schedule = Self {
            tasks: Arc::clone(&self.tasks),
            assignment,
        };
        (relocation, schedule)
    }

    /// Checks that every task identity appears exactly once.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::NoProcessors`] for an empty assignment and
    /// [`PartitionError::TaskSetMismatch`] for the first task that is lost,
    /// duplicated or unknown.
    pub fn check_partition(&self) -> Result<(), PartitionError> {
        if self.assignment.is_empty() {
            return Err(PartitionError::NoProcessors);
        }

        let mut seen = vec![0usize; self.tasks.len()];
        for &id in self.assignment.iter().flat_map(|list| list.iter()) {
            match seen.get_mut(id) {
                Some(count) => *count += 1,
                None => {
                    return Err(PartitionError::TaskSetMismatch {
                        task: id,
                        occurrences: 1,
                    })
                }
            }
        }

        match seen.iter().position(|&count| count != 1) {
            Some(task) => Err(PartitionError::TaskSetMismatch {
                task,
                occurrences: seen[task],
            }),
            None => Ok(()),
        }
    }

    /// Checks the full state invariant against the processor count the
    /// search was configured with.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::ProcessorCountMismatch`] or any error of
    /// [`check_partition`](Self::check_partition).
    pub fn check_invariants(&self, processor_count: usize) -> Result<(), PartitionError> {
        if self.processor_count() != processor_count {
            return Err(PartitionError::ProcessorCountMismatch {
                expected: processor_count,
                found: self.processor_count(),
            });
        }
        self.check_partition()
    }

    /// Per-processor task values, cloned into owned vectors.
    pub fn to_vecs(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        (0..self.processor_count())
            .map(|p| self.tasks(p).cloned().collect())
            .collect()
    }

    #[cfg(test)]
    pub(crate) fn shares_list_with(&self, other: &Self, processor: usize) -> bool {
        Arc::ptr_eq(&self.assignment[processor], &other.assignment[processor])
    }
}

impl<T: TaskCost> Schedule<T> {
    /// Sum of task costs on `processor`.
    ///
    /// # Panics
    ///
    /// Panics if `processor >= processor_count()`.
    pub fn load(&self, processor: usize) -> f64 {
        self.tasks(processor).map(TaskCost::cost).sum()
    }

    /// Loads of all processors, indexed by processor.
    pub fn loads(&self) -> Vec<f64> {
        (0..self.processor_count()).map(|p| self.load(p)).collect()
    }

    /// Sum of all task costs.
    pub fn total_load(&self) -> f64 {
        self.tasks.iter().map(TaskCost::cost).sum()
    }
}

impl<T: fmt::Debug + TaskCost> fmt::Display for Schedule<T> {
    /// One line per processor: `index | [tasks] -> load`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for p in 0..self.processor_count() {
            let tasks: Vec<&T> = self.tasks(p).collect();
            writeln!(f, "{p}\t|\t{tasks:?}\t->\t{}", self.load(p))?;
        }
        Ok(())
    }
}
