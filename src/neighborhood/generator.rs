//! Exhaustive relocation neighborhood.
//!
//! # Enumeration order
//!
//! 1. source processor, ascending
//! 2. task position within the source, ascending
//! 3. destination processor, ascending, skipping the source
//!
//! Downstream tie-breaking relies on this order, so every generator in
//! this module (sequential, lazy and parallel) produces it.

use crate::schedule::{Relocation, Schedule};

/// Number of neighbors of `state`: `tasks × (processors − 1)`.
#[inline]
pub fn neighborhood_size<T>(state: &Schedule<T>) -> usize {
    state.task_count() * state.processor_count().saturating_sub(1)
}

/// Generates every schedule reachable from `state` by moving exactly one
/// task to a different processor.
///
/// The moved task is removed from its source (remaining order preserved)
/// and appended to the end of its destination. `state` is not modified.
///
/// Returns an empty vector when there are no tasks or only one processor.
///
/// # Panics
///
/// Panics if `state` has no processors. Debug builds additionally assert
/// that every task appears exactly once.
///
/// # Examples
///
/// ```
/// use u_partition::neighborhood::neighbors;
/// use u_partition::schedule::Schedule;
///
/// let state = Schedule::new(2, vec![3, 1, 4]).unwrap();
/// let result: Vec<_> = neighbors(&state).iter().map(|n| n.to_vecs()).collect();
/// assert_eq!(
///     result,
///     vec![
///         vec![vec![1, 4], vec![3]],
///         vec![vec![3, 4], vec![1]],
///         vec![vec![3, 1], vec![4]],
///     ]
/// );
/// ```
pub fn neighbors<T>(state: &Schedule<T>) -> Vec<Schedule<T>> {
    let mut result = Vec::with_capacity(neighborhood_size(state));
    result.extend(relocations(state).map(|(_, neighbor)| neighbor));
    result
}

/// Lazily yields every neighbor of `state` together with the
/// [`Relocation`] that produced it, in canonical order.
///
/// # Panics
///
/// Same conditions as [`neighbors`].
pub fn relocations<T>(
    state: &Schedule<T>,
) -> impl Iterator<Item = (Relocation, Schedule<T>)> + '_ {
    moves(state).map(move |(source, position, destination)| {
        state.apply_relocation(source, position, destination)
    })
}

/// Parallel version of [`neighbors`].
///
/// Neighbors are built on the rayon thread pool and collected in
/// canonical order, so the result is identical to [`neighbors`].
#[cfg(feature = "parallel")]
pub fn par_neighbors<T: Send + Sync>(state: &Schedule<T>) -> Vec<Schedule<T>> {
    par_relocations(state)
        .into_iter()
        .map(|(_, neighbor)| neighbor)
        .collect()
}

/// Parallel version of [`relocations`], collected eagerly.
#[cfg(feature = "parallel")]
pub fn par_relocations<T: Send + Sync>(state: &Schedule<T>) -> Vec<(Relocation, Schedule<T>)> {
    use rayon::prelude::*;

    let triples: Vec<(usize, usize, usize)> = moves(state).collect();
    triples
        .into_par_iter()
        .map(|(source, position, destination)| {
            state.apply_relocation(source, position, destination)
        })
        .collect()
}

/// Canonical `(source, position, destination)` triples of `state`.
fn moves<T>(state: &Schedule<T>) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
    let processors = state.processor_count();
    assert!(processors >= 1, "configuration error: schedule has no processors");
    debug_assert!(
        state.check_partition().is_ok(),
        "schedule violates the partition invariant: {:?}",
        state.check_partition()
    );
    log::trace!(
        "enumerating {} relocations over {} processors",
        neighborhood_size(state),
        processors
    );

    (0..processors).flat_map(move |source| {
        (0..state.task_ids(source).len()).flat_map(move |position| {
            (0..processors)
                .filter(move |&destination| destination != source)
                .map(move |destination| (source, position, destination))
        })
    })
}
