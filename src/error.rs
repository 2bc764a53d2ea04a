//! Error types.

use thiserror::Error;

/// Errors produced while building or transforming schedules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PartitionError {
    /// A schedule was requested with zero processors.
    #[error("must provide at least one processor")]
    NoProcessors,

    /// A relocation referenced a processor or position that does not
    /// exist, or moved a task onto its own processor.
    #[error(
        "invalid relocation: position {position} of processor {source_processor} \
         to processor {destination}"
    )]
    InvalidRelocation {
        /// Source processor index.
        source_processor: usize,
        /// Position within the source processor.
        position: usize,
        /// Destination processor index.
        destination: usize,
    },

    /// A schedule has a different number of processors than expected.
    #[error("expected {expected} processors, found {found}")]
    ProcessorCountMismatch {
        /// Processor count the caller constructed.
        expected: usize,
        /// Processor count actually present.
        found: usize,
    },

    /// Some task is missing from, or duplicated in, a schedule.
    #[error("task {task} appears {occurrences} times, expected exactly once")]
    TaskSetMismatch {
        /// Identity (input position) of the offending task.
        task: usize,
        /// How often it was found.
        occurrences: usize,
    },

    /// A search configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
