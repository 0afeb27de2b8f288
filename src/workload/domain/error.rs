//! Error types for workload domain validation.

use thiserror::Error;

/// Errors returned while constructing domain workload values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum WorkloadDomainError {
    /// The employee identifier is empty.
    #[error("employee identifier must not be empty")]
    EmptyEmployeeId,

    /// The employee identifier starts or ends with whitespace.
    #[error("employee identifier '{0}' must not start or end with whitespace")]
    PaddedEmployeeId(String),

    /// The employee identifier exceeds the storable length.
    #[error("employee identifier is {length} characters long, at most {max} are allowed")]
    EmployeeIdTooLong {
        /// Length of the rejected identifier in characters.
        length: usize,
        /// Maximum accepted length.
        max: usize,
    },

    /// The task identifier is empty after trimming.
    #[error("task identifier must not be empty")]
    EmptyTaskId,

    /// The task description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyDescription,

    /// The task duration is zero, negative, or not finite.
    #[error("invalid task duration {0}, expected a positive number of hours")]
    InvalidDuration(f64),

    /// An hour amount is negative or not finite.
    #[error("invalid hour amount {0}, expected a non-negative number")]
    InvalidHours(f64),

    /// Crediting a duration would push a workload past the representable
    /// range.
    #[error("adding {duration} hours to a workload of {workload} hours overflows")]
    WorkloadOverflow {
        /// Workload before the addition.
        workload: f64,
        /// Duration that could not be added.
        duration: f64,
    },
}
