//! Identifier types for the workload domain.

use super::WorkloadDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest accepted employee identifier, in characters.
pub const MAX_EMPLOYEE_ID_LEN: usize = 255;

/// Caller-assigned employee identifier, for example `EMP001`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Creates a validated employee identifier.
    ///
    /// The value is kept exactly as given.
    ///
    /// # Errors
    ///
    /// Returns [`WorkloadDomainError::EmptyEmployeeId`] for an empty or
    /// whitespace-only value, [`WorkloadDomainError::PaddedEmployeeId`] when
    /// it starts or ends with whitespace, and
    /// [`WorkloadDomainError::EmployeeIdTooLong`] past
    /// [`MAX_EMPLOYEE_ID_LEN`] characters.
    pub fn new(value: impl Into<String>) -> Result<Self, WorkloadDomainError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(WorkloadDomainError::EmptyEmployeeId);
        }
        if raw.trim().len() != raw.len() {
            return Err(WorkloadDomainError::PaddedEmployeeId(raw));
        }
        let length = raw.chars().count();
        if length > MAX_EMPLOYEE_ID_LEN {
            return Err(WorkloadDomainError::EmployeeIdTooLong {
                length,
                max: MAX_EMPLOYEE_ID_LEN,
            });
        }
        Ok(Self(raw))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmployeeId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl TryFrom<String> for EmployeeId {
    type Error = WorkloadDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<EmployeeId> for String {
    fn from(id: EmployeeId) -> Self {
        id.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Task identifier such as `TASK_007`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    /// Creates a validated task identifier.
    ///
    /// # Errors
    ///
    /// Returns [`WorkloadDomainError::EmptyTaskId`] when the trimmed value is
    /// empty.
    pub fn new(value: impl Into<String>) -> Result<Self, WorkloadDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(WorkloadDomainError::EmptyTaskId);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Builds the identifier for a store-allocated sequence number.
    ///
    /// Numbers are zero-padded to at least three digits.
    #[must_use]
    pub fn from_sequence(sequence: u64) -> Self {
        Self(format!("TASK_{sequence:03}"))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
