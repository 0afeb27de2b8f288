//! Hour quantities used for workload accounting.

use super::WorkloadDomainError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Non-negative, finite amount of hours.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Hours(f64);

impl Hours {
    /// Zero hours.
    pub const ZERO: Self = Self(0.0);

    /// Creates a validated hour amount.
    ///
    /// # Errors
    ///
    /// Returns [`WorkloadDomainError::InvalidHours`] when the value is
    /// negative, `NaN`, or infinite.
    pub fn new(value: f64) -> Result<Self, WorkloadDomainError> {
        if !value.is_finite() || value < 0.0 {
            return Err(WorkloadDomainError::InvalidHours(value));
        }
        Ok(Self(value))
    }

    /// Creates an hour amount from a compile-time constant.
    ///
    /// Callers must pass a non-negative finite value.
    #[must_use]
    pub(crate) const fn from_const(value: f64) -> Self {
        Self(value)
    }

    /// Returns the underlying number of hours.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Adds a task duration to this amount.
    ///
    /// # Errors
    ///
    /// Returns [`WorkloadDomainError::WorkloadOverflow`] when the sum is no
    /// longer finite.
    #[expect(
        clippy::float_arithmetic,
        reason = "workload totals are fractional hour sums"
    )]
    pub fn plus(self, duration: TaskDuration) -> Result<Self, WorkloadDomainError> {
        let total = self.0 + duration.value();
        if !total.is_finite() {
            return Err(WorkloadDomainError::WorkloadOverflow {
                workload: self.0,
                duration: duration.value(),
            });
        }
        Ok(Self(total))
    }

    /// Subtracts `other`, clamping the result at zero.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "remaining capacity is a fractional hour difference"
    )]
    pub fn saturating_sub(self, other: Self) -> Self {
        Self((self.0 - other.0).max(0.0))
    }

    /// Total ordering over hour amounts.
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }

    /// Sums hour values.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "dashboard totals are fractional hour sums"
    )]
    pub fn sum(values: impl IntoIterator<Item = Self>) -> Self {
        Self(values.into_iter().map(Self::value).sum())
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}h", self.0)
    }
}

impl TryFrom<f64> for Hours {
    type Error = WorkloadDomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Hours> for f64 {
    fn from(hours: Hours) -> Self {
        hours.0
    }
}

impl From<TaskDuration> for Hours {
    fn from(duration: TaskDuration) -> Self {
        Self(duration.value())
    }
}

/// Strictly positive, finite task duration in hours.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct TaskDuration(f64);

impl TaskDuration {
    /// Creates a validated task duration.
    ///
    /// # Errors
    ///
    /// Returns [`WorkloadDomainError::InvalidDuration`] when the value is not
    /// strictly positive and finite.
    pub fn new(value: f64) -> Result<Self, WorkloadDomainError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(WorkloadDomainError::InvalidDuration(value));
        }
        Ok(Self(value))
    }

    /// Returns the duration in hours.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for TaskDuration {
    type Error = WorkloadDomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TaskDuration> for f64 {
    fn from(duration: TaskDuration) -> Self {
        duration.0
    }
}

impl fmt::Display for TaskDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h", self.0)
    }
}
