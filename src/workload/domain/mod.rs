//! Domain model for employee workload tracking.
//!
//! Employees carry a running workload measured in hours against a fixed
//! daily capacity. Tasks are immutable records of work assigned to exactly
//! one employee. Nothing in this module touches persistence.

mod employee;
mod error;
mod hours;
mod ids;
mod summary;
mod task;

pub use employee::{DAILY_CAPACITY, Employee, EmployeeSnapshot, PersistedEmployeeData};
pub use error::WorkloadDomainError;
pub use hours::{Hours, TaskDuration};
pub use ids::{EmployeeId, MAX_EMPLOYEE_ID_LEN, TaskId};
pub use summary::WorkloadSummary;
pub use task::{PersistedTaskData, Task, TaskDescription};
