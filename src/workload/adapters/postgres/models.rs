//! Diesel row models for workload persistence.

use super::schema::{employees, tasks};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for employee records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = employees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct EmployeeRow {
    /// Employee identifier.
    pub emp_id: String,
    /// Workload total in hours.
    pub current_workload: f64,
    /// Next free time in hours.
    pub next_free_time: f64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for employee records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = employees)]
pub struct NewEmployeeRow {
    /// Employee identifier.
    pub emp_id: String,
    /// Workload total in hours.
    pub current_workload: f64,
    /// Next free time in hours.
    pub next_free_time: f64,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub task_id: String,
    /// Free-form description.
    pub description: String,
    /// Duration in hours.
    pub duration: f64,
    /// Assigned employee identifier.
    pub assigned_to: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub task_id: String,
    /// Free-form description.
    pub description: String,
    /// Duration in hours.
    pub duration: f64,
    /// Assigned employee identifier.
    pub assigned_to: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Result row for sequence allocation.
#[derive(Debug, Clone, QueryableByName)]
pub struct SequenceRow {
    /// Allocated sequence value.
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    pub value: i64,
}
