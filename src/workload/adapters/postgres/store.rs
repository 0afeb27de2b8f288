//! `PostgreSQL` store implementation for workload persistence.

use super::{
    mapping::{row_to_employee, row_to_task, to_new_employee_row, to_new_task_row},
    models::{EmployeeRow, SequenceRow, TaskRow},
    schema::{employees, tasks},
};
use crate::workload::{
    domain::{Employee, EmployeeId, Task},
    ports::{TasksByEmployee, WorkloadStore, WorkloadStoreError, WorkloadStoreResult},
};
use async_trait::async_trait;
use diesel::connection::SimpleConnection;
use diesel::helper_types::{Asc, Desc};
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by workload adapters.
pub type WorkloadPgPool = Pool<ConnectionManager<PgConnection>>;

/// Idempotent DDL creating the employee and task tables.
pub const SCHEMA_SQL: &str =
    include_str!("../../../../migrations/2026-10-16-000000_create_workload_tables/up.sql");

/// Task order for listings: newest first, ties by reverse insertion.
pub(crate) fn newest_first() -> (Desc<tasks::created_at>, Desc<tasks::insertion_order>) {
    (tasks::created_at.desc(), tasks::insertion_order.desc())
}

/// Task order within an employee's queue: oldest first, ties by insertion.
pub(crate) fn oldest_first() -> (Asc<tasks::created_at>, Asc<tasks::insertion_order>) {
    (tasks::created_at.asc(), tasks::insertion_order.asc())
}

/// `PostgreSQL`-backed workload store.
#[derive(Debug, Clone)]
pub struct PostgresWorkloadStore {
    pool: WorkloadPgPool,
}

impl From<DieselError> for WorkloadStoreError {
    fn from(err: DieselError) -> Self {
        Self::unavailable(err)
    }
}

impl PostgresWorkloadStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: WorkloadPgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    #[must_use]
    pub const fn pool(&self) -> &WorkloadPgPool {
        &self.pool
    }

    /// Creates the workload tables and task sequence when missing.
    ///
    /// # Errors
    ///
    /// Returns [`WorkloadStoreError::StorageUnavailable`] when the DDL cannot
    /// be applied.
    pub async fn ensure_schema(&self) -> WorkloadStoreResult<()> {
        self.run_blocking(|connection| {
            connection.batch_execute(SCHEMA_SQL)?;
            Ok(())
        })
        .await
    }

    async fn run_blocking<F, T>(&self, f: F) -> WorkloadStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> WorkloadStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(WorkloadStoreError::unavailable)?;
            f(&mut connection)
        })
        .await
        .map_err(WorkloadStoreError::unavailable)?
    }
}

#[async_trait]
impl WorkloadStore for PostgresWorkloadStore {
    async fn create_employee(&self, employee: &Employee) -> WorkloadStoreResult<()> {
        let employee_id = employee.id().clone();
        let new_row = to_new_employee_row(employee);

        self.run_blocking(move |connection| {
            diesel::insert_into(employees::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        WorkloadStoreError::DuplicateEmployee(employee_id)
                    }
                    _ => WorkloadStoreError::unavailable(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn remove_employee(&self, id: &EmployeeId) -> WorkloadStoreResult<bool> {
        let emp_id = id.as_str().to_owned();
        self.run_blocking(move |connection| {
            connection.transaction::<_, WorkloadStoreError, _>(|tx| {
                diesel::delete(tasks::table.filter(tasks::assigned_to.eq(emp_id.as_str())))
                    .execute(tx)?;
                let removed = diesel::delete(
                    employees::table.filter(employees::emp_id.eq(emp_id.as_str())),
                )
                .execute(tx)?;
                Ok(removed > 0)
            })
        })
        .await
    }

    async fn list_employees(&self) -> WorkloadStoreResult<Vec<Employee>> {
        self.run_blocking(move |connection| {
            let rows = employees::table
                .order(employees::emp_id.asc())
                .select(EmployeeRow::as_select())
                .load::<EmployeeRow>(connection)?;
            rows.into_iter().map(row_to_employee).collect()
        })
        .await
    }

    async fn find_employee(&self, id: &EmployeeId) -> WorkloadStoreResult<Option<Employee>> {
        let emp_id = id.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = employees::table
                .filter(employees::emp_id.eq(emp_id.as_str()))
                .select(EmployeeRow::as_select())
                .first::<EmployeeRow>(connection)
                .optional()?;
            row.map(row_to_employee).transpose()
        })
        .await
    }

    async fn create_task(&self, task: &Task) -> WorkloadStoreResult<Employee> {
        let task_id = task.id().clone();
        let assignee = task.assigned_to().clone();
        let duration = task.duration();
        let new_row = to_new_task_row(task);

        self.run_blocking(move |connection| {
            connection.transaction::<_, WorkloadStoreError, _>(|tx| {
                // Lock the assignee row so concurrent writers queue behind us.
                let locked = employees::table
                    .filter(employees::emp_id.eq(assignee.as_str()))
                    .select(EmployeeRow::as_select())
                    .for_update()
                    .first::<EmployeeRow>(tx)
                    .optional()?
                    .ok_or_else(|| WorkloadStoreError::UnknownEmployee(assignee.clone()))?;
                let mut employee = row_to_employee(locked)?;
                employee.record_assignment(duration).map_err(|source| {
                    WorkloadStoreError::WorkloadRejected {
                        employee: assignee.clone(),
                        source,
                    }
                })?;

                diesel::insert_into(tasks::table)
                    .values(&new_row)
                    .execute(tx)
                    .map_err(|err| match err {
                        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                            WorkloadStoreError::DuplicateTask(task_id.clone())
                        }
                        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                            WorkloadStoreError::UnknownEmployee(assignee.clone())
                        }
                        _ => WorkloadStoreError::unavailable(err),
                    })?;

                diesel::update(employees::table.filter(employees::emp_id.eq(assignee.as_str())))
                    .set((
                        employees::current_workload.eq(employee.current_workload().value()),
                        employees::next_free_time.eq(employee.next_free_time().value()),
                    ))
                    .execute(tx)?;
                Ok(employee)
            })
        })
        .await
    }

    async fn list_tasks(&self) -> WorkloadStoreResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .order(newest_first())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn tasks_by_employee(&self) -> WorkloadStoreResult<TasksByEmployee> {
        self.run_blocking(move |connection| {
            connection.transaction::<_, WorkloadStoreError, _>(|tx| {
                let employee_ids = employees::table
                    .order(employees::emp_id.asc())
                    .select(employees::emp_id)
                    .load::<String>(tx)?;
                let rows = tasks::table
                    .order(oldest_first())
                    .select(TaskRow::as_select())
                    .load::<TaskRow>(tx)?;

                let mut grouped = TasksByEmployee::new();
                for emp_id in employee_ids {
                    let id = EmployeeId::new(emp_id).map_err(WorkloadStoreError::unavailable)?;
                    grouped.insert(id, Vec::new());
                }
                for row in rows {
                    let task = row_to_task(row)?;
                    grouped
                        .entry(task.assigned_to().clone())
                        .or_default()
                        .push(task);
                }
                Ok(grouped)
            })
        })
        .await
    }

    async fn next_task_sequence(&self) -> WorkloadStoreResult<u64> {
        self.run_blocking(move |connection| {
            let row = diesel::sql_query("SELECT nextval('task_id_seq') AS value")
                .get_result::<SequenceRow>(connection)?;
            u64::try_from(row.value).map_err(WorkloadStoreError::unavailable)
        })
        .await
    }

    async fn reset_all(&self) -> WorkloadStoreResult<()> {
        self.run_blocking(move |connection| {
            connection.transaction::<_, WorkloadStoreError, _>(|tx| {
                diesel::delete(tasks::table).execute(tx)?;
                diesel::delete(employees::table).execute(tx)?;
                Ok(())
            })
        })
        .await
    }
}
