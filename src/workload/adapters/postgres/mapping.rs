//! Conversions between domain aggregates and Diesel rows.

use super::models::{EmployeeRow, NewEmployeeRow, NewTaskRow, TaskRow};
use crate::workload::{
    domain::{
        Employee, EmployeeId, Hours, PersistedEmployeeData, PersistedTaskData, Task,
        TaskDescription, TaskDuration, TaskId,
    },
    ports::{WorkloadStoreError, WorkloadStoreResult},
};

pub(crate) fn to_new_employee_row(employee: &Employee) -> NewEmployeeRow {
    NewEmployeeRow {
        emp_id: employee.id().as_str().to_owned(),
        current_workload: employee.current_workload().value(),
        next_free_time: employee.next_free_time().value(),
        created_at: employee.created_at(),
    }
}

pub(crate) fn to_new_task_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        task_id: task.id().as_str().to_owned(),
        description: task.description().as_str().to_owned(),
        duration: task.duration().value(),
        assigned_to: task.assigned_to().as_str().to_owned(),
        created_at: task.created_at(),
    }
}

pub(crate) fn row_to_employee(row: EmployeeRow) -> WorkloadStoreResult<Employee> {
    let EmployeeRow {
        emp_id,
        current_workload,
        next_free_time,
        created_at,
    } = row;

    let data = PersistedEmployeeData {
        id: EmployeeId::new(emp_id).map_err(WorkloadStoreError::unavailable)?,
        current_workload: Hours::new(current_workload).map_err(WorkloadStoreError::unavailable)?,
        next_free_time: Hours::new(next_free_time).map_err(WorkloadStoreError::unavailable)?,
        created_at,
    };
    Ok(Employee::from_persisted(data))
}

pub(crate) fn row_to_task(row: TaskRow) -> WorkloadStoreResult<Task> {
    let TaskRow {
        task_id,
        description,
        duration,
        assigned_to,
        created_at,
    } = row;

    let data = PersistedTaskData {
        id: TaskId::new(task_id).map_err(WorkloadStoreError::unavailable)?,
        description: TaskDescription::new(description).map_err(WorkloadStoreError::unavailable)?,
        duration: TaskDuration::new(duration).map_err(WorkloadStoreError::unavailable)?,
        assigned_to: EmployeeId::new(assigned_to).map_err(WorkloadStoreError::unavailable)?,
        created_at,
    };
    Ok(Task::from_persisted(data))
}
