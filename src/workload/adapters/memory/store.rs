//! In-memory workload store for tests and embedding.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::workload::{
    domain::{Employee, EmployeeId, Task},
    ports::{TasksByEmployee, WorkloadStore, WorkloadStoreError, WorkloadStoreResult},
};

/// Thread-safe in-memory workload store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkloadStore {
    state: Arc<RwLock<InMemoryWorkloadState>>,
}

#[derive(Debug, Default)]
struct InMemoryWorkloadState {
    employees: BTreeMap<EmployeeId, Employee>,
    /// Tasks in insertion order.
    tasks: Vec<Task>,
    last_sequence: u64,
}

impl InMemoryWorkloadStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> WorkloadStoreResult<RwLockReadGuard<'_, InMemoryWorkloadState>> {
        self.state
            .read()
            .map_err(|err| WorkloadStoreError::unavailable(std::io::Error::other(err.to_string())))
    }

    fn write(&self) -> WorkloadStoreResult<RwLockWriteGuard<'_, InMemoryWorkloadState>> {
        self.state
            .write()
            .map_err(|err| WorkloadStoreError::unavailable(std::io::Error::other(err.to_string())))
    }
}

/// Returns tasks sorted oldest first, ties kept in insertion order.
fn oldest_first<'a>(tasks: impl Iterator<Item = &'a Task>) -> Vec<Task> {
    let mut ordered: Vec<Task> = tasks.cloned().collect();
    ordered.sort_by_key(Task::created_at);
    ordered
}

#[async_trait]
impl WorkloadStore for InMemoryWorkloadStore {
    async fn create_employee(&self, employee: &Employee) -> WorkloadStoreResult<()> {
        let mut state = self.write()?;
        if state.employees.contains_key(employee.id()) {
            return Err(WorkloadStoreError::DuplicateEmployee(employee.id().clone()));
        }
        state.employees.insert(employee.id().clone(), employee.clone());
        Ok(())
    }

    async fn remove_employee(&self, id: &EmployeeId) -> WorkloadStoreResult<bool> {
        let mut state = self.write()?;
        state.tasks.retain(|task| task.assigned_to() != id);
        Ok(state.employees.remove(id).is_some())
    }

    async fn list_employees(&self) -> WorkloadStoreResult<Vec<Employee>> {
        let state = self.read()?;
        Ok(state.employees.values().cloned().collect())
    }

    async fn find_employee(&self, id: &EmployeeId) -> WorkloadStoreResult<Option<Employee>> {
        let state = self.read()?;
        Ok(state.employees.get(id).cloned())
    }

    async fn create_task(&self, task: &Task) -> WorkloadStoreResult<Employee> {
        let mut guard = self.write()?;
        let state = &mut *guard;
        if state.tasks.iter().any(|existing| existing.id() == task.id()) {
            return Err(WorkloadStoreError::DuplicateTask(task.id().clone()));
        }
        let employee = state
            .employees
            .get_mut(task.assigned_to())
            .ok_or_else(|| WorkloadStoreError::UnknownEmployee(task.assigned_to().clone()))?;

        employee
            .record_assignment(task.duration())
            .map_err(|source| WorkloadStoreError::WorkloadRejected {
                employee: task.assigned_to().clone(),
                source,
            })?;
        let updated = employee.clone();
        state.tasks.push(task.clone());
        Ok(updated)
    }

    async fn list_tasks(&self) -> WorkloadStoreResult<Vec<Task>> {
        let state = self.read()?;
        let mut ordered: Vec<Task> = state.tasks.iter().rev().cloned().collect();
        ordered.sort_by(|left, right| right.created_at().cmp(&left.created_at()));
        Ok(ordered)
    }

    async fn tasks_by_employee(&self) -> WorkloadStoreResult<TasksByEmployee> {
        let state = self.read()?;
        let grouped = state
            .employees
            .keys()
            .map(|id| {
                let assigned = state.tasks.iter().filter(|task| task.assigned_to() == id);
                (id.clone(), oldest_first(assigned))
            })
            .collect();
        Ok(grouped)
    }

    async fn next_task_sequence(&self) -> WorkloadStoreResult<u64> {
        let mut state = self.write()?;
        let next = state.last_sequence.checked_add(1).ok_or_else(|| {
            WorkloadStoreError::unavailable(std::io::Error::other("task sequence exhausted"))
        })?;
        state.last_sequence = next;
        Ok(next)
    }

    async fn reset_all(&self) -> WorkloadStoreResult<()> {
        let mut state = self.write()?;
        state.tasks.clear();
        state.employees.clear();
        Ok(())
    }
}
