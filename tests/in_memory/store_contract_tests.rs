//! In-memory integration tests for the workload store contract.

use std::sync::Arc;

use super::helpers::{hours, seed_employee, seed_task, store};
use mockable::DefaultClock;
use roster::workload::{
    adapters::memory::InMemoryWorkloadStore,
    domain::{EmployeeId, Task, TaskDescription, TaskDuration, TaskId},
    ports::{WorkloadStore, WorkloadStoreError},
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_task_credits_assignee(
    store: Arc<InMemoryWorkloadStore>,
) -> Result<(), eyre::Report> {
    let alice = seed_employee(&store, "alice").await?;
    seed_task(&store, &alice, "write report", 2.5).await?;
    seed_task(&store, &alice, "review report", 1.0).await?;

    let found = store
        .find_employee(&alice)
        .await?
        .ok_or_else(|| eyre::eyre!("alice should exist"))?;
    eyre::ensure!(found.current_workload() == hours(3.5)?, "workload mismatch");
    eyre::ensure!(found.next_free_time() == hours(3.5)?, "next free time mismatch");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_for_unknown_employee_is_rejected_atomically(
    store: Arc<InMemoryWorkloadStore>,
) -> Result<(), eyre::Report> {
    seed_employee(&store, "alice").await?;
    let ghost = EmployeeId::new("ghost")?;
    let task = Task::new(
        TaskId::from_sequence(store.next_task_sequence().await?),
        TaskDescription::new("haunt")?,
        TaskDuration::new(1.0)?,
        ghost.clone(),
        &DefaultClock,
    );

    let result = store.create_task(&task).await;

    eyre::ensure!(
        matches!(result, Err(WorkloadStoreError::UnknownEmployee(ref id)) if *id == ghost),
        "expected unknown employee error, got {result:?}"
    );
    eyre::ensure!(store.list_tasks().await?.is_empty(), "no task should be stored");
    eyre::ensure!(
        store.find_employee(&ghost).await?.is_none(),
        "unknown employee must not be created"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_task_id_is_rejected(
    store: Arc<InMemoryWorkloadStore>,
) -> Result<(), eyre::Report> {
    let alice = seed_employee(&store, "alice").await?;
    let original = seed_task(&store, &alice, "first", 1.0).await?;
    let copy = Task::new(
        original.id().clone(),
        TaskDescription::new("second")?,
        TaskDuration::new(4.0)?,
        alice.clone(),
        &DefaultClock,
    );

    let result = store.create_task(&copy).await;

    eyre::ensure!(
        matches!(result, Err(WorkloadStoreError::DuplicateTask(_))),
        "expected duplicate task error, got {result:?}"
    );
    let found = store
        .find_employee(&alice)
        .await?
        .ok_or_else(|| eyre::eyre!("alice should exist"))?;
    eyre::ensure!(
        found.current_workload() == hours(1.0)?,
        "rejected task must not change workload"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listings_follow_documented_order(
    store: Arc<InMemoryWorkloadStore>,
) -> Result<(), eyre::Report> {
    let bob = seed_employee(&store, "bob").await?;
    let alice = seed_employee(&store, "alice").await?;
    let idle = seed_employee(&store, "carol").await?;
    let first = seed_task(&store, &bob, "first", 1.0).await?;
    let second = seed_task(&store, &alice, "second", 1.0).await?;
    let third = seed_task(&store, &bob, "third", 1.0).await?;

    let employees = store.list_employees().await?;
    let ids: Vec<&str> = employees.iter().map(|e| e.id().as_str()).collect();
    eyre::ensure!(ids == ["alice", "bob", "carol"], "employees ordered by id: {ids:?}");

    let tasks = store.list_tasks().await?;
    let task_ids: Vec<&TaskId> = tasks.iter().map(Task::id).collect();
    eyre::ensure!(
        task_ids == [third.id(), second.id(), first.id()],
        "tasks newest first: {task_ids:?}"
    );

    let grouped = store.tasks_by_employee().await?;
    let bob_tasks: Vec<&TaskId> = grouped
        .get(&bob)
        .map(|tasks| tasks.iter().map(Task::id).collect())
        .unwrap_or_default();
    eyre::ensure!(
        bob_tasks == [first.id(), third.id()],
        "grouped tasks oldest first: {bob_tasks:?}"
    );
    eyre::ensure!(
        grouped.get(&idle).is_some_and(Vec::is_empty),
        "employees without tasks are listed"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn sequence_survives_reset(store: Arc<InMemoryWorkloadStore>) -> Result<(), eyre::Report> {
    let first = store.next_task_sequence().await?;
    let second = store.next_task_sequence().await?;
    store.reset_all().await?;
    let third = store.next_task_sequence().await?;

    eyre::ensure!(
        (first, second, third) == (1, 2, 3),
        "unexpected sequence ({first}, {second}, {third})"
    );
    Ok(())
}
