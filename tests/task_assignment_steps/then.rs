//! Then steps for task assignment BDD scenarios.

use super::world::{RosterWorld, run_async};
use roster::workload::{
    domain::{EmployeeId, Hours},
    services::{AssignmentError, RosterError, TaskAssignment},
};
use rstest_bdd_macros::then;

fn successful_assignment(world: &RosterWorld) -> Result<&TaskAssignment, eyre::Report> {
    match world.last_assignment.as_ref() {
        Some(Ok(assignment)) => Ok(assignment),
        Some(Err(err)) => Err(eyre::eyre!("task was rejected: {err}")),
        None => Err(eyre::eyre!("no task was added in this scenario")),
    }
}

#[then(r#"the task is assigned to "{id}""#)]
fn task_assigned_to(world: &RosterWorld, id: String) -> Result<(), eyre::Report> {
    let assignment = successful_assignment(world)?;
    eyre::ensure!(
        assignment.task.assigned_to().as_str() == id,
        "expected assignee {id}, found {}",
        assignment.task.assigned_to()
    );
    Ok(())
}

#[then(r#"the assignment phase is "{phase}""#)]
fn assignment_phase_is(world: &RosterWorld, phase: String) -> Result<(), eyre::Report> {
    let assignment = successful_assignment(world)?;
    eyre::ensure!(
        assignment.phase.as_str() == phase,
        "expected phase {phase}, found {}",
        assignment.phase.as_str()
    );
    Ok(())
}

#[then(r#"employee "{id}" has a workload of {hours:f64} hours"#)]
fn employee_has_workload(world: &RosterWorld, id: String, hours: f64) -> Result<(), eyre::Report> {
    let employee_id = EmployeeId::new(id.as_str())?;
    let expected = Hours::new(hours)?;
    let employees = run_async(world.service.employees())?;
    let employee = employees
        .iter()
        .find(|employee| employee.id == employee_id)
        .ok_or_else(|| eyre::eyre!("employee {id} not found"))?;
    eyre::ensure!(
        employee.current_workload == expected,
        "expected workload {expected}, found {}",
        employee.current_workload
    );
    Ok(())
}

#[then("the task is rejected because no employees are available")]
fn task_rejected_no_employees(world: &RosterWorld) -> Result<(), eyre::Report> {
    match world.last_assignment.as_ref() {
        Some(Err(RosterError::Assignment(AssignmentError::NoEmployeesAvailable))) => Ok(()),
        other => Err(eyre::eyre!(
            "expected no-employees rejection, found {other:?}"
        )),
    }
}

#[then("no tasks are recorded")]
fn no_tasks_recorded(world: &RosterWorld) -> Result<(), eyre::Report> {
    let tasks = run_async(world.service.tasks())?;
    eyre::ensure!(tasks.is_empty(), "expected no tasks, found {}", tasks.len());
    Ok(())
}
