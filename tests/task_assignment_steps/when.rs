//! When steps for task assignment BDD scenarios.

use super::world::{RosterWorld, run_async};
use eyre::WrapErr;
use roster::workload::services::AddTaskRequest;
use rstest_bdd_macros::when;

#[when(r#"a {hours:f64} hour task "{description}" is added"#)]
fn task_is_added(world: &mut RosterWorld, hours: f64, description: String) {
    let result = run_async(
        world
            .service
            .add_task(AddTaskRequest::new(description, hours)),
    );
    world.last_assignment = Some(result);
}

#[when(r#"employee "{id}" is removed"#)]
fn employee_is_removed(world: &mut RosterWorld, id: String) -> Result<(), eyre::Report> {
    let removed = run_async(world.service.remove_employee(id.as_str()))
        .wrap_err("remove employee in scenario")?;
    eyre::ensure!(removed, "employee {id} was not on the roster");
    Ok(())
}
