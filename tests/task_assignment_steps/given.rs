//! Given steps for task assignment BDD scenarios.

use super::world::{RosterWorld, run_async};
use eyre::WrapErr;
use mockable::DefaultClock;
use roster::workload::{
    domain::{EmployeeId, Task, TaskDescription, TaskDuration, TaskId},
    ports::WorkloadStore,
};
use rstest_bdd_macros::given;

#[given("an empty roster")]
fn empty_roster(world: &mut RosterWorld) {
    world.last_assignment = None;
}

#[given(r#"employees "{first}" and "{second}" are on the roster"#)]
fn employees_on_roster(
    world: &mut RosterWorld,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    for id in [first, second] {
        run_async(world.service.add_employee(id.as_str()))
            .wrap_err_with(|| format!("add employee {id} in scenario setup"))?;
    }
    Ok(())
}

/// Credits existing work directly through the store so the seeded load does
/// not depend on the assignment policy.
#[given(r#"employee "{id}" already carries {hours:f64} hours of work"#)]
fn employee_carries_work(
    world: &mut RosterWorld,
    id: String,
    hours: f64,
) -> Result<(), eyre::Report> {
    let store = &world.store;
    run_async(async {
        let sequence = store.next_task_sequence().await?;
        let task = Task::new(
            TaskId::from_sequence(sequence),
            TaskDescription::new(format!("existing work for {id}"))?,
            TaskDuration::new(hours)?,
            EmployeeId::new(id.as_str())?,
            &DefaultClock,
        );
        store.create_task(&task).await?;
        Ok::<_, eyre::Report>(())
    })
    .wrap_err("seed existing workload")
}
