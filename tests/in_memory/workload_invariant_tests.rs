//! Workload bookkeeping checks over mixed sequences of roster operations.

use super::helpers::{TestService, service};
use roster::workload::{
    domain::{Hours, Task},
    services::AddTaskRequest,
};
use rstest::rstest;

/// One roster operation in a scripted sequence.
#[derive(Debug, Clone, Copy)]
enum Step {
    Hire(&'static str),
    Assign(f64),
    Fire(&'static str),
}

use Step::{Assign, Fire, Hire};

/// Checks that each employee's totals match the tasks they hold.
async fn assert_workloads_match_tasks(
    service: &TestService,
    after: Step,
) -> Result<(), eyre::Report> {
    let employees = service.employees().await?;
    let grouped = service.assignments().await?;

    eyre::ensure!(
        grouped.len() == employees.len(),
        "after {after:?}: {} task groups for {} employees",
        grouped.len(),
        employees.len()
    );
    for employee in &employees {
        let tasks = grouped
            .get(&employee.id)
            .ok_or_else(|| eyre::eyre!("after {after:?}: no task group for {}", employee.id))?;
        let expected = Hours::sum(tasks.iter().map(|task: &Task| Hours::from(task.duration())));
        eyre::ensure!(
            employee.current_workload == expected,
            "after {after:?}: {} carries {} but holds {} of tasks",
            employee.id,
            employee.current_workload,
            expected
        );
        eyre::ensure!(
            employee.next_free_time == employee.current_workload,
            "after {after:?}: next free time of {} drifted",
            employee.id
        );
    }
    Ok(())
}

#[rstest]
#[case::spread_then_overflow(&[
    Hire("A"), Hire("B"), Hire("C"),
    Assign(3.0), Assign(4.0), Assign(2.5), Assign(5.0), Assign(1.5), Assign(6.0),
    Fire("B"),
    Assign(2.0), Assign(0.5),
])]
#[case::single_employee_overflows_before_help_arrives(&[
    Hire("A"),
    Assign(8.5), Assign(2.0), Assign(3.0),
    Hire("B"),
    Assign(1.0),
    Fire("A"),
    Assign(9.5),
    Hire("A"),
    Assign(0.25),
])]
#[case::whole_roster_replaced(&[
    Hire("X"), Hire("Y"),
    Assign(9.0), Assign(9.0), Assign(9.0),
    Fire("Y"), Fire("X"),
    Hire("Z"),
    Assign(1.0), Assign(12.0),
])]
#[tokio::test(flavor = "multi_thread")]
async fn workload_always_equals_sum_of_assigned_durations(
    service: TestService,
    #[case] steps: &[Step],
) -> Result<(), eyre::Report> {
    for (n, step) in steps.iter().copied().enumerate() {
        match step {
            Hire(id) => {
                service.add_employee(id).await?;
            }
            Assign(hours) => {
                service
                    .add_task(AddTaskRequest::new(format!("step {n}"), hours))
                    .await?;
            }
            Fire(id) => {
                eyre::ensure!(service.remove_employee(id).await?, "{id} was not on the roster");
            }
        }
        assert_workloads_match_tasks(&service, step).await?;
    }

    let summary = service.summary().await?;
    let employees = service.employees().await?;
    let roster_total = Hours::sum(employees.iter().map(|employee| employee.current_workload));
    eyre::ensure!(
        summary.total_task_hours == roster_total,
        "summary reports {} but employees carry {}",
        summary.total_task_hours,
        roster_total
    );
    Ok(())
}
