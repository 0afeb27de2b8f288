//! Command-line front end for the roster service.
//!
//! Usage:
//!
//! ```text
//! roster migrate
//! roster add-employee EMP001
//! roster add-task --duration 2.5 "Review quarterly report"
//! roster summary
//! ```
//!
//! Configuration comes from the environment (see [`roster::config`]).
//! Results are written to stdout as JSON; diagnostics go to stderr.

use clap::{Parser, Subcommand};
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use mockable::DefaultClock;
use roster::config::RosterConfig;
use roster::telemetry;
use roster::workload::{
    adapters::postgres::PostgresWorkloadStore,
    services::{AddTaskRequest, RosterService},
};
use serde::Serialize;
use std::io::Write;
use std::sync::Arc;
use thiserror::Error;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

type Service = RosterService<PostgresWorkloadStore, DefaultClock>;

#[derive(Debug, Parser)]
#[command(name = "roster", version, about = "Assign tasks to employees by workload")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create the tables and sequence when missing.
    Migrate,
    /// Add an employee with zero workload.
    AddEmployee {
        /// Employee identifier, for example EMP001.
        id: String,
    },
    /// Remove an employee and all of their tasks.
    RemoveEmployee {
        /// Employee identifier.
        id: String,
    },
    /// List employees with remaining capacity.
    Employees,
    /// Create a task and assign it automatically.
    AddTask {
        /// Hours the task requires.
        #[arg(long)]
        duration: f64,
        /// What needs doing.
        description: String,
    },
    /// List tasks, newest first.
    Tasks,
    /// List tasks grouped by employee.
    Assignments,
    /// Show roster totals.
    Summary,
    /// Delete every employee and task.
    Reset {
        /// Confirms the deletion.
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error("reset deletes every employee and task, pass --yes to confirm")]
    ResetNotConfirmed,
}

#[derive(Serialize)]
struct Removal {
    employee_id: String,
    removed: bool,
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let cli = Cli::parse();
    let config = RosterConfig::from_env()?;
    telemetry::init(&config.log)?;

    let manager = ConnectionManager::<PgConnection>::new(config.database_url.as_str());
    let pool = Pool::builder()
        .max_size(config.pool_max_size)
        .build(manager)?;
    let store = Arc::new(PostgresWorkloadStore::new(pool));
    let service = RosterService::new(Arc::clone(&store), Arc::new(DefaultClock));
    run(&store, &service, cli.command).await
}

async fn run(
    store: &PostgresWorkloadStore,
    service: &Service,
    command: Command,
) -> Result<(), BoxError> {
    match command {
        Command::Migrate => {
            store.ensure_schema().await?;
            tracing::info!("schema ready");
            Ok(())
        }
        Command::AddEmployee { id } => emit(&service.add_employee(id).await?.snapshot()),
        Command::RemoveEmployee { id } => {
            let removed = service.remove_employee(id.as_str()).await?;
            emit(&Removal {
                employee_id: id,
                removed,
            })
        }
        Command::Employees => emit(&service.employees().await?),
        Command::AddTask {
            duration,
            description,
        } => emit(
            &service
                .add_task(AddTaskRequest::new(description, duration))
                .await?,
        ),
        Command::Tasks => emit(&service.tasks().await?),
        Command::Assignments => emit(&service.assignments().await?),
        Command::Summary => emit(&service.summary().await?),
        Command::Reset { yes } => {
            if !yes {
                return Err(CliError::ResetNotConfirmed.into());
            }
            service.reset().await?;
            Ok(())
        }
    }
}

fn emit(value: &impl Serialize) -> Result<(), BoxError> {
    let rendered = serde_json::to_string_pretty(value)?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    Ok(())
}
