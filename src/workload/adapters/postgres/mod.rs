//! `PostgreSQL` adapters for workload persistence.

pub(crate) mod mapping;
pub(crate) mod models;
pub(crate) mod schema;
pub(crate) mod store;

pub use store::{PostgresWorkloadStore, SCHEMA_SQL, WorkloadPgPool};
