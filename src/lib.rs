//! Roster: task assignment and workload tracking.
//!
//! This crate assigns incoming tasks to employees and tracks each
//! employee's workload against a fixed daily capacity of nine hours.
//!
//! # Architecture
//!
//! Roster follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`workload`]: Employees, tasks, the assignment policy, and the roster
//!   service
//! - [`config`]: Environment-driven process configuration
//! - [`telemetry`]: `tracing` subscriber installation

pub mod config;
pub mod telemetry;
pub mod workload;
