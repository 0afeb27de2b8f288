//! Port contracts for workload tracking.
//!
//! Ports define infrastructure-agnostic interfaces used by the roster service.

pub mod store;

#[cfg(test)]
pub use store::MockWorkloadStore;
pub use store::{TasksByEmployee, WorkloadStore, WorkloadStoreError, WorkloadStoreResult};
