//! In-memory adapter for the workload store port.

mod store;

pub use store::InMemoryWorkloadStore;
