//! Task assignment and workload tracking.
//!
//! Employees carry a running workload against a fixed daily capacity; each
//! new task goes to the least-loaded employee who can fit it today, falling
//! back to whoever frees up first. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Assignment policy and orchestration in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
