//! Adapter implementations for the workload store port.

pub mod memory;
pub mod postgres;
