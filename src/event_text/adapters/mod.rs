//! Adapter implementations for event text aggregation ports.

pub mod memory;
