//! Adapter implementations for host inspection ports.

pub mod memory;
