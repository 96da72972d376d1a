//! Adapter implementations for the capability enumeration port.

pub mod memory;
