//! Query services for host capabilities.

mod cache;

pub use cache::CapabilityCache;
