//! Host capability queries backed by a memoized capability set.
//!
//! The cache answers "does the host support capability X?" from a set that
//! is filled by a single successful enumeration. Enumeration failures never
//! escape; they degrade to "unsupported" and leave the cache ready to retry.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Query services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
