//! Event text aggregation for spoken feedback.
//!
//! An accessibility event carries an ordered list of text fragments. The
//! aggregator joins them with single spaces, dropping the first fragment
//! that repeats the checked/not-checked state of a toggle control, since
//! that state is announced separately from the control's checked attribute.
//! The module follows hexagonal architecture:
//!
//! - Domain types and pure helpers in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The aggregation service in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
