//! Accessibility support: host capability queries and event text aggregation.
//!
//! This crate holds the host-facing helpers a screen reader needs before it
//! can speak an event: whether the host declares an optional capability, how
//! to turn the text fragments of an event into a single utterance, and which
//! package versions and foreground activity the host reports.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Plain values and pure helpers with no host dependencies
//! - **Ports**: Trait interfaces for the host services the crate consumes
//! - **Adapters**: In-memory implementations of the ports
//! - **Services**: Caching query services built on the ports
//!
//! # Modules
//!
//! - [`capability`]: Memoized host capability queries
//! - [`event_text`]: Event text aggregation with toggle state de-duplication
//! - [`host`]: Package version and foreground activity lookups
//! - [`config`]: Host description loaded from JSON

pub mod capability;
pub mod config;
pub mod event_text;
pub mod host;
