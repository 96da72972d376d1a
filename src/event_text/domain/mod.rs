//! Domain model for event text aggregation.
//!
//! Fragments are opaque text; the only structure the domain imposes is
//! their order, which is the order of the aggregated output.

mod control;
mod fragments;
mod labels;
mod source;

pub use control::{ControlClass, DEFAULT_TOGGLE_CONTROL_CLASS};
pub use fragments::{FRAGMENT_SEPARATOR, find_state_fragment_index, join_fragments};
pub use labels::{StateLabelPair, StringResourceKey};
pub use source::EventSource;
