//! Domain model for host capability queries.

mod descriptor;
mod gate;

pub use descriptor::CapabilityDescriptor;
pub use gate::{CapabilityGate, DEFAULT_MINIMUM_API_LEVEL, HostApiLevel};
