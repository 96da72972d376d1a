//! Port contracts for capability enumeration.

mod enumerator;

#[cfg(test)]
pub use enumerator::MockCapabilityEnumerator;
pub use enumerator::{
    CapabilityEnumerationError, CapabilityEnumerationResult, CapabilityEnumerator,
};
