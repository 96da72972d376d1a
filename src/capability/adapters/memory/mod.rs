//! In-memory capability enumerators.

mod manifest;

pub use manifest::StaticCapabilityManifest;
