//! Host API level gating for capability enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// First host API level that exposes capability enumeration.
pub const DEFAULT_MINIMUM_API_LEVEL: u32 = 5;

/// API level reported by the running host.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct HostApiLevel(u32);

impl HostApiLevel {
    /// Wraps a raw API level.
    #[must_use]
    pub const fn new(level: u32) -> Self {
        Self(level)
    }

    /// Returns the raw API level.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for HostApiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Minimum host API level required before capabilities are enumerated.
///
/// Hosts below the gate predate the enumeration API, so every query on them
/// answers `false` without touching the enumerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilityGate {
    minimum_api_level: HostApiLevel,
}

impl CapabilityGate {
    /// Creates a gate that opens at `minimum_api_level`.
    #[must_use]
    pub const fn new(minimum_api_level: HostApiLevel) -> Self {
        Self { minimum_api_level }
    }

    /// Returns the lowest API level the gate admits.
    #[must_use]
    pub const fn minimum_api_level(self) -> HostApiLevel {
        self.minimum_api_level
    }

    /// Returns whether a host at `level` may enumerate capabilities.
    #[must_use]
    pub const fn permits(self, level: HostApiLevel) -> bool {
        level.0 >= self.minimum_api_level.0
    }
}

impl Default for CapabilityGate {
    fn default() -> Self {
        Self::new(HostApiLevel::new(DEFAULT_MINIMUM_API_LEVEL))
    }
}
