//! In-memory string resource and type resolver adapters.

mod strings;
mod types;

pub use strings::InMemoryStringResources;
pub use types::InMemoryTypeResolver;
