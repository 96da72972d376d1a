//! Port contracts for event text aggregation.

mod string_resources;
mod type_resolver;

pub use string_resources::{StringResourceError, StringResourceProvider, StringResourceResult};
pub use type_resolver::{TypeResolver, TypeResolverError, TypeResolverResult};
