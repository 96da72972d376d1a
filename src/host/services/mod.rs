//! Query services for host inspection.

mod inspection;

pub use inspection::HostInspectionService;
