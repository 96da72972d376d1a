//! Event text aggregation service.

mod aggregator;

pub use aggregator::EventTextAggregator;
