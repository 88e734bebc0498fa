//! Aggregation engine: concurrent provider fan-out, the filter/score/sort
//! pipeline, and the cache-aside search service.

pub mod aggregator;
pub mod pipeline;
pub mod service;

pub use aggregator::Aggregator;
pub use service::{SearchError, SearchService};

#[cfg(test)]
pub(crate) mod testutil;
