use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use farelink_core::search::{SearchRequest, SearchResponse};
use farelink_core::CoreError;
use farelink_store::SearchCache;

use crate::aggregator::Aggregator;
use crate::pipeline;

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("invalid search request: {0}")]
    InvalidRequest(String),
    #[error("search failed: {0}")]
    Internal(String),
}

impl From<CoreError> for SearchError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ValidationError(msg) => SearchError::InvalidRequest(msg),
            CoreError::InternalError(msg) => SearchError::Internal(msg),
        }
    }
}

/// Orchestrates one search: fingerprint the request, consult the cache,
/// and on a miss aggregate, filter, score, sort, and write back.
pub struct SearchService {
    aggregator: Aggregator,
    cache: Option<Arc<dyn SearchCache>>,
}

impl SearchService {
    /// `cache` is `None` when response caching is disabled; every request
    /// then takes the computation path.
    pub fn new(aggregator: Aggregator, cache: Option<Arc<dyn SearchCache>>) -> Self {
        Self { aggregator, cache }
    }

    pub async fn search_flights(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchResponse, SearchError> {
        let started = Instant::now();
        request.validate()?;

        let cache_key = request.cache_key();
        if let Some(cache) = &self.cache {
            if let Some(mut cached) = cache.get(&cache_key) {
                cached.metadata.cache_hit = true;
                // Retrieval cost only, not the original computation time.
                cached.metadata.search_time_ms = started.elapsed().as_millis() as u64;
                return Ok(cached);
            }
            debug!("cache miss for {}", cache_key);
        }

        let mut response = self.aggregator.search_flights(request).await;

        response.flights = pipeline::filter_flights(response.flights, &request.filters);
        pipeline::score_flights(&mut response.flights);
        pipeline::sort_flights(&mut response.flights, request.sort);

        response.metadata.total_results = response.flights.len();
        response.metadata.search_time_ms = started.elapsed().as_millis() as u64;
        response.metadata.cache_hit = false;
        response.search_criteria = request.clone();

        if let Some(cache) = &self.cache {
            cache.set(&cache_key, response.clone());
        }

        Ok(response)
    }
}
