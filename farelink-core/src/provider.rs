use async_trait::async_trait;

use crate::flight::FlightOption;
use crate::search::SearchRequest;

/// Failure classification shared by every upstream adapter. The aggregator
/// retries anything except a blown deadline (the shared budget is gone).
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("{provider} rate limit exceeded")]
    RateLimited { provider: String },
    #[error("{provider} returned no usable flight data")]
    Unavailable { provider: String },
    #[error("{provider} response could not be decoded: {detail}")]
    Malformed { provider: String, detail: String },
    #[error("{provider} internal error")]
    Internal { provider: String },
    #[error("search deadline exceeded")]
    DeadlineExceeded,
}

impl ProviderError {
    pub fn is_retryable(&self) -> bool {
        !matches!(self, ProviderError::DeadlineExceeded)
    }
}

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Common search interface every upstream flight source implements.
///
/// Adapters own their rate limiting and normalize provider-specific wire
/// data into [`FlightOption`] records; malformed or missing backing data
/// surfaces as an error, never as an empty success.
#[async_trait]
pub trait FlightProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn search_flights(&self, request: &SearchRequest)
        -> ProviderResult<Vec<FlightOption>>;
}
