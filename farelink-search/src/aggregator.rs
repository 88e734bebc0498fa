use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinSet;
use tokio::time::{timeout_at, Instant};
use tracing::{debug, info, warn};

use farelink_core::flight::FlightOption;
use farelink_core::provider::{FlightProvider, ProviderError};
use farelink_core::search::{SearchMetadata, SearchRequest, SearchResponse};

/// Shared wall-clock budget for one fan-out across all providers.
pub const SEARCH_BUDGET: Duration = Duration::from_secs(2);

/// Attempts per provider within the budget. There is no backoff between
/// attempts; the bounded count plus the tight budget is the throttle.
pub const MAX_ATTEMPTS: u32 = 3;

/// Fans a search out to every configured provider concurrently under one
/// deadline and merges whatever succeeded.
pub struct Aggregator {
    providers: Vec<Arc<dyn FlightProvider>>,
    budget: Duration,
    max_attempts: u32,
}

impl Aggregator {
    pub fn new(providers: Vec<Arc<dyn FlightProvider>>) -> Self {
        Self {
            providers,
            budget: SEARCH_BUDGET,
            max_attempts: MAX_ATTEMPTS,
        }
    }

    pub fn with_budget(mut self, budget: Duration) -> Self {
        self.budget = budget;
        self
    }

    /// Never fails: a provider error only lowers the success count, and all
    /// providers failing still produces an empty success response.
    pub async fn search_flights(&self, request: &SearchRequest) -> SearchResponse {
        let deadline = Instant::now() + self.budget;
        let request = Arc::new(request.clone());

        let mut tasks = JoinSet::new();
        for (slot, provider) in self.providers.iter().enumerate() {
            let provider = Arc::clone(provider);
            let request = Arc::clone(&request);
            let max_attempts = self.max_attempts;
            tasks.spawn(async move {
                (
                    slot,
                    query_provider(provider, request, deadline, max_attempts).await,
                )
            });
        }

        // One slot per task; consolidation happens only after every task
        // has terminated, so nothing shares a mutable aggregate.
        let mut outcomes: Vec<Option<Result<Vec<FlightOption>, ProviderError>>> =
            (0..self.providers.len()).map(|_| None).collect();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((slot, outcome)) => outcomes[slot] = Some(outcome),
                Err(err) => warn!("provider task aborted: {}", err),
            }
        }

        let mut metadata = SearchMetadata::default();
        let mut flights = Vec::new();
        for (provider, outcome) in self.providers.iter().zip(outcomes) {
            metadata.providers_queried += 1;
            match outcome {
                Some(Ok(list)) => {
                    info!(
                        "provider {} succeeded with {} flights",
                        provider.name(),
                        list.len()
                    );
                    metadata.providers_succeeded += 1;
                    metadata.total_results += list.len();
                    flights.extend(list);
                }
                Some(Err(err)) => {
                    warn!("provider {} failed: {}", provider.name(), err);
                    metadata.providers_failed += 1;
                }
                None => {
                    metadata.providers_failed += 1;
                }
            }
        }

        SearchResponse {
            search_criteria: (*request).clone(),
            metadata,
            flights,
        }
    }
}

/// One provider's retry loop. The deadline is checked before each attempt,
/// and each attempt runs under the shared deadline so a straggler reports
/// promptly instead of completing late.
async fn query_provider(
    provider: Arc<dyn FlightProvider>,
    request: Arc<SearchRequest>,
    deadline: Instant,
    max_attempts: u32,
) -> Result<Vec<FlightOption>, ProviderError> {
    let mut last_err = ProviderError::DeadlineExceeded;
    for attempt in 1..=max_attempts {
        if Instant::now() >= deadline {
            return Err(ProviderError::DeadlineExceeded);
        }

        match timeout_at(deadline, provider.search_flights(&request)).await {
            Ok(Ok(flights)) => return Ok(flights),
            Ok(Err(err)) => {
                debug!(
                    "provider {} attempt {}/{} failed: {}",
                    provider.name(),
                    attempt,
                    max_attempts,
                    err
                );
                let retryable = err.is_retryable();
                last_err = err;
                if !retryable {
                    break;
                }
            }
            Err(_) => return Err(ProviderError::DeadlineExceeded),
        }
    }
    Err(last_err)
}
