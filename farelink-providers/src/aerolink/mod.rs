use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::error;

use farelink_core::flight::FlightOption;
use farelink_core::provider::{FlightProvider, ProviderError, ProviderResult};
use farelink_core::search::SearchRequest;

use crate::ratelimit::RateLimiter;
use crate::simulation::SimulationProfile;

pub mod model;

const DATASET_FILE: &str = "aerolink_search_response.json";
const DEFAULT_SIMULATION: SimulationProfile = SimulationProfile::new(50, 150, 0.10);

pub struct AeroLinkProvider {
    data_dir: PathBuf,
    limiter: RateLimiter,
    simulation: SimulationProfile,
}

impl AeroLinkProvider {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self::with_simulation(data_dir, DEFAULT_SIMULATION)
    }

    pub fn with_simulation(data_dir: impl AsRef<Path>, simulation: SimulationProfile) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            limiter: crate::default_rate_limiter(),
            simulation,
        }
    }

    async fn call_search(&self, request: &SearchRequest) -> ProviderResult<Vec<FlightOption>> {
        let path = self.data_dir.join(DATASET_FILE);
        let data = tokio::fs::read_to_string(&path).await.map_err(|err| {
            error!("{} dataset unreadable at {}: {}", model::PROVIDER_NAME, path.display(), err);
            ProviderError::Unavailable {
                provider: model::PROVIDER_NAME.to_string(),
            }
        })?;

        let raw: model::Response =
            serde_json::from_str(&data).map_err(|err| ProviderError::Malformed {
                provider: model::PROVIDER_NAME.to_string(),
                detail: err.to_string(),
            })?;

        if raw.status != "ok" {
            return Err(ProviderError::Unavailable {
                provider: model::PROVIDER_NAME.to_string(),
            });
        }

        let mut flights = Vec::new();
        for wire in &raw.flights {
            let local_departure_date = wire.depart_time.date_naive();
            let flight = wire.to_flight_option();
            if crate::matches_request(request, local_departure_date, &flight) {
                flights.push(flight);
            }
        }
        Ok(flights)
    }
}

#[async_trait]
impl FlightProvider for AeroLinkProvider {
    fn name(&self) -> &str {
        model::PROVIDER_NAME
    }

    async fn search_flights(&self, request: &SearchRequest) -> ProviderResult<Vec<FlightOption>> {
        if !self.limiter.allow() {
            return Err(ProviderError::RateLimited {
                provider: model::PROVIDER_NAME.to_string(),
            });
        }

        self.simulation.apply_latency().await;

        if self.simulation.roll_failure() {
            return Err(ProviderError::Internal {
                provider: model::PROVIDER_NAME.to_string(),
            });
        }

        self.call_search(request).await
    }
}
