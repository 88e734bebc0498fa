//! Simulated upstream flight providers.
//!
//! Each adapter speaks its carrier's own wire dialect, applies its own
//! rate limit, and normalizes matches into the shared flight record.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use farelink_core::flight::FlightOption;
use farelink_core::provider::FlightProvider;
use farelink_core::search::SearchRequest;

pub mod aerolink;
pub mod bluewing;
pub mod cumulus;
pub mod meridian;
pub mod ratelimit;
pub mod simulation;

pub use ratelimit::RateLimiter;
pub use simulation::SimulationProfile;

/// Rate applied to every simulated upstream: 100 calls per second, burst 100.
pub(crate) fn default_rate_limiter() -> RateLimiter {
    RateLimiter::new(100, Duration::from_secs(1))
}

/// Match criteria every adapter applies before normalization is complete:
/// exact route, departure date in the flight's local time, enough seats,
/// case-insensitive cabin class.
pub(crate) fn matches_request(
    request: &SearchRequest,
    local_departure_date: NaiveDate,
    flight: &FlightOption,
) -> bool {
    flight.departure.airport == request.origin
        && flight.arrival.airport == request.destination
        && local_departure_date == request.departure_date
        && flight.available_seats >= request.passengers
        && flight.cabin_class.eq_ignore_ascii_case(&request.cabin_class)
}

/// All configured providers in their fixed fan-out order.
pub fn default_registry(data_dir: &Path) -> Vec<Arc<dyn FlightProvider>> {
    vec![
        Arc::new(aerolink::AeroLinkProvider::new(data_dir)),
        Arc::new(bluewing::BlueWingProvider::new(data_dir)),
        Arc::new(cumulus::CumulusProvider::new(data_dir)),
        Arc::new(meridian::MeridianProvider::new(data_dir)),
    ]
}

#[cfg(test)]
pub(crate) mod testutil {
    use chrono::NaiveDate;
    use farelink_core::consts::{SortKey, SortOrder};
    use farelink_core::search::{SearchRequest, SortOption};
    use std::path::PathBuf;

    pub fn fixtures_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
    }

    pub fn request(origin: &str, destination: &str, passengers: u32) -> SearchRequest {
        SearchRequest {
            origin: origin.to_string(),
            destination: destination.to_string(),
            departure_date: NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
            return_date: None,
            passengers,
            cabin_class: "Economy".to_string(),
            filters: vec![],
            sort: SortOption {
                key: SortKey::BestValue,
                order: SortOrder::Asc,
            },
        }
    }
}
