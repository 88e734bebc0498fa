use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};

use farelink_core::flight::{
    AirlineInfo, AirportInfo, BaggageInfo, DurationInfo, FlightOption, PriceInfo,
};
use farelink_core::provider::{FlightProvider, ProviderError, ProviderResult};
use farelink_core::search::{SearchRequest, SortOption};

pub(crate) fn request() -> SearchRequest {
    SearchRequest {
        origin: "CGK".to_string(),
        destination: "DPS".to_string(),
        departure_date: chrono::NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
        return_date: None,
        passengers: 1,
        cabin_class: "Economy".to_string(),
        filters: vec![],
        sort: SortOption::default(),
    }
}

pub(crate) fn flight(id: &str, provider: &str, amount: i64, minutes: i64) -> FlightOption {
    let depart = Utc.with_ymd_and_hms(2026, 3, 15, 8, 0, 0).unwrap();
    let arrive = depart + chrono::Duration::minutes(minutes);
    FlightOption {
        id: id.to_string(),
        provider: provider.to_string(),
        airline: AirlineInfo {
            name: provider.to_string(),
            code: provider.chars().take(2).collect::<String>().to_uppercase(),
        },
        flight_number: id.to_uppercase(),
        departure: AirportInfo {
            airport: "CGK".to_string(),
            city: "Jakarta".to_string(),
            datetime: depart,
            timestamp: depart.timestamp(),
        },
        arrival: AirportInfo {
            airport: "DPS".to_string(),
            city: "Denpasar".to_string(),
            datetime: arrive,
            timestamp: arrive.timestamp(),
        },
        duration: DurationInfo {
            total_minutes: minutes,
            formatted: farelink_core::format::format_duration_minutes(minutes),
        },
        stops: 0,
        price: PriceInfo {
            amount,
            currency: "IDR".to_string(),
            display: farelink_core::format::format_money(amount, "IDR"),
        },
        available_seats: 10,
        cabin_class: "Economy".to_string(),
        aircraft: None,
        amenities: vec![],
        baggage: BaggageInfo {
            carry_on: "7kg cabin".to_string(),
            checked: "20kg checked".to_string(),
        },
        best_value_score: 0.0,
    }
}

enum Behavior {
    Succeed(Vec<FlightOption>),
    Fail,
    FailTimes(u32, Vec<FlightOption>),
    Deadline,
    Hang(Duration),
    Sleep(Duration, Vec<FlightOption>),
}

/// Deterministic in-memory provider for exercising the orchestrator.
pub(crate) struct StubProvider {
    name: &'static str,
    behavior: Behavior,
    attempts: AtomicU32,
}

impl StubProvider {
    fn build(name: &'static str, behavior: Behavior) -> Arc<Self> {
        Arc::new(Self {
            name,
            behavior,
            attempts: AtomicU32::new(0),
        })
    }

    pub fn succeed(name: &'static str, flights: Vec<FlightOption>) -> Arc<Self> {
        Self::build(name, Behavior::Succeed(flights))
    }

    pub fn fail(name: &'static str) -> Arc<Self> {
        Self::build(name, Behavior::Fail)
    }

    pub fn fail_times(name: &'static str, failures: u32, flights: Vec<FlightOption>) -> Arc<Self> {
        Self::build(name, Behavior::FailTimes(failures, flights))
    }

    pub fn deadline(name: &'static str) -> Arc<Self> {
        Self::build(name, Behavior::Deadline)
    }

    pub fn hang(name: &'static str, wait: Duration) -> Arc<Self> {
        Self::build(name, Behavior::Hang(wait))
    }

    pub fn sleep_then_succeed(
        name: &'static str,
        wait: Duration,
        flights: Vec<FlightOption>,
    ) -> Arc<Self> {
        Self::build(name, Behavior::Sleep(wait, flights))
    }

    pub fn attempts(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FlightProvider for StubProvider {
    fn name(&self) -> &str {
        self.name
    }

    async fn search_flights(&self, _request: &SearchRequest) -> ProviderResult<Vec<FlightOption>> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
        match &self.behavior {
            Behavior::Succeed(flights) => Ok(flights.clone()),
            Behavior::Fail => Err(ProviderError::Internal {
                provider: self.name.to_string(),
            }),
            Behavior::FailTimes(failures, flights) => {
                if attempt <= *failures {
                    Err(ProviderError::Internal {
                        provider: self.name.to_string(),
                    })
                } else {
                    Ok(flights.clone())
                }
            }
            Behavior::Deadline => Err(ProviderError::DeadlineExceeded),
            Behavior::Hang(wait) => {
                tokio::time::sleep(*wait).await;
                Ok(vec![])
            }
            Behavior::Sleep(wait, flights) => {
                tokio::time::sleep(*wait).await;
                Ok(flights.clone())
            }
        }
    }
}
