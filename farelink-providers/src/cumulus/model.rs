use chrono::{DateTime, FixedOffset, Utc};
use serde::Deserialize;

use farelink_core::flight::{
    AircraftInfo, AirlineInfo, AirportInfo, AmenityInfo, BaggageInfo, DurationInfo, FlightOption,
    PriceInfo,
};
use farelink_core::format::{format_duration_minutes, format_money};

pub const PROVIDER_NAME: &str = "Cumulus Air";

#[derive(Debug, Deserialize)]
pub struct Response {
    pub status: String,
    #[serde(default)]
    pub flights: Vec<WireFlight>,
}

#[derive(Debug, Deserialize)]
pub struct Endpoint {
    pub airport: String,
    pub city: String,
    pub time: DateTime<FixedOffset>,
    pub terminal: String,
}

#[derive(Debug, Deserialize)]
pub struct Price {
    pub amount: i64,
    pub currency: String,
}

#[derive(Debug, Deserialize)]
pub struct Baggage {
    pub carry_on: u32,
    pub checked: u32,
}

/// Cumulus nests its endpoints and ships baggage allowances as kilogram
/// counts and amenities as plain strings.
#[derive(Debug, Deserialize)]
pub struct WireFlight {
    pub flight_id: String,
    pub airline: String,
    pub airline_code: String,
    pub departure: Endpoint,
    pub arrival: Endpoint,
    pub duration_minutes: i64,
    pub stops: u32,
    pub aircraft: String,
    pub price: Price,
    pub available_seats: u32,
    pub fare_class: String,
    pub baggage: Baggage,
    #[serde(default)]
    pub amenities: Vec<String>,
}

impl WireFlight {
    pub fn to_flight_option(&self) -> FlightOption {
        FlightOption {
            id: format!("{}_{}", self.flight_id, self.airline),
            provider: self.airline.clone(),
            airline: AirlineInfo {
                name: self.airline.clone(),
                code: self.airline_code.clone(),
            },
            flight_number: self.flight_id.clone(),
            departure: AirportInfo {
                airport: self.departure.airport.clone(),
                city: self.departure.city.clone(),
                datetime: self.departure.time.with_timezone(&Utc),
                timestamp: self.departure.time.timestamp(),
            },
            arrival: AirportInfo {
                airport: self.arrival.airport.clone(),
                city: self.arrival.city.clone(),
                datetime: self.arrival.time.with_timezone(&Utc),
                timestamp: self.arrival.time.timestamp(),
            },
            duration: DurationInfo {
                total_minutes: self.duration_minutes,
                formatted: format_duration_minutes(self.duration_minutes),
            },
            stops: self.stops,
            price: PriceInfo {
                amount: self.price.amount,
                currency: self.price.currency.clone(),
                display: format_money(self.price.amount, &self.price.currency),
            },
            available_seats: self.available_seats,
            cabin_class: self.fare_class.clone(),
            aircraft: Some(AircraftInfo {
                model: self.aircraft.clone(),
                code: String::new(),
            }),
            amenities: self
                .amenities
                .iter()
                .map(|name| AmenityInfo {
                    kind: name.clone(),
                    description: format!("{} included", name),
                })
                .collect(),
            baggage: BaggageInfo {
                carry_on: format!("{}kg cabin", self.baggage.carry_on),
                checked: format!("{}kg checked", self.baggage.checked),
            },
            best_value_score: 0.0,
        }
    }
}
