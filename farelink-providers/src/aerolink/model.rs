use chrono::{DateTime, FixedOffset, Utc};
use serde::Deserialize;

use farelink_core::consts::airport_city;
use farelink_core::flight::{
    AirlineInfo, AirportInfo, BaggageInfo, DurationInfo, FlightOption, PriceInfo,
};
use farelink_core::format::{format_duration_minutes, format_money};

pub const PROVIDER_NAME: &str = "AeroLink";

#[derive(Debug, Deserialize)]
pub struct Response {
    pub status: String,
    #[serde(default)]
    pub flights: Vec<WireFlight>,
}

#[derive(Debug, Deserialize)]
pub struct StopInfo {
    pub airport: String,
}

/// AeroLink's flat search payload: fractional duration hours, IDR-only
/// pricing, baggage as one comma-separated note.
#[derive(Debug, Deserialize)]
pub struct WireFlight {
    pub flight_code: String,
    pub airline: String,
    pub from_airport: String,
    pub to_airport: String,
    pub depart_time: DateTime<FixedOffset>,
    pub arrive_time: DateTime<FixedOffset>,
    pub duration_hours: f64,
    pub price_idr: i64,
    pub seats: u32,
    pub cabin_class: String,
    pub baggage_note: String,
    #[serde(default)]
    pub stops: Vec<StopInfo>,
}

impl WireFlight {
    pub fn to_flight_option(&self) -> FlightOption {
        let total_minutes = (self.duration_hours * 60.0).round() as i64;
        let mut baggage = self.baggage_note.splitn(2, ',');
        let carry_on = baggage.next().unwrap_or("").trim().to_string();
        let checked = baggage.next().unwrap_or("").trim().to_string();

        FlightOption {
            id: format!("{}_{}", self.flight_code, self.airline),
            provider: self.airline.clone(),
            airline: AirlineInfo {
                name: self.airline.clone(),
                code: airline_code(&self.flight_code),
            },
            flight_number: self.flight_code.clone(),
            departure: AirportInfo {
                airport: self.from_airport.clone(),
                city: airport_city(&self.from_airport).unwrap_or_default().to_string(),
                datetime: self.depart_time.with_timezone(&Utc),
                timestamp: self.depart_time.timestamp(),
            },
            arrival: AirportInfo {
                airport: self.to_airport.clone(),
                city: airport_city(&self.to_airport).unwrap_or_default().to_string(),
                datetime: self.arrive_time.with_timezone(&Utc),
                timestamp: self.arrive_time.timestamp(),
            },
            duration: DurationInfo {
                total_minutes,
                formatted: format_duration_minutes(total_minutes),
            },
            stops: self.stops.len() as u32,
            price: PriceInfo {
                amount: self.price_idr,
                currency: "IDR".to_string(),
                display: format_money(self.price_idr, "IDR"),
            },
            available_seats: self.seats,
            cabin_class: self.cabin_class.clone(),
            aircraft: None,
            amenities: vec![],
            baggage: BaggageInfo { carry_on, checked },
            best_value_score: 0.0,
        }
    }
}

fn airline_code(flight_code: &str) -> String {
    flight_code
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect()
}
