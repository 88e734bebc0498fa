use chrono::{DateTime, FixedOffset, Utc};
use serde::Deserialize;

use farelink_core::consts::airport_city;
use farelink_core::flight::{
    AircraftInfo, AirlineInfo, AirportInfo, BaggageInfo, DurationInfo, FlightOption, PriceInfo,
};
use farelink_core::format::format_money;

pub const PROVIDER_NAME: &str = "BlueWing";

#[derive(Debug, Deserialize)]
pub struct Response {
    pub code: u16,
    pub message: String,
    #[serde(default)]
    pub results: Vec<WireFlight>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fare {
    pub base_price: i64,
    pub taxes: i64,
    pub total_price: i64,
    pub currency_code: String,
    pub class: String,
}

/// BlueWing speaks camelCase with RFC3339 datetimes and single-letter
/// booking-class codes; trip duration is derived from the timestamps.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireFlight {
    pub flight_number: String,
    pub airline_name: String,
    pub airline_iata: String,
    pub origin: String,
    pub destination: String,
    pub departure_date_time: DateTime<FixedOffset>,
    pub arrival_date_time: DateTime<FixedOffset>,
    pub travel_time: String,
    pub number_of_stops: u32,
    pub fare: Fare,
    pub seats_available: u32,
    pub aircraft_model: String,
    pub baggage_info: String,
}

impl WireFlight {
    pub fn to_flight_option(&self) -> FlightOption {
        let total_minutes = (self.arrival_date_time.with_timezone(&Utc)
            - self.departure_date_time.with_timezone(&Utc))
        .num_minutes();
        let mut baggage = self.baggage_info.splitn(2, '/');
        let carry_on = baggage.next().unwrap_or("").trim().to_string();
        let checked = baggage.next().unwrap_or("").trim().to_string();

        FlightOption {
            id: format!("{}_{}", self.flight_number, self.airline_name),
            provider: self.airline_name.clone(),
            airline: AirlineInfo {
                name: self.airline_name.clone(),
                code: self.airline_iata.clone(),
            },
            flight_number: self.flight_number.clone(),
            departure: AirportInfo {
                airport: self.origin.clone(),
                city: airport_city(&self.origin).unwrap_or_default().to_string(),
                datetime: self.departure_date_time.with_timezone(&Utc),
                timestamp: self.departure_date_time.timestamp(),
            },
            arrival: AirportInfo {
                airport: self.destination.clone(),
                city: airport_city(&self.destination).unwrap_or_default().to_string(),
                datetime: self.arrival_date_time.with_timezone(&Utc),
                timestamp: self.arrival_date_time.timestamp(),
            },
            duration: DurationInfo {
                total_minutes,
                formatted: self.travel_time.clone(),
            },
            stops: self.number_of_stops,
            price: PriceInfo {
                amount: self.fare.total_price,
                currency: self.fare.currency_code.clone(),
                display: format_money(self.fare.total_price, &self.fare.currency_code),
            },
            available_seats: self.seats_available,
            cabin_class: cabin_class_for(&self.fare.class).to_string(),
            aircraft: Some(AircraftInfo {
                model: self.aircraft_model.clone(),
                code: String::new(),
            }),
            amenities: vec![],
            baggage: BaggageInfo { carry_on, checked },
            best_value_score: 0.0,
        }
    }
}

fn cabin_class_for(class_code: &str) -> &'static str {
    match class_code {
        "Y" => "Economy",
        "J" => "Business",
        "F" => "First",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_codes_map_to_cabin_names() {
        assert_eq!(cabin_class_for("Y"), "Economy");
        assert_eq!(cabin_class_for("J"), "Business");
        assert_eq!(cabin_class_for("Q"), "");
    }
}
