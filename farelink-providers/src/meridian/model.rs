use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;

use farelink_core::flight::{
    AircraftInfo, AirlineInfo, AirportInfo, AmenityInfo, BaggageInfo, DurationInfo, FlightOption,
    PriceInfo,
};
use farelink_core::format::{format_duration_minutes, format_money};

pub const PROVIDER_NAME: &str = "Meridian Jet";

const SCHEDULE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Deserialize)]
pub struct Response {
    pub success: bool,
    pub data: Data,
}

#[derive(Debug, Deserialize)]
pub struct Data {
    #[serde(default)]
    pub available_flights: Vec<WireFlight>,
}

#[derive(Debug, Deserialize)]
pub struct Carrier {
    pub name: String,
    pub iata: String,
}

#[derive(Debug, Deserialize)]
pub struct Airport {
    pub code: String,
    pub name: String,
    pub city: String,
}

#[derive(Debug, Deserialize)]
pub struct Route {
    pub from: Airport,
    pub to: Airport,
}

/// Meridian ships naive local datetimes plus a separate UTC-offset string
/// per endpoint.
#[derive(Debug, Deserialize)]
pub struct Schedule {
    pub departure: String,
    pub departure_offset: String,
    pub arrival: String,
    pub arrival_offset: String,
}

#[derive(Debug, Deserialize)]
pub struct Pricing {
    pub total: i64,
    pub currency: String,
    pub fare_type: String,
}

#[derive(Debug, Deserialize)]
pub struct BaggageAllowance {
    pub cabin: String,
    pub hold: String,
}

#[derive(Debug, Deserialize)]
pub struct Services {
    pub wifi_available: bool,
    pub meals_included: bool,
    pub baggage_allowance: BaggageAllowance,
}

#[derive(Debug, Deserialize)]
pub struct WireFlight {
    pub id: String,
    pub carrier: Carrier,
    pub route: Route,
    pub schedule: Schedule,
    pub flight_time: i64,
    pub pricing: Pricing,
    pub seats_left: u32,
    pub plane_type: String,
    pub services: Services,
    #[serde(default)]
    pub stop_count: u32,
}

impl WireFlight {
    /// Normalizes the record, returning the departure date in the flight's
    /// local time alongside it (date matching happens in local time).
    pub fn to_flight_option(&self) -> Result<(FlightOption, NaiveDate), String> {
        let depart = parse_local(&self.schedule.departure, &self.schedule.departure_offset)?;
        let arrive = parse_local(&self.schedule.arrival, &self.schedule.arrival_offset)?;
        let local_departure_date = depart.date_naive();

        let mut amenities = Vec::new();
        if self.services.wifi_available {
            amenities.push(AmenityInfo {
                kind: "WiFi".to_string(),
                description: "WiFi available".to_string(),
            });
        }
        if self.services.meals_included {
            amenities.push(AmenityInfo {
                kind: "Meal".to_string(),
                description: "Meal included".to_string(),
            });
        }

        let flight = FlightOption {
            id: format!("{}_{}", self.id, self.carrier.name),
            provider: self.carrier.name.clone(),
            airline: AirlineInfo {
                name: self.carrier.name.clone(),
                code: self.carrier.iata.clone(),
            },
            flight_number: self.id.clone(),
            departure: AirportInfo {
                airport: self.route.from.code.clone(),
                city: self.route.from.city.clone(),
                datetime: depart.with_timezone(&Utc),
                timestamp: depart.timestamp(),
            },
            arrival: AirportInfo {
                airport: self.route.to.code.clone(),
                city: self.route.to.city.clone(),
                datetime: arrive.with_timezone(&Utc),
                timestamp: arrive.timestamp(),
            },
            duration: DurationInfo {
                total_minutes: self.flight_time,
                formatted: format_duration_minutes(self.flight_time),
            },
            stops: self.stop_count,
            price: PriceInfo {
                amount: self.pricing.total,
                currency: self.pricing.currency.clone(),
                display: format_money(self.pricing.total, &self.pricing.currency),
            },
            available_seats: self.seats_left,
            cabin_class: self.pricing.fare_type.clone(),
            aircraft: Some(AircraftInfo {
                model: self.plane_type.clone(),
                code: String::new(),
            }),
            amenities,
            baggage: BaggageInfo {
                carry_on: self.services.baggage_allowance.cabin.clone(),
                checked: self.services.baggage_allowance.hold.clone(),
            },
            best_value_score: 0.0,
        };

        Ok((flight, local_departure_date))
    }
}

fn parse_local(raw: &str, offset: &str) -> Result<DateTime<FixedOffset>, String> {
    let naive = NaiveDateTime::parse_from_str(raw, SCHEDULE_FORMAT)
        .map_err(|err| format!("bad schedule datetime {raw}: {err}"))?;
    let offset = parse_utc_offset(offset).ok_or_else(|| format!("bad utc offset {offset}"))?;
    offset
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| format!("unmappable local datetime {raw}"))
}

fn parse_utc_offset(raw: &str) -> Option<FixedOffset> {
    let (east, rest) = if let Some(rest) = raw.strip_prefix('+') {
        (true, rest)
    } else if let Some(rest) = raw.strip_prefix('-') {
        (false, rest)
    } else {
        return None;
    };

    let (hours, minutes) = rest.split_once(':')?;
    let hours: i32 = hours.parse().ok()?;
    let minutes: i32 = minutes.parse().ok()?;
    let seconds = hours * 3600 + minutes * 60;

    if east {
        FixedOffset::east_opt(seconds)
    } else {
        FixedOffset::west_opt(seconds)
    }
}
