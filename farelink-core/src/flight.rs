use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirlineInfo {
    pub name: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportInfo {
    pub airport: String,
    pub city: String,
    pub datetime: DateTime<Utc>,
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationInfo {
    pub total_minutes: i64,
    pub formatted: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceInfo {
    pub amount: i64,
    pub currency: String,
    pub display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaggageInfo {
    pub carry_on: String,
    pub checked: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftInfo {
    pub model: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmenityInfo {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

/// Provider-agnostic flight result. Every adapter normalizes its own wire
/// shape into this record before it enters the aggregation pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightOption {
    pub id: String,
    pub provider: String,
    pub airline: AirlineInfo,
    pub flight_number: String,
    pub departure: AirportInfo,
    pub arrival: AirportInfo,
    pub duration: DurationInfo,
    pub stops: u32,
    pub price: PriceInfo,
    pub available_seats: u32,
    pub cabin_class: String,
    pub aircraft: Option<AircraftInfo>,
    pub amenities: Vec<AmenityInfo>,
    pub baggage: BaggageInfo,
    #[serde(default)]
    pub best_value_score: f64,
}

impl FlightOption {
    /// Price per minute of travel, lower is better. A zero-duration record
    /// produces an infinite score rather than an error.
    pub fn compute_best_value_score(&mut self) {
        self.best_value_score = self.price.amount as f64 / self.duration.total_minutes as f64;
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::TimeZone;

    pub(crate) fn sample_flight(id: &str, amount: i64, minutes: i64) -> FlightOption {
        let depart = Utc.with_ymd_and_hms(2026, 3, 15, 8, 0, 0).unwrap();
        let arrive = depart + chrono::Duration::minutes(minutes);
        FlightOption {
            id: id.to_string(),
            provider: "AeroLink".to_string(),
            airline: AirlineInfo {
                name: "AeroLink".to_string(),
                code: "AL".to_string(),
            },
            flight_number: "AL123".to_string(),
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
                formatted: crate::format::format_duration_minutes(minutes),
            },
            stops: 0,
            price: PriceInfo {
                amount,
                currency: "IDR".to_string(),
                display: crate::format::format_money(amount, "IDR"),
            },
            available_seats: 12,
            cabin_class: "Economy".to_string(),
            aircraft: None,
            amenities: vec![],
            baggage: BaggageInfo {
                carry_on: "7kg cabin".to_string(),
                checked: "20kg included".to_string(),
            },
            best_value_score: 0.0,
        }
    }

    #[test]
    fn best_value_is_price_per_minute() {
        let mut flight = sample_flight("f1", 1_200_000, 120);
        flight.compute_best_value_score();
        assert_eq!(flight.best_value_score, 10_000.0);
    }

    #[test]
    fn zero_duration_scores_infinite() {
        let mut flight = sample_flight("f1", 1_200_000, 0);
        flight.compute_best_value_score();
        assert!(flight.best_value_score.is_infinite());
    }

    #[test]
    fn flight_round_trips_through_json() {
        let mut flight = sample_flight("f1", 950_000, 105);
        flight.compute_best_value_score();
        let json = serde_json::to_string(&flight).unwrap();
        let back: FlightOption = serde_json::from_str(&json).unwrap();
        assert_eq!(flight, back);
    }
}
