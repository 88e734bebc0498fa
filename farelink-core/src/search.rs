use std::fmt;
use std::fmt::Write as _;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::consts::{FilterKey, SortKey, SortOrder};
use crate::flight::FlightOption;
use crate::{CoreError, CoreResult};

/// Input parameters for a flight search. Immutable once handed to the
/// aggregation engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub origin: String,
    pub destination: String,
    pub departure_date: NaiveDate,
    #[serde(default)]
    pub return_date: Option<NaiveDate>,
    pub passengers: u32,
    pub cabin_class: String,
    #[serde(default)]
    pub filters: Vec<SearchFilter>,
    #[serde(default)]
    pub sort: SortOption,
}

/// One filter clause. The value variant is decoded once at request-binding
/// time; evaluation stays permissive when the variant does not match what
/// the key expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchFilter {
    pub key: FilterKey,
    pub value: FilterValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Number(f64),
    Text(String),
}

impl FilterValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FilterValue::Number(n) => Some(*n),
            FilterValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FilterValue::Number(_) => None,
            FilterValue::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Number(n) if n.fract() == 0.0 => write!(f, "{}", *n as i64),
            FilterValue::Number(n) => write!(f, "{}", n),
            FilterValue::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortOption {
    #[serde(default)]
    pub key: SortKey,
    #[serde(default)]
    pub order: SortOrder,
}

impl SearchRequest {
    pub fn validate(&self) -> CoreResult<()> {
        if self.origin.trim().is_empty() {
            return Err(CoreError::ValidationError("origin is required".into()));
        }
        if self.destination.trim().is_empty() {
            return Err(CoreError::ValidationError("destination is required".into()));
        }
        if self.origin.eq_ignore_ascii_case(&self.destination) {
            return Err(CoreError::ValidationError(
                "origin and destination must differ".into(),
            ));
        }
        if self.passengers < 1 {
            return Err(CoreError::ValidationError(
                "passengers must be at least 1".into(),
            ));
        }
        if self.cabin_class.trim().is_empty() {
            return Err(CoreError::ValidationError("cabin class is required".into()));
        }
        Ok(())
    }

    /// Deterministic cache fingerprint. Every field participates in a fixed
    /// order; filter clause order is part of the key, so two requests with
    /// reordered clauses are cached separately.
    pub fn cache_key(&self) -> String {
        let return_date = self
            .return_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "none".to_string());

        let mut key = format!(
            "search_flight:origin={};destination={};departureDate={};returnDate={};passengers={};cabinClass={};",
            self.origin,
            self.destination,
            self.departure_date,
            return_date,
            self.passengers,
            self.cabin_class,
        );
        for f in &self.filters {
            let _ = write!(key, "{}={},", f.key.as_str(), f.value);
        }
        let _ = write!(
            key,
            ";sort_key={};sort_order={}",
            self.sort.key.as_str(),
            self.sort.order.as_str()
        );
        key
    }
}

/// Aggregation counters attached to every response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchMetadata {
    pub total_results: usize,
    pub providers_queried: usize,
    pub providers_succeeded: usize,
    pub providers_failed: usize,
    pub search_time_ms: u64,
    pub cache_hit: bool,
}

/// Standardized output of a flight search; also the unit stored in the
/// response cache, so it must round-trip through serialization losslessly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub search_criteria: SearchRequest,
    pub metadata: SearchMetadata,
    pub flights: Vec<FlightOption>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request() -> SearchRequest {
        SearchRequest {
            origin: "CGK".to_string(),
            destination: "DPS".to_string(),
            departure_date: NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
            return_date: None,
            passengers: 2,
            cabin_class: "Economy".to_string(),
            filters: vec![
                SearchFilter {
                    key: FilterKey::MaxPrice,
                    value: FilterValue::Number(1_500_000.0),
                },
                SearchFilter {
                    key: FilterKey::MaxStops,
                    value: FilterValue::Number(1.0),
                },
            ],
            sort: SortOption {
                key: SortKey::Price,
                order: SortOrder::Desc,
            },
        }
    }

    #[test]
    fn cache_key_is_deterministic() {
        let a = sample_request();
        let b = sample_request();
        assert_eq!(a.cache_key(), b.cache_key());
        assert_eq!(
            a.cache_key(),
            "search_flight:origin=CGK;destination=DPS;departureDate=2026-03-15;returnDate=none;\
             passengers=2;cabinClass=Economy;max_price=1500000,max_stops=1,;sort_key=price;sort_order=desc"
        );
    }

    #[test]
    fn reordering_filters_changes_cache_key() {
        let a = sample_request();
        let mut b = sample_request();
        b.filters.reverse();
        assert_ne!(a.cache_key(), b.cache_key());
    }

    #[test]
    fn return_date_participates_in_cache_key() {
        let a = sample_request();
        let mut b = sample_request();
        b.return_date = NaiveDate::from_ymd_opt(2026, 3, 22);
        assert_ne!(a.cache_key(), b.cache_key());
    }

    #[test]
    fn validation_rejects_bad_input() {
        let mut req = sample_request();
        req.passengers = 0;
        assert!(req.validate().is_err());

        let mut req = sample_request();
        req.origin = "".to_string();
        assert!(req.validate().is_err());

        let mut req = sample_request();
        req.destination = "cgk".to_string();
        assert!(req.validate().is_err());

        assert!(sample_request().validate().is_ok());
    }

    #[test]
    fn request_deserializes_with_defaults() {
        let json = r#"
            {
                "origin": "CGK",
                "destination": "DPS",
                "departure_date": "2026-03-15",
                "passengers": 1,
                "cabin_class": "Economy"
            }
        "#;
        let req: SearchRequest = serde_json::from_str(json).expect("Failed to deserialize");
        assert!(req.filters.is_empty());
        assert_eq!(req.sort.key, SortKey::BestValue);
        assert_eq!(req.sort.order, SortOrder::Asc);
    }

    #[test]
    fn filter_value_decodes_by_shape() {
        let numeric: SearchFilter =
            serde_json::from_str(r#"{"key": "max_price", "value": 1500}"#).unwrap();
        assert_eq!(numeric.value.as_number(), Some(1500.0));

        let text: SearchFilter =
            serde_json::from_str(r#"{"key": "airlines", "value": "GA"}"#).unwrap();
        assert_eq!(text.value.as_text(), Some("GA"));
    }

    #[test]
    fn response_round_trips_through_json() {
        let response = SearchResponse {
            search_criteria: sample_request(),
            metadata: SearchMetadata {
                total_results: 1,
                providers_queried: 4,
                providers_succeeded: 3,
                providers_failed: 1,
                search_time_ms: 132,
                cache_hit: false,
            },
            flights: vec![crate::flight::tests::sample_flight("f1", 1_000_000, 100)],
        };
        let json = serde_json::to_string(&response).unwrap();
        let back: SearchResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(response, back);
    }
}
