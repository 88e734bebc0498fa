use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        SortOrder::Asc
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Price,
    Duration,
    Airline,
    DepartureTime,
    ArrivalTime,
    // Unrecognized keys fall back to best-value ranking.
    #[serde(other)]
    BestValue,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Price => "price",
            SortKey::Duration => "duration",
            SortKey::Airline => "airline",
            SortKey::DepartureTime => "departure_time",
            SortKey::ArrivalTime => "arrival_time",
            SortKey::BestValue => "best_value",
        }
    }
}

impl Default for SortKey {
    fn default() -> Self {
        SortKey::BestValue
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKey {
    Airlines,
    MinPrice,
    MaxPrice,
    MinStops,
    MaxStops,
    MinDuration,
    MaxDuration,
    DepartureAfter,
    DepartureBefore,
    ArrivalAfter,
    ArrivalBefore,
    // An unrecognized key never excludes a record.
    #[serde(other)]
    Unknown,
}

impl FilterKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::Airlines => "airlines",
            FilterKey::MinPrice => "min_price",
            FilterKey::MaxPrice => "max_price",
            FilterKey::MinStops => "min_stops",
            FilterKey::MaxStops => "max_stops",
            FilterKey::MinDuration => "min_duration",
            FilterKey::MaxDuration => "max_duration",
            FilterKey::DepartureAfter => "departure_after",
            FilterKey::DepartureBefore => "departure_before",
            FilterKey::ArrivalAfter => "arrival_after",
            FilterKey::ArrivalBefore => "arrival_before",
            FilterKey::Unknown => "unknown",
        }
    }
}

/// City lookup for the airports covered by the simulated providers.
pub fn airport_city(code: &str) -> Option<&'static str> {
    match code {
        "CGK" => Some("Jakarta"),
        "DPS" => Some("Denpasar"),
        "SOC" => Some("Solo"),
        "SUB" => Some("Surabaya"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sort_key_falls_back_to_best_value() {
        let key: SortKey = serde_json::from_str("\"cheapest\"").unwrap();
        assert_eq!(key, SortKey::BestValue);
    }

    #[test]
    fn known_keys_round_trip() {
        let key: SortKey = serde_json::from_str("\"departure_time\"").unwrap();
        assert_eq!(key, SortKey::DepartureTime);
        assert_eq!(serde_json::to_string(&key).unwrap(), "\"departure_time\"");

        let filter: FilterKey = serde_json::from_str("\"max_price\"").unwrap();
        assert_eq!(filter, FilterKey::MaxPrice);
    }

    #[test]
    fn unknown_filter_key_is_tolerated() {
        let filter: FilterKey = serde_json::from_str("\"max_altitude\"").unwrap();
        assert_eq!(filter, FilterKey::Unknown);
    }
}
