//! Post-aggregation processing: filter, then score, then sort.

use farelink_core::consts::{FilterKey, SortKey, SortOrder};
use farelink_core::flight::FlightOption;
use farelink_core::search::{SearchFilter, SortOption};

/// Keeps records satisfying every clause. Zero clauses yields an empty set:
/// "no filters supplied" and "filtered to nothing" are deliberately the
/// same outcome to callers.
pub fn filter_flights(flights: Vec<FlightOption>, filters: &[SearchFilter]) -> Vec<FlightOption> {
    if filters.is_empty() {
        return Vec::new();
    }

    flights
        .into_iter()
        .filter(|flight| filters.iter().all(|clause| clause_passes(flight, clause)))
        .collect()
}

/// A clause whose value does not type-check for its key never excludes a
/// record; callers wanting strict rejection must validate upstream.
fn clause_passes(flight: &FlightOption, clause: &SearchFilter) -> bool {
    let number = clause.value.as_number();
    match clause.key {
        FilterKey::MaxPrice => number.map_or(true, |v| flight.price.amount as f64 <= v),
        FilterKey::MinPrice => number.map_or(true, |v| flight.price.amount as f64 >= v),
        FilterKey::MaxStops => number.map_or(true, |v| flight.stops as f64 <= v),
        FilterKey::MinStops => number.map_or(true, |v| flight.stops as f64 >= v),
        FilterKey::MaxDuration => {
            number.map_or(true, |v| flight.duration.total_minutes as f64 <= v)
        }
        FilterKey::MinDuration => {
            number.map_or(true, |v| flight.duration.total_minutes as f64 >= v)
        }
        FilterKey::DepartureAfter => {
            number.map_or(true, |v| flight.departure.timestamp as f64 >= v)
        }
        FilterKey::DepartureBefore => {
            number.map_or(true, |v| flight.departure.timestamp as f64 <= v)
        }
        FilterKey::ArrivalAfter => number.map_or(true, |v| flight.arrival.timestamp as f64 >= v),
        FilterKey::ArrivalBefore => number.map_or(true, |v| flight.arrival.timestamp as f64 <= v),
        FilterKey::Airlines => clause
            .value
            .as_text()
            .map_or(true, |v| flight.airline.code == v || flight.airline.name == v),
        FilterKey::Unknown => true,
    }
}

pub fn score_flights(flights: &mut [FlightOption]) {
    for flight in flights.iter_mut() {
        flight.compute_best_value_score();
    }
}

/// Stable sort by the requested key; ties keep their pre-sort order. Runs
/// strictly after filtering and scoring.
pub fn sort_flights(flights: &mut [FlightOption], sort: SortOption) {
    flights.sort_by(|a, b| {
        let ordering = match sort.key {
            SortKey::Price => a.price.amount.cmp(&b.price.amount),
            SortKey::Duration => a.duration.total_minutes.cmp(&b.duration.total_minutes),
            SortKey::Airline => a.airline.name.cmp(&b.airline.name),
            SortKey::DepartureTime => a.departure.timestamp.cmp(&b.departure.timestamp),
            SortKey::ArrivalTime => a.arrival.timestamp.cmp(&b.arrival.timestamp),
            SortKey::BestValue => a.best_value_score.total_cmp(&b.best_value_score),
        };
        match sort.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}
