//! Attribute filter evaluation.

use crate::models::{Room, SearchFilter};

/// Returns true iff the room satisfies every attribute constraint in the
/// filter.
///
/// The checks are conjunctive, so their order cannot change the result;
/// they run cheapest first (capacity, then price ceiling, then the
/// feature-subset test) to short-circuit early on large catalogs.
/// Availability is deliberately not considered here; the orchestrator
/// applies both.
///
/// # Examples
///
/// ```
/// use booking_engine::availability::matches;
/// use booking_engine::models::{DateRange, Room, SearchFilter};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
/// ).unwrap();
/// let room = Room {
///     id: "room_001".to_string(),
///     title: "Study Pod 3B".to_string(),
///     price_per_night: Decimal::from(100),
///     capacity: 2,
///     features: ["wifi".to_string()].into_iter().collect(),
///     rating: Decimal::from(4),
///     location: "Science Park Campus".to_string(),
///     description: String::new(),
///     images: vec![],
/// };
///
/// let mut filter = SearchFilter::for_range(range);
/// assert!(matches(&room, &filter));
///
/// filter.min_capacity = 3;
/// assert!(!matches(&room, &filter));
/// ```
pub fn matches(room: &Room, filter: &SearchFilter) -> bool {
    if room.capacity < filter.min_capacity {
        return false;
    }

    if let Some(max_price) = filter.max_price_per_night {
        if room.price_per_night > max_price {
            return false;
        }
    }

    filter
        .required_features
        .iter()
        .all(|feature| room.has_feature(feature))
}
