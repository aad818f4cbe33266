//! Stay pricing.
//!
//! Cost is computed in exactly one place so the engine-wide rounding rule
//! (round-half-up to the currency's minor unit) cannot drift between call
//! sites.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{DateRange, Room};

use super::interval::nights;

/// The priced portion of a search result: how many nights and what they
/// cost in total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StayQuote {
    /// Number of nights the stay spans.
    pub nights: u32,
    /// `nights * price_per_night`, rounded half-up to two decimal places.
    pub total_cost: Decimal,
}

/// Prices a stay in the given room.
///
/// A zero-night range yields a zero-cost quote; that is a valid result,
/// not an error. The caller decides whether to show it.
///
/// # Examples
///
/// ```
/// use booking_engine::availability::quote_stay;
/// use booking_engine::models::{DateRange, Room};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let room = Room {
///     id: "room_001".to_string(),
///     title: "Study Pod 3B".to_string(),
///     price_per_night: Decimal::new(10000, 2), // 100.00
///     capacity: 2,
///     features: Default::default(),
///     rating: Decimal::from(4),
///     location: "Science Park Campus".to_string(),
///     description: String::new(),
///     images: vec![],
/// };
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 4).unwrap(),
/// ).unwrap();
///
/// let quote = quote_stay(&room, range);
/// assert_eq!(quote.nights, 3);
/// assert_eq!(quote.total_cost, Decimal::new(30000, 2)); // 300.00
/// ```
pub fn quote_stay(room: &Room, range: DateRange) -> StayQuote {
    let nights = nights(range);
    let total_cost = (Decimal::from(nights) * room.price_per_night)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    StayQuote { nights, total_cost }
}
