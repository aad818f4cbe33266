//! Search result model.

use rust_decimal::Decimal;
use serde::Serialize;

use super::Room;

/// One row of a search result: a free room annotated with the cost of the
/// requested stay.
///
/// `total_cost` is `nights * room.price_per_night` rounded half-up to the
/// cent; a zero-night stay legitimately costs zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvailabilityResult {
    /// The room that is free for the requested stay.
    pub room: Room,
    /// Number of nights in the requested stay.
    pub nights: u32,
    /// Total cost of the stay, rounded to the currency's minor unit.
    pub total_cost: Decimal,
}
