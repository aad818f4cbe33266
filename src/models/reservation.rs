//! Reservation model.
//!
//! A reservation records that one room is booked for one date range. The
//! engine treats each reservation independently and never assumes the set
//! is free of internal overlaps.

use serde::Serialize;

use super::DateRange;

/// A booked interval for a specific room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reservation {
    /// Unique identifier for the reservation.
    pub id: String,
    /// The id of the room this reservation occupies.
    pub room_id: String,
    /// The booked stay, half-open (checkout day is free again).
    pub range: DateRange,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_reservation_serializes_range_inline() {
        let reservation = Reservation {
            id: "res_001".to_string(),
            room_id: "room_001".to_string(),
            range: DateRange::new(date("2026-01-10"), date("2026-01-15")).unwrap(),
        };

        let json = serde_json::to_string(&reservation).unwrap();
        assert!(json.contains("\"room_id\":\"room_001\""));
        assert!(json.contains("\"from\":\"2026-01-10\""));
    }
}
