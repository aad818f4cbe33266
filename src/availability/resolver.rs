//! Availability resolution against existing reservations.
//!
//! The resolver answers "is this room free for this stay" by scanning the
//! reservations booked against that room. For one room a linear scan is
//! fine; a search across a whole catalog first builds a
//! [`ReservationIndex`] so each room only sees its own reservations instead
//! of the full set.

use std::collections::HashMap;

use crate::models::{DateRange, Reservation, Room};

use super::interval::overlaps;

/// Reservations grouped by room id, each group ordered by start date.
///
/// Reservations whose `room_id` matches no room in the catalog are indexed
/// like any other but never consulted, so a dangling reference cannot abort
/// an otherwise-valid search. Callers that care can inspect
/// [`ReservationIndex::dangling`] and log.
#[derive(Debug, Clone, Default)]
pub struct ReservationIndex {
    by_room: HashMap<String, Vec<Reservation>>,
}

impl ReservationIndex {
    /// Builds an index from a reservation snapshot.
    ///
    /// The input is cloned; the index owns its data so it can outlive the
    /// snapshot it was built from.
    pub fn build(reservations: &[Reservation]) -> Self {
        let mut by_room: HashMap<String, Vec<Reservation>> = HashMap::new();
        for reservation in reservations {
            by_room
                .entry(reservation.room_id.clone())
                .or_default()
                .push(reservation.clone());
        }
        for bucket in by_room.values_mut() {
            bucket.sort_by_key(|r| r.range.from());
        }
        Self { by_room }
    }

    /// Returns the reservations booked against the given room, ordered by
    /// start date. Unknown rooms get an empty slice.
    pub fn for_room(&self, room_id: &str) -> &[Reservation] {
        self.by_room.get(room_id).map_or(&[], Vec::as_slice)
    }

    /// Returns the room ids present in the index but absent from the given
    /// room set. Useful for logging dangling references.
    pub fn dangling<'a>(&'a self, rooms: &[Room]) -> Vec<&'a str> {
        let mut ids: Vec<&str> = self
            .by_room
            .keys()
            .filter(|id| !rooms.iter().any(|room| &room.id == *id))
            .map(String::as_str)
            .collect();
        ids.sort_unstable();
        ids
    }
}

/// Returns true iff no reservation for this room overlaps the requested
/// stay.
///
/// Reservations for other rooms are ignored, so the function can be handed
/// either a pre-filtered slice from a [`ReservationIndex`] or the full
/// reservation set. A room with zero reservations is always available, and
/// a zero-length requested range never conflicts with anything.
///
/// # Examples
///
/// ```
/// use booking_engine::availability::is_available;
/// use booking_engine::models::{DateRange, Reservation, Room};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let date = |d| NaiveDate::from_ymd_opt(2026, 1, d).unwrap();
/// let room = Room {
///     id: "room_001".to_string(),
///     title: "Study Pod 3B".to_string(),
///     price_per_night: Decimal::from(100),
///     capacity: 2,
///     features: Default::default(),
///     rating: Decimal::from(4),
///     location: "Science Park Campus".to_string(),
///     description: String::new(),
///     images: vec![],
/// };
/// let requested = DateRange::new(date(1), date(4)).unwrap();
/// assert!(is_available(&room, requested, &[]));
/// ```
pub fn is_available(room: &Room, requested: DateRange, reservations: &[Reservation]) -> bool {
    !reservations
        .iter()
        .filter(|reservation| reservation.room_id == room.id)
        .any(|reservation| overlaps(reservation.range, requested))
}
