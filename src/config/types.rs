//! Raw catalog record types and their validation into domain models.
//!
//! The records mirror the loosely-typed shapes an upstream reservation API
//! hands back. Conversion into [`Room`] / [`Reservation`] is where the
//! numeric bounds are enforced, so everything past this point can trust its
//! data.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeSet;

use crate::error::{EngineError, EngineResult};
use crate::models::{DateRange, Reservation, Room};

/// A raw room record as it appears in `rooms.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RoomRecord {
    /// Unique, stable identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Nightly rate; must be non-negative.
    pub price_per_night: Decimal,
    /// Maximum occupants; must be at least 1.
    pub capacity: u32,
    /// Amenity tags.
    #[serde(default)]
    pub features: Vec<String>,
    /// Average guest rating; must lie in [0, 5].
    pub rating: Decimal,
    /// Human-readable location.
    pub location: String,
    /// Longer free-text description.
    #[serde(default)]
    pub description: String,
    /// Image URLs in display order.
    #[serde(default)]
    pub images: Vec<String>,
}

impl RoomRecord {
    /// Validates the record and converts it into a domain [`Room`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRoom`] when the nightly rate is
    /// negative, the capacity is zero, or the rating falls outside [0, 5].
    pub fn into_room(self) -> EngineResult<Room> {
        if self.price_per_night < Decimal::ZERO {
            return Err(EngineError::InvalidRoom {
                room_id: self.id,
                message: "price_per_night must be non-negative".to_string(),
            });
        }
        if self.capacity == 0 {
            return Err(EngineError::InvalidRoom {
                room_id: self.id,
                message: "capacity must be at least 1".to_string(),
            });
        }
        if self.rating < Decimal::ZERO || self.rating > Decimal::from(5) {
            return Err(EngineError::InvalidRoom {
                room_id: self.id,
                message: "rating must be between 0 and 5".to_string(),
            });
        }

        Ok(Room {
            id: self.id,
            title: self.title,
            price_per_night: self.price_per_night,
            capacity: self.capacity,
            features: self.features.into_iter().collect::<BTreeSet<String>>(),
            rating: self.rating,
            location: self.location,
            description: self.description,
            images: self.images,
        })
    }
}

/// A raw reservation record as it appears in `reservations.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReservationRecord {
    /// Unique identifier.
    pub id: String,
    /// The room this reservation occupies.
    pub room_id: String,
    /// Check-in date.
    pub from: NaiveDate,
    /// Checkout date; must not precede `from`.
    pub to: NaiveDate,
}

impl ReservationRecord {
    /// Validates the record and converts it into a domain [`Reservation`].
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidReservation`] when the dates are
    /// inverted.
    pub fn into_reservation(self) -> EngineResult<Reservation> {
        let range =
            DateRange::new(self.from, self.to).map_err(|_| EngineError::InvalidReservation {
                reservation_id: self.id.clone(),
                message: format!("from {} is after to {}", self.from, self.to),
            })?;

        Ok(Reservation {
            id: self.id,
            room_id: self.room_id,
            range,
        })
    }
}

/// File structure of `rooms.yaml`. An absent `rooms` key is an empty
/// catalog, which is valid.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct RoomsFile {
    #[serde(default)]
    pub rooms: Vec<RoomRecord>,
}

/// File structure of `reservations.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ReservationsFile {
    #[serde(default)]
    pub reservations: Vec<ReservationRecord>,
}

/// A validated, immutable catalog snapshot: the full room set plus the
/// reservation set it was loaded with.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Every bookable room known at snapshot time.
    pub rooms: Vec<Room>,
    /// Every reservation known at snapshot time.
    pub reservations: Vec<Reservation>,
}

impl Catalog {
    /// Looks up a room by id.
    pub fn room(&self, id: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.id == id)
    }
}
