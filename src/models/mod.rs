//! Core data models for the Availability & Filtering Engine.
//!
//! This module contains all the domain models used throughout the engine.
//! Rooms and reservations are read-only snapshots handed to the engine per
//! query; the engine never mutates them.

mod availability_result;
mod date_range;
mod reservation;
mod room;
mod search_filter;

pub use availability_result::AvailabilityResult;
pub use date_range::DateRange;
pub use reservation::Reservation;
pub use room::Room;
pub use search_filter::SearchFilter;
