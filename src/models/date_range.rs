//! Stay date range model.
//!
//! This module defines the DateRange value type used for both requested
//! stays and existing reservations. Ranges are half-open: the `from` day is
//! occupied, the `to` day is checkout and can be reused by another booking.

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::{EngineError, EngineResult};

/// A half-open range of calendar dates: `[from, to)`.
///
/// The fields are private so that every `DateRange` in the system satisfies
/// the invariant `from <= to`; the only way to construct one is
/// [`DateRange::new`], which rejects inverted ranges. A zero-length range
/// (`from == to`) is valid and denotes a stay of no nights.
///
/// # Examples
///
/// ```
/// use booking_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
/// ).unwrap();
/// assert_eq!(range.from().to_string(), "2026-01-10");
///
/// let inverted = DateRange::new(range.to(), range.from());
/// assert!(inverted.is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateRange {
    /// Creates a date range, enforcing `from <= to`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidRange`] when `from` is after `to`.
    pub fn new(from: NaiveDate, to: NaiveDate) -> EngineResult<Self> {
        if from > to {
            return Err(EngineError::InvalidRange { from, to });
        }
        Ok(Self { from, to })
    }

    /// The first occupied day (check-in).
    pub fn from(&self) -> NaiveDate {
        self.from
    }

    /// The checkout day, excluded from the range.
    pub fn to(&self) -> NaiveDate {
        self.to
    }

    /// Returns true for a zero-length range (`from == to`).
    ///
    /// A zero-length range denotes no nights; it never conflicts with any
    /// reservation.
    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }
}
