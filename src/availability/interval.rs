//! Interval arithmetic over stay date ranges.
//!
//! These are the two primitives everything else leans on. Both ranges are
//! half-open, so two stays that share a boundary day (one checks out the
//! morning the other checks in) do not overlap. That convention must hold
//! uniformly across the engine; it is pinned by the tests below.

use crate::models::DateRange;

/// Returns true iff the two half-open ranges share at least one night.
///
/// A reservation ending on day D does not conflict with one starting on
/// day D. Zero-length ranges overlap nothing, including themselves.
///
/// # Examples
///
/// ```
/// use booking_engine::availability::overlaps;
/// use booking_engine::models::DateRange;
/// use chrono::NaiveDate;
///
/// let date = |d| NaiveDate::from_ymd_opt(2026, 1, d).unwrap();
/// let booked = DateRange::new(date(10), date(15)).unwrap();
/// let adjacent = DateRange::new(date(15), date(20)).unwrap();
/// let inside = DateRange::new(date(14), date(16)).unwrap();
///
/// assert!(!overlaps(booked, adjacent));
/// assert!(overlaps(booked, inside));
/// ```
pub fn overlaps(a: DateRange, b: DateRange) -> bool {
    // A zero-length range holds no nights, so it cannot collide with
    // anything, even when its single day falls inside the other range.
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.from() < b.to() && b.from() < a.to()
}

/// Returns the number of nights a stay spans, minimum 0.
///
/// With calendar dates the difference is always a whole number of days; a
/// zero-length range is zero nights.
pub fn nights(range: DateRange) -> u32 {
    (range.to() - range.from()).num_days().max(0) as u32
}
