//! Search filter model.
//!
//! One caller query: the requested stay plus the attribute constraints a
//! room must satisfy. Immutable once built.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeSet;

use super::DateRange;

/// The constraints for a single availability search.
///
/// Construct with [`SearchFilter::for_range`] to get the documented
/// defaults (no required features, minimum capacity of 1, no price
/// ceiling), then set the fields you need:
///
/// ```
/// use booking_engine::models::{DateRange, SearchFilter};
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
/// ).unwrap();
///
/// let mut filter = SearchFilter::for_range(range);
/// filter.min_capacity = 4;
/// filter.required_features.insert("wifi".to_string());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchFilter {
    /// The requested stay.
    pub range: DateRange,
    /// Features every result must advertise; empty means no constraint.
    pub required_features: BTreeSet<String>,
    /// Minimum room capacity; defaults to 1.
    pub min_capacity: u32,
    /// Optional ceiling on the nightly rate.
    pub max_price_per_night: Option<Decimal>,
}

impl SearchFilter {
    /// Creates a filter for the given stay with all defaults applied.
    pub fn for_range(range: DateRange) -> Self {
        Self {
            range,
            required_features: BTreeSet::new(),
            min_capacity: 1,
            max_price_per_night: None,
        }
    }
}
