//! Request types for the Availability & Filtering Engine API.
//!
//! This module defines the JSON request structure for the `/search`
//! endpoint and its fallible conversion into the domain filter.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::EngineError;
use crate::models::{DateRange, SearchFilter};

/// Request body for the `/search` endpoint.
///
/// The raw dates are validated into a [`DateRange`] during conversion, so
/// an inverted range is rejected before any filtering runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Check-in date.
    pub from: NaiveDate,
    /// Checkout date.
    pub to: NaiveDate,
    /// Features every result must advertise.
    #[serde(default)]
    pub required_features: BTreeSet<String>,
    /// Minimum room capacity.
    #[serde(default = "default_min_capacity")]
    pub min_capacity: u32,
    /// Optional ceiling on the nightly rate.
    #[serde(default)]
    pub max_price_per_night: Option<Decimal>,
}

fn default_min_capacity() -> u32 {
    1
}

impl TryFrom<SearchRequest> for SearchFilter {
    type Error = EngineError;

    fn try_from(req: SearchRequest) -> Result<Self, Self::Error> {
        let range = DateRange::new(req.from, req.to)?;
        Ok(SearchFilter {
            range,
            required_features: req.required_features,
            min_capacity: req.min_capacity,
            max_price_per_night: req.max_price_per_night,
        })
    }
}
