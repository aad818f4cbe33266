//! Availability, filtering, and pricing logic.
//!
//! This module contains the engine proper: interval arithmetic over stay
//! date ranges, the per-room availability resolver with its reservation
//! index, the attribute filter evaluator, the stay pricing calculator, and
//! the `search` orchestrator that composes them into the single operation
//! callers use.
//!
//! Everything here is pure and synchronous: no I/O, no shared mutable
//! state, safe to call concurrently from any number of threads.

mod filter;
mod interval;
mod pricing;
mod resolver;
mod search;

pub use filter::matches;
pub use interval::{nights, overlaps};
pub use pricing::{StayQuote, quote_stay};
pub use resolver::{ReservationIndex, is_available};
pub use search::{search, search_indexed};
