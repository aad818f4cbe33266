//! Availability & Filtering Engine for room bookings.
//!
//! This crate answers one question: given a catalog of rooms, a snapshot of
//! existing reservations, and a caller query (date range plus attribute
//! filters), which rooms are actually free, in what order should they be
//! shown, and what would the stay cost.
//!
//! The engine itself ([`availability`]) is pure and synchronous; loading
//! raw catalog data and serving HTTP are handled by the [`config`] and
//! [`api`] modules around it.

#![warn(missing_docs)]

pub mod api;
pub mod availability;
pub mod config;
pub mod error;
pub mod models;
