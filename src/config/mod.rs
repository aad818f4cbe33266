//! Catalog loading for the Availability & Filtering Engine.
//!
//! This module stands in for the external data-fetch collaborator: it reads
//! raw room and reservation records from YAML files, validates them, and
//! produces the typed snapshot the engine consumes. Invalid records fail
//! the load fast with a typed error; the engine never sees a partially
//! filled domain object.
//!
//! # Example
//!
//! ```no_run
//! use booking_engine::config::CatalogLoader;
//!
//! let loader = CatalogLoader::load("./config/catalog").unwrap();
//! println!("Loaded {} rooms", loader.rooms().len());
//! ```

mod loader;
mod types;

pub use loader::CatalogLoader;
pub use types::{Catalog, ReservationRecord, RoomRecord};
