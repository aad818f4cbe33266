//! Catalog loading functionality.
//!
//! This module provides the [`CatalogLoader`] type for loading a room
//! catalog and its reservation snapshot from YAML files.

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::error::{EngineError, EngineResult};
use crate::models::{Reservation, Room};

use super::types::{Catalog, ReservationsFile, RoomsFile};

/// Loads and provides access to a validated catalog snapshot.
///
/// # Directory Structure
///
/// The catalog directory should have the following structure:
/// ```text
/// config/catalog/
/// ├── rooms.yaml          # Bookable rooms with attributes and rates
/// └── reservations.yaml   # Existing reservations (a point-in-time snapshot)
/// ```
///
/// # Example
///
/// ```no_run
/// use booking_engine::config::CatalogLoader;
///
/// let loader = CatalogLoader::load("./config/catalog").unwrap();
/// let room = loader.get_room("room_001").unwrap();
/// println!("Room: {}", room.title);
/// ```
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    catalog: Catalog,
}

impl CatalogLoader {
    /// Loads a catalog from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `rooms.yaml` or `reservations.yaml` is missing (`CatalogNotFound`)
    /// - either file contains invalid YAML (`CatalogParseError`)
    /// - a room record violates its numeric bounds or reuses an id
    ///   (`InvalidRoom`)
    /// - a reservation record has inverted dates (`InvalidReservation`)
    ///
    /// Reservations referencing an unknown room id are kept (the engine
    /// ignores them during search) but logged with a warning, since they
    /// usually mean the room set and the reservation snapshot are out of
    /// step.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let rooms_file = Self::load_yaml::<RoomsFile>(&path.join("rooms.yaml"))?;
        let reservations_file =
            Self::load_yaml::<ReservationsFile>(&path.join("reservations.yaml"))?;

        let mut rooms: Vec<Room> = Vec::with_capacity(rooms_file.rooms.len());
        for record in rooms_file.rooms {
            if rooms.iter().any(|existing| existing.id == record.id) {
                return Err(EngineError::InvalidRoom {
                    room_id: record.id,
                    message: "duplicate room id".to_string(),
                });
            }
            rooms.push(record.into_room()?);
        }

        let reservations: Vec<Reservation> = reservations_file
            .reservations
            .into_iter()
            .map(|record| record.into_reservation())
            .collect::<EngineResult<_>>()?;

        for reservation in &reservations {
            if !rooms.iter().any(|room| room.id == reservation.room_id) {
                warn!(
                    reservation_id = %reservation.id,
                    room_id = %reservation.room_id,
                    "Reservation references a room that is not in the catalog"
                );
            }
        }

        Ok(Self {
            catalog: Catalog {
                rooms,
                reservations,
            },
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::CatalogNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::CatalogParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded catalog snapshot.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Consumes the loader and returns the catalog snapshot.
    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }

    /// Returns all rooms in the catalog.
    pub fn rooms(&self) -> &[Room] {
        &self.catalog.rooms
    }

    /// Returns the reservation snapshot the catalog was loaded with.
    pub fn reservations(&self) -> &[Reservation] {
        &self.catalog.reservations
    }

    /// Gets a room by its id.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RoomNotFound`] when no room carries the id.
    pub fn get_room(&self, id: &str) -> EngineResult<&Room> {
        self.catalog
            .room(id)
            .ok_or_else(|| EngineError::RoomNotFound { id: id.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_sample_catalog() {
        let loader = CatalogLoader::load("./config/catalog").unwrap();
        assert!(!loader.rooms().is_empty());
        assert!(!loader.reservations().is_empty());
    }

    #[test]
    fn test_loaded_rooms_have_unique_ids() {
        let loader = CatalogLoader::load("./config/catalog").unwrap();
        let rooms = loader.rooms();
        for (i, room) in rooms.iter().enumerate() {
            assert!(
                rooms[i + 1..].iter().all(|other| other.id != room.id),
                "duplicate room id {}",
                room.id
            );
        }
    }

    #[test]
    fn test_get_room_by_id() {
        let loader = CatalogLoader::load("./config/catalog").unwrap();
        let first_id = loader.rooms()[0].id.clone();
        assert_eq!(loader.get_room(&first_id).unwrap().id, first_id);
    }

    #[test]
    fn test_get_unknown_room_errors() {
        let loader = CatalogLoader::load("./config/catalog").unwrap();
        assert!(matches!(
            loader.get_room("room_404"),
            Err(EngineError::RoomNotFound { id }) if id == "room_404"
        ));
    }

    #[test]
    fn test_missing_directory_errors() {
        let result = CatalogLoader::load("./config/does-not-exist");
        assert!(matches!(result, Err(EngineError::CatalogNotFound { .. })));
    }
}
