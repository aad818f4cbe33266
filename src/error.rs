//! Error types for the Availability & Filtering Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading a catalog or
//! constructing a search.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Availability & Filtering Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application. The pure
/// search functions themselves are total; errors are raised at construction
/// and load sites, never from inside the algorithms.
///
/// # Example
///
/// ```
/// use booking_engine::error::EngineError;
/// use chrono::NaiveDate;
///
/// let error = EngineError::InvalidRange {
///     from: NaiveDate::from_ymd_opt(2026, 1, 20).unwrap(),
///     to: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid date range: from 2026-01-20 is after to 2026-01-10"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A date range was constructed with `from` after `to`.
    #[error("Invalid date range: from {from} is after to {to}")]
    InvalidRange {
        /// The start date that was supplied.
        from: NaiveDate,
        /// The end date that was supplied.
        to: NaiveDate,
    },

    /// No room with the requested id exists in the catalog.
    #[error("Room not found: {id}")]
    RoomNotFound {
        /// The room id that was not found.
        id: String,
    },

    /// Catalog file was not found at the specified path.
    #[error("Catalog file not found: {path}")]
    CatalogNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Catalog file could not be parsed.
    #[error("Failed to parse catalog file '{path}': {message}")]
    CatalogParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A room record was invalid or contained inconsistent data.
    #[error("Invalid room '{room_id}': {message}")]
    InvalidRoom {
        /// The id of the invalid room record.
        room_id: String,
        /// A description of what made the record invalid.
        message: String,
    },

    /// A reservation record was invalid or contained inconsistent data.
    #[error("Invalid reservation '{reservation_id}': {message}")]
    InvalidReservation {
        /// The id of the invalid reservation record.
        reservation_id: String,
        /// A description of what made the record invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_displays_both_dates() {
        let error = EngineError::InvalidRange {
            from: NaiveDate::from_ymd_opt(2026, 1, 20).unwrap(),
            to: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date range: from 2026-01-20 is after to 2026-01-10"
        );
    }

    #[test]
    fn test_room_not_found_displays_id() {
        let error = EngineError::RoomNotFound {
            id: "room_404".to_string(),
        };
        assert_eq!(error.to_string(), "Room not found: room_404");
    }

    #[test]
    fn test_catalog_not_found_displays_path() {
        let error = EngineError::CatalogNotFound {
            path: "/missing/rooms.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Catalog file not found: /missing/rooms.yaml"
        );
    }

    #[test]
    fn test_catalog_parse_error_displays_path_and_message() {
        let error = EngineError::CatalogParseError {
            path: "/catalog/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse catalog file '/catalog/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_room_displays_id_and_message() {
        let error = EngineError::InvalidRoom {
            room_id: "room_001".to_string(),
            message: "rating must be between 0 and 5".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid room 'room_001': rating must be between 0 and 5"
        );
    }

    #[test]
    fn test_invalid_reservation_displays_id_and_message() {
        let error = EngineError::InvalidReservation {
            reservation_id: "res_001".to_string(),
            message: "from date is after to date".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid reservation 'res_001': from date is after to date"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_room_not_found() -> EngineResult<()> {
            Err(EngineError::RoomNotFound {
                id: "room_404".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_room_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
