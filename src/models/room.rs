//! Room model.
//!
//! This module defines the Room struct representing one bookable resource
//! in the catalog. Rooms are produced by the catalog loader (or whichever
//! collaborator fetches them) and are read-only within the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A bookable room from the catalog.
///
/// Numeric bounds (`price_per_night >= 0`, `capacity >= 1`, `rating` in
/// `[0, 5]`) are enforced by the loader that constructs rooms from raw
/// records, not by the engine, so a `Room` in hand can be trusted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Unique, stable identifier for the room.
    pub id: String,
    /// Display title (e.g., "Study Pod 3B").
    pub title: String,
    /// Nightly rate in the catalog currency.
    pub price_per_night: Decimal,
    /// Maximum number of occupants.
    pub capacity: u32,
    /// Amenity tags (e.g., "wifi", "whiteboard").
    #[serde(default)]
    pub features: BTreeSet<String>,
    /// Average guest rating, 0 through 5.
    pub rating: Decimal,
    /// Human-readable location (building, campus).
    pub location: String,
    /// Longer free-text description shown on the room detail page.
    #[serde(default)]
    pub description: String,
    /// Image URLs in display order.
    #[serde(default)]
    pub images: Vec<String>,
}

impl Room {
    /// Returns true if the room advertises the given feature.
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.contains(feature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn create_test_room() -> Room {
        Room {
            id: "room_001".to_string(),
            title: "Study Pod 3B".to_string(),
            price_per_night: Decimal::from_str("100.00").unwrap(),
            capacity: 2,
            features: ["wifi".to_string(), "whiteboard".to_string()]
                .into_iter()
                .collect(),
            rating: Decimal::from_str("4.5").unwrap(),
            location: "Science Park Campus".to_string(),
            description: "Quiet pod with a canal view.".to_string(),
            images: vec!["https://example.com/pod3b.jpg".to_string()],
        }
    }

    #[test]
    fn test_has_feature() {
        let room = create_test_room();
        assert!(room.has_feature("wifi"));
        assert!(room.has_feature("whiteboard"));
        assert!(!room.has_feature("projector"));
    }

    #[test]
    fn test_room_serialization_round_trip() {
        let room = create_test_room();
        let json = serde_json::to_string(&room).unwrap();
        let deserialized: Room = serde_json::from_str(&json).unwrap();
        assert_eq!(room, deserialized);
    }

    #[test]
    fn test_room_deserialization_defaults_collections() {
        let json = r#"{
            "id": "room_002",
            "title": "Lecture Hall A",
            "price_per_night": "250.00",
            "capacity": 40,
            "rating": "3.8",
            "location": "Main Building"
        }"#;

        let room: Room = serde_json::from_str(json).unwrap();
        assert!(room.features.is_empty());
        assert!(room.images.is_empty());
        assert!(room.description.is_empty());
        assert_eq!(room.capacity, 40);
    }
}
