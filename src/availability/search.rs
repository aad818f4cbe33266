//! The search orchestrator.
//!
//! Composes the resolver, filter evaluator, and pricing calculator into the
//! single operation the outside world calls. Stateless per call: the inputs
//! are immutable snapshots and nothing is retained between calls.

use crate::models::{AvailabilityResult, Reservation, Room, SearchFilter};

use super::filter::matches;
use super::pricing::quote_stay;
use super::resolver::{ReservationIndex, is_available};

/// Finds the rooms that are free for the requested stay and satisfy the
/// attribute filter, priced and ordered for presentation.
///
/// Results are sorted by ascending total cost, then descending rating, then
/// ascending room id, so identical inputs always produce an identical
/// ordering. An empty result is a valid outcome (nothing matched), not an
/// error; an empty catalog simply yields an empty result.
///
/// Builds a fresh [`ReservationIndex`] for the call; callers issuing many
/// searches over one reservation snapshot should build the index once and
/// use [`search_indexed`].
pub fn search(
    rooms: &[Room],
    reservations: &[Reservation],
    filter: &SearchFilter,
) -> Vec<AvailabilityResult> {
    let index = ReservationIndex::build(reservations);
    search_indexed(rooms, &index, filter)
}

/// [`search`] with a caller-provided reservation index.
pub fn search_indexed(
    rooms: &[Room],
    index: &ReservationIndex,
    filter: &SearchFilter,
) -> Vec<AvailabilityResult> {
    let mut results: Vec<AvailabilityResult> = rooms
        .iter()
        .filter(|room| matches(room, filter))
        .filter(|room| is_available(room, filter.range, index.for_room(&room.id)))
        .map(|room| {
            let quote = quote_stay(room, filter.range);
            AvailabilityResult {
                room: room.clone(),
                nights: quote.nights,
                total_cost: quote.total_cost,
            }
        })
        .collect();

    results.sort_by(|a, b| {
        a.total_cost
            .cmp(&b.total_cost)
            .then_with(|| b.room.rating.cmp(&a.room.rating))
            .then_with(|| a.room.id.cmp(&b.room.id))
    });

    results
}
