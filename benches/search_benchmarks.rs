//! Performance benchmarks for the Availability & Filtering Engine.
//!
//! This benchmark suite verifies that search stays fast as the catalog
//! grows:
//! - Single-room availability check: < 1μs mean
//! - Search over 100 rooms / 500 reservations: < 100μs mean
//! - Search over 1000 rooms / 5000 reservations: < 1ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use booking_engine::availability::{ReservationIndex, is_available, search, search_indexed};
use booking_engine::models::{DateRange, Reservation, Room, SearchFilter};

fn date(day_offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 1).unwrap() + chrono::Duration::days(day_offset)
}

fn range(start: i64, len: i64) -> DateRange {
    DateRange::new(date(start), date(start + len)).unwrap()
}

/// Generates a deterministic catalog: prices, capacities, and features
/// cycle so every filter path gets exercised.
fn generate_rooms(count: usize) -> Vec<Room> {
    (0..count)
        .map(|i| Room {
            id: format!("room_{:04}", i),
            title: format!("Room {}", i),
            price_per_night: Decimal::from(50 + (i % 20) as u32 * 10),
            capacity: 1 + (i % 5) as u32,
            features: match i % 3 {
                0 => ["wifi"].iter().map(|f| f.to_string()).collect(),
                1 => ["wifi", "desk"].iter().map(|f| f.to_string()).collect(),
                _ => Default::default(),
            },
            rating: Decimal::new((25 + (i % 26)) as i64, 1),
            location: "Science Park Campus".to_string(),
            description: String::new(),
            images: vec![],
        })
        .collect()
}

/// Generates ~5 reservations per room spread over a year.
fn generate_reservations(rooms: &[Room], per_room: usize) -> Vec<Reservation> {
    let mut reservations = Vec::with_capacity(rooms.len() * per_room);
    for (i, room) in rooms.iter().enumerate() {
        for j in 0..per_room {
            let start = ((i * 7 + j * 60) % 330) as i64;
            reservations.push(Reservation {
                id: format!("res_{}_{}", i, j),
                room_id: room.id.clone(),
                range: range(start, 3),
            });
        }
    }
    reservations
}

fn bench_is_available(c: &mut Criterion) {
    let rooms = generate_rooms(1);
    let reservations = generate_reservations(&rooms, 20);
    let requested = range(100, 4);

    c.bench_function("is_available/20_reservations", |b| {
        b.iter(|| {
            is_available(
                black_box(&rooms[0]),
                black_box(requested),
                black_box(&reservations),
            )
        })
    });
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for &room_count in &[10usize, 100, 1000] {
        let rooms = generate_rooms(room_count);
        let reservations = generate_reservations(&rooms, 5);
        let mut filter = SearchFilter::for_range(range(100, 4));
        filter.min_capacity = 2;
        filter.required_features.insert("wifi".to_string());

        group.throughput(Throughput::Elements(room_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(room_count),
            &room_count,
            |b, _| {
                b.iter(|| search(black_box(&rooms), black_box(&reservations), black_box(&filter)))
            },
        );
    }

    group.finish();
}

fn bench_search_with_prebuilt_index(c: &mut Criterion) {
    let rooms = generate_rooms(1000);
    let reservations = generate_reservations(&rooms, 5);
    let index = ReservationIndex::build(&reservations);
    let filter = SearchFilter::for_range(range(100, 4));

    c.bench_function("search_indexed/1000_rooms", |b| {
        b.iter(|| search_indexed(black_box(&rooms), black_box(&index), black_box(&filter)))
    });
}

fn bench_index_build(c: &mut Criterion) {
    let rooms = generate_rooms(1000);
    let reservations = generate_reservations(&rooms, 5);

    c.bench_function("index_build/5000_reservations", |b| {
        b.iter(|| ReservationIndex::build(black_box(&reservations)))
    });
}

criterion_group!(
    benches,
    bench_is_available,
    bench_search,
    bench_search_with_prebuilt_index,
    bench_index_build
);
criterion_main!(benches);
