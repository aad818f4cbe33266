//! HTTP API module for the Availability & Filtering Engine.
//!
//! A thin axum adapter over the library: it parses requests into domain
//! values, takes a catalog snapshot, runs the engine, and serializes the
//! results. No engine logic lives here.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::SearchRequest;
pub use response::ApiError;
pub use state::AppState;
