//! pyqdash-server
//!
//! HTTP front of the study dashboard: serves the chapter dataset as JSON.
//! Filtering, sorting, and facet extraction happen client-side in the view
//! engine, so the API surface is a single read-only resource.

pub mod routes;

pub use routes::{build_router, AppState, SharedState};
