//! Synchronous API client core for the Majestea restaurant site.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). The caller executes the
//! actual HTTP round-trip, making the core fully deterministic and testable.
//!
//! # Design
//! - `MajesteaClient` is stateless; it holds only the API base URL.
//! - Each operation is split into `build_*` (produces request) and `parse_*`
//!   (consumes response), so the I/O boundary is explicit.
//! - Parsing enforces the data-model invariants (`validate`), so a payload
//!   that decodes but is nonsensical fails like a malformed one.
//! - `fallback` carries the bundled content shown when the backend is
//!   unreachable.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod error;
pub mod fallback;
pub mod http;
pub mod types;
pub mod validate;

pub use client::MajesteaClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{
    GalleryImage, HealthStatus, MenuCategory, MenuItem, NewReview, OpeningHours,
    RemoteRestaurantProfile, Reservation, ReservationConfirmation, ReservationRequest,
    ReservationStatus, RestaurantProfile, Review, Weekday, WeeklyHours,
};
pub use validate::ValidationError;
