//! Domain DTOs for the Majestea API.
//!
//! # Design
//! These types mirror the backend's schema but are defined independently from
//! the mock-server crate; integration tests catch any schema drift between the
//! two. The one place where the wire shape and the internal shape diverge is
//! the restaurant profile: the backend sends `google_rating` / `total_reviews`
//! while consumers read `googleRating` / `totalReviews`, so there are two
//! structs and a `From` conversion between them.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Day of the week used as a key in the opening hours map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];
}

/// Opening and closing time of one day, as `HH:MM` display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningHours {
    pub open: String,
    pub close: String,
}

pub type WeeklyHours = BTreeMap<Weekday, OpeningHours>;

/// Restaurant profile in the shape consumers read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantProfile {
    pub name: String,
    pub slogan: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub instagram: String,
    pub google_rating: f64,
    pub total_reviews: String,
    pub hours: WeeklyHours,
    pub features: Vec<String>,
}

/// Restaurant profile as sent by `GET /api/restaurant`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteRestaurantProfile {
    pub name: String,
    pub slogan: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub instagram: String,
    pub google_rating: f64,
    pub total_reviews: String,
    pub hours: WeeklyHours,
    pub features: Vec<String>,
}

impl From<RemoteRestaurantProfile> for RestaurantProfile {
    fn from(remote: RemoteRestaurantProfile) -> Self {
        Self {
            name: remote.name,
            slogan: remote.slogan,
            address: remote.address,
            phone: remote.phone,
            email: remote.email,
            instagram: remote.instagram,
            google_rating: remote.google_rating,
            total_reviews: remote.total_reviews,
            hours: remote.hours,
            features: remote.features,
        }
    }
}

/// A dish on the menu. Prices are currency-agnostic decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    pub price: f64,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

/// A published customer review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    pub rating: u8,
    pub date: String,
    pub comment: String,
    pub avatar: String,
}

/// Request payload for `POST /api/reviews`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReview {
    pub name: String,
    pub rating: u8,
    pub comment: String,
}

/// Envelope returned by `POST /api/reviews`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CreatedReview {
    pub review: Review,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub src: String,
    pub alt: String,
    pub category: String,
}

/// Request payload for `POST /api/reservations`. `email` and `message` are
/// omitted from the JSON when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub guests: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Acknowledgement returned by reservation writes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationConfirmation {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl ReservationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReservationStatus::Pending => "pending",
            ReservationStatus::Confirmed => "confirmed",
            ReservationStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reservation as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Uuid,
    #[serde(flatten)]
    pub request: ReservationRequest,
    pub status: ReservationStatus,
    pub created_at: String,
}

/// Liveness payload of `GET /api/health`; its shape is not part of the contract.
pub type HealthStatus = serde_json::Value;

/// Ids are strings on the backend but plain integers in older payloads.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(u64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Number(n) => n.to_string(),
    })
}
