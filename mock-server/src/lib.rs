//! In-memory stand-in for the Majestea backend.
//!
//! Serves the same `/api` surface as the real service so the site client can
//! be exercised end to end. State lives in an `Arc<RwLock<Store>>` and is lost
//! when the router is dropped.

pub mod seed;

use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Hours {
    pub open: String,
    pub close: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RestaurantInfo {
    pub name: String,
    pub slogan: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub instagram: String,
    pub google_rating: f64,
    pub total_reviews: String,
    pub hours: BTreeMap<String, Hours>,
    pub features: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub category_id: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MenuCategory {
    pub id: String,
    pub name: String,
    pub items: Vec<MenuItem>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub name: String,
    pub rating: u8,
    pub date: String,
    pub comment: String,
    pub avatar: String,
}

#[derive(Deserialize)]
pub struct ReviewCreate {
    pub name: String,
    pub rating: u8,
    pub comment: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: String,
    pub src: String,
    pub alt: String,
    pub category: String,
}

#[derive(Deserialize)]
pub struct ReservationCreate {
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub guests: String,
    pub message: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Reservation {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub guests: String,
    pub message: Option<String>,
    pub status: String,
    pub created_at: String,
}

/// Error body in the `{"detail": ...}` form the real backend uses.
#[derive(Debug, Serialize, Deserialize)]
pub struct Detail {
    pub detail: String,
}

type Rejection = (StatusCode, Json<Detail>);

fn reject(status: StatusCode, detail: &str) -> Rejection {
    (
        status,
        Json(Detail {
            detail: detail.to_string(),
        }),
    )
}

const STATUSES: [&str; 3] = ["pending", "confirmed", "cancelled"];

#[derive(Clone, Debug, Default)]
pub struct Store {
    pub restaurant: Option<RestaurantInfo>,
    pub menu: Vec<MenuCategory>,
    pub reviews: Vec<Review>,
    pub gallery: Vec<GalleryImage>,
    /// Insertion order; listed newest first.
    pub reservations: Vec<Reservation>,
}

impl Store {
    pub fn seeded() -> Self {
        Self {
            restaurant: Some(seed::restaurant()),
            menu: seed::menu(),
            reviews: seed::reviews(),
            gallery: seed::gallery(),
            reservations: Vec::new(),
        }
    }
}

pub type Db = Arc<RwLock<Store>>;

/// Router over the seeded store.
pub fn app() -> Router {
    app_with(Store::seeded())
}

pub fn app_with(store: Store) -> Router {
    let db: Db = Arc::new(RwLock::new(store));
    let api = Router::new()
        .route("/", get(root))
        .route("/restaurant", get(get_restaurant))
        .route("/menu", get(get_menu))
        .route("/menu/{category_id}", get(get_menu_category))
        .route("/reservations", get(list_reservations).post(create_reservation))
        .route("/reservations/{id}", get(get_reservation))
        .route("/reservations/{id}/status", patch(update_reservation_status))
        .route("/reviews", get(list_reviews).post(create_review))
        .route("/gallery", get(list_gallery))
        .route("/gallery/{category}", get(list_gallery_by_category))
        .route("/health", get(health));
    Router::new().nest("/api", api).with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// First letter of the author's name, uppercased; `?` for an empty name.
pub fn avatar_for(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Bienvenue sur l'API Majestea",
        "version": "1.0.0",
    }))
}

async fn get_restaurant(State(db): State<Db>) -> Result<Json<RestaurantInfo>, Rejection> {
    let store = db.read().await;
    store
        .restaurant
        .clone()
        .map(Json)
        .ok_or_else(|| reject(StatusCode::NOT_FOUND, "Restaurant info not found"))
}

async fn get_menu(State(db): State<Db>) -> Json<Vec<MenuCategory>> {
    Json(db.read().await.menu.clone())
}

async fn get_menu_category(
    State(db): State<Db>,
    Path(category_id): Path<String>,
) -> Result<Json<MenuCategory>, Rejection> {
    let store = db.read().await;
    store
        .menu
        .iter()
        .find(|c| c.id == category_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| reject(StatusCode::NOT_FOUND, "Category not found"))
}

async fn create_reservation(
    State(db): State<Db>,
    Json(input): Json<ReservationCreate>,
) -> (StatusCode, Json<serde_json::Value>) {
    let reservation = Reservation {
        id: Uuid::new_v4(),
        name: input.name,
        email: input.email,
        phone: input.phone,
        date: input.date,
        time: input.time,
        guests: input.guests,
        message: input.message,
        status: "pending".to_string(),
        created_at: chrono::Utc::now().to_rfc3339(),
    };
    db.write().await.reservations.push(reservation.clone());
    info!(id = %reservation.id, "new reservation created");
    (
        StatusCode::CREATED,
        Json(serde_json::json!({
            "success": true,
            "message": "Votre demande de réservation a été envoyée avec succès !",
            "reservation": reservation,
        })),
    )
}

async fn list_reservations(State(db): State<Db>) -> Json<Vec<Reservation>> {
    let store = db.read().await;
    Json(store.reservations.iter().rev().cloned().collect())
}

async fn get_reservation(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
) -> Result<Json<Reservation>, Rejection> {
    let store = db.read().await;
    store
        .reservations
        .iter()
        .find(|r| r.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| reject(StatusCode::NOT_FOUND, "Reservation not found"))
}

#[derive(Deserialize)]
pub struct StatusQuery {
    pub status: String,
}

async fn update_reservation_status(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<serde_json::Value>, Rejection> {
    if !STATUSES.contains(&query.status.as_str()) {
        return Err(reject(StatusCode::BAD_REQUEST, "Invalid status"));
    }
    let mut store = db.write().await;
    let reservation = store
        .reservations
        .iter_mut()
        .find(|r| r.id == id)
        .ok_or_else(|| reject(StatusCode::NOT_FOUND, "Reservation not found"))?;
    reservation.status = query.status.clone();
    Ok(Json(serde_json::json!({
        "success": true,
        "message": format!("Reservation status updated to {}", query.status),
    })))
}

async fn list_reviews(State(db): State<Db>) -> Json<Vec<Review>> {
    Json(db.read().await.reviews.clone())
}

async fn create_review(
    State(db): State<Db>,
    Json(input): Json<ReviewCreate>,
) -> Result<(StatusCode, Json<serde_json::Value>), Rejection> {
    if !(1..=5).contains(&input.rating) {
        return Err(reject(
            StatusCode::UNPROCESSABLE_ENTITY,
            "rating must be between 1 and 5",
        ));
    }
    let review = Review {
        id: Uuid::new_v4().to_string(),
        avatar: avatar_for(&input.name),
        name: input.name,
        rating: input.rating,
        date: "Aujourd'hui".to_string(),
        comment: input.comment,
    };
    db.write().await.reviews.push(review.clone());
    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({ "success": true, "review": review })),
    ))
}

async fn list_gallery(State(db): State<Db>) -> Json<Vec<GalleryImage>> {
    Json(db.read().await.gallery.clone())
}

async fn list_gallery_by_category(
    State(db): State<Db>,
    Path(category): Path<String>,
) -> Json<Vec<GalleryImage>> {
    let store = db.read().await;
    Json(
        store
            .gallery
            .iter()
            .filter(|img| img.category == category)
            .cloned()
            .collect(),
    )
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "database": "connected",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
