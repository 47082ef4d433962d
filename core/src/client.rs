//! Stateless HTTP request builder and response parser for the Majestea API.
//!
//! # Design
//! `MajesteaClient` holds only the API base URL and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`. The caller executes the actual HTTP round-trip, keeping the
//! core deterministic and free of I/O dependencies.
//!
//! Every request carries `content-type: application/json`, including bodiless
//! GETs, matching what the backend's browser client always sent.

use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{
    CreatedReview, GalleryImage, HealthStatus, MenuCategory, NewReview, RemoteRestaurantProfile,
    Reservation, ReservationConfirmation, ReservationRequest, ReservationStatus, Review,
};
use crate::validate;

/// Synchronous, stateless client for the Majestea API.
#[derive(Debug, Clone)]
pub struct MajesteaClient {
    api_base: String,
}

impl MajesteaClient {
    /// Build a client for the backend at `backend_url`; requests go to
    /// `{backend_url}/api/...`. An empty `backend_url` is accepted and yields
    /// relative paths that no transport can resolve.
    pub fn new(backend_url: &str) -> Self {
        Self {
            api_base: format!("{}/api", backend_url.trim_end_matches('/')),
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn get(&self, path: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}{path}", self.api_base),
            headers: json_headers(),
            body: None,
        }
    }

    fn post<B: Serialize>(&self, path: &str, input: &B) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input)
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}{path}", self.api_base),
            headers: json_headers(),
            body: Some(body),
        })
    }

    // --- restaurant ---

    pub fn build_get_restaurant(&self) -> HttpRequest {
        self.get("/restaurant")
    }

    pub fn parse_get_restaurant(
        &self,
        response: HttpResponse,
    ) -> Result<RemoteRestaurantProfile, ApiError> {
        let profile = decode(response)?;
        validate::check_profile(&profile)?;
        Ok(profile)
    }

    // --- menu ---

    pub fn build_get_menu(&self) -> HttpRequest {
        self.get("/menu")
    }

    pub fn parse_get_menu(&self, response: HttpResponse) -> Result<Vec<MenuCategory>, ApiError> {
        let menu: Vec<MenuCategory> = decode(response)?;
        validate::check_menu(&menu)?;
        Ok(menu)
    }

    /// `category_id` is inserted into the path as is, without percent-encoding;
    /// callers pass plain slugs such as `"desserts"`.
    pub fn build_get_menu_category(&self, category_id: &str) -> HttpRequest {
        self.get(&format!("/menu/{category_id}"))
    }

    pub fn parse_get_menu_category(
        &self,
        response: HttpResponse,
    ) -> Result<MenuCategory, ApiError> {
        let category = decode(response)?;
        validate::check_category(&category)?;
        Ok(category)
    }

    // --- reservations ---

    pub fn build_create_reservation(
        &self,
        input: &ReservationRequest,
    ) -> Result<HttpRequest, ApiError> {
        self.post("/reservations", input)
    }

    pub fn parse_create_reservation(
        &self,
        response: HttpResponse,
    ) -> Result<ReservationConfirmation, ApiError> {
        decode(response)
    }

    pub fn build_list_reservations(&self) -> HttpRequest {
        self.get("/reservations")
    }

    pub fn parse_list_reservations(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<Reservation>, ApiError> {
        decode(response)
    }

    pub fn build_get_reservation(&self, id: Uuid) -> HttpRequest {
        self.get(&format!("/reservations/{id}"))
    }

    pub fn parse_get_reservation(&self, response: HttpResponse) -> Result<Reservation, ApiError> {
        decode(response)
    }

    /// The backend takes the new status as a query parameter, not a body.
    pub fn build_update_reservation_status(
        &self,
        id: Uuid,
        status: ReservationStatus,
    ) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Patch,
            path: format!("{}/reservations/{id}/status?status={status}", self.api_base),
            headers: json_headers(),
            body: None,
        }
    }

    pub fn parse_update_reservation_status(
        &self,
        response: HttpResponse,
    ) -> Result<ReservationConfirmation, ApiError> {
        decode(response)
    }

    // --- reviews ---

    pub fn build_list_reviews(&self) -> HttpRequest {
        self.get("/reviews")
    }

    pub fn parse_list_reviews(&self, response: HttpResponse) -> Result<Vec<Review>, ApiError> {
        let reviews: Vec<Review> = decode(response)?;
        validate::check_reviews(&reviews)?;
        Ok(reviews)
    }

    pub fn build_create_review(&self, input: &NewReview) -> Result<HttpRequest, ApiError> {
        self.post("/reviews", input)
    }

    /// Unwraps the `{success, review}` envelope into the stored review.
    pub fn parse_create_review(&self, response: HttpResponse) -> Result<Review, ApiError> {
        let created: CreatedReview = decode(response)?;
        validate::check_review(&created.review)?;
        Ok(created.review)
    }

    // --- gallery ---

    pub fn build_list_gallery(&self) -> HttpRequest {
        self.get("/gallery")
    }

    /// Like `build_get_menu_category`, `category` must be a plain slug; it is
    /// not percent-encoded.
    pub fn build_list_gallery_by_category(&self, category: &str) -> HttpRequest {
        self.get(&format!("/gallery/{category}"))
    }

    /// Parses both the full gallery and a per-category listing.
    pub fn parse_list_gallery(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<GalleryImage>, ApiError> {
        let images: Vec<GalleryImage> = decode(response)?;
        validate::check_gallery(&images)?;
        Ok(images)
    }

    // --- health ---

    pub fn build_health(&self) -> HttpRequest {
        self.get("/health")
    }

    pub fn parse_health(&self, response: HttpResponse) -> Result<HealthStatus, ApiError> {
        decode(response)
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if (200..300).contains(&response.status) {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

fn decode<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::ValidationError;

    fn client() -> MajesteaClient {
        MajesteaClient::new("http://localhost:8001")
    }

    fn ok(body: &str) -> HttpResponse {
        HttpResponse::new(200, body)
    }

    const PROFILE: &str = r#"{
        "name": "Majestea", "slogan": "s", "address": "a", "phone": "p",
        "email": "e", "instagram": "@m", "google_rating": 4.7, "total_reviews": "2,1k",
        "hours": {
            "monday": {"open": "09:00", "close": "23:00"},
            "tuesday": {"open": "09:00", "close": "23:00"},
            "wednesday": {"open": "09:00", "close": "23:00"},
            "thursday": {"open": "09:00", "close": "23:00"},
            "friday": {"open": "09:00", "close": "23:00"},
            "saturday": {"open": "09:00", "close": "23:00"},
            "sunday": {"open": "09:00", "close": "22:00"}
        },
        "features": ["WiFi gratuit"]
    }"#;

    #[test]
    fn build_get_menu_produces_correct_request() {
        let req = client().build_get_menu();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8001/api/menu");
        assert!(req.body.is_none());
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
    }

    #[test]
    fn build_get_menu_category_embeds_id() {
        let req = client().build_get_menu_category("desserts");
        assert_eq!(req.path, "http://localhost:8001/api/menu/desserts");
    }

    #[test]
    fn build_gallery_by_category_embeds_category() {
        let req = client().build_list_gallery_by_category("terrasse");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8001/api/gallery/terrasse");
    }

    #[test]
    fn build_create_reservation_produces_correct_request() {
        let input = ReservationRequest {
            name: "Alice".to_string(),
            phone: "0600000000".to_string(),
            date: "2025-05-01".to_string(),
            time: "19:00".to_string(),
            guests: "2".to_string(),
            message: Some("Terrasse si possible".to_string()),
            ..Default::default()
        };
        let req = client().build_create_reservation(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8001/api/reservations");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["name"], "Alice");
        assert_eq!(body["message"], "Terrasse si possible");
        assert!(body.get("email").is_none());
    }

    #[test]
    fn build_update_reservation_status_uses_query() {
        let req =
            client().build_update_reservation_status(Uuid::nil(), ReservationStatus::Confirmed);
        assert_eq!(req.method, HttpMethod::Patch);
        assert_eq!(
            req.path,
            "http://localhost:8001/api/reservations/00000000-0000-0000-0000-000000000000/status?status=confirmed"
        );
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_get_restaurant_success() {
        let profile = client().parse_get_restaurant(ok(PROFILE)).unwrap();
        assert_eq!(profile.name, "Majestea");
        assert_eq!(profile.google_rating, 4.7);
        assert_eq!(profile.hours.len(), 7);
    }

    #[test]
    fn parse_get_restaurant_incomplete_week() {
        let mut value: serde_json::Value = serde_json::from_str(PROFILE).unwrap();
        value["hours"].as_object_mut().unwrap().remove("sunday");
        let err = client()
            .parse_get_restaurant(ok(&value.to_string()))
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::InvalidPayload(ValidationError::MissingWeekday(crate::types::Weekday::Sunday))
        ));
    }

    #[test]
    fn parse_get_restaurant_not_found() {
        let err = client()
            .parse_get_restaurant(HttpResponse::new(
                404,
                r#"{"detail":"Restaurant info not found"}"#,
            ))
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound));
    }

    #[test]
    fn parse_get_menu_negative_price() {
        let body = r#"[{"id":"mains","name":"Plats","items":[
            {"id":"1","name":"Burger","price":-2.0,"description":"d"}]}]"#;
        let err = client().parse_get_menu(ok(body)).unwrap_err();
        assert!(matches!(
            err,
            ApiError::InvalidPayload(ValidationError::NegativePrice { .. })
        ));
    }

    #[test]
    fn parse_get_menu_server_error() {
        let err = client()
            .parse_get_menu(HttpResponse::new(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
    }

    #[test]
    fn parse_list_reviews_rating_out_of_range() {
        let body = r#"[{"id":"1","name":"A","rating":6,"date":"d","comment":"c","avatar":"A"}]"#;
        let err = client().parse_list_reviews(ok(body)).unwrap_err();
        assert!(matches!(
            err,
            ApiError::InvalidPayload(ValidationError::RatingOutOfRange(6))
        ));
    }

    #[test]
    fn parse_create_review_unwraps_envelope() {
        let body = r#"{"success":true,"review":{"id":"abc","name":"Léa","rating":5,
            "date":"Aujourd'hui","comment":"Top","avatar":"L"}}"#;
        let review = client()
            .parse_create_review(HttpResponse::new(201, body))
            .unwrap();
        assert_eq!(review.id, "abc");
        assert_eq!(review.date, "Aujourd'hui");
    }

    #[test]
    fn parse_create_reservation_ignores_extra_fields() {
        let body = r#"{"success":true,"message":"ok","reservation":{"id":"x"}}"#;
        let confirmation = client()
            .parse_create_reservation(HttpResponse::new(201, body))
            .unwrap();
        assert_eq!(
            confirmation,
            ReservationConfirmation {
                success: true,
                message: "ok".to_string()
            }
        );
    }

    #[test]
    fn parse_list_gallery_bad_json() {
        let err = client().parse_list_gallery(ok("not json")).unwrap_err();
        assert!(matches!(err, ApiError::DeserializationError(_)));
    }

    #[test]
    fn parse_health_is_opaque() {
        let status = client()
            .parse_health(ok(r#"{"status":"healthy","database":"connected"}"#))
            .unwrap();
        assert_eq!(status["status"], "healthy");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = MajesteaClient::new("http://localhost:8001/");
        assert_eq!(client.build_list_reviews().path, "http://localhost:8001/api/reviews");
    }

    #[test]
    fn empty_backend_yields_relative_paths() {
        let client = MajesteaClient::new("");
        assert_eq!(client.api_base(), "/api");
        assert_eq!(client.build_health().path, "/api/health");
    }
}
