//! Async API facade: one function per backend operation.
//!
//! Each call is exactly one build / execute / parse cycle. Failures are
//! logged here and handed back unchanged; deciding what to do about them is
//! the caller's business (the provider falls back, the form handlers show a
//! notice).

use majestea_core::{
    ApiError, GalleryImage, HealthStatus, HttpRequest, HttpResponse, MajesteaClient, MenuCategory,
    NewReview, RemoteRestaurantProfile, Reservation, ReservationConfirmation, ReservationRequest,
    ReservationStatus, Review,
};
use tracing::{debug, error};
use uuid::Uuid;

use crate::transport::Transport;

pub struct SiteApi<T> {
    client: MajesteaClient,
    transport: T,
}

impl<T: Transport> SiteApi<T> {
    pub fn new(backend_url: &str, transport: T) -> Self {
        Self {
            client: MajesteaClient::new(backend_url),
            transport,
        }
    }

    async fn send<R>(
        &self,
        what: &'static str,
        request: Result<HttpRequest, ApiError>,
        parse: impl FnOnce(&MajesteaClient, HttpResponse) -> Result<R, ApiError>,
    ) -> Result<R, ApiError> {
        let result = match request {
            Ok(request) => {
                debug!(method = %request.method, path = %request.path, "sending request");
                match self.transport.execute(request).await {
                    Ok(response) => parse(&self.client, response),
                    Err(err) => Err(err),
                }
            }
            Err(err) => Err(err),
        };
        if let Err(err) = &result {
            error!(%err, "error {what}");
        }
        result
    }

    pub async fn fetch_restaurant_profile(&self) -> Result<RemoteRestaurantProfile, ApiError> {
        let request = self.client.build_get_restaurant();
        self.send("fetching restaurant info", Ok(request), MajesteaClient::parse_get_restaurant)
            .await
    }

    pub async fn fetch_menu(&self) -> Result<Vec<MenuCategory>, ApiError> {
        let request = self.client.build_get_menu();
        self.send("fetching menu", Ok(request), MajesteaClient::parse_get_menu)
            .await
    }

    pub async fn fetch_menu_category(&self, category_id: &str) -> Result<MenuCategory, ApiError> {
        let request = self.client.build_get_menu_category(category_id);
        self.send("fetching menu category", Ok(request), MajesteaClient::parse_get_menu_category)
            .await
    }

    pub async fn fetch_reviews(&self) -> Result<Vec<Review>, ApiError> {
        let request = self.client.build_list_reviews();
        self.send("fetching reviews", Ok(request), MajesteaClient::parse_list_reviews)
            .await
    }

    pub async fn submit_review(&self, review: &NewReview) -> Result<Review, ApiError> {
        let request = self.client.build_create_review(review);
        self.send("creating review", request, MajesteaClient::parse_create_review)
            .await
    }

    /// Mandatory fields are not checked here; see `forms::submit_reservation`.
    pub async fn create_reservation(
        &self,
        reservation: &ReservationRequest,
    ) -> Result<ReservationConfirmation, ApiError> {
        let request = self.client.build_create_reservation(reservation);
        self.send("creating reservation", request, MajesteaClient::parse_create_reservation)
            .await
    }

    pub async fn list_reservations(&self) -> Result<Vec<Reservation>, ApiError> {
        let request = self.client.build_list_reservations();
        self.send("fetching reservations", Ok(request), MajesteaClient::parse_list_reservations)
            .await
    }

    pub async fn get_reservation(&self, id: Uuid) -> Result<Reservation, ApiError> {
        let request = self.client.build_get_reservation(id);
        self.send("fetching reservation", Ok(request), MajesteaClient::parse_get_reservation)
            .await
    }

    pub async fn update_reservation_status(
        &self,
        id: Uuid,
        status: ReservationStatus,
    ) -> Result<ReservationConfirmation, ApiError> {
        let request = self.client.build_update_reservation_status(id, status);
        self.send(
            "updating reservation status",
            Ok(request),
            MajesteaClient::parse_update_reservation_status,
        )
        .await
    }

    pub async fn fetch_gallery(&self) -> Result<Vec<GalleryImage>, ApiError> {
        let request = self.client.build_list_gallery();
        self.send("fetching gallery", Ok(request), MajesteaClient::parse_list_gallery)
            .await
    }

    pub async fn fetch_gallery_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<GalleryImage>, ApiError> {
        let request = self.client.build_list_gallery_by_category(category);
        self.send("fetching gallery by category", Ok(request), MajesteaClient::parse_list_gallery)
            .await
    }

    pub async fn check_health(&self) -> Result<HealthStatus, ApiError> {
        let request = self.client.build_health();
        self.send("checking health", Ok(request), MajesteaClient::parse_health)
            .await
    }
}
