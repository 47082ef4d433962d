use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, GalleryImage, MenuCategory, Reservation, Review, Store};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

const RESERVATION: &str =
    r#"{"name":"Alice","phone":"0600000000","date":"2025-05-01","time":"19:00","guests":"2"}"#;

// --- root / health ---

#[tokio::test]
async fn root_welcomes() {
    let resp = app().oneshot(get("/api")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["version"], "1.0.0");
}

#[tokio::test]
async fn health_reports_connected() {
    let resp = app().oneshot(get("/api/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
    assert!(body["timestamp"].is_string());
}

// --- restaurant ---

#[tokio::test]
async fn restaurant_uses_snake_case() {
    let resp = app().oneshot(get("/api/restaurant")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["name"], "Majestea");
    assert!(body["google_rating"].is_number());
    assert!(body.get("googleRating").is_none());
}

#[tokio::test]
async fn restaurant_missing_returns_404() {
    let resp = app_with(Store::default())
        .oneshot(get("/api/restaurant"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["detail"], "Restaurant info not found");
}

// --- menu ---

#[tokio::test]
async fn menu_lists_categories_in_order() {
    let resp = app().oneshot(get("/api/menu")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let menu: Vec<MenuCategory> = body_json(resp).await;
    let ids: Vec<&str> = menu.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["mains", "starters", "desserts"]);
}

#[tokio::test]
async fn menu_category_by_id() {
    let resp = app().oneshot(get("/api/menu/starters")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let category: MenuCategory = body_json(resp).await;
    assert_eq!(category.name, "Entrées");
    assert_eq!(category.items.len(), 2);
}

#[tokio::test]
async fn menu_category_not_found() {
    let resp = app().oneshot(get("/api/menu/brunch")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- reservations ---

#[tokio::test]
async fn create_reservation_returns_201() {
    let resp = app()
        .oneshot(json_request("POST", "/api/reservations", RESERVATION))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["success"], true);
    assert!(body["message"].as_str().unwrap().contains("succès"));
    assert_eq!(body["reservation"]["status"], "pending");
    assert!(body["reservation"]["email"].is_null());
}

#[tokio::test]
async fn create_reservation_missing_name_returns_422() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/reservations",
            r#"{"phone":"0600000000","date":"2025-05-01","time":"19:00","guests":"2"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn get_reservation_bad_uuid_returns_400() {
    let resp = app()
        .oneshot(get("/api/reservations/not-a-uuid"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_status_unknown_reservation_returns_404() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri("/api/reservations/00000000-0000-0000-0000-000000000000/status?status=confirmed")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- reviews ---

#[tokio::test]
async fn create_review_sets_date_and_avatar() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/reviews",
            r#"{"name":"léa","rating":5,"comment":"Parfait"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["success"], true);
    let review: Review = serde_json::from_value(body["review"].clone()).unwrap();
    assert_eq!(review.date, "Aujourd'hui");
    assert_eq!(review.avatar, "L");
}

#[tokio::test]
async fn create_review_rating_out_of_range_returns_422() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/reviews",
            r#"{"name":"Léa","rating":6,"comment":"Trop bien"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// --- gallery ---

#[tokio::test]
async fn gallery_filters_by_category() {
    let resp = app().oneshot(get("/api/gallery/terrasse")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let images: Vec<GalleryImage> = body_json(resp).await;
    assert_eq!(images.len(), 1);
    assert_eq!(images[0].category, "terrasse");
}

#[tokio::test]
async fn gallery_unknown_category_is_empty() {
    let resp = app().oneshot(get("/api/gallery/cuisine")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await.as_ref(), b"[]");
}

// --- full reservation lifecycle ---

#[tokio::test]
async fn reservation_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create two; the second should be listed first
    let mut ids = Vec::new();
    for name in ["Alice", "Bruno"] {
        let body = RESERVATION.replace("Alice", name);
        let resp = ServiceExt::ready(&mut app)
            .await
            .unwrap()
            .call(json_request("POST", "/api/reservations", &body))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: serde_json::Value = body_json(resp).await;
        let reservation: Reservation =
            serde_json::from_value(created["reservation"].clone()).unwrap();
        ids.push(reservation.id);
    }

    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get("/api/reservations"))
        .await
        .unwrap();
    let listed: Vec<Reservation> = body_json(resp).await;
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].name, "Bruno");
    assert_eq!(listed[1].name, "Alice");

    // invalid status
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .method("PATCH")
                .uri(&format!("/api/reservations/{}/status?status=seated", ids[0]))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // confirm the first one
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(
            Request::builder()
                .method("PATCH")
                .uri(&format!("/api/reservations/{}/status?status=confirmed", ids[0]))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Reservation status updated to confirmed");

    // fetch it back
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(get(&format!("/api/reservations/{}", ids[0])))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Reservation = body_json(resp).await;
    assert_eq!(fetched.name, "Alice");
    assert_eq!(fetched.status, "confirmed");
}
