//! API integration tests driving the router in-process

mod common;

use axum::http::StatusCode;
use common::{parse_body, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_body(response).await;
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_root_info() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_body(response).await;
    assert_eq!(body["message"], "Staycation API is running");
    assert_eq!(body["project"], "Staycation Hotel Booking System");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_readiness_check() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/ready", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = parse_body(response).await;
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_room_create_get_delete_roundtrip() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/rooms",
            Some(json!({"title": "Test Room", "price": 50.0})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = parse_body(response).await;
    let id = created["id"].as_i64().unwrap();
    assert!(id >= 1);
    assert_eq!(created["title"], "Test Room");
    assert_eq!(created["price"], 50.0);
    assert!(created["status"].is_null());
    assert!(created["type"].is_null());
    assert!(created["capacity"].is_null());

    let response = app.request("GET", &format!("/api/rooms/{id}"), None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched = parse_body(response).await;
    assert_eq!(fetched, created);

    let response = app
        .request("DELETE", &format!("/api/rooms/{id}"), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_body(response).await;
    assert_eq!(body, json!({"detail": "deleted"}));

    let response = app.request("GET", &format!("/api/rooms/{id}"), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_unknown_room_returns_404() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/rooms/999", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = parse_body(response).await;
    assert_eq!(body["detail"], "Room not found");
}

#[tokio::test]
async fn test_delete_is_not_idempotent() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/rooms",
            Some(json!({"title": "Short Lived", "price": 10.0})),
        )
        .await;
    let id = parse_body(response).await["id"].as_i64().unwrap();

    let response = app
        .request("DELETE", &format!("/api/rooms/{id}"), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .request("DELETE", &format!("/api/rooms/{id}"), None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_room_update_replaces_whole_record() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/rooms",
            Some(json!({
                "title": "Garden View",
                "price": 120.0,
                "type": "Double",
                "capacity": 3,
                "status": "available",
                "description": "Overlooks the garden"
            })),
        )
        .await;
    let id = parse_body(response).await["id"].as_i64().unwrap();

    // Fields absent from the replacement payload are cleared, not retained
    let response = app
        .request(
            "PUT",
            &format!("/api/rooms/{id}"),
            Some(json!({"title": "Garden View Renovated", "price": 150.0})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.request("GET", &format!("/api/rooms/{id}"), None).await;
    let room = parse_body(response).await;
    assert_eq!(room["title"], "Garden View Renovated");
    assert_eq!(room["price"], 150.0);
    assert!(room["type"].is_null());
    assert!(room["capacity"].is_null());
    assert!(room["status"].is_null());
    assert!(room["description"].is_null());
}

#[tokio::test]
async fn test_update_unknown_room_returns_404() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "PUT",
            "/api/rooms/42",
            Some(json!({"title": "Ghost", "price": 1.0})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_room_create_with_explicit_id() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/rooms",
            Some(json!({"id": 42, "title": "Legacy Room", "price": 10.0})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(parse_body(response).await["id"], 42);

    // The same id a second time is rejected
    let response = app
        .request(
            "POST",
            "/api/rooms",
            Some(json!({"id": 42, "title": "Impostor", "price": 20.0})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(parse_body(response).await["detail"], "ID already exists");

    // Ids assigned afterwards keep increasing past the explicit one
    let response = app
        .request(
            "POST",
            "/api/rooms",
            Some(json!({"title": "Next Room", "price": 30.0})),
        )
        .await;
    assert!(parse_body(response).await["id"].as_i64().unwrap() > 42);
}

#[tokio::test]
async fn test_room_missing_required_field_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/rooms", Some(json!({"price": 50.0})))
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_list_rooms_in_insertion_order() {
    let app = TestApp::new().await;

    for title in ["First", "Second", "Third"] {
        app.request(
            "POST",
            "/api/rooms",
            Some(json!({"title": title, "price": 10.0})),
        )
        .await;
    }

    let response = app.request("GET", "/api/rooms", None).await;
    let rooms = parse_body(response).await;
    let titles: Vec<&str> = rooms
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);

    let ids: Vec<i64> = rooms
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn test_booking_crud() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/bookings",
            Some(json!({
                "guest_name": "Jane Doe",
                "room": "Deluxe Suite",
                "checkin": "Jan 2, 2025",
                "checkout": "Jan 5, 2025",
                "status": "Pending",
                "nights": 3,
                "total": 597.0
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = parse_body(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["guest_name"], "Jane Doe");
    assert_eq!(created["nights"], 3);

    let response = app
        .request(
            "PUT",
            &format!("/api/bookings/{id}"),
            Some(json!({
                "guest_name": "Jane Doe",
                "room": "Deluxe Suite",
                "checkin": "Jan 2, 2025",
                "checkout": "Jan 6, 2025",
                "status": "Confirmed",
                "nights": 4,
                "total": 796.0
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = parse_body(response).await;
    assert_eq!(updated["status"], "Confirmed");
    assert_eq!(updated["nights"], 4);

    let response = app
        .request("DELETE", &format!("/api/bookings/{id}"), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .request("GET", &format!("/api/bookings/{id}"), None)
        .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(parse_body(response).await["detail"], "Booking not found");
}

#[tokio::test]
async fn test_booking_missing_guest_name_creates_nothing() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/bookings", Some(json!({"room": "Deluxe Suite"})))
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = app.request("GET", "/api/bookings", None).await;
    let bookings = parse_body(response).await;
    assert_eq!(bookings.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_booking_survives_room_deletion() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/rooms",
            Some(json!({"title": "Seaside Suite", "price": 250.0})),
        )
        .await;
    let room_id = parse_body(response).await["id"].as_i64().unwrap();

    let response = app
        .request(
            "POST",
            "/api/bookings",
            Some(json!({"guest_name": "Jane Doe", "room": "Seaside Suite"})),
        )
        .await;
    let booking_id = parse_body(response).await["id"].as_i64().unwrap();

    app.request("DELETE", &format!("/api/rooms/{room_id}"), None)
        .await;

    // The booking keeps its snapshot of the room title
    let response = app
        .request("GET", &format!("/api/bookings/{booking_id}"), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(parse_body(response).await["room"], "Seaside Suite");
}

#[tokio::test]
async fn test_user_crud() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/users",
            Some(json!({
                "username": "alice",
                "email": "alice@example.com",
                "full_name": "Alice Example"
            })),
        )
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = parse_body(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["username"], "alice");

    let response = app
        .request(
            "PUT",
            &format!("/api/users/{id}"),
            Some(json!({"username": "alice"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = parse_body(response).await;
    // Whole-record replacement clears the fields left out of the payload
    assert!(updated["email"].is_null());
    assert!(updated["full_name"].is_null());

    let response = app
        .request("DELETE", &format!("/api/users/{id}"), None)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.request("GET", &format!("/api/users/{id}"), None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_username_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/users", Some(json!({"username": "alice"})))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .request("POST", "/api/users", Some(json!({"username": "alice"})))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Usernames are compared case-sensitively
    let response = app
        .request("POST", "/api/users", Some(json!({"username": "Alice"})))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .request("POST", "/api/users", Some(json!({"username": "bob"})))
        .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn test_update_to_taken_username_rejected() {
    let app = TestApp::new().await;

    app.request("POST", "/api/users", Some(json!({"username": "alice"})))
        .await;
    let response = app
        .request("POST", "/api/users", Some(json!({"username": "bob"})))
        .await;
    let bob_id = parse_body(response).await["id"].as_i64().unwrap();

    let response = app
        .request(
            "PUT",
            &format!("/api/users/{bob_id}"),
            Some(json!({"username": "alice"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Keeping one's own username is not a conflict
    let response = app
        .request(
            "PUT",
            &format!("/api/users/{bob_id}"),
            Some(json!({"username": "bob", "email": "bob@example.com"})),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
}
