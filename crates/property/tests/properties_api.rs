use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use property::{config::Config, handler::AppRouter, state::AppState};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app_with(config: Config) -> Router {
    AppRouter::build(AppState::new(&config).unwrap())
}

fn app() -> Router {
    app_with(Config::default())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(payload) => {
            request = request.header("content-type", "application/json");
            Body::from(payload.to_string())
        }
        None => Body::empty(),
    };

    let res = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = res.status();
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn create(app: &Router, title: &str, status: Option<&str>) -> Value {
    let mut payload = json!({ "title": title, "address": "1 Main St", "price": 250000 });
    if let Some(status) = status {
        payload["status"] = json!(status);
    }

    let (code, body) = send(app, "POST", "/properties", Some(payload)).await;
    assert_eq!(code, StatusCode::CREATED);
    body["property"].clone()
}

#[tokio::test]
async fn flat_a_lifecycle() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/properties",
        Some(json!({ "title": "Flat A", "address": "1 Main St", "price": 100000 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["property"]["id"], json!(1));
    assert_eq!(body["property"]["status"], json!("available"));
    assert_eq!(body["property"]["description"], json!(""));
    assert_eq!(body["property"]["price"], json!(100000));

    let (status, body) = send(&app, "GET", "/properties?status=sold", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], json!(0));
    assert_eq!(body["total"], json!(0));
    assert_eq!(body["properties"], json!([]));

    let (status, body) = send(&app, "PUT", "/properties/1", Some(json!({ "status": "sold" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["property"]["status"], json!("sold"));
    assert_eq!(body["property"]["title"], json!("Flat A"));
    let updated = body["property"].clone();

    let (status, body) = send(&app, "GET", "/properties?status=sold", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], json!(1));
    assert_eq!(body["properties"], json!([updated]));
}

#[tokio::test]
async fn created_properties_get_increasing_ids_and_matching_timestamps() {
    let app = app();

    let first = create(&app, "One", None).await;
    let second = create(&app, "Two", None).await;

    assert_eq!(first["id"], json!(1));
    assert_eq!(second["id"], json!(2));
    assert_eq!(first["createdAt"], first["updatedAt"]);
    assert!(first["createdAt"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn listing_reports_page_and_filtered_total() {
    let app = app();
    for (title, status) in [("A", "available"), ("B", "sold"), ("C", "available"), ("D", "available")] {
        create(&app, title, Some(status)).await;
    }

    let (status, body) = send(&app, "GET", "/properties?status=available&limit=2&offset=1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], json!(2));
    assert_eq!(body["total"], json!(3));
    assert_eq!(body["limit"], json!(2));
    assert_eq!(body["offset"], json!(1));
    let titles: Vec<&str> = body["properties"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["C", "D"]);

    let (_, body) = send(&app, "GET", "/properties", None).await;
    assert_eq!(body["count"], json!(4));
    assert_eq!(body["limit"], Value::Null);
    assert_eq!(body["offset"], json!(0));
}

#[tokio::test]
async fn offset_past_the_end_is_an_empty_page() {
    let app = app();
    create(&app, "A", None).await;

    let (status, body) = send(&app, "GET", "/properties?offset=5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], json!(0));
    assert_eq!(body["total"], json!(1));
    assert_eq!(body["properties"], json!([]));
}

#[tokio::test]
async fn zero_limit_is_rejected() {
    let app = app();

    let (status, body) = send(&app, "GET", "/properties?limit=0", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "success": false, "error": "Limit must be a positive number" })
    );
}

#[tokio::test]
async fn negative_limit_fails_query_validation() {
    let app = app();

    let (status, body) = send(&app, "GET", "/properties?limit=-1", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Query validation failed"));
    assert_eq!(body["details"], json!([{ "field": "limit", "message": "Invalid" }]));
}

#[tokio::test]
async fn unknown_status_filter_names_the_field() {
    let app = app();

    let (status, body) = send(&app, "GET", "/properties?status=demolished", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"][0]["field"], json!("status"));
}

#[tokio::test]
async fn invalid_create_lists_every_violation() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/properties",
        Some(json!({ "title": "", "price": -5, "status": "gone" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "success": false,
            "error": "Validation failed",
            "details": [
                { "field": "title", "message": "Title is required" },
                { "field": "address", "message": "Required" },
                { "field": "price", "message": "Price must be a positive number" },
                { "field": "status", "message": "Status must be one of: available, sold, pending, rented" }
            ]
        })
    );
}

#[tokio::test]
async fn lookup_by_id() {
    let app = app();
    let created = create(&app, "Loft", None).await;

    let (status, body) = send(&app, "GET", "/properties/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["property"], created);

    let (status, _) = send(&app, "GET", "/properties/1abc", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, "GET", "/properties/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "success": false, "error": "Property not found" }));
}

#[tokio::test]
async fn update_keeps_identity_and_coerces_price() {
    let app = app();
    let created = create(&app, "Loft", None).await;

    let (status, body) = send(
        &app,
        "PUT",
        "/properties/1",
        Some(json!({ "price": "12.5", "id": 99, "createdAt": "yesterday" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let updated = &body["property"];
    assert_eq!(updated["price"], json!(12.5));
    assert_eq!(updated["id"], created["id"]);
    assert_eq!(updated["createdAt"], created["createdAt"]);
    assert!(updated["updatedAt"].as_str().unwrap() > created["updatedAt"].as_str().unwrap());
}

#[tokio::test]
async fn empty_update_only_refreshes_the_timestamp() {
    let app = app();
    let created = create(&app, "Loft", None).await;

    let (status, body) = send(&app, "PUT", "/properties/1", Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["property"]["title"], created["title"]);
    assert_ne!(body["property"]["updatedAt"], created["updatedAt"]);
}

#[tokio::test]
async fn update_of_missing_property_is_not_found() {
    let app = app();

    let (status, body) = send(&app, "PUT", "/properties/42", Some(json!({ "title": "X" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Property not found"));

    let (status, _) = send(&app, "PUT", "/properties/42", Some(json!({ "price": -1 }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_update_of_existing_property_is_rejected() {
    let app = app();
    create(&app, "Loft", None).await;

    let (status, body) = send(&app, "PUT", "/properties/1", Some(json!({ "title": "", "status": "gone" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["details"],
        json!([
            { "field": "title", "message": "Title must be at least 1 character" },
            { "field": "status", "message": "Status must be one of: available, sold, pending, rented" }
        ])
    );
}

#[tokio::test]
async fn deleting_twice_is_not_found_the_second_time() {
    let app = app();
    create(&app, "Loft", None).await;

    let (status, body) = send(&app, "DELETE", "/properties/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "success": true, "message": "Property deleted successfully" })
    );

    let (status, _) = send(&app, "DELETE", "/properties/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let next = create(&app, "Studio", None).await;
    assert_eq!(next["id"], json!(2));
}

#[tokio::test]
async fn input_is_sanitized_by_default() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/properties",
        Some(json!({ "title": "  <b>Flat</b> ", "address": "1 Main St", "price": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["property"]["title"], json!("bFlat/b"));

    let (status, body) = send(&app, "GET", "/properties/%3C1%3E", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["property"]["id"], json!(1));
}

#[tokio::test]
async fn sanitization_can_be_switched_off() {
    let app = app_with(Config {
        sanitize_property_routes: false,
        ..Config::default()
    });

    let (status, body) = send(
        &app,
        "POST",
        "/properties",
        Some(json!({ "title": "<b>Flat</b>", "address": "1 Main St", "price": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["property"]["title"], json!("<b>Flat</b>"));
}

#[tokio::test]
async fn oversized_bodies_are_rejected() {
    let app = app_with(Config {
        body_limit_bytes: 64,
        ..Config::default()
    });

    let request = Request::builder()
        .method("POST")
        .uri("/properties")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "title": "x".repeat(200), "address": "a", "price": 1 }).to_string()))
        .unwrap();

    let res = app.oneshot(request).await.unwrap();
    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn huge_window_bounds_are_clamped() {
    let app = app();
    create(&app, "A", None).await;
    create(&app, "B", None).await;

    let (status, body) = send(&app, "GET", "/properties?limit=9223372036854775808", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], json!(2));
    assert_eq!(body["limit"], json!(i64::MAX));

    let (status, body) = send(&app, "GET", "/properties?offset=18446744073709551615", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], json!(0));
    assert_eq!(body["total"], json!(2));
    assert_eq!(body["properties"], json!([]));
}

#[tokio::test]
async fn unknown_query_keys_do_not_block_filtering() {
    let app = app();
    create(&app, "A", Some("available")).await;
    create(&app, "B", Some("sold")).await;

    let (status, body) = send(
        &app,
        "GET",
        "/properties?status=available&foo=bar&foo=baz",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], json!(1));
    assert_eq!(body["total"], json!(1));
    assert_eq!(body["properties"][0]["title"], json!("A"));
}

async fn scrape_metrics(app: &Router) -> String {
    let res = app
        .clone()
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn updates_are_counted_as_puts_only() {
    let app = app();
    create(&app, "Loft", None).await;

    let (status, _) = send(&app, "PUT", "/properties/1", Some(json!({ "title": "Attic" }))).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "PUT", "/properties/7", Some(json!({ "title": "Attic" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let text = scrape_metrics(&app).await;
    assert!(text.contains("method=\"Put\",status=\"Success\""));
    assert!(text.contains("method=\"Put\",status=\"Error\""));
    assert!(!text.contains("method=\"Get\""));
}

#[tokio::test]
async fn metrics_count_handled_requests() {
    let app = app();
    create(&app, "Loft", None).await;

    let text = scrape_metrics(&app).await;
    assert!(text.contains("property_service_request_counter_total"));
    assert!(text.contains("method=\"Post\""));
}

#[tokio::test]
async fn openapi_document_lists_property_routes() {
    let app = app();

    let (status, body) = send(&app, "GET", "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/properties"].is_object());
    assert!(body["paths"]["/properties/{id}"]["put"].is_object());
}
