use axum::http::StatusCode;
use serde_json::json;

mod helpers;

#[tokio::test]
async fn test_api_root_reports_running() {
    let app = helpers::spawn_app().await;

    for uri in ["/api", "/api/"] {
        let response = app.get(uri).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            helpers::body_json(response).await,
            json!({"message": "SEA WORTH TRADERS API", "status": "running"})
        );
    }
}

#[tokio::test]
async fn test_create_inquiry() {
    let app = helpers::spawn_app().await;

    let response = app
        .post_json(
            "/api/inquiries",
            json!({"name": "A", "email": "a@x.com", "subject": "S", "message": "M"}),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        helpers::body_json(response).await,
        json!({
            "status": "success",
            "message": "Your inquiry has been submitted successfully. We will contact you soon!"
        })
    );

    let count = helpers::body_json(app.get("/api/inquiries/count").await).await;
    assert_eq!(count, json!({"count": 1}));
}

#[tokio::test]
async fn test_create_inquiry_rejects_invalid_input() {
    let app = helpers::spawn_app().await;

    let response = app
        .post_json(
            "/api/inquiries",
            json!({"name": "A", "email": "not-an-email", "subject": "S", "message": "M"}),
        )
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = helpers::body_json(response).await;
    assert!(body["detail"].as_str().unwrap().contains("email"));

    let response = app
        .post_json("/api/inquiries", json!({"name": "A", "email": "a@x.com"}))
        .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(helpers::body_json(response).await["detail"].is_string());

    let count = helpers::body_json(app.get("/api/inquiries/count").await).await;
    assert_eq!(count, json!({"count": 0}));
}

#[tokio::test]
async fn test_list_inquiries_newest_first() {
    let app = helpers::spawn_app().await;

    for name in ["first", "second", "third"] {
        let response = app
            .post_json(
                "/api/inquiries",
                json!({"name": name, "email": "a@x.com", "subject": "S", "message": "M"}),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.get("/api/inquiries").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = helpers::body_json(response).await;
    let inquiries = body.as_array().unwrap();
    let names = inquiries
        .iter()
        .map(|i| i["name"].as_str().unwrap())
        .collect::<Vec<_>>();

    assert_eq!(names, vec!["third", "second", "first"]);
    assert_eq!(inquiries[0]["email"], "a@x.com");
    assert!(inquiries[0]["id"].is_string());
    assert!(inquiries[0]["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_cors_allows_any_origin_by_default() {
    let app = helpers::spawn_app().await;

    let response = app
        .request(
            axum::http::Request::builder()
                .uri("/api/inquiries/count")
                .header("origin", "https://example.com")
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await;

    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
}
