use std::sync::{Arc, Mutex};

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use seaworth_page::{
    ClientError, FailureKind, FormState, HttpInquiryClient, Inquiry, InquiryClient, OutcomeKind,
    Page,
};
use serde_json::{Value, json};

mod helpers;

#[tokio::test]
async fn posts_inquiry_and_reads_message() -> anyhow::Result<()> {
    let received = Arc::new(Mutex::new(None::<Inquiry>));
    let router = Router::new()
        .route(
            "/api/inquiries",
            post(
                |State(received): State<Arc<Mutex<Option<Inquiry>>>>,
                 Json(inquiry): Json<Inquiry>| async move {
                    *received.lock().unwrap() = Some(inquiry);
                    Json(json!({"status": "success", "message": "Thank you"}))
                },
            ),
        )
        .with_state(received.clone());

    let base_url = helpers::spawn_backend(router).await?;
    let client = HttpInquiryClient::new(&base_url)?;

    let receipt = client.submit(&helpers::inquiry()).await?;

    assert_eq!(receipt.message, "Thank you");
    assert_eq!(receipt.status.as_deref(), Some("success"));
    assert_eq!(received.lock().unwrap().clone(), Some(helpers::inquiry()));

    Ok(())
}

#[tokio::test]
async fn non_success_status_is_rejection() -> anyhow::Result<()> {
    let router = Router::new().route(
        "/api/inquiries",
        post(|| async {
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({"detail": "email: invalid"})),
            )
        }),
    );

    let base_url = helpers::spawn_backend(router).await?;
    let client = HttpInquiryClient::new(&base_url)?;

    let err = client.submit(&helpers::inquiry()).await.unwrap_err();

    assert!(matches!(
        &err,
        ClientError::Rejected { status: 422, detail: Some(d) } if d == "email: invalid"
    ));
    assert_eq!(err.kind(), FailureKind::Validation);

    Ok(())
}

#[tokio::test]
async fn body_without_message_is_malformed() -> anyhow::Result<()> {
    let router = Router::new().route(
        "/api/inquiries",
        post(|| async { Json::<Value>(json!({"status": "success"})) }),
    );

    let base_url = helpers::spawn_backend(router).await?;
    let client = HttpInquiryClient::new(&base_url)?;

    let err = client.submit(&helpers::inquiry()).await.unwrap_err();
    assert_eq!(err.kind(), FailureKind::Malformed);

    Ok(())
}

#[tokio::test]
async fn unreachable_backend_keeps_form_for_retry() -> anyhow::Result<()> {
    let client = HttpInquiryClient::new(&helpers::closed_backend().await?)?;
    let mut page = Page::new(FormState::new(helpers::inquiry()));

    let outcome = page.submit(&client).await.cloned().unwrap();

    assert_eq!(outcome.kind, OutcomeKind::Error);
    assert_eq!(outcome.message, "Failed to submit inquiry. Please try again.");
    assert_eq!(page.form.snapshot(), helpers::inquiry());
    assert_eq!(page.submission.last_failure(), Some(FailureKind::Network));

    Ok(())
}

#[tokio::test]
async fn successful_page_submission_clears_form() -> anyhow::Result<()> {
    let router = Router::new().route(
        "/api/inquiries",
        post(|| async { Json(json!({"message": "Thank you"})) }),
    );
    let client = HttpInquiryClient::new(&helpers::spawn_backend(router).await?)?;
    let mut page = Page::new(FormState::new(helpers::inquiry()));

    let outcome = page.submit(&client).await.cloned().unwrap();

    assert_eq!(outcome.kind, OutcomeKind::Success);
    assert_eq!(outcome.message, "Thank you");
    assert!(page.form.is_empty());

    Ok(())
}
