//! JSON API consumed by the contact form.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::HeaderValue,
    routing::get,
};
use seaworth_inquiry::{InquiryView, SubmitInquiryInput};
use seaworth_shared::{Inquiry, InquiryReceipt, SUBMIT_SUCCESS_MESSAGE};
use serde::Serialize;
use serde_json::{Value, json};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Any, CorsLayer};

use crate::{config::CorsConfig, error::ApiError, routes::AppState};

/// Upper bound on inquiries returned by `GET /api/inquiries`.
pub const LIST_LIMIT: u64 = 1000;

#[derive(Serialize)]
pub struct CountResponse {
    pub count: u64,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api", get(root))
        .route("/api/", get(root))
        .route("/api/inquiries", get(list).post(create))
        .route("/api/inquiries/count", get(count))
}

/// A wildcard origin allows any caller without credentials, an explicit list
/// allows those origins with credentials.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    if config.origins.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins = config
        .origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin, "skipping invalid CORS origin");
                None
            }
        })
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub async fn root() -> Json<Value> {
    Json(json!({"message": "SEA WORTH TRADERS API", "status": "running"}))
}

pub async fn create(
    State(app): State<AppState>,
    payload: Result<Json<Inquiry>, JsonRejection>,
) -> Result<Json<InquiryReceipt>, ApiError> {
    let Json(inquiry) = payload?;

    app.inquiry_command
        .submit(SubmitInquiryInput::from(inquiry))
        .await?;

    Ok(Json(InquiryReceipt::success(SUBMIT_SUCCESS_MESSAGE)))
}

pub async fn list(State(app): State<AppState>) -> Result<Json<Vec<InquiryView>>, ApiError> {
    let rows = app.inquiry_query.list(LIST_LIMIT).await?;
    let inquiries = rows
        .into_iter()
        .map(InquiryView::try_from)
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(Json(inquiries))
}

pub async fn count(State(app): State<AppState>) -> Result<Json<CountResponse>, ApiError> {
    let count = app.inquiry_query.count().await?;

    Ok(Json(CountResponse { count }))
}
