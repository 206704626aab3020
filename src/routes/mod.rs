use axum::{
    Router,
    http::StatusCode,
    response::Response,
    routing::{get, post},
};
use seaworth_page::HttpInquiryClient;
use sqlx::SqlitePool;

use crate::template::{NotFoundTemplate, Template};

pub mod api;
mod contact;
mod health;
mod index;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub inquiry_client: HttpInquiryClient,
    pub inquiry_command: seaworth_inquiry::Command,
    pub inquiry_query: seaworth_inquiry::Query,
    pub pool: SqlitePool,
}

pub async fn fallback(template: Template) -> Response {
    template.render_with_status(StatusCode::NOT_FOUND, NotFoundTemplate::default())
}

pub fn router(app_state: AppState) -> Router {
    let cors = api::cors_layer(&app_state.config.cors);

    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .route("/", get(index::page))
        .route("/contact", post(contact::action))
        .merge(api::router().layer(cors))
        .fallback(fallback)
        .nest_service("/static", crate::assets::AssetsService::new())
        .with_state(app_state)
}
