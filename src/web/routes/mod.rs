//! Contains all the routes that this application can handle.

mod home;
mod postings;

use crate::{
    nav::{HOME_PATH, POSTINGS_PATH},
    AppState,
};
use home::{home_get, home_post};
use postings::postings;

use axum::{http::StatusCode, routing::get, Router};

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// All the routes of the server
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .route(HOME_PATH, get(home_get).post(home_post))
        .route(POSTINGS_PATH, get(postings))
        .with_state(app_state)
        .route("/health-check", get(health_check))
}
