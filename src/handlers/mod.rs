// HTTP handlers for the link guard backend

pub mod check_url;
pub mod health;

use crate::app::AppState;
use axum::{
    routing::{get, post},
    Router,
};

// Link safety routes, mounted under /api
pub fn security_routes() -> Router<AppState> {
    Router::new().route("/check-url", post(check_url::check_url))
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health::health_check))
}
