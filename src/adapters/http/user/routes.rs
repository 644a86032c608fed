//! Axum router configuration for user endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use crate::adapters::http::state::AppState;

use super::handlers::{get_review, get_user, set_is_active};

/// User routes, mounted under `/users`.
///
/// - `POST /setIsActive` - Toggle a user's activity flag
/// - `GET /getReview?user_id=` - Pull requests the user reviews
/// - `GET /get?user_id=` - Read a single user
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/setIsActive", post(set_is_active))
        .route("/getReview", get(get_review))
        .route("/get", get(get_user))
}
