//! HTTP handlers for user endpoints.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Json, Query, State};
use axum::response::IntoResponse;

use crate::adapters::http::error::{require_param, ApiError};
use crate::adapters::http::state::AppState;
use crate::application::{GetReviewQuery, GetUserQuery, SetIsActiveCommand};

use super::dto::{GetReviewResponse, SetIsActiveRequest, UserDto, UserIdParams, UserResponse};

/// POST /users/setIsActive - Toggle a user's activity flag
pub async fn set_is_active(
    State(state): State<AppState>,
    body: Result<Json<SetIsActiveRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body?;
    let cmd = SetIsActiveCommand {
        user_id: request.user_id,
        is_active: request.is_active,
    };

    let user = state.set_is_active_handler().handle(cmd).await?;
    Ok(Json(UserResponse {
        user: UserDto::from(user),
    }))
}

/// GET /users/getReview?user_id= - Pull requests the user reviews
pub async fn get_review(
    State(state): State<AppState>,
    params: Result<Query<UserIdParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params?;
    let query = GetReviewQuery {
        user_id: require_param(params.user_id, "user_id")?,
    };

    let result = state.get_review_handler().handle(query).await?;
    Ok(Json(GetReviewResponse::from(result)))
}

/// GET /users/get?user_id= - A single user with its team name
pub async fn get_user(
    State(state): State<AppState>,
    params: Result<Query<UserIdParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(params) = params?;
    let query = GetUserQuery {
        user_id: require_param(params.user_id, "user_id")?,
    };

    let user = state.get_user_handler().handle(query).await?;
    Ok(Json(UserResponse {
        user: UserDto::from(user),
    }))
}
