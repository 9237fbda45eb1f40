mod advise;
mod catalog;
mod session;

pub use advise::*;
pub use catalog::*;
pub use session::*;

use crate::{dto::MessageDto, state::AppState};
use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    routing::{get, post},
};
use std::sync::Arc;
use uuid::Uuid;

pub type ApiError = (StatusCode, Json<MessageDto>);

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/counties", get(counties))
        .route("/townships", get(townships))
        .route("/dates", get(dates))
        .route("/advise", get(advise))
        .with_state(state)
}

pub(crate) fn reject<S: ToString>(status: StatusCode, message: S) -> ApiError {
    (status, Json(MessageDto::new(message)))
}

/// Reads `Authorization: Bearer <token>`.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<Uuid> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;
    Uuid::parse_str(token.trim()).ok()
}

pub(crate) async fn require_session(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<Uuid, ApiError> {
    match bearer_token(headers) {
        Some(token) if state.is_logged_in(&token).await => Ok(token),
        _ => Err(reject(StatusCode::UNAUTHORIZED, "Members only, log in first")),
    }
}
