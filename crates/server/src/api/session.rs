use crate::{
    api::{ApiError, bearer_token, reject},
    dto::{LoginDto, TokenDto},
    state::AppState,
};
use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
};
use std::sync::Arc;
use tracing::{info, warn};

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginDto>,
) -> Result<Json<TokenDto>, ApiError> {
    state.gate.verify(&body.password).map_err(|err| {
        warn!("Rejected login: {err}");
        reject(StatusCode::UNAUTHORIZED, err)
    })?;
    let token = state.open_session().await;
    info!("Opened session");
    Ok(Json(TokenDto {
        token: token.to_string(),
    }))
}

pub async fn logout(State(state): State<Arc<AppState>>, headers: HeaderMap) -> StatusCode {
    match bearer_token(&headers) {
        Some(token) if state.close_session(&token).await => StatusCode::NO_CONTENT,
        _ => StatusCode::UNAUTHORIZED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_util::{auth_headers, state};
    use uuid::Uuid;

    #[tokio::test]
    async fn login_with_right_password() {
        let state = state();
        let Json(token) = login(
            State(state.clone()),
            Json(LoginDto {
                password: "1234".into(),
            }),
        )
        .await
        .unwrap();
        let token = Uuid::parse_str(&token.token).unwrap();
        assert!(state.is_logged_in(&token).await);
    }

    #[tokio::test]
    async fn login_with_wrong_password() {
        let (status, Json(message)) = login(
            State(state()),
            Json(LoginDto {
                password: "0000".into(),
            }),
        )
        .await
        .unwrap_err();
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(message.message, "Wrong password");
    }

    #[tokio::test]
    async fn logout_closes_session() {
        let state = state();
        let token = state.open_session().await;
        let status = logout(State(state.clone()), auth_headers(&token)).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(!state.is_logged_in(&token).await);

        let status = logout(State(state), auth_headers(&token)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
