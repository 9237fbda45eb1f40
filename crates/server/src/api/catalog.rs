use crate::{
    api::{ApiError, reject},
    dto::{CountyDto, TownshipDto, TravelDateDto},
    state::AppState,
};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use std::{collections::HashMap, sync::Arc};

const DEFAULT_SEARCH_COUNT: usize = 5;

pub async fn counties(State(state): State<Arc<AppState>>) -> Json<Vec<CountyDto>> {
    let repo = &state.repository;
    Json(
        repo.counties
            .iter()
            .map(|county| CountyDto::from(county, repo))
            .collect(),
    )
}

pub async fn townships(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TownshipDto>>, ApiError> {
    let count: usize = match params.get("count") {
        Some(value) => value
            .parse()
            .map_err(|_| reject(StatusCode::BAD_REQUEST, format!("Invalid count: {value}")))?,
        None => DEFAULT_SEARCH_COUNT,
    };
    let result = match params.get("q") {
        Some(query) => state
            .repository
            .search_townships_by_name(query)
            .into_iter()
            .take(count)
            .map(TownshipDto::from)
            .collect(),
        None => state
            .repository
            .townships
            .iter()
            .map(TownshipDto::from)
            .collect(),
    };
    Ok(Json(result))
}

pub async fn dates(State(state): State<Arc<AppState>>) -> Json<Vec<TravelDateDto>> {
    Json(
        state
            .repository
            .dates
            .iter()
            .map(TravelDateDto::from)
            .collect(),
    )
}
