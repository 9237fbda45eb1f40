use crate::{
    api::{ApiError, reject, require_session},
    dto::AdviceDto,
    state::AppState,
};
use axum::{
    Json,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use homeward::{
    advisor::{self, Advisor, Focus, Mode, Strategy},
    repository::Repository,
    shared::Time,
};
use std::{collections::HashMap, sync::Arc};
use tracing::{debug, warn};

pub async fn advise(
    Query(params): Query<HashMap<String, String>>,
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, ApiError> {
    require_session(&state, &headers).await?;
    let evaluation = evaluate(&state.repository, &params)?;
    match params.get("format").map(String::as_str) {
        Some("text") => Ok(evaluation.to_text().into_response()),
        Some("json") | None => Ok(Json(evaluation.to_dto()).into_response()),
        Some(other) => Err(reject(
            StatusCode::BAD_REQUEST,
            format!("Unknown format: {other}"),
        )),
    }
}

pub(crate) struct Evaluation<'a> {
    advisor: Advisor<'a>,
    strategies: Vec<Strategy>,
    focus: Focus,
}

impl Evaluation<'_> {
    fn to_dto(&self) -> AdviceDto {
        AdviceDto::new(
            self.advisor.township(),
            self.advisor.date(),
            self.advisor.departure(),
            self.advisor.road_status(),
            self.focus,
            &self.strategies,
        )
    }

    fn to_text(&self) -> String {
        let date = self.advisor.date();
        let mut text = format!(
            "From {} to {} | {} {} | departure {} | road {}\n{}\n",
            advisor::ORIGIN,
            self.advisor.township().name,
            date.short_label(),
            date.label,
            self.advisor.departure().to_hm_string(),
            self.advisor.road_status(),
            date.advice,
        );
        for strategy in self.strategies.iter() {
            text.push('\n');
            text.push_str(&strategy.to_string());
            text.push('\n');
        }
        text
    }
}

pub(crate) fn evaluate<'a>(
    repository: &'a Repository,
    params: &HashMap<String, String>,
) -> Result<Evaluation<'a>, ApiError> {
    let township = params
        .get("township")
        .ok_or_else(|| reject(StatusCode::BAD_REQUEST, "Missing township"))?;
    let date = params
        .get("date")
        .ok_or_else(|| reject(StatusCode::BAD_REQUEST, "Missing date"))?;
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| {
        reject(
            StatusCode::BAD_REQUEST,
            format!("Invalid date {date}, expected YYYY-MM-DD"),
        )
    })?;
    let departure = match params.get("hour") {
        Some(hour) => {
            let hour: u32 = hour.trim().parse().map_err(|_| {
                reject(StatusCode::BAD_REQUEST, format!("Invalid hour: {hour}"))
            })?;
            Time::from_hour(hour)
        }
        None => Time::now(),
    };
    let modes: Vec<Mode> = match params.get("modes") {
        Some(modes) => modes
            .split(',')
            .filter(|mode| !mode.trim().is_empty())
            .map(|mode| mode.parse())
            .collect::<Result<_, advisor::Error>>()
            .map_err(to_api_error)?,
        None => Mode::ALL.to_vec(),
    };
    let focus: Focus = match params.get("focus") {
        Some(focus) => focus.parse().map_err(to_api_error)?,
        None => Focus::default(),
    };

    let advisor = repository
        .advise(township, date)
        .map_err(to_api_error)?
        .departure_at(departure)
        .modes(&modes)
        .focus(focus);
    let strategies = advisor.evaluate().map_err(to_api_error)?;
    debug!("Ranked {} strategies by {focus}", strategies.len());
    Ok(Evaluation {
        advisor,
        strategies,
        focus,
    })
}

fn to_api_error(err: advisor::Error) -> ApiError {
    let status = match err {
        advisor::Error::UnknownTownship(_) => StatusCode::NOT_FOUND,
        advisor::Error::NoModeSelected => StatusCode::UNPROCESSABLE_ENTITY,
        advisor::Error::InvalidHour(_)
        | advisor::Error::UnknownMode(_)
        | advisor::Error::UnknownFocus(_) => StatusCode::BAD_REQUEST,
    };
    warn!("Rejected advice request: {err}");
    reject(status, err)
}
