use homeward::{
    advisor::{Focus, Mode, RoadStatus, Strategy, Tag},
    repository::{Township, TravelDate},
    shared::Time,
};
use serde::{Deserialize, Serialize};

use crate::dto::{TownshipDto, TravelDateDto};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyDto {
    pub mode: Mode,
    pub title: String,
    pub route: String,
    pub duration_hours: f64,
    pub duration: String,
    pub pain: u8,
    pub success_rate: u8,
    pub advice: String,
    pub tags: Vec<Tag>,
}

impl StrategyDto {
    pub fn from(strategy: &Strategy) -> Self {
        Self {
            mode: strategy.mode,
            title: strategy.title.to_string(),
            route: strategy.route.clone(),
            duration_hours: strategy.duration.as_hours(),
            duration: strategy.duration_string(),
            pain: strategy.pain.value(),
            success_rate: strategy.success_rate.value(),
            advice: strategy.advice.clone(),
            tags: strategy.tags.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceDto {
    pub origin: String,
    pub township: TownshipDto,
    pub date: TravelDateDto,
    pub departure: String,
    pub road_status: RoadStatus,
    pub focus: Focus,
    pub strategies: Vec<StrategyDto>,
}

impl AdviceDto {
    pub fn new(
        township: &Township,
        date: &TravelDate,
        departure: Time,
        road_status: RoadStatus,
        focus: Focus,
        strategies: &[Strategy],
    ) -> Self {
        Self {
            origin: homeward::advisor::ORIGIN.to_string(),
            township: TownshipDto::from(township),
            date: TravelDateDto::from(date),
            departure: departure.to_hm_string(),
            road_status,
            focus,
            strategies: strategies.iter().map(StrategyDto::from).collect(),
        }
    }
}
