pub mod road;
mod rules;
pub mod strategy;

pub use road::*;
pub use rules::{BASELINE_HOURS, ORIGIN};
pub use strategy::*;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt::Display, str::FromStr};
use thiserror::Error;
use tracing::debug;

use crate::{
    repository::{Repository, Township, TravelDate},
    shared::time::Time,
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Township id {0} does not match any entry")]
    UnknownTownship(String),
    #[error("Select at least one transport mode")]
    NoModeSelected,
    #[error("Departure hour {0} is outside 0-23")]
    InvalidHour(u32),
    #[error("Unknown transport mode: {0}")]
    UnknownMode(String),
    #[error("Unknown focus: {0}")]
    UnknownFocus(String),
}

/// The key strategies are ranked by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Focus {
    /// Highest success rate first
    #[default]
    SuccessRate,
    /// Lowest pain index first
    Pain,
    /// Shortest travel time first
    Time,
}

impl Focus {
    /// Ties on the focus key fall back to the other two keys.
    pub fn compare(&self, a: &Strategy, b: &Strategy) -> Ordering {
        let success = b.success_rate.cmp(&a.success_rate);
        let pain = a.pain.cmp(&b.pain);
        let time = a.duration.cmp(&b.duration);
        match self {
            Focus::SuccessRate => success.then(pain).then(time),
            Focus::Pain => pain.then(success).then(time),
            Focus::Time => time.then(success).then(pain),
        }
    }
}

impl Display for Focus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Focus::SuccessRate => f.write_str("success_rate"),
            Focus::Pain => f.write_str("pain"),
            Focus::Time => f.write_str("time"),
        }
    }
}

impl FromStr for Focus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "success_rate" | "success" => Ok(Focus::SuccessRate),
            "pain" => Ok(Focus::Pain),
            "time" => Ok(Focus::Time),
            _ => Err(Error::UnknownFocus(s.to_string())),
        }
    }
}

/// Evaluates the travel rules for one destination and date.
pub struct Advisor<'a> {
    township: &'a Township,
    date: TravelDate,
    departure: Time,
    modes: Vec<Mode>,
    focus: Focus,
}

impl<'a> Advisor<'a> {
    pub fn new(
        repository: &'a Repository,
        township_id: &str,
        date: NaiveDate,
    ) -> Result<Self, self::Error> {
        let township = repository
            .township_by_id(township_id)
            .ok_or_else(|| Error::UnknownTownship(township_id.to_string()))?;
        Ok(Self {
            township,
            date: repository.travel_date(date),
            departure: Time::now(),
            modes: Mode::ALL.to_vec(),
            focus: Focus::default(),
        })
    }

    pub fn departure_at(mut self, departure: Time) -> Self {
        self.departure = departure;
        self
    }

    pub fn modes(mut self, modes: &[Mode]) -> Self {
        self.modes = modes.to_vec();
        self
    }

    pub fn focus(mut self, focus: Focus) -> Self {
        self.focus = focus;
        self
    }

    pub fn township(&self) -> &Township {
        self.township
    }

    pub fn date(&self) -> &TravelDate {
        &self.date
    }

    pub fn departure(&self) -> Time {
        self.departure
    }

    pub fn road_status(&self) -> RoadStatus {
        RoadStatus::at(&self.date, self.departure.hour())
    }

    /// Ranks every selected mode, best first for the chosen focus.
    pub fn evaluate(&self) -> Result<Vec<Strategy>, self::Error> {
        let hour = self.departure.hour();
        if hour > 23 {
            return Err(Error::InvalidHour(hour));
        }
        if self.modes.is_empty() {
            return Err(Error::NoModeSelected);
        }

        let context = rules::Context {
            township: self.township,
            date: &self.date,
            road: self.road_status(),
        };
        let mut modes: Vec<Mode> = Vec::with_capacity(self.modes.len());
        for mode in self.modes.iter() {
            if !modes.contains(mode) {
                modes.push(*mode);
            }
        }
        let mut strategies: Vec<Strategy> = modes
            .into_iter()
            .map(|mode| rules::evaluate(mode, &context))
            .collect();
        strategies.sort_by(|a, b| self.focus.compare(a, b));

        debug!(
            "Evaluated {} strategies to {} on {} at {} ({})",
            strategies.len(),
            self.township.id,
            self.date.date,
            self.departure.to_hm_string(),
            context.road
        );
        Ok(strategies)
    }
}
