use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::repository::TravelDate;

/// Road condition on Freeway 5 for a departure hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadStatus {
    Clear,
    Normal,
    Heavy,
    Gridlock,
}

impl RoadStatus {
    /// Hour bands are inclusive. Anything outside a named band is normal.
    pub fn at(date: &TravelDate, hour: u32) -> Self {
        let jam_day = date.is_jam_day();
        match hour {
            3..=5 => RoadStatus::Clear,
            6..=15 if jam_day => RoadStatus::Gridlock,
            16..=20 if jam_day => RoadStatus::Heavy,
            _ => RoadStatus::Normal,
        }
    }

    /// Multiplier on the baseline driving time.
    pub const fn jam_factor(&self) -> f64 {
        match self {
            RoadStatus::Clear => 1.0,
            RoadStatus::Normal => 1.1,
            RoadStatus::Heavy => 1.5,
            RoadStatus::Gridlock => 2.5,
        }
    }

    pub const fn advice(&self) -> &'static str {
        match self {
            RoadStatus::Clear => {
                "God mode: the only window where traffic physically flows. Freeway 5 is clear end to end, leave now."
            }
            RoadStatus::Normal => "Normal traffic, leave whenever you like.",
            RoadStatus::Heavy => {
                "Traffic is starting to clear but still slow. Hold on two more hours and leave after 22:00."
            }
            RoadStatus::Gridlock => {
                "The freeway is a parking lot right now. Wait until after 20:00, or take the Provincial Highway 2 coastal road."
            }
        }
    }
}

impl Display for RoadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoadStatus::Clear => f.write_str("clear"),
            RoadStatus::Normal => f.write_str("normal"),
            RoadStatus::Heavy => f.write_str("heavy"),
            RoadStatus::Gridlock => f.write_str("gridlock"),
        }
    }
}
