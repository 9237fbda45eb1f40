use homeward::repository::TravelDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TravelDateDto {
    pub date: String,
    pub short_label: String,
    pub label: String,
    pub traffic_entropy: u8,
    pub jam_day: bool,
    pub advice: String,
}

impl TravelDateDto {
    pub fn from(date: &TravelDate) -> Self {
        Self {
            date: date.date.format("%Y-%m-%d").to_string(),
            short_label: date.short_label(),
            label: date.label.to_string(),
            traffic_entropy: date.traffic_entropy.value(),
            jam_day: date.is_jam_day(),
            advice: date.advice.to_string(),
        }
    }
}
