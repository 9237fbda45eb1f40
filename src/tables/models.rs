use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct CsvCounty {
    pub county_id: String,
    pub county_name: String,
    pub romanized_name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct CsvTownship {
    pub township_id: String,
    pub county_id: String,
    pub township_name: String,
    pub romanized_name: String,
    // Hours on top of the baseline trip
    pub time_offset: f64,
    pub south_link: u8,
    pub transfer_tip: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct CsvTravelDate {
    // YYYY-MM-DD
    pub date: String,
    pub label: String,
    pub traffic_entropy: u8,
    pub advice: String,
}
