use homeward::repository::{County, Repository, Township};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TownshipDto {
    pub id: String,
    pub county_id: String,
    pub name: String,
    pub time_offset_hours: f64,
    pub south_link: u8,
    pub south_link_eligible: bool,
}

impl TownshipDto {
    pub fn from(township: &Township) -> Self {
        Self {
            id: township.id.to_string(),
            county_id: township.county_id.to_string(),
            name: township.name.to_string(),
            time_offset_hours: township.time_offset.as_hours(),
            south_link: township.south_link.value(),
            south_link_eligible: township.is_south_link_eligible(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountyDto {
    pub id: String,
    pub name: String,
    pub townships: Vec<TownshipDto>,
}

impl CountyDto {
    pub fn from(county: &County, repo: &Repository) -> Self {
        let townships = repo
            .townships_by_county_id(&county.id)
            .unwrap_or_default()
            .into_iter()
            .map(TownshipDto::from)
            .collect();
        Self {
            id: county.id.to_string(),
            name: county.name.to_string(),
            townships,
        }
    }
}
