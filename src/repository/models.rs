use std::sync::Arc;

use chrono::NaiveDate;

use crate::shared::{Identifiable, Score, time::Duration};

/// Traffic entropy from which a date counts as a jam day.
pub const JAM_DAY_ENTROPY: Score = Score::new(60);
/// South-link score from which the southern detour is worth suggesting.
pub const SOUTH_LINK_ELIGIBLE: Score = Score::new(60);
pub(crate) const ORDINARY_DAY_ENTROPY: Score = Score::new(20);

#[derive(Debug, Default, Clone)]
pub struct County {
    pub index: u32,
    pub id: Arc<str>,
    pub name: Arc<str>,
    pub normalized_name: Arc<str>,
}

impl Identifiable for County {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn normalized_name(&self) -> &str {
        &self.normalized_name
    }
}

#[derive(Debug, Default, Clone)]
pub struct Township {
    pub index: u32,
    pub id: Arc<str>,
    pub county_id: Arc<str>,
    pub county_index: u32,
    pub name: Arc<str>,
    pub normalized_name: Arc<str>,
    // Added on top of the baseline trip from Taoyuan
    pub time_offset: Duration,
    pub south_link: Score,
    // Last mile advice for ticket holders
    pub transfer_tip: Arc<str>,
}

impl Township {
    pub fn is_south_link_eligible(&self) -> bool {
        self.south_link >= SOUTH_LINK_ELIGIBLE
    }
}

impl Identifiable for Township {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn normalized_name(&self) -> &str {
        &self.normalized_name
    }
}

#[derive(Debug, Clone)]
pub struct TravelDate {
    pub date: NaiveDate,
    pub label: Arc<str>,
    pub traffic_entropy: Score,
    pub advice: Arc<str>,
}

impl TravelDate {
    /// Fallback for any date missing from the table.
    pub fn ordinary(date: NaiveDate) -> Self {
        Self {
            date,
            label: "Ordinary day".into(),
            traffic_entropy: ORDINARY_DAY_ENTROPY,
            advice: "No holiday rush expected, traffic should be normal.".into(),
        }
    }

    pub fn is_jam_day(&self) -> bool {
        self.traffic_entropy >= JAM_DAY_ENTROPY
    }

    /// `2/14 (Sat)`
    pub fn short_label(&self) -> String {
        self.date.format("%-m/%-d (%a)").to_string()
    }
}
