use chrono::NaiveDate;
use std::{collections::HashMap, time::Instant};
use tracing::debug;

use crate::{
    repository::{County, Repository, Township, TravelDate},
    shared::{Score, fuzzy, time::Duration},
    tables::{self, Tables},
};

impl Repository {
    /// Replaces every table with the content of the CSV tables.
    pub fn load_tables(mut self, source: Tables) -> Result<Self, tables::Error> {
        self.load_counties(&source)?;
        self.load_townships(&source)?;
        self.load_dates(&source)?;
        self.generate_lookups();
        Ok(self)
    }

    fn load_counties(&mut self, source: &Tables) -> Result<(), tables::Error> {
        debug!("Loading counties...");
        let now = Instant::now();
        let mut counties: Vec<County> = Vec::new();
        source.stream_counties(|(i, county)| {
            counties.push(County {
                index: i as u32,
                id: county.county_id.into(),
                name: county.county_name.into(),
                normalized_name: fuzzy::normalize(&county.romanized_name).into(),
            });
        })?;
        self.counties = counties.into();
        debug!("Loading counties took {:?}", now.elapsed());
        Ok(())
    }

    fn load_townships(&mut self, source: &Tables) -> Result<(), tables::Error> {
        debug!("Loading townships...");
        let now = Instant::now();
        let county_lookup: HashMap<&str, &County> = self
            .counties
            .iter()
            .map(|county| (county.id.as_ref(), county))
            .collect();

        let mut rows = Vec::new();
        source.stream_townships(|(_, township)| rows.push(township))?;
        let townships: Vec<Township> = rows
            .into_iter()
            .enumerate()
            .map(|(i, township)| -> Result<Township, tables::Error> {
                let county = county_lookup
                    .get(township.county_id.as_str())
                    .ok_or_else(|| tables::Error::UnknownCounty {
                        township: township.township_id.clone(),
                        county: township.county_id.clone(),
                    })?;
                if !township.time_offset.is_finite() || township.time_offset < 0.0 {
                    return Err(tables::Error::InvalidOffset {
                        township: township.township_id,
                        offset: township.time_offset,
                    });
                }
                let south_link =
                    checked_score(&township.township_id, "south_link", township.south_link)?;
                Ok(Township {
                    index: i as u32,
                    id: township.township_id.into(),
                    county_id: county.id.clone(),
                    county_index: county.index,
                    name: township.township_name.into(),
                    normalized_name: fuzzy::normalize(&township.romanized_name).into(),
                    time_offset: Duration::from_hours_f64(township.time_offset),
                    south_link,
                    transfer_tip: township.transfer_tip.into(),
                })
            })
            .collect::<Result<_, _>>()?;
        self.townships = townships.into();
        debug!("Loading townships took {:?}", now.elapsed());
        Ok(())
    }

    fn load_dates(&mut self, source: &Tables) -> Result<(), tables::Error> {
        debug!("Loading dates...");
        let now = Instant::now();
        let mut rows = Vec::new();
        source.stream_dates(|(_, date)| rows.push(date))?;
        let dates: Vec<TravelDate> = rows
            .into_iter()
            .map(|row| -> Result<TravelDate, tables::Error> {
                let date = NaiveDate::parse_from_str(row.date.trim(), "%Y-%m-%d")
                    .map_err(|_| tables::Error::InvalidDate(row.date.clone()))?;
                let traffic_entropy =
                    checked_score(&row.date, "traffic_entropy", row.traffic_entropy)?;
                Ok(TravelDate {
                    date,
                    label: row.label.into(),
                    traffic_entropy,
                    advice: row.advice.into(),
                })
            })
            .collect::<Result<_, _>>()?;
        self.dates = dates.into();
        debug!("Loading dates took {:?}", now.elapsed());
        Ok(())
    }
}

fn checked_score(row: &str, field: &'static str, value: u8) -> Result<Score, tables::Error> {
    if value > Score::MAX.value() {
        return Err(tables::Error::ScoreOutOfRange {
            row: row.to_string(),
            field,
            value,
        });
    }
    Ok(Score::new(value))
}
