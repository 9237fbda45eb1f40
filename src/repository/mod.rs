use chrono::NaiveDate;
use std::{collections::HashMap, sync::Arc};

mod models;
mod source;
pub use models::*;

use crate::{
    advisor::{self, Advisor},
    shared,
};

type IdToIndex = HashMap<Arc<str>, u32>;
type IdToIndexes = HashMap<Arc<str>, Box<[u32]>>;
type DateToIndex = HashMap<NaiveDate, u32>;

#[derive(Debug, Clone, Default)]
pub struct Repository {
    pub counties: Box<[County]>,
    pub townships: Box<[Township]>,
    pub dates: Box<[TravelDate]>,

    county_lookup: IdToIndex,
    township_lookup: IdToIndex,
    county_to_townships: IdToIndexes,
    date_lookup: DateToIndex,
}

impl Repository {
    pub fn new() -> Self {
        Default::default()
    }

    pub(crate) fn generate_lookups(&mut self) {
        self.county_lookup = self
            .counties
            .iter()
            .map(|county| (county.id.clone(), county.index))
            .collect();
        self.township_lookup = self
            .townships
            .iter()
            .map(|township| (township.id.clone(), township.index))
            .collect();

        let mut county_to_townships: HashMap<Arc<str>, Vec<u32>> = HashMap::new();
        self.townships.iter().for_each(|township| {
            county_to_townships
                .entry(township.county_id.clone())
                .or_default()
                .push(township.index);
        });
        self.county_to_townships = county_to_townships
            .into_iter()
            .map(|(key, value)| (key, value.into()))
            .collect();

        self.date_lookup = self
            .dates
            .iter()
            .enumerate()
            .map(|(i, date)| (date.date, i as u32))
            .collect();
    }

    /// Get a county with the given id.
    /// If no county is found with the given id None is returned.
    pub fn county_by_id(&self, id: &str) -> Option<&County> {
        let index = self.county_lookup.get(id)?;
        self.counties.get(*index as usize)
    }

    /// Get a township with the given id.
    /// If no township is found with the given id None is returned.
    /// Township is safe and quick to clone if a owned instance is needed.
    pub fn township_by_id(&self, id: &str) -> Option<&Township> {
        let index = self.township_lookup.get(id)?;
        self.townships.get(*index as usize)
    }

    /// Returns all the townships of a county in table order.
    /// If there is no county with the given id None is returned.
    pub fn townships_by_county_id(&self, county_id: &str) -> Option<Vec<&Township>> {
        self.county_by_id(county_id)?;
        let townships = match self.county_to_townships.get(county_id) {
            Some(indexes) => indexes
                .iter()
                .filter_map(|index| self.townships.get(*index as usize))
                .collect(),
            None => Vec::new(),
        };
        Some(townships)
    }

    pub fn county_by_township_id(&self, township_id: &str) -> Option<&County> {
        let township = self.township_by_id(township_id)?;
        self.county_by_id(&township.county_id)
    }

    /// Looks up the date record, falling back to an ordinary day.
    pub fn travel_date(&self, date: NaiveDate) -> TravelDate {
        self.date_lookup
            .get(&date)
            .and_then(|index| self.dates.get(*index as usize))
            .cloned()
            .unwrap_or_else(|| TravelDate::ordinary(date))
    }

    /// Does a fuzzy search on all the townships, comparing there name to the needle.
    pub fn search_townships_by_name<'a>(&'a self, needle: &str) -> Vec<&'a Township> {
        shared::search(needle, &self.townships)
    }

    pub fn search_counties_by_name<'a>(&'a self, needle: &str) -> Vec<&'a County> {
        shared::search(needle, &self.counties)
    }

    /// Starts an evaluation of the travel strategies towards a township.
    pub fn advise(
        &'_ self,
        township_id: &str,
        date: NaiveDate,
    ) -> Result<Advisor<'_>, advisor::Error> {
        Advisor::new(self, township_id, date)
    }
}
