use serde::de::DeserializeOwned;
use std::{
    fs::File,
    io::{self},
    path::{Path, PathBuf},
};
use thiserror::Error;

mod config;
pub mod models;
pub use config::*;
use models::*;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Could not find file with name: {0}")]
    FileNotFound(String),
    #[error("Invalid date {0}, expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("Township {township} points to unknown county {county}")]
    UnknownCounty { township: String, county: String },
    #[error("Township {township} has invalid time offset {offset}, expected hours >= 0")]
    InvalidOffset { township: String, offset: f64 },
    #[error("{field} of {row} is {value}, expected 0-100")]
    ScoreOutOfRange {
        row: String,
        field: &'static str,
        value: u8,
    },
    #[error("No table source set, call from_dir first")]
    NoStorage,
}

#[derive(Default)]
pub enum StorageType {
    #[default]
    None,
    Dir(PathBuf),
}

/// Reads the advisor tables from a directory of CSV files.
#[derive(Default)]
pub struct Tables {
    config: Config,
    storage: StorageType,
}

impl Tables {
    pub fn new(config: self::Config) -> Self {
        Self {
            config,
            storage: Default::default(),
        }
    }

    pub fn from_dir<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.storage = StorageType::Dir(path.into());
        self
    }

    pub fn stream_counties<F>(&self, f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, CsvCounty)),
    {
        match &self.storage {
            StorageType::None => Err(self::Error::NoStorage),
            StorageType::Dir(path) => {
                stream_from_dir::<CsvCounty, F>(path, &self.config.counties_path, f)
            }
        }
    }

    pub fn stream_townships<F>(&self, f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, CsvTownship)),
    {
        match &self.storage {
            StorageType::None => Err(self::Error::NoStorage),
            StorageType::Dir(path) => {
                stream_from_dir::<CsvTownship, F>(path, &self.config.townships_path, f)
            }
        }
    }

    pub fn stream_dates<F>(&self, f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, CsvTravelDate)),
    {
        match &self.storage {
            StorageType::None => Err(self::Error::NoStorage),
            StorageType::Dir(path) => {
                stream_from_dir::<CsvTravelDate, F>(path, &self.config.dates_path, f)
            }
        }
    }
}

fn stream_from_dir<T, F>(dir: &Path, file_name: &str, mut f: F) -> Result<(), self::Error>
where
    T: DeserializeOwned,
    F: FnMut((usize, T)),
{
    let file = open_file(dir, file_name)?;
    let mut reader = csv::Reader::from_reader(file);
    for (i, row) in reader.deserialize().enumerate() {
        f((i, row?));
    }
    Ok(())
}

fn open_file(dir: &Path, name: &str) -> Result<File, self::Error> {
    let path = dir.join(name);
    if !path.is_file() {
        return Err(self::Error::FileNotFound(name.to_string()));
    }
    Ok(File::open(path)?)
}
