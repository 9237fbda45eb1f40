/// File names looked up inside a table directory.
pub struct Config {
    pub counties_path: String,
    pub townships_path: String,
    pub dates_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            counties_path: "counties.csv".into(),
            townships_path: "townships.csv".into(),
            dates_path: "dates.csv".into(),
        }
    }
}
