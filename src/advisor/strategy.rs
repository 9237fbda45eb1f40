use std::{fmt::Display, str::FromStr, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::{
    advisor::Error,
    shared::{Score, time::Duration},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Drive,
    // Freeway 5 bus to Luodong, then rail
    BusRail,
    // Backtrack to Shulin where trains originate
    OriginStation,
    // HSR to Zuoying, then the South-Link line
    SouthLink,
    Ticketed,
}

impl Mode {
    pub const ALL: [Mode; 5] = [
        Mode::Drive,
        Mode::BusRail,
        Mode::OriginStation,
        Mode::SouthLink,
        Mode::Ticketed,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Mode::Drive => "drive",
            Mode::BusRail => "bus_rail",
            Mode::OriginStation => "origin_station",
            Mode::SouthLink => "south_link",
            Mode::Ticketed => "ticketed",
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_lowercase();
        Mode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == value)
            .ok_or_else(|| Error::UnknownMode(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tag {
    Recommended,
    Budget,
    Comfort,
    Detour,
    Fastest,
    Avoid,
}

impl Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tag::Recommended => f.write_str("recommended"),
            Tag::Budget => f.write_str("budget"),
            Tag::Comfort => f.write_str("comfort"),
            Tag::Detour => f.write_str("detour"),
            Tag::Fastest => f.write_str("fastest"),
            Tag::Avoid => f.write_str("avoid"),
        }
    }
}

/// One ranked way home. Built fresh for every evaluation.
#[derive(Debug, Clone)]
pub struct Strategy {
    pub mode: Mode,
    pub title: Arc<str>,
    pub route: String,
    pub duration: Duration,
    pub pain: Score,
    pub success_rate: Score,
    pub advice: String,
    pub tags: Vec<Tag>,
}

impl Strategy {
    pub fn duration_string(&self) -> String {
        self.duration.to_hours_string()
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "[{}] {} | pain {} | success {}%",
            self.title,
            self.duration_string(),
            self.pain,
            self.success_rate
        )?;
        writeln!(f, "  route: {}", self.route)?;
        write!(f, "  {}", self.advice)?;
        if !self.tags.is_empty() {
            let tags: Vec<_> = self.tags.iter().map(|tag| tag.to_string()).collect();
            write!(f, "\n  tags: {}", tags.join(", "))?;
        }
        Ok(())
    }
}

#[test]
fn parse_mode() {
    assert_eq!("bus_rail".parse::<Mode>().unwrap(), Mode::BusRail);
    assert_eq!(" Drive ".parse::<Mode>().unwrap(), Mode::Drive);
    assert!("plane".parse::<Mode>().is_err());
}
