use chrono::{Local, Timelike};

const HOUR_TO_SEC: u32 = 60 * 60;
const MINUTE_TO_SEC: u32 = 60;

/// Seconds since midnight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(u32);

impl From<u32> for Time {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl Time {
    pub fn now() -> Self {
        let now = Local::now();
        Self(now.num_seconds_from_midnight())
    }

    pub const fn from_seconds(secs: u32) -> Self {
        Self(secs)
    }

    pub const fn from_hour(hour: u32) -> Self {
        Self(hour.saturating_mul(HOUR_TO_SEC))
    }

    pub const fn as_seconds(&self) -> u32 {
        self.0
    }

    /// Whole hours since midnight. Not wrapped, a time past midnight of the
    /// next day gives 24 or more.
    pub const fn hour(&self) -> u32 {
        self.0 / HOUR_TO_SEC
    }

    pub fn to_hm_string(&self) -> String {
        let h = self.0 / HOUR_TO_SEC;
        let m = (self.0 % HOUR_TO_SEC) / MINUTE_TO_SEC;
        format!("{:02}:{:02}", h, m)
    }

    /// Parses `HH:MM` or `HH:MM:SS`.
    pub fn from_hm(time: &str) -> Option<Self> {
        let mut split = time.split(':');
        let hours: u32 = split.next()?.parse().ok()?;
        let minutes: u32 = split.next()?.parse().ok()?;
        let seconds: u32 = match split.next() {
            Some(value) => value.parse().ok()?,
            None => 0,
        };
        if split.next().is_some() || minutes >= 60 || seconds >= 60 {
            return None;
        }
        let seconds = hours
            .checked_mul(HOUR_TO_SEC)?
            .checked_add(minutes * MINUTE_TO_SEC + seconds)?;
        Some(Self(seconds))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration(u32);

impl From<u32> for Duration {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl Duration {
    pub const fn from_seconds(secs: u32) -> Self {
        Self(secs)
    }

    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes * MINUTE_TO_SEC)
    }

    pub const fn from_hours(hours: u32) -> Self {
        Self(hours * HOUR_TO_SEC)
    }

    /// Fractional hours, rounded to the closest second. Negative input is zero.
    pub fn from_hours_f64(hours: f64) -> Self {
        if hours.is_nan() || hours <= 0.0 {
            return Self(0);
        }
        Self((hours * HOUR_TO_SEC as f64).round() as u32)
    }

    pub const fn as_seconds(&self) -> u32 {
        self.0
    }

    pub fn as_hours(&self) -> f64 {
        self.0 as f64 / HOUR_TO_SEC as f64
    }

    pub fn to_hours_string(&self) -> String {
        format!("{:.1} h", self.as_hours())
    }
}

#[test]
fn parse_unparse_1() {
    let time = "00:00";
    let stime = Time::from_hm(time).unwrap();
    assert_eq!(time, stime.to_hm_string())
}

#[test]
fn parse_unparse_2() {
    let time = "07:30";
    let stime = Time::from_hm(time).unwrap();
    assert_eq!(time, stime.to_hm_string())
}

#[test]
fn parse_unparse_3() {
    let time = "23:59";
    let stime = Time::from_hm(time).unwrap();
    assert_eq!(time, stime.to_hm_string())
}

#[test]
fn huge_hours_are_rejected() {
    assert!(Time::from_hm("1193046:59:59").is_none());
    assert!(Time::from_hm("4294967295:00").is_none());
    assert_eq!(
        Time::from_hm("1193046:00:00").map(|time| time.hour()),
        Some(1_193_046)
    );
}

#[test]
fn invalid_minutes() {
    assert!(Time::from_hm("07:60").is_none());
    assert!(Time::from_hm("07:30:00:00").is_none());
}

#[test]
fn hour_floors() {
    let time = Time::from_hm("05:59:59").unwrap();
    assert_eq!(time.hour(), 5);
}

#[test]
fn fractional_hours() {
    let duration = Duration::from_hours_f64(8.5);
    assert_eq!(duration, Duration::from_minutes(510));
    assert_eq!(duration.to_hours_string(), "8.5 h");
}

#[test]
fn negative_hours_are_zero() {
    assert_eq!(Duration::from_hours_f64(-1.0), Duration::default());
}
