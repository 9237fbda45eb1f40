use std::fmt::Display;

/// A heuristic 0..=100 score. Pain indexes, success rates, traffic entropy
/// and south-link suitability all live on this scale.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(u8);

impl Score {
    pub const MIN: Score = Score(0);
    pub const MAX: Score = Score(100);

    pub const fn new(value: u8) -> Self {
        if value > Self::MAX.0 {
            Self::MAX
        } else {
            Self(value)
        }
    }

    /// Rounds and clamps any raw rule output into range.
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self::MIN;
        }
        Self(value.round().clamp(0.0, 100.0) as u8)
    }

    pub const fn value(&self) -> u8 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }
}

impl From<u8> for Score {
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[test]
fn clamps_above_range() {
    assert_eq!(Score::clamped(114.0), Score::MAX);
    assert_eq!(Score::new(250), Score::MAX);
}

#[test]
fn clamps_below_range() {
    assert_eq!(Score::clamped(-3.5), Score::MIN);
    assert_eq!(Score::clamped(f64::NAN), Score::MIN);
}

#[test]
fn rounds_to_closest() {
    assert_eq!(Score::clamped(39.5).value(), 40);
    assert_eq!(Score::clamped(39.4).value(), 39);
}
