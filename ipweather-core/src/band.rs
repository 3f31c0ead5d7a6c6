//! Temperature-to-color banding.

/// One of six ordered Fahrenheit ranges, coldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TemperatureBand {
    /// `t <= 10`
    Violet,
    /// `10 < t <= 30`
    Blue,
    /// `30 < t <= 50`
    Green,
    /// `50 < t <= 70`
    Yellow,
    /// `70 < t <= 90`
    Orange,
    /// `t > 90`
    Red,
}

impl TemperatureBand {
    pub fn from_fahrenheit(t: i64) -> Self {
        if t > 90 {
            Self::Red
        } else if t > 70 {
            Self::Orange
        } else if t > 50 {
            Self::Yellow
        } else if t > 30 {
            Self::Green
        } else if t > 10 {
            Self::Blue
        } else {
            Self::Violet
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Violet => "violet",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
            Self::Red => "red",
        }
    }

    pub const fn all() -> &'static [TemperatureBand] {
        &[
            Self::Violet,
            Self::Blue,
            Self::Green,
            Self::Yellow,
            Self::Orange,
            Self::Red,
        ]
    }
}

impl std::fmt::Display for TemperatureBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
