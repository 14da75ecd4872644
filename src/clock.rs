//! Calendar source for defaulting a todo's month and year.

use chrono::{Local, NaiveDate, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    /// Host-local calendar date
    #[default]
    Local,
    /// UTC calendar date
    Utc,
    /// Pinned date, for tests and replays
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::Local => Local::now().date_naive(),
            Clock::Utc => Utc::now().date_naive(),
            Clock::Fixed(date) => *date,
        }
    }

    /// Parse a `clock.timezone` config value.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "local" => Some(Clock::Local),
            "utc" => Some(Clock::Utc),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_pinned_date() {
        let date = NaiveDate::from_ymd_opt(2017, 1, 31).expect("date");
        assert_eq!(Clock::Fixed(date).today(), date);
    }

    #[test]
    fn parse_accepts_known_zones() {
        assert_eq!(Clock::parse("local"), Some(Clock::Local));
        assert_eq!(Clock::parse(" UTC "), Some(Clock::Utc));
        assert_eq!(Clock::parse("mars"), None);
    }
}
