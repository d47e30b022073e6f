//! Calendar months and the calendar reference used to read dates
//!
//! Transaction dates arrive as strings. Turning one into a calendar date
//! depends on which clock the reader stands on: a date-only value is an
//! instant at UTC midnight, and that instant lands on the previous day for
//! anyone west of Greenwich. [`CalendarReference`] makes that choice explicit.

use chrono::{
    DateTime, Datelike, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::FinsightError;

/// Which calendar a stored date is read in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CalendarReference {
    /// Read dates on the UTC calendar (date-only values keep their written day)
    #[default]
    Utc,
    /// Read dates on the host's local calendar
    Local,
    /// Read dates at a fixed offset from UTC (e.g. a financial-period zone)
    Fixed(FixedOffset),
}

impl CalendarReference {
    /// Resolve a stored date string to a calendar date in this reference
    ///
    /// Accepts `YYYY-MM-DD` (an instant at UTC midnight), RFC 3339 timestamps,
    /// and offset-less `YYYY-MM-DDTHH:MM:SS` wall-clock times, which are taken
    /// to already be in this reference. Returns `None` for anything else.
    pub fn calendar_date(&self, raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();

        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            let instant = Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?);
            return Some(self.project(instant));
        }

        if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
            return Some(self.project(instant.with_timezone(&Utc)));
        }

        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|wall_clock| wall_clock.date())
    }

    /// The current date on this calendar
    pub fn today(&self) -> NaiveDate {
        self.project(Utc::now())
    }

    fn project(&self, instant: DateTime<Utc>) -> NaiveDate {
        match self {
            Self::Utc => instant.date_naive(),
            Self::Local => instant.with_timezone(&Local).date_naive(),
            Self::Fixed(offset) => instant.with_timezone(offset).date_naive(),
        }
    }
}

impl fmt::Display for CalendarReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Utc => write!(f, "utc"),
            Self::Local => write!(f, "local"),
            Self::Fixed(offset) => {
                let secs = offset.local_minus_utc();
                let sign = if secs < 0 { '-' } else { '+' };
                let secs = secs.abs();
                write!(f, "{}{:02}:{:02}", sign, secs / 3600, (secs % 3600) / 60)
            }
        }
    }
}

impl FromStr for CalendarReference {
    type Err = FinsightError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "utc" | "z" => return Ok(Self::Utc),
            "local" => return Ok(Self::Local),
            _ => {}
        }

        let invalid = || {
            FinsightError::Validation(format!(
                "Invalid calendar reference: {}. Use utc, local, or an offset like +05:30",
                s
            ))
        };

        let (sign, rest) = match s.chars().next() {
            Some('+') => (1, &s[1..]),
            Some('-') => (-1, &s[1..]),
            _ => return Err(invalid()),
        };
        let (hours, minutes) = rest.split_once(':').unwrap_or((rest, "0"));
        let hours = parse_offset_part(hours, 23).ok_or_else(invalid)?;
        let minutes = parse_offset_part(minutes, 59).ok_or_else(invalid)?;

        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
            .map(Self::Fixed)
            .ok_or_else(invalid)
    }
}

/// Parse one or two plain digits no larger than `max`
fn parse_offset_part(part: &str, max: i32) -> Option<i32> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok().filter(|value| *value <= max)
}

impl TryFrom<String> for CalendarReference {
    type Error = FinsightError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CalendarReference> for String {
    fn from(value: CalendarReference) -> Self {
        value.to_string()
    }
}

/// A calendar month, ordered chronologically
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Create a month key; `month` is 1-12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    /// The month containing a date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// First day of the month
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    /// Short display label, e.g. "Jan 2024"
    pub fn label(&self) -> String {
        self.first_day().format("%b %Y").to_string()
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_only_in_utc_keeps_written_day() {
        let date = CalendarReference::Utc.calendar_date("2024-03-01");
        assert_eq!(date, Some(ymd(2024, 3, 1)));
    }

    #[test]
    fn test_date_only_west_of_utc_falls_on_previous_day() {
        let reference: CalendarReference = "-05:00".parse().unwrap();
        assert_eq!(reference.calendar_date("2024-03-01"), Some(ymd(2024, 2, 29)));
    }

    #[test]
    fn test_rfc3339_projected_into_reference() {
        let reference: CalendarReference = "+09:00".parse().unwrap();
        assert_eq!(
            reference.calendar_date("2024-01-31T20:00:00Z"),
            Some(ymd(2024, 2, 1))
        );
        assert_eq!(
            CalendarReference::Utc.calendar_date("2024-01-31T20:00:00Z"),
            Some(ymd(2024, 1, 31))
        );
    }

    #[test]
    fn test_wall_clock_time_is_taken_as_is() {
        let reference: CalendarReference = "-08:00".parse().unwrap();
        assert_eq!(
            reference.calendar_date("2024-05-10T23:30:00"),
            Some(ymd(2024, 5, 10))
        );
    }

    #[test]
    fn test_unparseable_date() {
        assert_eq!(CalendarReference::Utc.calendar_date("yesterday"), None);
        assert_eq!(CalendarReference::Utc.calendar_date("2024-13-01"), None);
        assert_eq!(CalendarReference::Utc.calendar_date(""), None);
    }

    #[test]
    fn test_reference_parse_and_display() {
        assert_eq!("UTC".parse::<CalendarReference>().unwrap(), CalendarReference::Utc);
        assert_eq!(
            "local".parse::<CalendarReference>().unwrap(),
            CalendarReference::Local
        );
        assert_eq!("+05:30".parse::<CalendarReference>().unwrap().to_string(), "+05:30");
        assert_eq!("-8".parse::<CalendarReference>().unwrap().to_string(), "-08:00");
        assert!("+05:75".parse::<CalendarReference>().is_err());
        assert!("+99:00".parse::<CalendarReference>().is_err());
        assert!("tokyo".parse::<CalendarReference>().unwrap_err().is_validation());
    }

    #[test]
    fn test_reference_rejects_out_of_range_offsets() {
        let inputs = [
            "+1000000", "-2147483648", "+24:00", "+05:-30", "+05:+30", "+", "+:30", "+005:00",
        ];
        for input in inputs {
            let err = input.parse::<CalendarReference>().unwrap_err();
            assert!(err.is_validation(), "{input} should be rejected");
        }
        assert_eq!("+23:59".parse::<CalendarReference>().unwrap().to_string(), "+23:59");
        assert_eq!("-00:30".parse::<CalendarReference>().unwrap().to_string(), "-00:30");
    }

    #[test]
    fn test_reference_serde() {
        let json = serde_json::to_string(&CalendarReference::Local).unwrap();
        assert_eq!(json, "\"local\"");
        let parsed: CalendarReference = serde_json::from_str("\"+01:00\"").unwrap();
        assert_eq!(parsed.to_string(), "+01:00");
        assert!(serde_json::from_str::<CalendarReference>("\"mars\"").is_err());
    }

    #[test]
    fn test_month_key_ordering_and_label() {
        let dec = MonthKey::new(2023, 12).unwrap();
        let jan = MonthKey::new(2024, 1).unwrap();
        let feb = MonthKey::new(2024, 2).unwrap();
        assert!(dec < jan && jan < feb);
        assert_eq!(jan.label(), "Jan 2024");
        assert_eq!(jan.to_string(), "2024-01");
        assert_eq!(MonthKey::from_date(ymd(2024, 2, 29)), feb);
        assert!(MonthKey::new(2024, 13).is_none());
    }
}
