//! Month windows for the shipment date-range lookup.

use chrono::{DateTime, Months, NaiveDate, NaiveTime, Utc};

use crate::error::{CoreError, Result};

/// Half-open interval `[start, end)` covering one calendar month, parsed
/// from a `YYYY-MM` string.
///
/// Rows match the window when `start <= created_at < end`, so the last
/// instant of the month is included and the first instant of the next month
/// is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl MonthWindow {
    /// Parse a `YYYY-MM` string into the window covering that month.
    ///
    /// Rejects anything that is not exactly four year digits, a dash, and
    /// two month digits in `01..=12`.
    pub fn parse(input: &str) -> Result<Self> {
        let (year, month) = input
            .split_once('-')
            .ok_or_else(|| CoreError::invalid_month(input, "expected YYYY-MM"))?;

        if year.len() != 4 || month.len() != 2 {
            return Err(CoreError::invalid_month(input, "expected YYYY-MM"));
        }

        let year: i32 = year
            .parse()
            .map_err(|_| CoreError::invalid_month(input, "year is not numeric"))?;
        let month: u32 = month
            .parse()
            .map_err(|_| CoreError::invalid_month(input, "month is not numeric"))?;

        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| CoreError::invalid_month(input, "month out of range"))?;
        let next = first
            .checked_add_months(Months::new(1))
            .ok_or_else(|| CoreError::invalid_month(input, "month overflows the calendar"))?;

        Ok(Self {
            start: first.and_time(NaiveTime::MIN).and_utc(),
            end: next.and_time(NaiveTime::MIN).and_utc(),
        })
    }

    /// First instant of the month (inclusive).
    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// First instant of the following month (exclusive).
    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Whether an instant falls inside the window.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    #[test]
    fn january_window() {
        let w = MonthWindow::parse("2024-01").unwrap();
        assert_eq!(w.start(), utc(2024, 1, 1, 0, 0, 0));
        assert_eq!(w.end(), utc(2024, 2, 1, 0, 0, 0));
    }

    #[test]
    fn december_rolls_into_next_year() {
        let w = MonthWindow::parse("2023-12").unwrap();
        assert_eq!(w.end(), utc(2024, 1, 1, 0, 0, 0));
    }

    #[test]
    fn leap_february_covers_the_29th() {
        let w = MonthWindow::parse("2024-02").unwrap();
        assert!(w.contains(utc(2024, 2, 29, 23, 59, 59)));
        assert!(!w.contains(utc(2024, 3, 1, 0, 0, 0)));
    }

    #[test]
    fn start_inclusive_end_exclusive() {
        let w = MonthWindow::parse("2024-06").unwrap();
        assert!(w.contains(w.start()));
        assert!(!w.contains(w.end()));
    }

    #[test]
    fn rejects_malformed_input() {
        for input in ["2024", "2024-13", "2024-00", "24-01", "2024-1", "garbage", "2024-xx", ""] {
            assert!(
                MonthWindow::parse(input).is_err(),
                "expected '{input}' to be rejected"
            );
        }
    }
}
