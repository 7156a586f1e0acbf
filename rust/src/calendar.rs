//! Mapping between day offsets and calendar dates.
//!
//! Offsets are plain day counts from the project start; no working-day or
//! holiday rules are applied.

use chrono::{Days, NaiveDate};

/// Anchors day offset 0 to a calendar date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectCalendar {
    start: NaiveDate,
}

impl ProjectCalendar {
    pub fn new(start: NaiveDate) -> Self {
        Self { start }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Calendar date of a day offset; `None` for negative (uncomputed) offsets.
    pub fn date_for(&self, offset: i64) -> Option<NaiveDate> {
        let days = u64::try_from(offset).ok()?;
        self.start.checked_add_days(Days::new(days))
    }

    /// `dd/mm/yyyy`, or `--/--/----` for an uncomputed offset.
    pub fn format_long(&self, offset: i64) -> String {
        long_label(self.date_for(offset))
    }
}

/// `dd/mm` label of a date, `--/--` when there is none.
pub fn short_label(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d/%m").to_string())
        .unwrap_or_else(|| "--/--".to_string())
}

/// `dd/mm/yyyy` label of a date, `--/--/----` when there is none.
pub fn long_label(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "--/--/----".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::UNCOMPUTED;

    fn calendar() -> ProjectCalendar {
        ProjectCalendar::new(NaiveDate::from_ymd_opt(2024, 2, 27).unwrap())
    }

    #[test]
    fn test_date_for_crosses_month_and_leap_day() {
        let cal = calendar();
        assert_eq!(cal.date_for(0), NaiveDate::from_ymd_opt(2024, 2, 27));
        assert_eq!(cal.date_for(2), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(cal.date_for(3), NaiveDate::from_ymd_opt(2024, 3, 1));
    }

    #[test]
    fn test_uncomputed_offset_has_no_date() {
        let cal = calendar();
        assert_eq!(cal.date_for(UNCOMPUTED), None);
        assert_eq!(short_label(cal.date_for(UNCOMPUTED)), "--/--");
        assert_eq!(cal.format_long(UNCOMPUTED), "--/--/----");
    }

    #[test]
    fn test_formatting() {
        let cal = calendar();
        assert_eq!(short_label(cal.date_for(3)), "01/03");
        assert_eq!(cal.format_long(3), "01/03/2024");
        assert_eq!(short_label(None), "--/--");
        assert_eq!(long_label(cal.date_for(12)), "10/03/2024");
    }
}
