//! Shared helper functions for admin-element crates.

pub mod lookup;

/// Date utility functions
pub mod dates {
    use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveTime, Utc};

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")?)
    }

    /// First calendar day of the month containing `date`.
    pub fn first_day_of_month(date: &NaiveDate) -> NaiveDate {
        *date - Days::new(u64::from(date.day0()))
    }

    /// Midnight UTC on the first day of the instant's UTC month.
    ///
    /// The year and month are read in UTC, so an instant late on the last
    /// day of a month in a western timezone may already belong to the next
    /// month here.
    pub fn first_day_of_month_utc(instant: &DateTime<Utc>) -> DateTime<Utc> {
        first_day_of_month(&instant.date_naive())
            .and_time(NaiveTime::MIN)
            .and_utc()
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::{NaiveDate, TimeZone, Utc};

        #[test]
        fn test_first_day_of_month() {
            let mid = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
            assert_eq!(
                first_day_of_month(&mid),
                NaiveDate::from_ymd_opt(2023, 6, 1).unwrap()
            );

            let first = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
            assert_eq!(first_day_of_month(&first), first);

            let leap = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
            assert_eq!(
                first_day_of_month(&leap),
                NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()
            );

            let dec31 = NaiveDate::from_ymd_opt(2022, 12, 31).unwrap();
            assert_eq!(
                first_day_of_month(&dec31),
                NaiveDate::from_ymd_opt(2022, 12, 1).unwrap()
            );
        }

        #[test]
        fn test_first_day_of_month_utc_drops_time() {
            let instant = Utc.with_ymd_and_hms(2023, 3, 17, 22, 45, 10).unwrap();
            let expected = Utc.with_ymd_and_hms(2023, 3, 1, 0, 0, 0).unwrap();
            assert_eq!(first_day_of_month_utc(&instant), expected);
        }

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2023-06-15");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }

        #[test]
        fn test_parse_rejects_bad_format() {
            assert!(parse_date("15/06/2023").is_err());
            assert!(parse_date("").is_err());
        }
    }
}
