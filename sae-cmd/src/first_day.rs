use anyhow::Context;
use chrono::{Local, NaiveDate};
use sae_utils::dates::{first_day_of_month, format_date, parse_date};

/// Resolve the month start for `date`, or for today when no date is given.
pub fn month_start(date: Option<&str>) -> anyhow::Result<NaiveDate> {
    let date = match date {
        Some(s) => parse_date(s)
            .with_context(|| format!("invalid date {s:?}, expected YYYY-MM-DD"))?,
        None => Local::now().naive_local().date(),
    };
    Ok(first_day_of_month(&date))
}

pub fn run_first_day(date: Option<&str>) -> anyhow::Result<()> {
    let start = month_start(date)?;
    println!("{}", format_date(&start));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::month_start;
    use chrono::{Datelike, NaiveDate};

    #[test]
    fn test_month_start_from_argument() {
        let start = month_start(Some("2023-11-19")).unwrap();
        assert_eq!(start, NaiveDate::from_ymd_opt(2023, 11, 1).unwrap());
    }

    #[test]
    fn test_month_start_defaults_to_today() {
        let start = month_start(None).unwrap();
        assert_eq!(start.day(), 1);
    }

    #[test]
    fn test_month_start_rejects_bad_date() {
        let err = month_start(Some("2023-13-01")).unwrap_err();
        assert!(err.to_string().contains("2023-13-01"));
    }
}
