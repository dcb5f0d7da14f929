//! Date selector helpers.
//!
//! The calendar grid always opens on the first day of the selected month.

pub use sae_utils::dates::first_day_of_month_utc as first_day_of_month;
