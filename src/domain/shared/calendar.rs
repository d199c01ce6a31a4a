use chrono::{Local, NaiveDate};

/// Current calendar date in the process' local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
