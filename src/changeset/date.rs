use chrono::{Local, NaiveDate};

/// Changelog section header for `date`, formatted as `## DD-MM-YYYY`.
pub fn date_header(date: NaiveDate) -> String {
    date.format("## %d-%m-%Y").to_string()
}

/// Changelog section header for today's local date.
pub fn current_date_header() -> String {
    date_header(Local::now().date_naive())
}
