//! Date labels shown alongside deal data.

use chrono::{Datelike, Duration, Local, NaiveDate};

/// Today's date in the server's local timezone.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Short US-style date label, e.g. `"2/16/2026"`.
#[must_use]
pub fn date_label(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

/// Monday and Sunday of the week containing `date`. A Sunday closes the
/// week that started the previous Monday.
#[must_use]
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let offset = i64::from(date.weekday().num_days_from_monday());
    let start = date - Duration::days(offset);
    (start, start + Duration::days(6))
}

/// Deal-week label, e.g. `"Feb 16 – Feb 22, 2026"`.
#[must_use]
pub fn week_label(date: NaiveDate) -> String {
    let (start, end) = week_bounds(date);
    format!("{} – {}", start.format("%b %-d"), end.format("%b %-d, %Y"))
}
