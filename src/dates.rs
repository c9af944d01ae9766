use chrono::{Datelike, Duration, NaiveDate, Weekday};
use tracing::debug;

use crate::error::{Result, YnabError};

const OUTPUT_FORMAT: &str = "%m/%d/%Y";

const WEEKDAYS: [(&str, Weekday); 7] = [
    ("monday", Weekday::Mon),
    ("tuesday", Weekday::Tue),
    ("wednesday", Weekday::Wed),
    ("thursday", Weekday::Thu),
    ("friday", Weekday::Fri),
    ("saturday", Weekday::Sat),
    ("sunday", Weekday::Sun),
];

fn parse_weekday(term: &str) -> Option<Weekday> {
    WEEKDAYS
        .iter()
        .find(|(name, _)| term.eq_ignore_ascii_case(name))
        .map(|(_, day)| *day)
}

/// Turn a relative term from the Wallet app ("Yesterday", "Tuesday") into an
/// MM/DD/YYYY date, counting back from `today`.
///
/// A weekday resolves to its most recent occurrence on or before `today`.
/// Anything unrecognized resolves to `today` itself; the app shows times such
/// as "2 hours ago" for same-day purchases.
pub fn resolve_relative(term: &str, today: NaiveDate) -> String {
    let term = term.trim();
    let date = if term.eq_ignore_ascii_case("yesterday") {
        today - Duration::days(1)
    } else if let Some(target) = parse_weekday(term) {
        let current = today.weekday().num_days_from_monday();
        let back = (current + 7 - target.num_days_from_monday()) % 7;
        today - Duration::days(back as i64)
    } else {
        debug!(term, "unrecognized relative date, using reference date");
        today
    };
    date.format(OUTPUT_FORMAT).to_string()
}

/// Process the "<User> - <date>" line: drop everything up to the last hyphen,
/// then either reformat an MM/DD/YY date or resolve a relative term.
pub fn process_date_line(line: &str, today: NaiveDate) -> Result<String> {
    let payload = line.rsplit('-').next().unwrap_or(line).trim();
    if payload.contains('/') {
        let parsed = NaiveDate::parse_from_str(payload, "%m/%d/%y")
            .map_err(|_| YnabError::DateParse(payload.to_string()))?;
        Ok(parsed.format(OUTPUT_FORMAT).to_string())
    } else {
        Ok(resolve_relative(payload, today))
    }
}
