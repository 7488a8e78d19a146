use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

use crate::config::DATE_FORMAT;
use crate::load::{EXAM_SECTION, Event, TBA};

/// A single calendar month covered by the schedule period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Month {
    pub year: i32,
    pub month: u32,
    pub name: String,
}

impl Month {
    pub fn key(&self) -> (i32, u32) {
        (self.year, self.month)
    }
}

/// Collect every distinct parseable date among non-exam events.
///
/// `TBA` and unparseable values are skipped silently, and exam-period
/// events never appear in the month calendars. The set only drives
/// calendar highlighting, so duplicates collapse.
pub fn event_dates(events: &[Event]) -> BTreeSet<NaiveDate> {
    events
        .iter()
        .filter(|event| event.section.as_deref() != Some(EXAM_SECTION))
        .filter(|event| !event.date.is_empty() && event.date != TBA)
        .filter_map(|event| NaiveDate::parse_from_str(&event.date, DATE_FORMAT).ok())
        .collect()
}

/// Closed, chronological list of months from the start month through the
/// end month, rolling the year over at December.
pub fn calendar_months(start: NaiveDate, end: NaiveDate) -> Vec<Month> {
    let mut months = Vec::new();
    let (mut year, mut month) = (start.year(), start.month());
    let end_key = (end.year(), end.month());

    while (year, month) <= end_key {
        months.push(Month {
            year,
            month,
            name: month_name(month).to_string(),
        });
        if month == 12 {
            year += 1;
            month = 1;
        } else {
            month += 1;
        }
    }

    months
}

fn month_name(month: u32) -> &'static str {
    chrono::Month::try_from(month as u8)
        .map(|m| m.name())
        .unwrap_or("Unknown")
}
