use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::config::{DATE_FORMAT, TIME_FORMAT};
use crate::load::{EXAM_SECTION, Event, Subject, TBA};

/// An event resolved against the subject directory, ready for table
/// rendering.
#[derive(Debug, Clone)]
pub struct ResolvedEvent {
    pub date: NaiveDate,
    /// Parsed for ordering; the raw string is kept separately for display
    /// so a malformed time still prints verbatim.
    pub time: Option<NaiveTime>,
    pub time_label: String,
    pub kind: String,
    pub subject_name: String,
    pub subject_code: String,
    pub room: String,
    /// Human-readable "DD Mon (Weekday)" label.
    pub date_label: String,
}

/// Outcome of the grouping pass: per-month buckets sorted by (date, time)
/// and the exam bucket kept verbatim in input order.
#[derive(Debug, Clone, Default)]
pub struct GroupedEvents {
    pub by_month: BTreeMap<(i32, u32), Vec<ResolvedEvent>>,
    pub exam: Vec<Event>,
}

/// Partition events into month buckets and the exam bucket.
///
/// Exam-period events bypass date parsing entirely. Events with a `TBA`
/// or unparseable date are dropped without error; unscheduled events are
/// simply left off the printed calendar.
pub fn group_events(events: &[Event], subjects: &BTreeMap<String, Subject>) -> GroupedEvents {
    let mut grouped = GroupedEvents::default();

    for event in events {
        if event.section.as_deref() == Some(EXAM_SECTION) {
            grouped.exam.push(event.clone());
            continue;
        }
        if event.date == TBA {
            continue;
        }
        let Ok(date) = NaiveDate::parse_from_str(&event.date, DATE_FORMAT) else {
            continue;
        };

        let (subject_name, subject_code) = subject_display(event, subjects);
        grouped
            .by_month
            .entry((date.year(), date.month()))
            .or_default()
            .push(ResolvedEvent {
                date,
                time: event
                    .time
                    .as_deref()
                    .and_then(|t| NaiveTime::parse_from_str(t, TIME_FORMAT).ok()),
                time_label: event.time.clone().unwrap_or_default(),
                kind: event.kind.clone(),
                subject_name,
                subject_code,
                room: effective_room(event, subjects),
                date_label: date.format("%d %b (%a)").to_string(),
            });
    }

    for bucket in grouped.by_month.values_mut() {
        bucket.sort_by(|a, b| (a.date, a.time).cmp(&(b.date, b.time)));
    }

    grouped
}

/// Display name and code for an event's subject. An unknown subject key
/// falls back to the raw key with an empty code.
pub fn subject_display(event: &Event, subjects: &BTreeMap<String, Subject>) -> (String, String) {
    let subject = subjects.get(&event.subject);
    let name = subject
        .and_then(|s| s.name.clone())
        .unwrap_or_else(|| event.subject.clone());
    let code = subject.and_then(|s| s.code.clone()).unwrap_or_default();
    (name, code)
}

/// The event's own room when present and non-empty, else the subject's
/// default room, else empty.
pub fn effective_room(event: &Event, subjects: &BTreeMap<String, Subject>) -> String {
    match event.room.as_deref() {
        Some(room) if !room.is_empty() => room.to_string(),
        _ => subjects
            .get(&event.subject)
            .and_then(|s| s.default_room.clone())
            .unwrap_or_default(),
    }
}
