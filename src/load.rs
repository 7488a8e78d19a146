use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::config::DATE_FORMAT;
use crate::error::ScheduleError;

/// Sentinel date for events that have not been scheduled yet.
pub const TBA: &str = "TBA";

/// Section value that routes an event to the exam table instead of a
/// month bucket.
pub const EXAM_SECTION: &str = "Exam Period";

/// The three validated top-level sections of the input file.
#[derive(Debug, Clone)]
pub struct ScheduleData {
    pub info: ScheduleInfo,
    pub subjects: BTreeMap<String, Subject>,
    pub events: Vec<Event>,
}

/// Schedule metadata. Loader-enforced: both dates parse and the range is
/// not inverted.
#[derive(Debug, Clone)]
pub struct ScheduleInfo {
    pub title: String,
    pub period: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Subject {
    pub name: Option<String>,
    pub code: Option<String>,
    pub default_room: Option<String>,
}

/// A raw event record. Beyond JSON shape nothing is validated here;
/// unscheduled or malformed dates are handled leniently downstream.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub date: String,
    pub time: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub subject: String,
    pub room: Option<String>,
    pub section: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawSchedule {
    schedule_info: Option<RawScheduleInfo>,
    subjects: Option<BTreeMap<String, Subject>>,
    events: Option<Vec<Event>>,
}

#[derive(Debug, Deserialize)]
struct RawScheduleInfo {
    title: Option<String>,
    period: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
}

/// Load and structurally validate the schedule file.
///
/// Fails with a distinct error for: file absent, malformed JSON, missing
/// top-level section, missing schedule_info field, unparseable metadata
/// date, or an inverted date range.
pub fn load_schedule(path: &Path) -> Result<ScheduleData, ScheduleError> {
    if !path.exists() {
        return Err(ScheduleError::NotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path)?;
    parse_schedule(&text, path)
}

fn parse_schedule(text: &str, path: &Path) -> Result<ScheduleData, ScheduleError> {
    let raw: RawSchedule = serde_json::from_str(text).map_err(|source| ScheduleError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    match (raw.schedule_info, raw.subjects, raw.events) {
        (Some(info), Some(subjects), Some(events)) => Ok(ScheduleData {
            info: resolve_info(info)?,
            subjects,
            events,
        }),
        (info, subjects, events) => {
            let mut missing = Vec::new();
            if info.is_none() {
                missing.push("schedule_info");
            }
            if subjects.is_none() {
                missing.push("subjects");
            }
            if events.is_none() {
                missing.push("events");
            }
            Err(ScheduleError::MissingSections(missing.join(", ")))
        }
    }
}

fn resolve_info(raw: RawScheduleInfo) -> Result<ScheduleInfo, ScheduleError> {
    match (raw.title, raw.period, raw.start_date, raw.end_date) {
        (Some(title), Some(period), Some(start), Some(end)) => {
            let start_date = parse_info_date("start_date", &start)?;
            let end_date = parse_info_date("end_date", &end)?;
            if start_date > end_date {
                return Err(ScheduleError::InvalidRange {
                    start: start_date,
                    end: end_date,
                });
            }
            Ok(ScheduleInfo {
                title,
                period,
                start_date,
                end_date,
            })
        }
        (title, period, start, end) => {
            let mut missing = Vec::new();
            if title.is_none() {
                missing.push("title");
            }
            if period.is_none() {
                missing.push("period");
            }
            if start.is_none() {
                missing.push("start_date");
            }
            if end.is_none() {
                missing.push("end_date");
            }
            Err(ScheduleError::MissingInfoFields(missing.join(", ")))
        }
    }
}

fn parse_info_date(field: &'static str, value: &str) -> Result<NaiveDate, ScheduleError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| ScheduleError::InvalidDate {
        field,
        value: value.to_string(),
    })
}
