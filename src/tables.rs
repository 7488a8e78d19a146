use std::collections::BTreeMap;

use crate::group::{ResolvedEvent, effective_room, subject_display};
use crate::load::{Event, Subject};

const COLUMN_LAYOUT: &str = r"\begin{longtable}{@{} L{2.8cm} M{1.5cm} L{13cm} M{2cm} M{1.8cm} @{}}";
const HEADER_ROW: &str =
    r"\textbf{Date} & \textbf{Time} & \textbf{Event} & \textbf{Room} & \textbf{Done} \ding{51} \ding{55} \\";

/// Table for one month. Rows are grouped by display date: the label
/// prints once per group, with a divider after each date group except the
/// last. Expects the bucket pre-sorted by (date, time).
pub fn month_table(
    month_name: &str,
    year: i32,
    month_events: &[ResolvedEvent],
    first_table: bool,
) -> Vec<String> {
    let mut lines = Vec::new();

    if !first_table {
        lines.push(r"\newpage".to_string());
    }
    lines.push(format!("% {month_name} {year}"));
    lines.push(format!("\\noindent\\textbf{{\\large {month_name} {year}}}"));
    lines.push(String::new());
    lines.push(r"\vspace{0.3em}".to_string());
    lines.push(String::new());
    push_table_shell(&mut lines);

    let mut remaining = month_events;
    while !remaining.is_empty() {
        let label = &remaining[0].date_label;
        let run = remaining
            .iter()
            .take_while(|e| &e.date_label == label)
            .count();

        for (i, event) in remaining[..run].iter().enumerate() {
            let date_col = if i == 0 { label.as_str() } else { "" };
            lines.push(format!(
                "{} & {} & {} & {} & \\donebox \\\\",
                date_col,
                event.time_label,
                event_cell(&event.kind, &event.subject_name, &event.subject_code),
                event.room,
            ));
        }

        remaining = &remaining[run..];
        if !remaining.is_empty() {
            lines.push(r"\midrule".to_string());
            lines.push(String::new());
        }
    }

    lines.push(r"\bottomrule".to_string());
    lines.push(r"\end{longtable}".to_string());
    lines.push(String::new());
    lines.push(r"\vspace{0.5em}".to_string());
    lines.push(String::new());

    lines
}

/// Exam-period table: raw date strings verbatim (including `TBA`), input
/// order, no grouping or dividers. Emits nothing at all when the bucket
/// is empty.
pub fn exam_period_table(
    exam_events: &[Event],
    subjects: &BTreeMap<String, Subject>,
) -> Vec<String> {
    if exam_events.is_empty() {
        return Vec::new();
    }

    let mut lines = Vec::new();
    lines.push(r"\newpage".to_string());
    lines.push(r"% Exam Period".to_string());
    lines.push(r"\noindent\textbf{\large Exam Period}".to_string());
    lines.push(String::new());
    lines.push(r"\vspace{0.3em}".to_string());
    lines.push(String::new());
    push_table_shell(&mut lines);

    for event in exam_events {
        let (name, code) = subject_display(event, subjects);
        lines.push(format!(
            "{} & {} & {} & {} & \\donebox \\\\",
            event.date,
            event.time.as_deref().unwrap_or_default(),
            event_cell(&event.kind, &name, &code),
            effective_room(event, subjects),
        ));
    }

    lines.push(r"\bottomrule".to_string());
    lines.push(r"\end{longtable}".to_string());
    lines.push(String::new());

    lines
}

/// Shared five-column longtable opening with repeated header rows.
fn push_table_shell(lines: &mut Vec<String>) {
    lines.push(COLUMN_LAYOUT.to_string());
    lines.push(r"\toprule".to_string());
    lines.push(HEADER_ROW.to_string());
    lines.push(r"\midrule".to_string());
    lines.push(r"\endfirsthead".to_string());
    lines.push(String::new());
    lines.push(r"\toprule".to_string());
    lines.push(HEADER_ROW.to_string());
    lines.push(r"\midrule".to_string());
    lines.push(r"\endhead".to_string());
    lines.push(String::new());
}

fn event_cell(kind: &str, subject_name: &str, subject_code: &str) -> String {
    let subject = if subject_code.is_empty() {
        subject_name.to_string()
    } else {
        format!("{subject_name} ({subject_code})")
    };
    format!(
        "\\textbf{{{}}} -- \\textit{{{}}}",
        escape_ampersands(kind),
        subject
    )
}

/// Escape bare ampersands so free-text labels cannot break table rows.
fn escape_ampersands(text: &str) -> String {
    text.replace('&', r"\&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn resolved(day: u32, time: Option<&str>, kind: &str) -> ResolvedEvent {
        let date = NaiveDate::from_ymd_opt(2024, 9, day).unwrap();
        ResolvedEvent {
            date,
            time: time.and_then(|t| NaiveTime::parse_from_str(t, "%H:%M").ok()),
            time_label: time.unwrap_or_default().to_string(),
            kind: kind.to_string(),
            subject_name: "Mathematics".to_string(),
            subject_code: "MATH101".to_string(),
            room: "A-1".to_string(),
            date_label: date.format("%d %b (%a)").to_string(),
        }
    }

    #[test]
    fn date_label_prints_once_per_group() {
        let events = vec![
            resolved(15, Some("09:00"), "Lecture"),
            resolved(15, Some("14:00"), "Tutorial"),
            resolved(16, None, "Quiz"),
        ];
        let lines = month_table("September", 2024, &events, true);
        let rows: Vec<_> = lines
            .iter()
            .filter(|l| l.ends_with(r"\donebox \\"))
            .collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].starts_with("15 Sep (Sun) & 09:00 &"));
        assert!(rows[1].starts_with(" & 14:00 &"));
        assert!(rows[2].starts_with("16 Sep (Mon) &"));
    }

    #[test]
    fn divider_appears_between_groups_but_not_after_the_last() {
        let events = vec![
            resolved(15, Some("09:00"), "Lecture"),
            resolved(16, None, "Quiz"),
        ];
        let lines = month_table("September", 2024, &events, true);
        let shell_midrules = 2; // one per repeated longtable header
        let midrules = lines.iter().filter(|l| l.as_str() == r"\midrule").count();
        assert_eq!(midrules - shell_midrules, 1);
        // The last row is followed directly by the bottom rule.
        let last_row = lines
            .iter()
            .rposition(|l| l.ends_with(r"\donebox \\"))
            .unwrap();
        assert_eq!(lines[last_row + 1], r"\bottomrule");
    }

    #[test]
    fn first_table_has_no_page_break() {
        let events = vec![resolved(15, None, "Lecture")];
        let first = month_table("September", 2024, &events, true);
        let later = month_table("October", 2024, &events, false);
        assert_ne!(first[0], r"\newpage");
        assert_eq!(later[0], r"\newpage");
    }

    #[test]
    fn ampersands_in_the_event_type_are_escaped() {
        let events = vec![resolved(15, None, "Q&A Session")];
        let lines = month_table("September", 2024, &events, true);
        let row = lines
            .iter()
            .find(|l| l.contains("Session"))
            .expect("row rendered");
        assert!(row.contains(r"Q\&A Session"));
        assert!(!row.contains(" Q&A "));
    }

    #[test]
    fn subject_code_is_appended_in_parentheses() {
        let events = vec![resolved(15, None, "Lecture")];
        let lines = month_table("September", 2024, &events, true);
        assert!(
            lines
                .iter()
                .any(|l| l.contains(r"\textbf{Lecture} -- \textit{Mathematics (MATH101)}"))
        );
    }

    #[test]
    fn empty_exam_bucket_emits_nothing() {
        let lines = exam_period_table(&[], &BTreeMap::new());
        assert!(lines.is_empty());
    }

    #[test]
    fn exam_table_uses_the_raw_date_verbatim() {
        let event = Event {
            date: "TBA".to_string(),
            time: None,
            kind: "Final Exam".to_string(),
            subject: "math".to_string(),
            room: None,
            section: Some("Exam Period".to_string()),
        };
        let mut subjects = BTreeMap::new();
        subjects.insert(
            "math".to_string(),
            Subject {
                name: Some("Mathematics".to_string()),
                code: None,
                default_room: Some("Hall 1".to_string()),
            },
        );
        let lines = exam_period_table(&[event], &subjects);
        assert!(lines.iter().any(|l| l.starts_with("TBA & ")));
        assert!(
            lines
                .iter()
                .any(|l| l.contains(r"\textbf{Final Exam} -- \textit{Mathematics} & Hall 1"))
        );
    }
}
