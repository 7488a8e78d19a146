use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::calendar::calendar_section;
use crate::dates::Month;
use crate::group::GroupedEvents;
use crate::header::latex_header;
use crate::load::ScheduleData;
use crate::tables::{exam_period_table, month_table};

/// Assemble the complete LaTeX source in fixed order: preamble, title
/// block, calendar grids, per-month tables (months without events are
/// skipped), and the exam table when the exam bucket is non-empty.
pub fn render_document(
    data: &ScheduleData,
    months: &[Month],
    event_dates: &BTreeSet<NaiveDate>,
    grouped: &GroupedEvents,
) -> String {
    let mut lines = latex_header();

    lines.push(r"\begin{document}".to_string());
    lines.push(r"\begin{Form}".to_string());
    lines.push(String::new());

    lines.push(r"\begin{center}".to_string());
    lines.push(format!(
        "{{\\LARGE\\bfseries {}}}\\\\[0.2em]",
        data.info.title
    ));
    lines.push(format!("{{\\large {}}}", data.info.period));
    lines.push(r"\end{center}".to_string());
    lines.push(String::new());
    lines.push(r"\vspace{0.5em}".to_string());
    lines.push(String::new());

    lines.extend(calendar_section(months, event_dates));

    let mut first_table = true;
    for month in months {
        if let Some(month_events) = grouped.by_month.get(&month.key()) {
            lines.extend(month_table(
                &month.name,
                month.year,
                month_events,
                first_table,
            ));
            first_table = false;
        }
    }

    lines.extend(exam_period_table(&grouped.exam, &data.subjects));

    lines.push(r"\end{Form}".to_string());
    lines.push(r"\end{document}".to_string());

    lines.join("\n")
}
