use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

use crate::config::{CALENDAR_X_SPACING_CM, CALENDAR_Y_SPACING_CM, CALENDARS_PER_ROW};
use crate::dates::Month;

/// Emit the mini-calendar section: one tikz calendar per month laid out
/// three per row, with every event day circled in red.
pub fn calendar_section(months: &[Month], event_dates: &BTreeSet<NaiveDate>) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(r"% Mini Calendars".to_string());
    lines.push(r"\begin{center}".to_string());
    lines.push(r"\begin{tikzpicture}[every calendar/.style={".to_string());
    lines.push(r"    week list, ".to_string());
    lines.push(r"    month label above centered, ".to_string());
    lines.push(r"    month text=\textbf{\%mt \%y0},".to_string());
    lines.push(r"    day xshift=2.2em,".to_string());
    lines.push(r"    day yshift=1.8em".to_string());
    lines.push(r"}]".to_string());
    lines.push(String::new());

    for (idx, month) in months.iter().enumerate() {
        lines.push(format!("% {} {}", month.name, month.year));

        // The first calendar sits at the origin; the rest get explicit
        // grid coordinates.
        let x_pos = (idx % CALENDARS_PER_ROW) as i32 * CALENDAR_X_SPACING_CM;
        let y_pos = -((idx / CALENDARS_PER_ROW) as i32) * CALENDAR_Y_SPACING_CM;
        let at_clause = if idx > 0 {
            format!(", at={{({x_pos}cm,{y_pos}cm)}}")
        } else {
            String::new()
        };

        lines.push(format!(
            "\\calendar[dates={year}-{month:02}-01 to {year}-{month:02}-last, name={name}{at_clause},",
            year = month.year,
            month = month.month,
            name = month.name.to_lowercase(),
        ));
        lines.push(r"          every day/.style={anchor=base}]".to_string());

        for date in event_dates {
            if date.year() == month.year && date.month() == month.month {
                lines.push(format!("  \\eventday{{{}}}", date.format("%Y-%m-%d")));
            }
        }

        lines.push(";".to_string());
        lines.push(String::new());
    }

    lines.push(r"\end{tikzpicture}".to_string());
    lines.push(String::new());
    lines.push(r"\vspace{0.5em}".to_string());
    lines.push(String::new());
    lines.push(r"\small{\textit{Red circles indicate days with scheduled events}}".to_string());
    lines.push(r"\end{center}".to_string());
    lines.push(String::new());
    lines.push(r"\vspace{0.8em}".to_string());
    lines.push(String::new());

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn month(year: i32, month: u32, name: &str) -> Month {
        Month {
            year,
            month,
            name: name.to_string(),
        }
    }

    #[test]
    fn lays_calendars_out_three_per_row() {
        let months = vec![
            month(2024, 9, "September"),
            month(2024, 10, "October"),
            month(2024, 11, "November"),
            month(2024, 12, "December"),
        ];
        let lines = calendar_section(&months, &BTreeSet::new());
        let directives: Vec<_> = lines
            .iter()
            .filter(|l| l.starts_with(r"\calendar"))
            .collect();
        assert_eq!(directives.len(), 4);
        // First calendar has no at clause; the fourth wraps to a new row.
        assert!(directives[0].contains("name=september,"));
        assert!(!directives[0].contains("at="));
        assert!(directives[1].contains("at={(10cm,0cm)}"));
        assert!(directives[2].contains("at={(20cm,0cm)}"));
        assert!(directives[3].contains("at={(0cm,-10cm)}"));
        assert!(directives[3].contains("dates=2024-12-01 to 2024-12-last"));
    }

    #[test]
    fn highlights_only_dates_inside_the_month() {
        let months = vec![month(2024, 9, "September"), month(2024, 10, "October")];
        let dates: BTreeSet<_> = [date(2024, 9, 15), date(2024, 9, 2), date(2024, 10, 1)]
            .into_iter()
            .collect();
        let lines = calendar_section(&months, &dates);

        let september_block: Vec<_> = lines
            .iter()
            .skip_while(|l| !l.contains("name=september"))
            .take_while(|l| l.as_str() != ";")
            .filter(|l| l.contains(r"\eventday"))
            .map(String::as_str)
            .collect();
        assert_eq!(
            september_block,
            vec![
                r"  \eventday{2024-09-02}",
                r"  \eventday{2024-09-15}"
            ]
        );
        assert!(lines.iter().any(|l| l == r"  \eventday{2024-10-01}"));
    }
}
