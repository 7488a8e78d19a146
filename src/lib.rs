pub mod calendar;
pub mod compile;
pub mod config;
pub mod dates;
pub mod document;
pub mod error;
pub mod group;
pub mod header;
pub mod load;
pub mod logging;
pub mod tables;

use std::fs;

use tracing::info;

use compile::compile_pdf;
use config::CliArgs;
use dates::{calendar_months, event_dates};
use document::render_document;
use error::ScheduleError;
use group::group_events;
use load::load_schedule;

/// Run the full pipeline: load, derive dates, group events, render the
/// LaTeX source, write it, and compile the PDF.
pub fn run(cli: CliArgs) -> Result<(), ScheduleError> {
    info!(input = %cli.input.display(), "reading schedule data");
    let data = load_schedule(&cli.input)?;
    info!(
        events = data.events.len(),
        subjects = data.subjects.len(),
        "schedule data loaded"
    );

    let dates = event_dates(&data.events);
    let months = calendar_months(data.info.start_date, data.info.end_date);
    info!(months = months.len(), "schedule period enumerated");

    let grouped = group_events(&data.events, &data.subjects);

    let document = render_document(&data, &months, &dates, &grouped);
    fs::write(&cli.output, &document)?;
    println!("Generated {}", cli.output.display());

    let pdf_path = cli.output.with_extension("pdf");
    if !compile_pdf(&cli.output)? {
        return Err(ScheduleError::CompilationFailed(pdf_path));
    }
    println!("PDF compiled: {}", pdf_path.display());

    Ok(())
}
