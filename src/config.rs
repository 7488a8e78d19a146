use std::path::PathBuf;

use clap::Parser;

/// Date pattern required of schedule metadata and used for event dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Fixed-width 24h time pattern expected on events.
pub const TIME_FORMAT: &str = "%H:%M";

/// External compiler invoked on the generated source.
pub const PDF_COMPILER: &str = "pdflatex";
pub const PDF_COMPILER_OPTIONS: [&str; 1] = ["-interaction=nonstopmode"];

/// Byproduct extensions removed next to the PDF after a successful run.
pub const AUX_FILE_EXTENSIONS: [&str; 3] = ["aux", "log", "out"];

/// Mini-calendar grid layout: calendars per row and spacing between cells.
pub const CALENDARS_PER_ROW: usize = 3;
pub const CALENDAR_X_SPACING_CM: i32 = 10;
pub const CALENDAR_Y_SPACING_CM: i32 = 10;

/// CLI surface for the schedule generator.
#[derive(Debug, Parser, Clone)]
#[command(
    author,
    version,
    about = "Generate a printable academic schedule PDF from JSON data"
)]
pub struct CliArgs {
    /// Input JSON file with schedule data.
    #[arg(value_name = "INPUT", default_value = "schedule_data.json")]
    pub input: PathBuf,

    /// Output path for the generated LaTeX source.
    #[arg(value_name = "OUTPUT", default_value = "Academic Schedule.tex")]
    pub output: PathBuf,
}
