use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use crate::config::{AUX_FILE_EXTENSIONS, PDF_COMPILER, PDF_COMPILER_OPTIONS};
use crate::error::ScheduleError;

/// Run the external compiler on the generated source and report whether
/// the PDF materialized.
///
/// The compiler is an opaque collaborator: its output streams are
/// discarded and its exit status is only logged. The sole contract
/// honored is "a same-named PDF exists on success". A missing PDF is
/// reported as `Ok(false)`, not an error; the caller decides the exit
/// behavior.
pub fn compile_pdf(tex_path: &Path) -> Result<bool, ScheduleError> {
    let tex_dir = tex_path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    let tex_filename = tex_path.file_name().map(ToOwned::to_owned).unwrap_or_default();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg} [{elapsed}]")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    spinner.set_message("Compiling PDF...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let mut child = Command::new(PDF_COMPILER)
        .args(PDF_COMPILER_OPTIONS)
        .arg(&tex_filename)
        .current_dir(&tex_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    let status = child.wait()?;
    spinner.finish_and_clear();
    debug!(code = ?status.code(), "compiler exited");

    let pdf_path = tex_path.with_extension("pdf");
    if !pdf_path.exists() {
        warn!(pdf = %pdf_path.display(), "compiler did not produce the expected PDF");
        return Ok(false);
    }

    for ext in AUX_FILE_EXTENSIONS {
        let byproduct = tex_path.with_extension(ext);
        if byproduct.exists() {
            fs::remove_file(&byproduct)?;
        }
    }
    info!(pdf = %pdf_path.display(), "PDF compiled, auxiliary files removed");

    Ok(true)
}
