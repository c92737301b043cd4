//! Output routing: files (optionally opened) or stdout.

use std::fs;
use std::io;
use std::path::Path;
use std::process::Command;

use crate::cli::ExportRequest;
use crate::export::ExportError;
use crate::logging::Reporter;

/// Write `content` to every requested output file, or to stdout if none.
///
/// A file that cannot be written is reported and skipped. Only a stdout
/// failure is returned as an error.
pub fn write_outputs(
    content: &str,
    request: &ExportRequest,
    reporter: &mut Reporter,
) -> Result<(), ExportError> {
    if content.is_empty() {
        reporter.error("Nothing to write.");
        return Ok(());
    }

    if request.outputs.is_empty() {
        return reporter.markup(content).map_err(ExportError::Stdout);
    }

    for path in &request.outputs {
        if let Err(e) = write_file(path, content) {
            reporter.error(format!(
                "An error occurred while attempting to write to \"{}\":\n{e}",
                path.display()
            ));
            continue;
        }
        reporter.status(format!("Successfully saved \"{}\"", path.display()));

        if request.open_outputs {
            if let Err(e) = open_path(path) {
                reporter.error(format!("Failed to open \"{}\": {e}", path.display()));
            }
        }
    }

    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<(), ExportError> {
    fs::write(path, content).map_err(|e| ExportError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Open `path` with the platform's default application. Does not wait.
pub fn open_path(path: &Path) -> io::Result<()> {
    tracing::debug!(path = %path.display(), "opening output");
    opener(path).spawn().map(drop)
}

#[cfg(target_os = "macos")]
fn opener(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(windows)]
fn opener(path: &Path) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(path);
    cmd
}

#[cfg(not(any(target_os = "macos", windows)))]
fn opener(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    cmd
}
