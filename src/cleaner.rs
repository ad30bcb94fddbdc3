use crate::model::{JunkMatch, total_size};
use crate::report::{format_size, paint};
use crossterm::style::Stylize;
use std::fs;
use std::io::{self, Write};
use tracing::{info, warn};

/// What happened to each entry of a batch.
#[derive(Debug, Default)]
pub struct CleanReport {
    pub removed: Vec<JunkMatch>,
    pub failed: Vec<(JunkMatch, io::Error)>,
}

impl CleanReport {
    pub fn freed(&self) -> u64 {
        total_size(&self.removed)
    }
}

/// Removes every match, or only announces it when `dry_run` is set.
///
/// A failed removal is reported and the batch moves on; nothing already
/// removed is restored. In dry-run mode `removed` lists what would go.
pub fn execute<W: Write>(
    matches: &[JunkMatch],
    dry_run: bool,
    out: &mut W,
    color: bool,
) -> io::Result<CleanReport> {
    let mut report = CleanReport::default();

    for item in matches {
        let path = item.path.display();
        let size = format_size(item.size);

        if dry_run {
            writeln!(out, "{} {path} ({size})", paint("Would delete".cyan(), color))?;
            report.removed.push(item.clone());
            continue;
        }

        match fs::remove_dir_all(&item.path) {
            Ok(()) => {
                info!(path = %path, "removed");
                writeln!(out, "{} {path} ({size})", paint("Deleted".green(), color))?;
                report.removed.push(item.clone());
            }
            Err(e) => {
                warn!(path = %path, error = %e, "removal failed");
                writeln!(out, "{} {path}: {e}", paint("Failed to delete".red(), color))?;
                report.failed.push((item.clone(), e));
            }
        }
    }

    writeln!(out)?;
    if dry_run {
        writeln!(
            out,
            "Dry run: {} folder(s) would free {}. Nothing was deleted.",
            report.removed.len(),
            paint(format_size(report.freed()).bold(), color)
        )?;
    } else {
        writeln!(
            out,
            "Freed {} ({} deleted, {} failed).",
            paint(format_size(report.freed()).bold(), color),
            report.removed.len(),
            report.failed.len()
        )?;
    }

    Ok(report)
}
