use crate::model::{JunkMatch, total_size};
use crossterm::style::{ContentStyle, StyledContent, Stylize};
use std::fmt::Display;
use std::io::{self, Write};
use std::path::Path;
use sysinfo::Disks;

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Formats a byte count with two decimals in the largest unit below 1024,
/// stopping at TB.
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64) -> String {
    let mut value = bytes as f64;
    for unit in &UNITS[..UNITS.len() - 1] {
        if value < 1024.0 {
            return format!("{value:.2} {unit}");
        }
        value /= 1024.0;
    }
    format!("{value:.2} {}", UNITS[UNITS.len() - 1])
}

/// Drops all styling from `styled` unless `color` is set.
pub fn paint<D: Display>(mut styled: StyledContent<D>, color: bool) -> StyledContent<D> {
    if !color {
        *styled.style_mut() = ContentStyle::new();
    }
    styled
}

/// Largest first. Ties keep scan order.
pub fn sort_by_size(matches: &[JunkMatch]) -> Vec<&JunkMatch> {
    let mut sorted: Vec<&JunkMatch> = matches.iter().collect();
    sorted.sort_by(|a, b| b.size.cmp(&a.size));
    sorted
}

/// Usage of the volume that holds `root`, if it can be determined.
pub fn disk_usage_line(root: &Path) -> Option<String> {
    let root = root.canonicalize().ok()?;
    let disks = Disks::new_with_refreshed_list();
    let disk = disks
        .list()
        .iter()
        .filter(|d| root.starts_with(d.mount_point()))
        .max_by_key(|d| d.mount_point().as_os_str().len())?;

    let total = disk.total_space();
    let used = total.saturating_sub(disk.available_space());
    let percent = if total > 0 {
        #[allow(clippy::cast_precision_loss)]
        {
            (used as f64 / total as f64) * 100.0
        }
    } else {
        0.0
    };

    Some(format!(
        "Disk: {} / {} ({percent:.1}% Used)",
        format_size(used),
        format_size(total)
    ))
}

pub fn render_report<W: Write>(
    out: &mut W,
    matches: &[JunkMatch],
    root: &Path,
    color: bool,
) -> io::Result<()> {
    let sorted = sort_by_size(matches);
    let width = sorted
        .iter()
        .map(|m| relative_display(&m.path, root).chars().count())
        .max()
        .unwrap_or(0)
        .max(15);

    writeln!(out)?;
    for m in &sorted {
        let rel = relative_display(&m.path, root);
        writeln!(out, "{rel:<width$} -> {}", paint(format_size(m.size).bold(), color))?;
    }
    writeln!(out, "{}", "-".repeat(width + 15))?;
    writeln!(
        out,
        "Total space used: {} in {} folder{}",
        paint(format_size(total_size(matches)).bold().yellow(), color),
        matches.len(),
        if matches.len() == 1 { "" } else { "s" }
    )?;
    Ok(())
}

fn relative_display(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
