//! Console report rendering.

use anyhow::Result;
use std::io::Write;
use std::path::Path;

use crate::links::relative_to;
use crate::validator::{BrokenLink, Summary};

/// Final line when every internal link resolved.
pub const SUCCESS_MESSAGE: &str = "All internal markdown links are valid!";

/// Final line when at least one link is broken.
pub const FAILURE_MESSAGE: &str =
    "Validation complete with broken links. Please review the output above.";

/// Writes the progress line announcing the scan root.
///
/// # Errors
///
/// Returns error if writing to output fails.
pub fn write_start(out: &mut impl Write, root: &Path) -> Result<()> {
    writeln!(out, "Starting markdown link validation in: {}", root.display())?;
    Ok(())
}

/// Writes the two detail lines for a broken link.
///
/// Source and resolved paths are shown relative to root.
///
/// # Errors
///
/// Returns error if writing to output fails.
pub fn write_broken(out: &mut impl Write, root: &Path, link: &BrokenLink) -> Result<()> {
    writeln!(
        out,
        "  Broken link found in: {}",
        relative_to(link.source(), root).display()
    )?;
    writeln!(
        out,
        "    Link: '{}' -> Resolved: '{}'",
        link.target(),
        relative_to(link.resolved(), root).display()
    )?;
    Ok(())
}

/// Writes the closing success or failure line.
///
/// # Errors
///
/// Returns error if writing to output fails.
pub fn write_summary(out: &mut impl Write, summary: &Summary) -> Result<()> {
    if summary.is_valid() {
        writeln!(out, "{}", SUCCESS_MESSAGE)?;
    } else {
        writeln!(out, "{}", FAILURE_MESSAGE)?;
    }
    Ok(())
}
