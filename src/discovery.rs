//! Markdown file discovery.

use anyhow::{Context, Result};
use log::warn;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File name suffix identifying markdown files (case-sensitive).
const MARKDOWN_SUFFIX: &str = ".md";

/// Returns true if file name ends with the markdown suffix.
///
/// Compares raw bytes so names that are not valid UTF8 still match.
fn is_markdown_name(name: &OsStr) -> bool {
    name.as_encoded_bytes().ends_with(MARKDOWN_SUFFIX.as_bytes())
}

/// Collects markdown files beneath root in traversal order.
///
/// Directories, and symlinks pointing at directories, are not reported even
/// when their name ends in `.md`; symlinked directories are not descended
/// into. Entries below root that cannot be read are logged and skipped.
///
/// # Arguments
///
/// * `root`: Directory to walk
///
/// # Returns
///
/// Paths of every markdown file, each exactly once
///
/// # Errors
///
/// Returns error if root itself cannot be read.
pub fn markdown_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(e)
                    .with_context(|| format!("Cannot read root directory: {}", root.display()));
            }
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        if entry.file_type().is_dir() || (entry.path_is_symlink() && entry.path().is_dir()) {
            continue;
        }

        if is_markdown_name(entry.file_name()) {
            files.push(entry.into_path());
        }
    }

    Ok(files)
}
