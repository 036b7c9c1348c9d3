//! Broken link checker for markdown documentation trees.

mod config;
mod discovery;
mod links;
mod report;
mod validator;

pub use config::{Config, discover_repository_root};
pub use discovery::markdown_files;
pub use links::{LinkExtractor, LinkMatch, is_skipped, normalize_path, relative_to, resolve};
pub use report::{FAILURE_MESSAGE, SUCCESS_MESSAGE};
pub use validator::{BrokenLink, SkippedFile, Summary, Validator};

use anyhow::Result;
use std::io::Write;
use std::path::Path;

/// Validates internal markdown links beneath root, writing the report to out.
///
/// # Errors
///
/// Returns error if root cannot be read or writing the report fails.
pub fn validate_markdown_links(root: &Path, out: &mut impl Write) -> Result<Summary> {
    Validator::new(root)?.run(out)
}
