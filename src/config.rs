//! Command line configuration.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

use crate::links::normalize_path;

/// Command line configuration for doclinks.
#[derive(Debug, Clone, Parser)]
#[command(name = "doclinks", version, about, long_about = None)]
pub struct Config {
    /// Directory to scan (defaults to the enclosing git repository)
    pub root: Option<PathBuf>,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Returns the absolute, normalized directory to scan.
    ///
    /// An explicit root must exist and be a readable directory. Without one,
    /// falls back to the working tree of the git repository enclosing the
    /// current directory.
    ///
    /// # Errors
    ///
    /// Returns error if the root directory does not exist, is not a
    /// directory, cannot be read, or no repository encloses the current
    /// directory.
    pub fn root_dir(&self) -> Result<PathBuf> {
        self.root_dir_from(Path::new("."))
    }

    /// Resolves root, discovering the repository upward from `cwd`.
    fn root_dir_from(&self, cwd: &Path) -> Result<PathBuf> {
        let root = match &self.root {
            Some(root) => root.clone(),
            None => discover_repository_root(cwd)?,
        };

        if !root.exists() {
            bail!("Root directory does not exist: {}", root.display());
        }
        if !root.is_dir() {
            bail!("Root path is not a directory: {}", root.display());
        }
        fs::read_dir(&root)
            .with_context(|| format!("Root directory is not readable: {}", root.display()))?;

        let absolute = std::path::absolute(&root)
            .with_context(|| format!("Cannot make path absolute: {}", root.display()))?;

        Ok(normalize_path(&absolute))
    }
}

/// Finds the working tree root of the git repository enclosing `start`.
///
/// # Errors
///
/// Returns error if no repository is found or the repository is bare.
pub fn discover_repository_root(start: &Path) -> Result<PathBuf> {
    let repo = gix::discover(start).with_context(|| {
        format!(
            "No git repository found from {}; pass a root directory explicitly",
            start.display()
        )
    })?;

    repo.work_dir()
        .map(Path::to_path_buf)
        .context("Repository has no working tree; pass a root directory explicitly")
}
