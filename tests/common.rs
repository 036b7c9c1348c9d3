//! Shared test utilities for integration tests.
//!
//! Provides helpers for building temporary documentation trees and git
//! repositories used across multiple test files.

#![allow(dead_code)]

use anyhow::Result;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

/// Creates empty temporary documentation root.
///
/// # Errors
///
/// Returns error if directory creation fails
pub fn create_docs_root() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates temporary git repository with test configuration.
///
/// # Errors
///
/// Returns error if git commands fail or directory creation fails
pub fn create_test_repo() -> Result<TempDir> {
    let dir = TempDir::new()?;
    let path = dir.path();

    let output = Command::new("git")
        .args(["init"])
        .current_dir(path)
        .output()?;

    if !output.status.success() {
        anyhow::bail!(
            "Git init failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(dir)
}

/// Writes file beneath root, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(root: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = root.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}
