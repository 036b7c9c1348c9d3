//! Link validation over a markdown tree.

use anyhow::{Context, Result};
use log::{debug, warn};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::discovery::markdown_files;
use crate::links::{LinkExtractor, resolve};
use crate::report;

/// Internal link whose resolved path does not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokenLink {
    source: PathBuf,
    target: String,
    resolved: PathBuf,
}

impl BrokenLink {
    /// Creates broken link record.
    pub fn new(source: PathBuf, target: impl Into<String>, resolved: PathBuf) -> Self {
        Self {
            source,
            target: target.into(),
            resolved,
        }
    }

    /// Absolute path of the markdown file containing the link.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Raw link target as written.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Absolute path the link resolved to.
    pub fn resolved(&self) -> &Path {
        &self.resolved
    }
}

/// Markdown file that could not be read.
#[derive(Debug, Clone)]
pub struct SkippedFile {
    path: PathBuf,
    reason: String,
}

impl SkippedFile {
    /// Path of the unreadable file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read or decode error.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Outcome of a validation run.
#[derive(Debug, Clone, Default)]
pub struct Summary {
    files_scanned: usize,
    links_checked: usize,
    broken: Vec<BrokenLink>,
    skipped: Vec<SkippedFile>,
}

impl Summary {
    /// True when no broken link was found.
    pub fn is_valid(&self) -> bool {
        self.broken.is_empty()
    }

    /// Markdown files read successfully.
    pub fn files_scanned(&self) -> usize {
        self.files_scanned
    }

    /// Internal links checked against the filesystem.
    pub fn links_checked(&self) -> usize {
        self.links_checked
    }

    /// Broken links in discovery order.
    pub fn broken(&self) -> &[BrokenLink] {
        &self.broken
    }

    /// Files skipped because they could not be read.
    pub fn skipped(&self) -> &[SkippedFile] {
        &self.skipped
    }

    /// Records broken link.
    pub fn record_broken(&mut self, link: BrokenLink) {
        self.broken.push(link);
    }
}

/// Validates internal markdown links beneath a root directory.
pub struct Validator {
    root: PathBuf,
    extractor: LinkExtractor,
}

impl Validator {
    /// Creates validator for root directory.
    ///
    /// # Arguments
    ///
    /// * `root`: Absolute, normalized directory to scan
    ///
    /// # Errors
    ///
    /// Returns error if the link pattern fails to compile.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            root: root.into(),
            extractor: LinkExtractor::new()?,
        })
    }

    /// Checks links found in one file's content.
    ///
    /// # Arguments
    ///
    /// * `source`: Absolute path of the markdown file
    /// * `content`: Text of the markdown file
    ///
    /// # Returns
    ///
    /// Number of links checked and the broken ones, in order of appearance
    pub fn check_content(&self, source: &Path, content: &str) -> (usize, Vec<BrokenLink>) {
        let links = self.extractor.extract(content);
        let broken = links
            .iter()
            .filter_map(|link| {
                let resolved = resolve(source, link.target());
                debug!(
                    "{} @{}: [{}]({}) -> {}",
                    source.display(),
                    link.offset(),
                    link.text(),
                    link.target(),
                    resolved.display()
                );
                if resolved.exists() {
                    None
                } else {
                    Some(BrokenLink::new(source.to_path_buf(), link.target(), resolved))
                }
            })
            .collect();

        (links.len(), broken)
    }

    /// Reads markdown file and checks its links.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not valid UTF8.
    pub fn check_file(&self, path: &Path) -> Result<(usize, Vec<BrokenLink>)> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(self.check_content(path, &content))
    }

    /// Runs validation over every markdown file beneath root.
    ///
    /// Writes the progress line, each broken link as soon as it is found,
    /// and the closing summary line. Unreadable files are logged and
    /// skipped without failing the run.
    ///
    /// # Errors
    ///
    /// Returns error if root cannot be read, before anything is written, or
    /// if writing to output fails.
    pub fn run(&self, out: &mut impl Write) -> Result<Summary> {
        let files = markdown_files(&self.root)?;
        report::write_start(out, &self.root)?;

        let mut summary = Summary::default();

        for path in files {
            let (checked, broken) = match self.check_file(&path) {
                Ok(result) => result,
                Err(e) => {
                    warn!("Skipping file: {:#}", e);
                    summary.skipped.push(SkippedFile {
                        path,
                        reason: format!("{:#}", e),
                    });
                    continue;
                }
            };

            debug!("{}: {} internal links", path.display(), checked);
            summary.files_scanned += 1;
            summary.links_checked += checked;

            for link in broken {
                report::write_broken(out, &self.root, &link)?;
                summary.record_broken(link);
            }
        }

        report::write_summary(out, &summary)?;

        Ok(summary)
    }
}
