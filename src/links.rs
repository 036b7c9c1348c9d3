//! Link extraction and resolution for markdown files.

use anyhow::{Context, Result};
use regex::Regex;
use std::path::{Component, Path, PathBuf};

/// Markdown link whose target ends in `.md`: `[text](path.md)`.
///
/// Capture 1 is the display text, capture 2 the raw target.
const LINK_PATTERN: &str = r"\[([^\]]+)\]\(([^)]+\.md)\)";

/// Target prefixes that are never checked against the filesystem.
const SKIPPED_PREFIXES: [&str; 3] = ["http://", "https://", "#"];

/// Link found in markdown text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkMatch {
    text: String,
    target: String,
    offset: usize,
}

impl LinkMatch {
    /// Display text between the brackets.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Raw link target as written.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Byte offset of the opening bracket in the source text.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// Extracts internal markdown-to-markdown links from text.
///
/// Uses a lightweight pattern match rather than a markdown parse, so links
/// inside code spans or fenced blocks are reported like any other.
pub struct LinkExtractor {
    pattern: Regex,
}

impl LinkExtractor {
    /// Creates extractor with the markdown link pattern compiled.
    ///
    /// # Errors
    ///
    /// Returns error if the link pattern fails to compile.
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(LINK_PATTERN).context("Failed to compile link pattern")?;
        Ok(Self { pattern })
    }

    /// Finds internal links in order of appearance.
    ///
    /// Matches never overlap. External (`http://`, `https://`) and anchor
    /// (`#`) targets are skipped; a skipped candidate does not consume its
    /// text, so scanning resumes just past its opening bracket.
    ///
    /// # Arguments
    ///
    /// * `content`: Full markdown text
    ///
    /// # Returns
    ///
    /// Internal links whose targets end in `.md`
    pub fn extract(&self, content: &str) -> Vec<LinkMatch> {
        let mut links = Vec::new();
        let mut pos = 0;

        while let Some(caps) = self.pattern.captures_at(content, pos) {
            let (Some(whole), Some(text), Some(target)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                break;
            };

            if is_skipped(target.as_str()) {
                // '[' is one byte, so start + 1 stays on a char boundary
                pos = whole.start() + 1;
                continue;
            }

            links.push(LinkMatch {
                text: text.as_str().to_string(),
                target: target.as_str().to_string(),
                offset: whole.start(),
            });
            pos = whole.end();
        }

        links
    }
}

/// Returns true for external and in-document anchor targets.
pub fn is_skipped(target: &str) -> bool {
    SKIPPED_PREFIXES
        .iter()
        .any(|prefix| target.starts_with(prefix))
}

/// Resolves link target against the directory of the linking file.
///
/// Fragments (`file.md#section`) are kept as part of the file name.
///
/// # Arguments
///
/// * `source_file`: Absolute path of the markdown file containing the link
/// * `target`: Raw link target
///
/// # Returns
///
/// Normalized absolute path the link points at
pub fn resolve(source_file: &Path, target: &str) -> PathBuf {
    let current_dir = source_file.parent().unwrap_or_else(|| Path::new(""));
    normalize_path(&current_dir.join(target))
}

/// Normalizes path by resolving `.` and `..` components lexically.
///
/// Symlinks are not consulted. `..` at the filesystem root stays at the
/// root; leading `..` of a relative path are kept.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut components: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(_)) => {
                    components.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            _ => components.push(component),
        }
    }

    if components.is_empty() {
        return PathBuf::from(".");
    }

    components.iter().collect()
}

/// Expresses `path` relative to `base`, inserting `..` where needed.
///
/// Both paths are expected to be absolute and normalized.
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let path_parts: Vec<Component> = path.components().collect();
    let base_parts: Vec<Component> = base.components().collect();

    let common = path_parts
        .iter()
        .zip(&base_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let mut relative = PathBuf::new();
    for _ in common..base_parts.len() {
        relative.push("..");
    }
    for part in &path_parts[common..] {
        relative.push(part);
    }

    if relative.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        relative
    }
}
