use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::Path;

use crate::glob::Pattern;

/// Directories never descended into during content resolution.
const SKIPPED_DIRS: [&str; 2] = ["target", "node_modules"];

/// Resolves content glob patterns against a project tree.
///
/// Walks `root` recursively and returns the relative paths (with `/`
/// separators) of every regular file matching at least one pattern, in
/// sorted order. Hidden directories and build-output directories are
/// skipped.
///
/// # Arguments
/// * `root` - The directory containing the config file
/// * `patterns` - Compiled content patterns
///
/// # Returns
/// * `Ok(Vec<String>)` - Sorted relative paths of matching files
/// * `Err(anyhow::Error)` - Directory traversal error
pub fn resolve_content(root: &Path, patterns: &[Pattern]) -> Result<Vec<String>> {
    let mut matches = Vec::new();
    walk_dir(root, root, patterns, &mut matches)?;
    matches.sort();
    debug!("Resolved {} files under {:?}", matches.len(), root);
    Ok(matches)
}

fn walk_dir(
    root: &Path,
    dir: &Path,
    patterns: &[Pattern],
    matches: &mut Vec<String>,
) -> Result<()> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory: {:?}", dir))?;

    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read entry in {:?}", dir))?;
        let path = entry.path();
        let name = entry.file_name();
        let name = name.to_string_lossy();

        if path.is_dir() {
            if name.starts_with('.') || SKIPPED_DIRS.contains(&name.as_ref()) {
                continue;
            }
            walk_dir(root, &path, patterns, matches)?;
        } else if path.is_file() {
            let relative = path
                .strip_prefix(root)
                .with_context(|| format!("Path {:?} not under root {:?}", path, root))?;
            let relative = relative.to_string_lossy().replace('\\', "/");
            if patterns.iter().any(|p| p.matches(&relative)) {
                matches.push(relative);
            }
        }
    }

    Ok(())
}
