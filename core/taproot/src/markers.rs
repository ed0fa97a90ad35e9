//! Upward marker scan for project-root detection.
//!
//! Walks from a starting path toward the filesystem root, testing directory
//! entries against marker patterns like `.git`, `Cargo.toml` or `*.mod`.
//! The scan is bounded by a configurable ascent budget so pathological
//! mounts cannot stall resolution.

use std::path::{Path, PathBuf};

use fs_err as fs;

/// Tests one directory entry name against one pattern.
///
/// A leading `*` means "ends with the remainder" (`*.mod` matches `go.mod`);
/// anything else is a literal name.
pub fn matches_pattern(name: &str, pattern: &str) -> bool {
    match pattern.strip_prefix('*') {
        Some(suffix) => name.ends_with(suffix),
        None => name == pattern,
    }
}

/// Finds the nearest directory at or above `start` containing an entry that
/// matches any of `patterns`.
///
/// A file `start` scans from its parent directory. At each level the first
/// matching entry in directory-listing order wins; listing order is
/// platform-defined. Unreadable or missing directories count as a miss at
/// that level, not an error. The walk gives up after `max_ascent` parent
/// steps or at the filesystem root, whichever comes first.
pub fn find_upward(start: &Path, patterns: &[String], max_ascent: usize) -> Option<PathBuf> {
    let first = if start.is_dir() {
        start.to_path_buf()
    } else {
        start.parent()?.to_path_buf()
    };

    let mut current = Some(first);
    let mut ascents = 0;
    while let Some(dir) = current {
        if let Some(name) = match_in_dir(&dir, patterns) {
            tracing::trace!(dir = %dir.display(), marker = %name, "Marker matched");
            return Some(dir);
        }
        if ascents == max_ascent {
            break;
        }
        current = dir.parent().map(|p| p.to_path_buf());
        ascents += 1;
    }

    None
}

fn match_in_dir(dir: &Path, patterns: &[String]) -> Option<String> {
    let Ok(entries) = fs::read_dir(dir) else {
        return None;
    };
    for entry in entries.flatten() {
        let name = entry.file_name().to_string_lossy().to_string();
        if patterns.iter().any(|pattern| matches_pattern(&name, pattern)) {
            return Some(name);
        }
    }
    None
}
