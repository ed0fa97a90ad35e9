//! Built-in detectors.
//!
//! Each detector turns host signals into raw candidate paths for a buffer
//! and degrades to an empty list when its signal is absent. Normalization,
//! deduplication and ordering happen in the orchestrator.

use std::path::Path;

use crate::config::RootConfig;
use crate::host::{BufferId, Host};
use crate::{markers, paths};

/// Normalized path backing the buffer, if it has one.
pub(crate) fn buffer_path<H: Host>(host: &H, buf: BufferId) -> Option<String> {
    host.buffer_path(buf).as_deref().and_then(paths::normalize)
}

/// Working-directory detector.
///
/// Picks between the buffer's containing directory and the host working
/// directory: when one contains the other the shallower wins (the working
/// directory on ties), otherwise the buffer's directory.
pub(crate) fn cwd<H: Host>(host: &H, buf: BufferId) -> Vec<String> {
    let cwd = host.cwd().as_deref().and_then(paths::normalize);
    let dir = buffer_path(host, buf).as_deref().and_then(paths::parent);

    let root = match (cwd, dir) {
        (Some(cwd), Some(dir)) => {
            if paths::is_ancestor_or_self(&cwd, &dir) {
                cwd
            } else {
                dir
            }
        }
        (Some(cwd), None) => cwd,
        (None, Some(dir)) => dir,
        (None, None) => return vec![],
    };

    vec![root]
}

/// Language-service detector.
///
/// Collects workspace folders and root directories reported by services
/// attached to the buffer, keeping only roots that contain the buffer path
/// (stale or unrelated service roots would otherwise leak through).
/// Services on the configured ignore list are dropped before collection.
pub(crate) fn lsp<H: Host>(host: &H, config: &RootConfig, buf: BufferId) -> Vec<String> {
    let Some(buf_path) = buffer_path(host, buf) else {
        return vec![];
    };

    let mut candidates: Vec<String> = Vec::new();
    for service in host.services(buf) {
        if config.service_ignore.contains(&service.name) {
            tracing::trace!(service = %service.name, "Service on ignore list, skipping");
            continue;
        }
        candidates.extend(service.workspace_folders);
        if let Some(root_dir) = service.root_dir {
            candidates.push(root_dir);
        }
    }

    candidates
        .into_iter()
        .filter(|candidate| {
            paths::normalize(candidate)
                .is_some_and(|root| paths::is_ancestor_or_self(&root, &buf_path))
        })
        .collect()
}

/// Marker-pattern detector. Scans upward from the buffer path, or from the
/// working directory for unnamed buffers.
pub(crate) fn patterns<H: Host>(
    host: &H,
    config: &RootConfig,
    buf: BufferId,
    patterns: &[String],
) -> Vec<String> {
    let start =
        buffer_path(host, buf).or_else(|| host.cwd().as_deref().and_then(paths::normalize));
    let Some(start) = start else {
        return vec![];
    };

    match markers::find_upward(Path::new(&start), patterns, config.max_ascent) {
        Some(dir) => vec![dir.to_string_lossy().to_string()],
        None => vec![],
    }
}
