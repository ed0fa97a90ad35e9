//! Root detection orchestrator.
//!
//! Runs the configured spec list for a buffer, reconciles candidates into
//! one canonical ordering, and memoizes the winning root per buffer.

use std::path::Path;

use serde::Serialize;

use crate::cache::RootCache;
use crate::config::RootConfig;
use crate::detectors;
use crate::host::{BufferId, Host};
use crate::spec::RootSpec;
use crate::{markers, paths};

/// Result of one producing spec entry.
///
/// `paths` is non-empty, deduplicated (first seen wins) and sorted by
/// descending length, so the most specific root comes first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectedRoot {
    pub spec: RootSpec,
    pub paths: Vec<String>,
}

/// Options for [`RootResolver::detect`].
#[derive(Debug, Clone)]
pub struct DetectOptions {
    /// Buffer to resolve; the host's current buffer when `None`.
    pub buf: Option<BufferId>,
    /// Spec list override; the configured list when `None`.
    pub spec: Option<Vec<RootSpec>>,
    /// Collect every producing spec entry instead of stopping at the first.
    pub all: bool,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            buf: None,
            spec: None,
            all: true,
        }
    }
}

/// Project-root resolver for one host session.
///
/// Owns the per-buffer cache; hosts sharing a resolver across threads
/// provide their own synchronization.
pub struct RootResolver<H: Host> {
    host: H,
    config: RootConfig,
    cache: RootCache,
}

impl<H: Host> RootResolver<H> {
    pub fn new(host: H) -> Self {
        Self::with_config(host, RootConfig::default())
    }

    pub fn with_config(host: H, config: RootConfig) -> Self {
        Self {
            host,
            config,
            cache: RootCache::new(),
        }
    }

    pub fn config(&self) -> &RootConfig {
        &self.config
    }

    /// Normalized path backing the buffer, if it has one.
    pub fn bufpath(&self, buf: BufferId) -> Option<String> {
        detectors::buffer_path(&self.host, buf)
    }

    /// Normalized host working directory, or `""` when unavailable.
    pub fn cwd(&self) -> String {
        self.host
            .cwd()
            .as_deref()
            .and_then(paths::normalize)
            .unwrap_or_default()
    }

    /// Runs the spec list for a buffer.
    ///
    /// Entries run in order; each entry's candidates are normalized,
    /// deduplicated and sorted most-specific-first. With `all` unset the
    /// scan stops at the first producing entry, so earlier specs take
    /// strict priority.
    pub fn detect(&self, opts: DetectOptions) -> Vec<DetectedRoot> {
        let buf = opts.buf.unwrap_or_else(|| self.host.current_buffer());
        let spec = opts.spec.unwrap_or_else(|| self.config.spec.clone());

        let mut results = Vec::new();
        for entry in spec {
            let raw = entry.detect(&self.host, &self.config, buf);
            let roots = collect_roots(raw);
            if roots.is_empty() {
                continue;
            }
            tracing::trace!(
                buf = buf.0,
                spec = %entry,
                count = roots.len(),
                "Spec produced roots"
            );
            results.push(DetectedRoot {
                spec: entry,
                paths: roots,
            });
            if !opts.all {
                break;
            }
        }
        results
    }

    /// Resolves the root for a buffer, consulting the cache first.
    ///
    /// Cached values are authoritative until invalidated. On a miss the
    /// spec list runs with early exit; when nothing produces, the working
    /// directory is the answer (`""` in the degenerate case where even
    /// that is unavailable). Returned roots are always the forward-slash
    /// form; see [`paths::to_native`] for presentation.
    pub fn get(&mut self, buf: Option<BufferId>) -> String {
        let buf = buf.unwrap_or_else(|| self.host.current_buffer());
        if let Some(root) = self.cache.get(buf) {
            tracing::trace!(buf = buf.0, root = %root, "Root cache hit");
            return root.to_string();
        }

        let results = self.detect(DetectOptions {
            buf: Some(buf),
            spec: None,
            all: false,
        });
        let root = results
            .into_iter()
            .next()
            .and_then(|result| result.paths.into_iter().next())
            .unwrap_or_else(|| self.cwd());

        tracing::debug!(buf = buf.0, root = %root, "Root resolved");
        self.cache.insert(buf, root.clone());
        root
    }

    /// Nearest VCS root at or above the resolved root for the current
    /// buffer.
    ///
    /// A `.git` entry may be a directory or a file (worktrees and
    /// submodules record a `gitdir:` pointer in a file). Falls back to the
    /// resolved root when no marker exists within the ascent bound.
    pub fn git(&mut self) -> String {
        let root = self.get(None);
        let marker = [".git".to_string()];
        match markers::find_upward(Path::new(&root), &marker, self.config.max_ascent) {
            Some(dir) => paths::normalize(&dir.to_string_lossy()).unwrap_or(root),
            None => root,
        }
    }

    /// Drops the cached root for one buffer, forcing re-detection on the
    /// next [`Self::get`]. Hosts call this on the events that can move a
    /// root: service attach or detach, file rename, directory change.
    pub fn invalidate(&mut self, buf: BufferId) -> Option<String> {
        self.cache.invalidate(buf)
    }

    /// Drops every cached root.
    pub fn invalidate_all(&mut self) {
        self.cache.clear();
    }

    /// Human-readable listing of every producing spec entry for a buffer,
    /// winning root first.
    pub fn report(&self, buf: Option<BufferId>) -> String {
        let buf = buf.unwrap_or_else(|| self.host.current_buffer());
        let results = self.detect(DetectOptions {
            buf: Some(buf),
            spec: None,
            all: true,
        });

        let mut lines = Vec::new();
        let mut first = true;
        for result in &results {
            for root in &result.paths {
                let mark = if first { "x" } else { " " };
                lines.push(format!("- [{mark}] `{root}` ({spec})", spec = result.spec));
                first = false;
            }
        }
        if lines.is_empty() {
            lines.push(format!("- [x] `{}` (fallback)", self.cwd()));
        }
        lines.join("\n")
    }
}

/// Normalizes raw candidates, drops misses, dedupes preserving first-seen,
/// sorts longest first (stable, so equal lengths keep insertion order).
fn collect_roots(raw: Vec<String>) -> Vec<String> {
    let mut roots: Vec<String> = Vec::new();
    for candidate in raw {
        if let Some(root) = paths::normalize(&candidate) {
            if !roots.contains(&root) {
                roots.push(root);
            }
        }
    }
    roots.sort_by(|a, b| b.len().cmp(&a.len()));
    roots
}
