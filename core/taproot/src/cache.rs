//! Per-buffer memoization of resolved roots.

use std::collections::HashMap;

use crate::host::BufferId;

/// Resolved-root cache keyed by buffer.
///
/// An entry is authoritative once set: lookups do not re-validate against
/// the filesystem. Hosts invalidate on the events that can move a root
/// (service attach, file rename, directory change).
#[derive(Debug, Clone, Default)]
pub struct RootCache {
    entries: HashMap<BufferId, String>,
}

impl RootCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached root for the buffer, if any.
    pub fn get(&self, buf: BufferId) -> Option<&str> {
        self.entries.get(&buf).map(String::as_str)
    }

    pub fn insert(&mut self, buf: BufferId, root: String) {
        self.entries.insert(buf, root);
    }

    /// Drops the entry for one buffer, returning the evicted root.
    pub fn invalidate(&mut self, buf: BufferId) -> Option<String> {
        self.entries.remove(&buf)
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
