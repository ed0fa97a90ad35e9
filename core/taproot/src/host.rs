//! The editor boundary: buffers, working directory, attached services.

use serde::{Deserialize, Serialize};

/// Host-assigned handle for an open buffer.
///
/// Values are opaque to this crate; the host owns the numbering and reuses
/// it however its buffer lifecycle dictates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BufferId(pub u64);

/// Snapshot of one language service attached to a buffer.
///
/// `root_dir` and `workspace_folders` are plain filesystem paths. Hosts
/// whose service protocol speaks URIs convert before handing them over.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageService {
    pub name: String,
    #[serde(default)]
    pub root_dir: Option<String>,
    #[serde(default)]
    pub workspace_folders: Vec<String>,
}

/// Trait for editor embeddings.
///
/// Implementors should:
/// - Gracefully degrade (return `None`/empty) when a signal is unavailable
/// - Hand over plain filesystem paths rather than URIs
/// - Keep `services` in registry order; earlier services win ties
pub trait Host {
    /// Buffer the user is currently focused on.
    fn current_buffer(&self) -> BufferId;

    /// Absolute path backing the buffer, `None` for unnamed buffers.
    fn buffer_path(&self, buf: BufferId) -> Option<String>;

    /// Working directory of the host process.
    fn cwd(&self) -> Option<String>;

    /// Services attached to the buffer.
    fn services(&self, _buf: BufferId) -> Vec<LanguageService> {
        vec![]
    }
}

/// Hosts can lend themselves to a resolver by reference.
impl<H: Host + ?Sized> Host for &H {
    fn current_buffer(&self) -> BufferId {
        (**self).current_buffer()
    }

    fn buffer_path(&self, buf: BufferId) -> Option<String> {
        (**self).buffer_path(buf)
    }

    fn cwd(&self) -> Option<String> {
        (**self).cwd()
    }

    fn services(&self, buf: BufferId) -> Vec<LanguageService> {
        (**self).services(buf)
    }
}
