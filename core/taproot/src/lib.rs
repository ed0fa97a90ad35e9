//! # taproot
//!
//! Project-root resolution for editor buffers: an ordered chain of
//! detectors (language-service workspaces, marker patterns, working
//! directory) with per-buffer caching.
//!
//! ## Design Principles
//!
//! - **Synchronous**: no async runtime. Hosts resolve at discrete
//!   interactive moments (buffer open, keybinding), never on a hot path.
//! - **Graceful degradation**: a detector without signal produces nothing,
//!   filesystem failures fall back to syntactic handling, and
//!   [`RootResolver::get`] always returns a usable path.
//! - **One canonical path form**: forward-slash separated, no trailing
//!   slash, symlinks resolved where the filesystem allows.
//!   [`paths::to_native`] converts at the presentation layer for hosts on
//!   backslash platforms.
//! - **Not thread-safe**: hosts provide their own synchronization.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use taproot::{BufferId, RootResolver};
//!
//! let mut resolver = RootResolver::new(my_host);
//! let root = resolver.get(None);
//! let vcs_root = resolver.git();
//! ```

// Public modules
pub mod cache;
pub mod config;
pub mod error;
pub mod host;
pub mod markers;
pub mod paths;
pub mod resolver;
pub mod spec;

mod detectors;

// Re-export commonly used items at crate root
pub use cache::RootCache;
pub use config::{RootConfig, DEFAULT_MAX_ASCENT, DEFAULT_SPEC};
pub use error::{Result, RootError};
pub use host::{BufferId, Host, LanguageService};
pub use resolver::{DetectOptions, DetectedRoot, RootResolver};
pub use spec::{DetectorFn, RootSpec};
