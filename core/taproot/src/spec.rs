//! Declarative detection specs and their dispatch to executable detectors.

use std::fmt;
use std::sync::Arc;

use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::RootConfig;
use crate::detectors;
use crate::host::{BufferId, Host};

/// Caller-provided detector: buffer in, raw candidate roots out.
pub type DetectorFn = Arc<dyn Fn(BufferId) -> Vec<String> + Send + Sync>;

/// One entry in a detection spec. Order in the spec list defines priority.
#[derive(Clone)]
pub enum RootSpec {
    /// Workspace roots reported by language services attached to the buffer.
    Lsp,
    /// The host working directory, reconciled with the buffer location.
    Cwd,
    /// Upward scan for marker patterns (literal names or `*`-suffix globs).
    Patterns(Vec<String>),
    /// Custom detector function.
    Custom(DetectorFn),
}

impl RootSpec {
    /// Convenience constructor for pattern specs.
    pub fn patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        RootSpec::Patterns(patterns.into_iter().map(Into::into).collect())
    }

    /// Convenience constructor for custom detector specs.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(BufferId) -> Vec<String> + Send + Sync + 'static,
    {
        RootSpec::Custom(Arc::new(f))
    }

    /// Runs the detector this spec names. Candidates are raw, not yet
    /// normalized; the orchestrator cleans and orders them.
    pub(crate) fn detect<H: Host>(
        &self,
        host: &H,
        config: &RootConfig,
        buf: BufferId,
    ) -> Vec<String> {
        match self {
            RootSpec::Lsp => detectors::lsp(host, config, buf),
            RootSpec::Cwd => detectors::cwd(host, buf),
            RootSpec::Patterns(patterns) => detectors::patterns(host, config, buf, patterns),
            RootSpec::Custom(f) => f(buf),
        }
    }
}

impl fmt::Debug for RootSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootSpec::Lsp => write!(f, "Lsp"),
            RootSpec::Cwd => write!(f, "Cwd"),
            RootSpec::Patterns(patterns) => f.debug_tuple("Patterns").field(patterns).finish(),
            RootSpec::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// Spec names as shown in diagnostics: `lsp`, `cwd`, a comma-joined pattern
/// list, or `custom`.
impl fmt::Display for RootSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RootSpec::Lsp => f.write_str("lsp"),
            RootSpec::Cwd => f.write_str("cwd"),
            RootSpec::Patterns(patterns) => write!(f, "{}", patterns.join(", ")),
            RootSpec::Custom(_) => f.write_str("custom"),
        }
    }
}

/// Custom specs compare by function identity; everything else structurally.
impl PartialEq for RootSpec {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (RootSpec::Lsp, RootSpec::Lsp) | (RootSpec::Cwd, RootSpec::Cwd) => true,
            (RootSpec::Patterns(a), RootSpec::Patterns(b)) => a == b,
            (RootSpec::Custom(a), RootSpec::Custom(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            _ => false,
        }
    }
}

/// Diagnostic projection: named detectors and pattern lists round-trip,
/// custom functions flatten to `"custom"`.
impl Serialize for RootSpec {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            RootSpec::Lsp => serializer.serialize_str("lsp"),
            RootSpec::Cwd => serializer.serialize_str("cwd"),
            RootSpec::Patterns(patterns) => {
                let mut seq = serializer.serialize_seq(Some(patterns.len()))?;
                for pattern in patterns {
                    seq.serialize_element(pattern)?;
                }
                seq.end()
            }
            RootSpec::Custom(_) => serializer.serialize_str("custom"),
        }
    }
}

/// Accepts the host-settings data shapes: `"lsp"` and `"cwd"` select the
/// named detectors, any other string is a one-pattern list, and an array of
/// strings is a pattern list. Custom functions are not expressible as data.
impl<'de> Deserialize<'de> for RootSpec {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SpecVisitor;

        impl<'de> Visitor<'de> for SpecVisitor {
            type Value = RootSpec;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("\"lsp\", \"cwd\", a marker pattern, or a list of marker patterns")
            }

            fn visit_str<E>(self, value: &str) -> Result<RootSpec, E>
            where
                E: de::Error,
            {
                Ok(match value {
                    "lsp" => RootSpec::Lsp,
                    "cwd" => RootSpec::Cwd,
                    pattern => RootSpec::Patterns(vec![pattern.to_string()]),
                })
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<RootSpec, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut patterns = Vec::new();
                while let Some(pattern) = seq.next_element::<String>()? {
                    patterns.push(pattern);
                }
                Ok(RootSpec::Patterns(patterns))
            }
        }

        deserializer.deserialize_any(SpecVisitor)
    }
}
