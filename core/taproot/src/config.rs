//! Detection configuration: spec list, ascent bound, service denylist.

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::{Result, RootError};
use crate::spec::RootSpec;

/// Parent levels an upward scan may climb before giving up.
/// Deep enough for any realistic checkout, small enough to bound the walk.
pub const DEFAULT_MAX_ASCENT: usize = 32;

/// Detection order used when the host configures nothing: service-reported
/// workspaces win, then marker patterns, then the working directory.
pub static DEFAULT_SPEC: Lazy<Vec<RootSpec>> = Lazy::new(|| {
    vec![
        RootSpec::Lsp,
        RootSpec::patterns([".git", "lua"]),
        RootSpec::Cwd,
    ]
});

/// Configuration for a resolver instance.
///
/// Deserializes from host settings JSON; missing fields take the documented
/// defaults, unknown fields are rejected.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RootConfig {
    /// Ordered detection strategies.
    pub spec: Vec<RootSpec>,
    /// Upper bound on parent levels for upward scans.
    pub max_ascent: usize,
    /// Service names whose reported roots are ignored.
    pub service_ignore: Vec<String>,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            spec: DEFAULT_SPEC.clone(),
            max_ascent: DEFAULT_MAX_ASCENT,
            service_ignore: vec![],
        }
    }
}

impl RootConfig {
    /// Parses and validates host settings JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: RootConfig = serde_json::from_str(json).map_err(|source| RootError::Json {
            context: "root config".to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations that would make detection degenerate.
    pub fn validate(&self) -> Result<()> {
        if self.max_ascent == 0 {
            return Err(RootError::InvalidConfig {
                details: "max_ascent must be at least 1".to_string(),
            });
        }
        for spec in &self.spec {
            if let RootSpec::Patterns(patterns) = spec {
                if patterns.is_empty() {
                    return Err(RootError::InvalidConfig {
                        details: "pattern spec must list at least one pattern".to_string(),
                    });
                }
                if patterns.iter().any(|pattern| pattern.is_empty()) {
                    return Err(RootError::InvalidConfig {
                        details: "marker patterns must not be empty".to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}
