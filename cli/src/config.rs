//! Environment configuration.
//!
//! Each field maps to `RUNNERCTL_<FIELD>`:
//!   - `RUNNERCTL_NAMESPACE` (default `default`): namespace shown for
//!     manifests that do not set one
//!   - `RUNNERCTL_LOG` (default `warn`): `tracing` filter directive

use anyhow::{Context, Result};
use serde::Deserialize;

pub const ENV_PREFIX: &str = "RUNNERCTL_";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_namespace")]
    pub namespace: String,

    #[serde(default = "default_log")]
    pub log: String,
}

fn default_namespace() -> String {
    "default".to_string()
}

fn default_log() -> String {
    crate::logging::DEFAULT_FILTER.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
            log: default_log(),
        }
    }
}

impl Config {
    /// Reads `RUNNERCTL_*` variables from the process environment.
    pub fn from_env() -> Result<Self> {
        envy::prefixed(ENV_PREFIX)
            .from_env()
            .context("failed to load RUNNERCTL_* configuration")
    }

    /// Same as [`Config::from_env`] over an explicit variable set.
    pub fn from_vars<I>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::prefixed(ENV_PREFIX)
            .from_iter(vars)
            .context("failed to load RUNNERCTL_* configuration")
    }
}
