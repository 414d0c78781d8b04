//! Loading runner manifests from disk.
//!
//! A manifest is a single YAML (or JSON) document holding either one
//! `Runner` or a `RunnerList`.

use std::path::Path;

use anyhow::{Context, Result};
use runner_api::{RUNNER_KIND, RUNNER_LIST_KIND, Runner, RunnerList};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest has no kind")]
    MissingKind,

    #[error("unsupported kind '{0}': expected Runner or RunnerList")]
    UnsupportedKind(String),
}

/// Parses one manifest document into the runners it declares.
pub fn parse(text: &str) -> Result<Vec<Runner>> {
    let doc: serde_yaml::Value = serde_yaml::from_str(text).context("malformed document")?;
    let kind = doc
        .get("kind")
        .and_then(serde_yaml::Value::as_str)
        .ok_or(ManifestError::MissingKind)?
        .to_string();

    match kind.as_str() {
        RUNNER_KIND => {
            let runner: Runner = serde_yaml::from_value(doc).context("invalid Runner")?;
            Ok(vec![runner])
        }
        RUNNER_LIST_KIND => {
            let list: RunnerList = serde_yaml::from_value(doc).context("invalid RunnerList")?;
            Ok(list.items)
        }
        _ => Err(ManifestError::UnsupportedKind(kind).into()),
    }
}

/// Reads and parses the manifest at `path`.
pub fn load(path: &Path) -> Result<Vec<Runner>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let runners = parse(&text).with_context(|| format!("invalid manifest {}", path.display()))?;
    tracing::debug!(path = %path.display(), count = runners.len(), "loaded manifest");
    Ok(runners)
}

/// Loads every manifest in order, keeping the file each runner came from.
pub fn load_all<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<(String, Runner)>> {
    let mut out = Vec::new();
    for path in paths {
        let path = path.as_ref();
        let file = path.display().to_string();
        out.extend(load(path)?.into_iter().map(|r| (file.clone(), r)));
    }
    Ok(out)
}
