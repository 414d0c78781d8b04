//! The `Runner` aggregate and its list wrapper.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::meta::{ListMeta, ObjectMeta, TypeMeta};
use crate::spec::RunnerSpec;
use crate::status::{Registerability, RunnerStatus, check_registration};
use crate::{API_VERSION, RUNNER_KIND, RUNNER_LIST_KIND};

/// One self-hosted CI runner: identity, desired state, observed state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct Runner {
    #[serde(flatten)]
    pub type_meta: TypeMeta,
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub metadata: ObjectMeta,
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub spec: RunnerSpec,
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub status: RunnerStatus,
}

impl Runner {
    #[must_use]
    pub fn new(name: &str, spec: RunnerSpec) -> Self {
        Self {
            type_meta: TypeMeta::new(API_VERSION, RUNNER_KIND),
            metadata: ObjectMeta::named(name),
            spec,
            status: RunnerStatus::default(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Which gate decided whether the cached registration is reusable at `now`.
    #[must_use]
    pub fn registerability(&self, now: DateTime<Utc>) -> Registerability {
        let outcome = check_registration(&self.spec.scope, &self.status.registration, now);
        if !outcome.is_registerable() {
            tracing::debug!(
                runner = %self.metadata.key(),
                reason = %outcome,
                "cached registration not reusable"
            );
        }
        outcome
    }

    /// Whether the reconciler can skip requesting a new registration.
    #[must_use]
    pub fn is_registerable(&self, now: DateTime<Utc>) -> bool {
        self.registerability(now).is_registerable()
    }

    /// Cells for [`PRINTER_COLUMNS`], in the same order.
    #[must_use]
    pub fn printer_row(&self) -> [String; 5] {
        let labels = if self.spec.labels.is_empty() {
            String::new()
        } else {
            format!("[{}]", self.spec.labels.join(","))
        };
        [
            self.spec.scope.enterprise.clone(),
            self.spec.scope.organization.clone(),
            self.spec.scope.repository.clone(),
            labels,
            self.status.phase.clone(),
        ]
    }
}

/// JSON schema of [`Runner`], with scope patterns and optional flags.
#[cfg(feature = "schema")]
#[must_use]
pub fn runner_schema() -> schemars::Schema {
    schemars::schema_for!(Runner)
}

/// Extra column shown when listing runners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrinterColumn {
    pub name: &'static str,
    pub json_path: &'static str,
    pub kind: &'static str,
}

pub const PRINTER_COLUMNS: [PrinterColumn; 5] = [
    PrinterColumn {
        name: "Enterprise",
        json_path: ".spec.enterprise",
        kind: "string",
    },
    PrinterColumn {
        name: "Organization",
        json_path: ".spec.organization",
        kind: "string",
    },
    PrinterColumn {
        name: "Repository",
        json_path: ".spec.repository",
        kind: "string",
    },
    PrinterColumn {
        name: "Labels",
        json_path: ".spec.labels",
        kind: "string",
    },
    PrinterColumn {
        name: "Status",
        json_path: ".status.phase",
        kind: "string",
    },
];

/// Runners returned by a list query, in the order the store gave them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct RunnerList {
    #[serde(flatten)]
    pub type_meta: TypeMeta,
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub metadata: ListMeta,
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub items: Vec<Runner>,
}

impl RunnerList {
    #[must_use]
    pub fn new(items: Vec<Runner>) -> Self {
        Self {
            type_meta: TypeMeta::new(API_VERSION, RUNNER_LIST_KIND),
            metadata: ListMeta::default(),
            items,
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Runner> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<Vec<Runner>> for RunnerList {
    fn from(items: Vec<Runner>) -> Self {
        Self::new(items)
    }
}

impl IntoIterator for RunnerList {
    type Item = Runner;
    type IntoIter = std::vec::IntoIter<Runner>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a RunnerList {
    type Item = &'a Runner;
    type IntoIter = std::slice::Iter<'a, Runner>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
