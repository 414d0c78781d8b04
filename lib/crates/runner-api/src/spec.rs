//! Desired state of a runner.

use serde::{Deserialize, Serialize};

use crate::error::{SpecError, ValidationError};
use crate::pod::ExecutionSpec;
use crate::scope::{Scope, ScopeFields, validate_scope};
use crate::tristate::Tristate;

/// What the user declares for one runner: where it registers, how it is
/// labelled, and the pod it runs in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct RunnerSpec {
    #[serde(flatten)]
    pub scope: ScopeFields,

    /// Provider-side labels applied to the registered runner, in order.
    #[serde(
        default,
        deserialize_with = "crate::nullable::or_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub labels: Vec<String>,

    /// Runner group (logical pool) to register into.
    #[serde(
        default,
        deserialize_with = "crate::nullable::or_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub group: String,

    /// Whether the runner exits after a single job. Unset defers to the
    /// controller default.
    #[serde(default, skip_serializing_if = "Tristate::is_unset")]
    pub ephemeral: Tristate,

    #[serde(flatten)]
    pub execution: ExecutionSpec,
}

impl RunnerSpec {
    /// A spec with only its scope set.
    #[must_use]
    pub fn for_scope(scope: ScopeFields) -> Self {
        Self {
            scope,
            ..Self::default()
        }
    }

    /// Exactly one of enterprise, organization and repository is set.
    pub fn validate_scope(&self) -> Result<(), ValidationError> {
        validate_scope(&self.scope)
    }

    /// Full admission check: scope exclusivity, then the format of the set
    /// field. Returns the selected scope on success.
    pub fn validate(&self) -> Result<Scope<'_>, SpecError> {
        let result = self.scope.validate_format();
        if let Err(e) = &result {
            tracing::debug!(error = %e, code = e.code(), "runner spec rejected");
        }
        result
    }
}
