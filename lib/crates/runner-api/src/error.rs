//! Typed errors for runner declarations.
//!
//! Both kinds are user errors: the declaration is rejected as written and
//! will not start passing until someone edits it. Nothing here is retryable.

use thiserror::Error;

/// Why a declaration's scope fields are unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing scope: spec needs enterprise, organization or repository")]
    MissingScope,

    #[error(
        "ambiguous scope: spec cannot have more than one of enterprise, organization and repository"
    )]
    AmbiguousScope,
}

/// Any reason a [`RunnerSpec`](crate::RunnerSpec) is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecError {
    #[error(transparent)]
    Scope(#[from] ValidationError),

    #[error("invalid {field} '{value}': must match {pattern}")]
    InvalidFormat {
        field: &'static str,
        value: String,
        pattern: &'static str,
    },
}

impl SpecError {
    /// Stable, machine-readable identifier for reporting.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Scope(ValidationError::MissingScope) => "missing_scope",
            Self::Scope(ValidationError::AmbiguousScope) => "ambiguous_scope",
            Self::InvalidFormat { .. } => "invalid_format",
        }
    }
}
