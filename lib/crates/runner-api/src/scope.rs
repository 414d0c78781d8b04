//! Scope of a runner: the enterprise, organization or single repository it
//! registers with. Exactly one level may be set.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{SpecError, ValidationError};

/// Pattern for enterprise and organization slugs.
pub const NAME_PATTERN: &str = "^[^/]+$";

/// Pattern for `owner/name` repository references.
pub const REPOSITORY_PATTERN: &str = "^[^/]+/[^/]+$";

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Safety: constant pattern, cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(NAME_PATTERN).expect("valid regex")
});

static REPOSITORY_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(REPOSITORY_PATTERN).expect("valid regex")
});

/// The three mutually exclusive scope fields, as declared or as echoed back
/// by the provider. An empty string means "not set".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ScopeFields {
    #[serde(
        default,
        deserialize_with = "crate::nullable::or_default",
        skip_serializing_if = "String::is_empty"
    )]
    #[cfg_attr(feature = "schema", schemars(regex(pattern = NAME_PATTERN)))]
    pub enterprise: String,
    #[serde(
        default,
        deserialize_with = "crate::nullable::or_default",
        skip_serializing_if = "String::is_empty"
    )]
    #[cfg_attr(feature = "schema", schemars(regex(pattern = NAME_PATTERN)))]
    pub organization: String,
    #[serde(
        default,
        deserialize_with = "crate::nullable::or_default",
        skip_serializing_if = "String::is_empty"
    )]
    #[cfg_attr(feature = "schema", schemars(regex(pattern = REPOSITORY_PATTERN)))]
    pub repository: String,
}

/// A validated scope, borrowing its value from the [`ScopeFields`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope<'a> {
    Enterprise(&'a str),
    Organization(&'a str),
    Repository(&'a str),
}

impl Scope<'_> {
    /// Name of the field that holds this scope.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::Enterprise(_) => "enterprise",
            Self::Organization(_) => "organization",
            Self::Repository(_) => "repository",
        }
    }

    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Enterprise(v) | Self::Organization(v) | Self::Repository(v) => *v,
        }
    }
}

impl fmt::Display for Scope<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field(), self.value())
    }
}

impl ScopeFields {
    #[must_use]
    pub fn enterprise(name: &str) -> Self {
        Self {
            enterprise: name.to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn organization(name: &str) -> Self {
        Self {
            organization: name.to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn repository(name: &str) -> Self {
        Self {
            repository: name.to_string(),
            ..Self::default()
        }
    }

    /// The single scope these fields select.
    pub fn scope(&self) -> Result<Scope<'_>, ValidationError> {
        let candidates = [
            (!self.enterprise.is_empty()).then(|| Scope::Enterprise(self.enterprise.as_str())),
            (!self.organization.is_empty())
                .then(|| Scope::Organization(self.organization.as_str())),
            (!self.repository.is_empty()).then(|| Scope::Repository(self.repository.as_str())),
        ];
        let mut set = candidates.into_iter().flatten();
        match (set.next(), set.next()) {
            (None, _) => Err(ValidationError::MissingScope),
            (Some(scope), None) => Ok(scope),
            (Some(_), Some(_)) => Err(ValidationError::AmbiguousScope),
        }
    }

    /// Scope check plus the per-field format rule for whichever field is set.
    pub fn validate_format(&self) -> Result<Scope<'_>, SpecError> {
        let scope = self.scope()?;
        let (re, pattern) = match scope {
            Scope::Enterprise(_) | Scope::Organization(_) => (&*NAME_RE, NAME_PATTERN),
            Scope::Repository(_) => (&*REPOSITORY_RE, REPOSITORY_PATTERN),
        };
        if re.is_match(scope.value()) {
            Ok(scope)
        } else {
            Err(SpecError::InvalidFormat {
                field: scope.field(),
                value: scope.value().to_string(),
                pattern,
            })
        }
    }
}

/// Checks that exactly one of enterprise, organization and repository is set.
///
/// Pure and total: the outcome depends only on which of the three strings
/// are non-empty.
pub fn validate_scope(fields: &ScopeFields) -> Result<(), ValidationError> {
    fields.scope().map(|_| ())
}
