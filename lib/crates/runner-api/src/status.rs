//! Observed state of a runner and the registration freshness check.
//!
//! Only the reconciler writes these fields. A registration is replaced as a
//! whole whenever the provider issues a new one; its token is never edited
//! in place.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scope::ScopeFields;

/// Credential the provider issued for a runner, with the scope and labels
/// it echoed back at registration time.
///
/// An all-empty value stands for "never registered".
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct RegistrationState {
    #[serde(flatten)]
    scope: ScopeFields,
    #[serde(
        default,
        deserialize_with = "crate::nullable::or_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    labels: Vec<String>,
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    token: String,
    /// Always written; `null` when no registration has been obtained.
    #[serde(default)]
    expires_at: Option<DateTime<Utc>>,
}

impl RegistrationState {
    #[must_use]
    pub fn new(
        scope: ScopeFields,
        labels: Vec<String>,
        token: impl Into<String>,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            scope,
            labels,
            token: token.into(),
            expires_at: Some(expires_at),
        }
    }

    /// Scope echoed by the provider.
    #[must_use]
    pub fn scope(&self) -> &ScopeFields {
        &self.scope
    }

    #[must_use]
    pub fn enterprise(&self) -> &str {
        &self.scope.enterprise
    }

    #[must_use]
    pub fn organization(&self) -> &str {
        &self.scope.organization
    }

    #[must_use]
    pub fn repository(&self) -> &str {
        &self.scope.repository
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// True for the zero value written before any registration exists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.token.is_empty() && self.expires_at.is_none()
    }
}

impl fmt::Debug for RegistrationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.token.is_empty() { "" } else { "<redacted>" };
        f.debug_struct("RegistrationState")
            .field("scope", &self.scope)
            .field("labels", &self.labels)
            .field("token", &token)
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// Which gate decided whether a cached registration can be reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Registerability {
    Registerable,
    /// The echoed repository differs from the desired one.
    ScopeMismatch,
    MissingToken,
    /// `expires_at` is unset or not strictly after the evaluation instant.
    Expired,
}

impl Registerability {
    #[must_use]
    pub fn is_registerable(self) -> bool {
        matches!(self, Self::Registerable)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Registerable => "registerable",
            Self::ScopeMismatch => "scope_mismatch",
            Self::MissingToken => "missing_token",
            Self::Expired => "expired",
        }
    }
}

impl fmt::Display for Registerability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Evaluates the cached registration against the desired scope at `now`.
///
/// Gates run in order: repository echo equality, non-empty token, expiry
/// strictly after `now`. Only `repository` is compared; enterprise and
/// organization echoes are not consulted, so for those scopes the first
/// gate compares two empty strings.
#[must_use]
pub fn check_registration(
    desired: &ScopeFields,
    registration: &RegistrationState,
    now: DateTime<Utc>,
) -> Registerability {
    if registration.repository() != desired.repository {
        return Registerability::ScopeMismatch;
    }
    if registration.token().is_empty() {
        return Registerability::MissingToken;
    }
    match registration.expires_at() {
        Some(expires_at) if expires_at > now => Registerability::Registerable,
        _ => Registerability::Expired,
    }
}

/// Whether the cached registration may be reused without asking the
/// provider for a new one.
#[must_use]
pub fn is_registerable(
    desired: &ScopeFields,
    registration: &RegistrationState,
    now: DateTime<Utc>,
) -> bool {
    check_registration(desired, registration, now).is_registerable()
}

/// What the reconciler last observed about a runner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct RunnerStatus {
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub registration: RegistrationState,
    #[serde(
        default,
        deserialize_with = "crate::nullable::or_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub phase: String,
    #[serde(
        default,
        deserialize_with = "crate::nullable::or_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub reason: String,
    #[serde(
        default,
        deserialize_with = "crate::nullable::or_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_registration_check_time: Option<DateTime<Utc>>,
}

impl RunnerStatus {
    /// Installs a freshly issued registration, returning the one it replaces.
    pub fn replace_registration(&mut self, registration: RegistrationState) -> RegistrationState {
        std::mem::replace(&mut self.registration, registration)
    }

    pub fn record_registration_check(&mut self, at: DateTime<Utc>) {
        self.last_registration_check_time = Some(at);
    }
}
