//! Execution description of the runner pod.
//!
//! These fields are handed verbatim to whatever builds the pod. Nested
//! Kubernetes objects (containers, volumes, affinity, ...) are kept as raw
//! JSON documents so that any field the cluster understands survives a
//! read-modify-write cycle through this crate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::tristate::Tristate;

/// A `core/v1` `Container`.
pub type Container = Value;
/// A `core/v1` `EphemeralContainer`.
pub type EphemeralContainer = Value;
/// A `core/v1` `ResourceRequirements`.
pub type ResourceRequirements = Value;
/// A `core/v1` `VolumeMount`.
pub type VolumeMount = Value;
/// A `core/v1` `Volume`.
pub type Volume = Value;
/// A `core/v1` `EnvVar`.
pub type EnvVar = Value;
/// A `core/v1` `EnvFromSource`.
pub type EnvFromSource = Value;
/// A `core/v1` `PodSecurityContext`.
pub type PodSecurityContext = Value;
/// A `core/v1` `LocalObjectReference`.
pub type LocalObjectReference = Value;
/// A `core/v1` `Affinity`.
pub type Affinity = Value;
/// A `core/v1` `Toleration`.
pub type Toleration = Value;

/// Pod and container settings of a runner, flattened into
/// [`RunnerSpec`](crate::RunnerSpec).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct ExecutionSpec {
    #[serde(
        default,
        deserialize_with = "crate::nullable::or_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub containers: Vec<Container>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dockerd_container_resources: Option<ResourceRequirements>,
    #[serde(
        default,
        deserialize_with = "crate::nullable::or_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub docker_volume_mounts: Vec<VolumeMount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceRequirements>,
    #[serde(
        default,
        deserialize_with = "crate::nullable::or_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub volume_mounts: Vec<VolumeMount>,
    #[serde(
        default,
        deserialize_with = "crate::nullable::or_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub env_from: Vec<EnvFromSource>,

    /// Runner image. Always written, even when empty, so the controller
    /// default applies explicitly.
    #[serde(default, deserialize_with = "crate::nullable::or_default")]
    pub image: String,
    #[serde(
        default,
        deserialize_with = "crate::nullable::or_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub image_pull_policy: String,
    #[serde(
        default,
        deserialize_with = "crate::nullable::or_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub env: Vec<EnvVar>,

    #[serde(
        default,
        deserialize_with = "crate::nullable::or_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub volumes: Vec<Volume>,
    #[serde(
        default,
        deserialize_with = "crate::nullable::or_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub work_dir: String,

    #[serde(
        default,
        deserialize_with = "crate::nullable::or_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub init_containers: Vec<Container>,
    #[serde(
        default,
        deserialize_with = "crate::nullable::or_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub sidecar_containers: Vec<Container>,
    #[serde(
        default,
        deserialize_with = "crate::nullable::or_default",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub node_selector: BTreeMap<String, String>,
    #[serde(
        default,
        deserialize_with = "crate::nullable::or_default",
        skip_serializing_if = "String::is_empty"
    )]
    pub service_account_name: String,
    #[serde(default, skip_serializing_if = "Tristate::is_unset")]
    pub automount_service_account_token: Tristate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_context: Option<PodSecurityContext>,
    #[serde(
        default,
        deserialize_with = "crate::nullable::or_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub image_pull_secrets: Vec<LocalObjectReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affinity: Option<Affinity>,
    #[serde(
        default,
        deserialize_with = "crate::nullable::or_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tolerations: Vec<Toleration>,
    #[serde(
        default,
        deserialize_with = "crate::nullable::or_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub ephemeral_containers: Vec<EphemeralContainer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub termination_grace_period_seconds: Option<i64>,
    #[serde(default, skip_serializing_if = "Tristate::is_unset")]
    pub dockerd_within_runner_container: Tristate,
    #[serde(default, skip_serializing_if = "Tristate::is_unset")]
    pub docker_enabled: Tristate,
    #[serde(rename = "dockerMTU", default, skip_serializing_if = "Option::is_none")]
    pub docker_mtu: Option<i64>,
}
