//! Runner resource types for the actions runner controller.
//!
//! A [`Runner`] pairs the desired state of one self-hosted CI agent
//! ([`RunnerSpec`]) with what the reconciler last observed about it
//! ([`RunnerStatus`]). Everything here is plain data plus pure predicates:
//! no I/O, no clocks read behind the caller's back, no shared state.

pub mod error;
pub mod meta;
mod nullable;
pub mod pod;
pub mod runner;
pub mod scope;
pub mod spec;
pub mod status;
pub mod tristate;

pub use error::{SpecError, ValidationError};
pub use meta::{ListMeta, ObjectMeta, OwnerReference, TypeMeta};
pub use pod::ExecutionSpec;
pub use runner::{PRINTER_COLUMNS, PrinterColumn, Runner, RunnerList};
#[cfg(feature = "schema")]
pub use runner::runner_schema;
pub use scope::{Scope, ScopeFields, validate_scope};
pub use spec::RunnerSpec;
pub use status::{
    RegistrationState, Registerability, RunnerStatus, check_registration, is_registerable,
};
pub use tristate::Tristate;

/// API group the runner resources are served under.
pub const GROUP: &str = "actions.summerwind.dev";

/// API version of the types in this crate.
pub const VERSION: &str = "v1alpha1";

/// `apiVersion` value written on every object (`<group>/<version>`).
pub const API_VERSION: &str = "actions.summerwind.dev/v1alpha1";

/// Kind of a single runner object.
pub const RUNNER_KIND: &str = "Runner";

/// Kind of a runner list response.
pub const RUNNER_LIST_KIND: &str = "RunnerList";
