//! Reading `null` as "not set".
//!
//! Documents written by other tools (or YAML keys left blank, like
//! `organization:`) carry explicit nulls for optional fields. Those read as
//! the field's empty value, same as an absent key.

use serde::{Deserialize, Deserializer};

/// `deserialize_with` target: `null` becomes `T::default()`.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
