//! Three-valued flag for optional booleans.
//!
//! "Not configured" and "configured false" mean different things for fields
//! like `ephemeral`: the first defers to the controller default, the second
//! overrides it. A plain `bool` loses that distinction.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An optional boolean: unset, explicitly true, or explicitly false.
///
/// Serialized as an absent field (callers pair it with
/// `skip_serializing_if = "Tristate::is_unset"`), `true` or `false`.
/// A `null` in the document reads back as [`Tristate::Unset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tristate {
    #[default]
    Unset,
    True,
    False,
}

impl Tristate {
    #[must_use]
    #[allow(clippy::trivially_copy_pass_by_ref)] // serde's skip_serializing_if takes &T
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    #[must_use]
    pub fn as_option(self) -> Option<bool> {
        match self {
            Self::Unset => None,
            Self::True => Some(true),
            Self::False => Some(false),
        }
    }

    /// The configured value, or `default` when unset.
    #[must_use]
    pub fn unwrap_or(self, default: bool) -> bool {
        self.as_option().unwrap_or(default)
    }
}

impl From<bool> for Tristate {
    fn from(value: bool) -> Self {
        if value { Self::True } else { Self::False }
    }
}

impl From<Option<bool>> for Tristate {
    fn from(value: Option<bool>) -> Self {
        value.map_or(Self::Unset, Self::from)
    }
}

impl From<Tristate> for Option<bool> {
    fn from(value: Tristate) -> Self {
        value.as_option()
    }
}

impl Serialize for Tristate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_option().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Tristate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<bool>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(feature = "schema")]
impl schemars::JsonSchema for Tristate {
    fn inline_schema() -> bool {
        true
    }

    fn schema_name() -> std::borrow::Cow<'static, str> {
        "Tristate".into()
    }

    fn json_schema(generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        <Option<bool>>::json_schema(generator)
    }
}
