//! Group-level deserialization that never fails.
//!
//! A tenant document may hold any JSON type where a group is expected.
//! Wrong shapes are replaced by the group's defaults instead of rejecting
//! the whole schema.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

/// Deserialize a group, accepting only JSON objects.
pub(crate) fn lenient_group<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    if !value.is_object() && !value.is_null() {
        warn!(
            "theme schema group {} is not an object, using defaults",
            std::any::type_name::<T>()
        );
        return Ok(T::default());
    }
    Ok(from_value_or_default(value))
}

pub(crate) fn from_value_or_default<T>(value: Value) -> T
where
    T: DeserializeOwned + Default,
{
    if value.is_null() {
        return T::default();
    }
    match serde_json::from_value(value) {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!(
                "theme schema group {} is malformed, using defaults: {e}",
                std::any::type_name::<T>()
            );
            T::default()
        }
    }
}
