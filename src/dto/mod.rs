//! Wire types exchanged over HTTP and with the external catalogs.

use serde::{Deserialize, Deserializer, de::Error as _};
use serde_json::Value;

pub mod catalog;
pub mod game;
pub mod health;

/// Accept a string, number or boolean for a text column, keeping its textual form.
///
/// Absent and `null` values both decode to `None`.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value)),
        Some(Value::Number(value)) => Ok(Some(value.to_string())),
        Some(Value::Bool(value)) => Ok(Some(value.to_string())),
        Some(other) => Err(D::Error::custom(format!(
            "expected a string or a number, got `{other}`"
        ))),
    }
}
