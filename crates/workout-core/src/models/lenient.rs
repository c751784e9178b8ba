use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A client-supplied field kept exactly as sent: typed when it parses,
/// the raw JSON otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Lenient<T> {
    Typed(T),
    Raw(Value),
}

impl<T> Lenient<T> {
    pub fn typed(&self) -> Option<&T> {
        match self {
            Lenient::Typed(value) => Some(value),
            Lenient::Raw(_) => None,
        }
    }
}

/// `deserialize_with` helper: a key that is present, even as `null`, stays
/// `Some` so it is written back. Pair with `default` for absent keys.
pub fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
