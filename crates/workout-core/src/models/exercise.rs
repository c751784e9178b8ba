use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One set of an exercise. Strength days record `reps` and `weight`,
/// cardio days record `time` and `intensity`. Values are whatever the
/// client typed, so the object is stored as sent, extra keys included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SetEntry(pub Map<String, Value>);

impl SetEntry {
    pub fn strength(reps: impl Into<Value>, weight: impl Into<Value>) -> Self {
        let mut fields = Map::new();
        fields.insert("reps".into(), reps.into());
        fields.insert("weight".into(), weight.into());
        Self(fields)
    }

    pub fn cardio(time: impl Into<Value>, intensity: impl Into<Value>) -> Self {
        let mut fields = Map::new();
        fields.insert("time".into(), time.into());
        fields.insert("intensity".into(), intensity.into());
        Self(fields)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Nothing entered: every field is an empty string or `null`.
    pub fn is_blank(&self) -> bool {
        self.0.values().all(|value| match value {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sets: Vec<SetEntry>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
