use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::exercise::Exercise;
use super::lenient::{Lenient, present};

/// A stored week. Saved weeks are kept as the client sent them: calendar
/// fields that don't parse and keys this type doesn't name are carried
/// through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Week {
    /// 1-based. The number in the request path always wins over the body.
    #[serde(default)]
    pub week_number: u32,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Lenient<Date>>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Lenient<Date>>,
    #[serde(default)]
    pub days: Vec<Day>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Week {
    pub fn start_date(&self) -> Option<Date> {
        self.start_date.as_ref().and_then(Lenient::typed).copied()
    }

    pub fn end_date(&self) -> Option<Date> {
        self.end_date.as_ref().and_then(Lenient::typed).copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Day {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub date: Option<Lenient<Date>>,
    /// Upper-case English weekday name, e.g. `MONDAY`.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub day_name: Option<Lenient<String>>,
    #[serde(default)]
    pub focus_areas: Vec<String>,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
    #[serde(default)]
    pub cardio: String,
    #[serde(default)]
    pub notes: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Day {
    pub fn empty(date: Date, day_name: impl Into<String>) -> Self {
        Self {
            date: Some(Lenient::Typed(date)),
            day_name: Some(Lenient::Typed(day_name.into())),
            focus_areas: Vec::new(),
            exercises: Vec::new(),
            cardio: String::new(),
            notes: String::new(),
            extra: Map::new(),
        }
    }

    pub fn date(&self) -> Option<Date> {
        self.date.as_ref().and_then(Lenient::typed).copied()
    }

    pub fn day_name(&self) -> Option<&str> {
        self.day_name
            .as_ref()
            .and_then(Lenient::typed)
            .map(String::as_str)
    }
}
