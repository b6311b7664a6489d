//! The resolved config object: field values plus leftover arguments.

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::EnvoptError;
use crate::types::Value;

/// Key under which leftover arguments appear in the JSON form.
pub const ARGV_KEY: &str = "argv";

/// Resolution target and result.
///
/// A field with no entry is unset. `argv` holds the arguments no declared
/// field consumed, in their original order; it is rewritten by every argument
/// pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    values: BTreeMap<String, Value>,
    argv: Vec<String>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }

    pub fn get_count(&self, name: &str) -> Option<u64> {
        self.get(name).and_then(Value::as_count)
    }

    pub fn get_list(&self, name: &str) -> Option<&[String]> {
        self.get(name).and_then(Value::as_list)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Set a value, returning the previous one.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(name.to_string(), value.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.values.remove(name)
    }

    /// Builder form of [`set`](Self::set), for seeding initial values.
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Arguments left over after the last argument pass.
    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    pub(crate) fn set_argv(&mut self, argv: Vec<String>) {
        self.argv = argv;
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.values.get_mut(name)
    }

    /// JSON object with one key per resolved field and `"argv"` for leftovers.
    pub fn to_json(&self) -> serde_json::Value {
        let mut map: serde_json::Map<String, serde_json::Value> = self
            .values
            .iter()
            .map(|(key, value)| (key.clone(), json_value(value)))
            .collect();
        map.insert(ARGV_KEY.to_string(), string_array(&self.argv));
        serde_json::Value::Object(map)
    }

    /// Build an initial config from a JSON object.
    ///
    /// `"argv"` must be an array of strings. Every other key must hold a
    /// string, a boolean, a non-negative integer or an array of strings.
    /// `null` values are treated as unset.
    pub fn from_json(json: serde_json::Value) -> Result<Self, EnvoptError> {
        let serde_json::Value::Object(map) = json else {
            return Err(EnvoptError::InvalidValue {
                key: "<root>".into(),
                reason: "expected a JSON object".into(),
            });
        };

        let mut config = Config::new();
        for (key, raw) in map {
            if raw.is_null() {
                continue;
            }
            if key == ARGV_KEY {
                config.argv = serde_json::from_value(raw).map_err(|e| EnvoptError::InvalidValue {
                    key: key.clone(),
                    reason: e.to_string(),
                })?;
                continue;
            }
            let value: Value = serde_json::from_value(raw).map_err(|e| EnvoptError::InvalidValue {
                key: key.clone(),
                reason: e.to_string(),
            })?;
            config.values.insert(key, value);
        }
        Ok(config)
    }
}

fn json_value(value: &Value) -> serde_json::Value {
    match value {
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Count(n) => serde_json::Value::from(*n),
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::List(items) => string_array(items),
    }
}

fn string_array(items: &[String]) -> serde_json::Value {
    serde_json::Value::Array(items.iter().cloned().map(serde_json::Value::String).collect())
}

impl Serialize for Config {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len() + 1))?;
        for (key, value) in &self.values {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry(ARGV_KEY, &self.argv)?;
        map.end()
    }
}
