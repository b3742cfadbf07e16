use std::fmt;

use linked_hash_map::LinkedHashMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

use crate::error::{QueryStringError, Result};

/// Value stored under a query string key
///
/// A key seen once holds a `Single` value. `Multiple` only appears when a key
/// is repeated in the source string, or when the caller supplies a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    Single(String),
    Multiple(Vec<String>),
}

impl QueryValue {
    /// Adds another value, turning a `Single` into a two-element `Multiple`.
    pub fn push(&mut self, value: impl Into<String>) {
        match self {
            QueryValue::Single(existing) => {
                let first = std::mem::take(existing);
                *self = QueryValue::Multiple(vec![first, value.into()]);
            }
            QueryValue::Multiple(values) => values.push(value.into()),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            QueryValue::Single(_) => 1,
            QueryValue::Multiple(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the value if it is a `Single`.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            QueryValue::Single(value) => Some(value),
            QueryValue::Multiple(_) => None,
        }
    }

    /// Iterates the values in order; a `Single` yields exactly one item.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let values: &[String] = match self {
            QueryValue::Single(value) => std::slice::from_ref(value),
            QueryValue::Multiple(values) => values,
        };
        values.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        match self {
            QueryValue::Single(value) => vec![value],
            QueryValue::Multiple(values) => values,
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Single(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Single(value)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        QueryValue::Multiple(values)
    }
}

impl From<Vec<&str>> for QueryValue {
    fn from(values: Vec<&str>) -> Self {
        QueryValue::Multiple(values.into_iter().map(str::to_string).collect())
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Single(value) => f.write_str(value),
            QueryValue::Multiple(values) => write!(f, "[{}]", values.join(", ")),
        }
    }
}

/// Ordered mapping of query string keys to their values
///
/// Iteration follows insertion order: first occurrence when built by the
/// parser, the caller's order otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryMap(LinkedHashMap<String, QueryValue>);

impl QueryMap {
    pub fn new() -> Self {
        QueryMap(LinkedHashMap::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.0.get(key)
    }

    /// Returns every value stored under `key`, empty if the key is absent.
    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.0
            .get(key)
            .map(|value| value.iter().collect())
            .unwrap_or_default()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Replaces whatever is stored under `key`, keeping its position.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<QueryValue>,
    ) -> Option<QueryValue> {
        let key = key.into();
        let value = value.into();
        // LinkedHashMap::insert would move an existing key to the back
        if let Some(slot) = self.0.get_mut(&key) {
            return Some(std::mem::replace(slot, value));
        }
        self.0.insert(key, value)
    }

    /// Adds a value the way the parser folds duplicate keys.
    ///
    /// A new key stores a `Single`; a repeated key becomes (or extends) a
    /// `Multiple` in order of appearance.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        if let Some(existing) = self.0.get_mut(&key) {
            existing.push(value);
            return;
        }
        self.0.insert(key, QueryValue::Single(value.into()));
    }

    pub fn remove(&mut self, key: &str) -> Option<QueryValue> {
        self.0.remove(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for QueryMap
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = QueryMap::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for QueryMap
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for QueryMap {
    type Item = (String, QueryValue);
    type IntoIter = linked_hash_map::IntoIter<String, QueryValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Writes a JSON number the way a JavaScript number prints, so `1.0` is `1`
fn number_to_string(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => {
            format!("{}", f as i64)
        }
        _ => n.to_string(),
    }
}

/// Converts a scalar JSON value to the text a query string carries
fn scalar_to_string(key: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(number_to_string(n)),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Null => Ok("null".to_string()),
        Value::Array(_) | Value::Object(_) => Err(QueryStringError::invalid_argument(
            "stringify",
            format!("value of \"{}\" must not be a nested object or array", key),
        )),
    }
}

impl TryFrom<&Value> for QueryMap {
    type Error = QueryStringError;

    /// Builds a map from a JSON object; `null` gives an empty map.
    fn try_from(value: &Value) -> Result<Self> {
        let object = match value {
            Value::Null => return Ok(QueryMap::new()),
            Value::Object(object) => object,
            _ => {
                return Err(QueryStringError::invalid_argument(
                    "stringify",
                    "\"parameters\" must be an object",
                ))
            }
        };

        let mut map = QueryMap::new();
        for (key, member) in object {
            let value = match member {
                Value::Array(items) => QueryValue::Multiple(
                    items
                        .iter()
                        .map(|item| scalar_to_string(key, item))
                        .collect::<Result<Vec<_>>>()?,
                ),
                scalar => QueryValue::Single(scalar_to_string(key, scalar)?),
            };
            map.insert(key.as_str(), value);
        }
        Ok(map)
    }
}
