//! Typed property bag attached to features.
//!
//! `Properties` is a string-keyed map of `Value`s. Accessors never fail:
//! a missing key or an unusable type yields the caller's default, and the
//! numeric accessors coerce between `Int` and `Float`.
//!
//! Per-vertex metadata (e.g. timestamps aligned with a line string's points)
//! lives in a nested map under `COORDINATE_PROPERTIES_KEY`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Key of the nested per-vertex property map.
pub const COORDINATE_PROPERTIES_KEY: &str = "coordinateProperties";

/// A single property value. Serialized as plain JSON (untagged).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<Value>),
    Map(Properties),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}
impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}
impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}
impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}
impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_owned())
    }
}
impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}
impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}
impl From<Properties> for Value {
    fn from(v: Properties) -> Self {
        Value::Map(v)
    }
}

/// String-keyed property map with default-valued accessors.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties(BTreeMap<String, Value>);

impl Properties {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Insert, returning the previous value under `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// `Bool` under `key`, else `default`.
    pub fn must_bool(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            Some(Value::Bool(b)) => *b,
            _ => default,
        }
    }

    /// `Int` under `key`, a `Float` truncated toward zero, else `default`.
    pub fn must_int(&self, key: &str, default: i64) -> i64 {
        match self.get(key) {
            Some(Value::Int(i)) => *i,
            Some(Value::Float(f)) if f.is_finite() => *f as i64,
            _ => default,
        }
    }

    /// `Float` under `key`, an `Int` widened, else `default`.
    pub fn must_float(&self, key: &str, default: f64) -> f64 {
        match self.get(key) {
            Some(Value::Float(f)) => *f,
            Some(Value::Int(i)) => *i as f64,
            _ => default,
        }
    }

    /// `Text` under `key`, else `default`.
    pub fn must_string<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        match self.get(key) {
            Some(Value::Text(s)) => s.as_str(),
            _ => default,
        }
    }

    /// Copy of the per-vertex map; empty if absent or not a map.
    pub fn coordinate_properties(&self) -> Properties {
        match self.get(COORDINATE_PROPERTIES_KEY) {
            Some(Value::Map(m)) => m.clone(),
            _ => Properties::new(),
        }
    }

    /// Mutable per-vertex map, created (or replacing a non-map value) on demand.
    pub fn coordinate_properties_mut(&mut self) -> &mut Properties {
        let slot = self
            .0
            .entry(COORDINATE_PROPERTIES_KEY.to_owned())
            .or_insert_with(|| Value::Map(Properties::new()));
        // At most two passes: a non-map value is replaced, then matched.
        loop {
            match slot {
                Value::Map(m) => return m,
                _ => *slot = Value::Map(Properties::new()),
            }
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
