//! Operation result values and JSON-safe normalization

use std::path::PathBuf;

use serde_json::{Map, Number, Value};

/// A result produced by an operation before it crosses the process boundary.
///
/// Path-like values are tagged where the typed port methods hand them over,
/// so normalization never has to guess at runtime. `Tuple` keeps a
/// fixed-size group apart from a list until it is flattened into an array.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Path(PathBuf),
    Tuple(Vec<ResultValue>),
    Array(Vec<ResultValue>),
    /// Key/value pairs in insertion order
    Object(Vec<(String, ResultValue)>),
}

impl ResultValue {
    /// Build an object from ordered key/value pairs
    pub fn object<K, I>(entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, ResultValue)>,
    {
        Self::Object(entries.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Build a list of paths
    pub fn paths(paths: Vec<PathBuf>) -> Self {
        Self::Array(paths.into_iter().map(Self::Path).collect())
    }

    /// Convert into a JSON value.
    ///
    /// Paths become their string form, tuples become arrays and object key
    /// order is preserved. Everything else passes through unchanged.
    pub fn normalize(self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Bool(b) => Value::Bool(b),
            Self::Number(n) => Value::Number(n),
            Self::String(s) => Value::String(s),
            Self::Path(p) => Value::String(p.to_string_lossy().into_owned()),
            Self::Tuple(items) | Self::Array(items) => {
                Value::Array(items.into_iter().map(Self::normalize).collect())
            }
            Self::Object(entries) => {
                let mut map = Map::with_capacity(entries.len());
                for (key, value) in entries {
                    map.insert(key, value.normalize());
                }
                Value::Object(map)
            }
        }
    }
}

impl From<Value> for ResultValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<bool> for ResultValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<String> for ResultValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for ResultValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<usize> for ResultValue {
    fn from(n: usize) -> Self {
        Self::Number(Number::from(n))
    }
}

impl From<PathBuf> for ResultValue {
    fn from(p: PathBuf) -> Self {
        Self::Path(p)
    }
}
