use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// Ordered option map used for query strings and request bodies.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Params(Map<String, Value>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.insert(key, value);
        self
    }

    pub fn insert<K, V>(&mut self, key: K, value: V) -> Option<Value>
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Keys of `other` win over keys already present.
    pub fn merge(mut self, other: &Params) -> Self {
        for (k, v) in other.iter() {
            self.0.insert(k.clone(), v.clone());
        }
        self
    }

    /// Fails with every required key absent from the map.
    pub fn require(&self, attrs: &[&str]) -> Result<()> {
        let missing: Vec<String> = attrs
            .iter()
            .filter(|attr| !self.contains_key(attr))
            .map(|attr| format!("'{attr}'"))
            .collect();

        match missing.len() {
            0 => Ok(()),
            1 => Err(Error::MissingAttributes(format!("Missing {} parameter", missing[0]))),
            _ => Err(Error::MissingAttributes(format!(
                "Missing {} parameters",
                missing.join(", ")
            ))),
        }
    }

    /// Flattens nested values with bracket notation, e.g. `a[b]=1`, `tags[]=x`.
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.0.len());

        for (key, value) in self.iter() {
            flatten(key.clone(), value, &mut pairs);
        }

        pairs
    }
}

fn flatten(key: String, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                flatten(format!("{key}[{k}]"), v, out);
            }
        }
        Value::Array(items) => {
            for item in items {
                flatten(format!("{key}[]"), item, out);
            }
        }
        Value::Null => out.push((key, String::new())),
        Value::String(s) => out.push((key, s.clone())),
        scalar => out.push((key, scalar.to_string())),
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl TryFrom<Value> for Params {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(Error::Arguments(format!("expected a JSON object, got {other}"))),
        }
    }
}
