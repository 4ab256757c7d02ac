//! Read-only views over decoded JSON responses.
//!
//! `Object` owns one decoded mapping. Attribute reads hand out borrowed
//! `Field`s, wrapping nested mappings as `Node`s and sequences as lists of
//! fields. Unknown keys read as `Field::Null` unless strict checking is on.
//! A body that is a bare scalar (`true` from a delete, say) is kept as the
//! object's `scalar` and has no keys.

use crate::error::{Error, Result};
use serde::de::{Error as _, Unexpected};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

#[derive(Clone, Default)]
pub struct Object {
    fields: Map<String, Value>,
    scalar: Option<Value>,
    strict: bool,
}

impl Object {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self {
            fields,
            scalar: None,
            strict: false,
        }
    }

    /// Wraps a JSON value. `null` wraps an empty mapping; sequences are rejected.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Self::new(fields)),
            Value::Null => Ok(Self::default()),
            Value::Array(_) => Err(Error::Decode(serde_json::Error::invalid_type(
                Unexpected::Seq,
                &"a JSON object or scalar",
            ))),
            scalar => Ok(Self {
                scalar: Some(scalar),
                ..Self::default()
            }),
        }
    }

    /// Switches strict key checking: unknown keys fail with `Error::NoAttribute`.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn node(&self) -> Node<'_> {
        Node {
            fields: &self.fields,
            strict: self.strict,
        }
    }

    pub fn get(&self, key: &str) -> Result<Field<'_>> {
        self.node().get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.scalar.is_none()
    }

    /// The body when the server answered with a bare scalar instead of a mapping.
    pub fn scalar(&self) -> Option<&Value> {
        self.scalar.as_ref()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields && self.scalar == other.scalar
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.scalar {
            Some(scalar) => fmt::Display::fmt(scalar, f),
            None => fmt::Display::fmt(&self.node(), f),
        }
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.scalar {
            Some(scalar) => fmt::Debug::fmt(scalar, f),
            None => fmt::Debug::fmt(&self.fields, f),
        }
    }
}

impl<'de> Deserialize<'de> for Object {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;

        if value.is_array() {
            return Err(D::Error::invalid_type(
                Unexpected::Seq,
                &"a JSON object or scalar",
            ));
        }

        Object::from_value(value).map_err(D::Error::custom)
    }
}

impl Serialize for Object {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match &self.scalar {
            Some(scalar) => scalar.serialize(serializer),
            None => self.fields.serialize(serializer),
        }
    }
}

impl TryFrom<Value> for Object {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Object::from_value(value)
    }
}

/// Borrowed view over a mapping held by an `Object`.
#[derive(Clone, Copy)]
pub struct Node<'a> {
    fields: &'a Map<String, Value>,
    strict: bool,
}

impl<'a> Node<'a> {
    pub fn get(&self, key: &str) -> Result<Field<'a>> {
        match self.fields.get(key) {
            Some(value) => Ok(Field::wrap(value, self.strict)),
            None if self.strict => Err(Error::NoAttribute(key.to_owned())),
            None => Ok(Field::Null),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'a str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn as_map(&self) -> &'a Map<String, Value> {
        self.fields
    }

    pub fn to_object(&self) -> Object {
        Object::new(self.fields.clone()).strict(self.strict)
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl fmt::Display for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string(self.fields).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.fields, f)
    }
}

/// Value of one attribute read.
#[derive(Debug, Clone, PartialEq)]
pub enum Field<'a> {
    Null,
    Scalar(&'a Value),
    Node(Node<'a>),
    List(Vec<Field<'a>>),
}

impl<'a> Field<'a> {
    fn wrap(value: &'a Value, strict: bool) -> Self {
        match value {
            Value::Null => Field::Null,
            Value::Object(fields) => Field::Node(Node { fields, strict }),
            Value::Array(items) => {
                Field::List(items.iter().map(|v| Field::wrap(v, strict)).collect())
            }
            scalar => Field::Scalar(scalar),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }

    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Field::Scalar(v) => v.as_str(),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Field::Scalar(v) => v.as_i64(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Field::Scalar(v) => v.as_u64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Field::Scalar(v) => v.as_f64(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Field::Scalar(v) => v.as_bool(),
            _ => None,
        }
    }

    pub fn as_node(&self) -> Option<Node<'a>> {
        match self {
            Field::Node(node) => Some(*node),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Field<'a>]> {
        match self {
            Field::List(items) => Some(items),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn note() -> Object {
        Object::try_from(json!({
            "id": 1201,
            "body": "The solution is rather tricky",
            "author": {"id": 1, "name": "John Smith", "blocked": false},
            "labels": ["bug", {"name": "ui"}],
            "closed_at": null
        }))
        .unwrap()
    }

    #[test]
    fn reads_scalars() {
        let note = note();

        assert_eq!(note.get("id").unwrap().as_i64(), Some(1201));
        assert_eq!(
            note.get("body").unwrap().as_str(),
            Some("The solution is rather tricky")
        );
    }

    #[test]
    fn wraps_nested_objects() {
        let note = note();
        let author = note.get("author").unwrap().as_node().unwrap();

        assert_eq!(author.get("name").unwrap().as_str(), Some("John Smith"));
        assert_eq!(author.get("blocked").unwrap().as_bool(), Some(false));
    }

    #[test]
    fn wraps_lists_element_by_element() {
        let note = note();
        let labels = note.get("labels").unwrap();
        let labels = labels.as_list().unwrap();

        assert_eq!(labels[0].as_str(), Some("bug"));
        assert_eq!(
            labels[1].as_node().unwrap().get("name").unwrap().as_str(),
            Some("ui")
        );
    }

    #[test]
    fn unknown_key_reads_as_null() {
        let note = note();

        assert!(note.get("missing").unwrap().is_null());
        assert!(note.get("closed_at").unwrap().is_null());
    }

    #[test]
    fn strict_mode_rejects_unknown_keys() {
        let note = note().strict(true);

        let err = note.get("missing").unwrap_err();
        assert!(matches!(err, Error::NoAttribute(ref key) if key == "missing"));

        let author = note.get("author").unwrap().as_node().unwrap();
        assert!(author.get("email").is_err());
        assert!(note.get("closed_at").unwrap().is_null());
    }

    #[test]
    fn equality_ignores_key_order() {
        let a = Object::try_from(json!({"id": 1, "name": "a"})).unwrap();
        let b = Object::try_from(json!({"name": "a", "id": 1})).unwrap();
        let c = Object::try_from(json!({"name": "b", "id": 1})).unwrap();

        assert_eq!(a, b);
        assert_eq!(a, b.clone().strict(true));
        assert_ne!(a, c);
    }

    #[test]
    fn renders_underlying_mapping() {
        let object = Object::try_from(json!({"id": 1, "name": "a"})).unwrap();

        assert_eq!(object.to_string(), r#"{"id":1,"name":"a"}"#);
        assert_eq!(format!("{object:?}"), format!("{:?}", object.as_map()));
    }

    #[test]
    fn keys_keep_insertion_order() {
        let object = Object::try_from(json!({"b": 1, "a": 2, "c": 3})).unwrap();

        assert_eq!(object.keys().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    }

    #[test]
    fn list_of_objects_deserializes_to_vec() {
        let users: Vec<Object> =
            serde_json::from_str(r#"[{"email":"john@example.com"}]"#).unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].get("email").unwrap().as_str(), Some("john@example.com"));
    }

    #[test]
    fn nested_node_converts_to_owned_object() {
        let note = note().strict(true);
        let author = note.get("author").unwrap().as_node().unwrap().to_object();

        assert!(author.is_strict());
        assert_eq!(author.len(), 3);
        assert!(author.contains_key("blocked"));
    }

    #[test]
    fn scalar_body_has_no_keys() {
        let deleted = Object::try_from(json!(true)).unwrap();

        assert_eq!(deleted.scalar(), Some(&json!(true)));
        assert!(!deleted.is_empty());
        assert!(deleted.get("id").unwrap().is_null());
        assert!(deleted.clone().strict(true).get("id").is_err());
        assert_eq!(deleted.to_string(), "true");
        assert_eq!(serde_json::to_value(&deleted).unwrap(), json!(true));
    }

    #[test]
    fn null_wraps_an_empty_mapping() {
        let object: Object = serde_json::from_str("null").unwrap();

        assert!(object.is_empty());
        assert_eq!(object.scalar(), None);
        assert_eq!(object, Object::default());
    }

    #[test]
    fn sequence_is_not_an_object() {
        assert!(matches!(Object::try_from(json!([1, 2])), Err(Error::Decode(_))));
        assert!(serde_json::from_str::<Object>("[]").is_err());
    }
}
