//! Generic JSON value tree.
//!
//! Unlike `serde_json::Value`, objects here are a plain ordered list of fields:
//! insertion order is kept and duplicate keys are preserved, never merged.

use crate::Result;
use crate::diagnostics;

use anyhow::bail;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Array(Vec<Value>),
    Object(Object),
}

/// Ordered object fields. Duplicate keys are kept in the order they were pushed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    fields: Vec<(String, Value)>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<Value>) -> &mut Self {
        self.fields.push((key.into(), value.into()));
        self
    }

    /// First field with this key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }
}

impl Value {
    pub fn array() -> Self {
        Value::Array(Vec::new())
    }

    pub fn object() -> Self {
        Value::Object(Object::new())
    }

    /// Append an element to an array value.
    pub fn push(&mut self, item: impl Into<Value>) -> Result<&mut Self> {
        let Value::Array(items) = self else {
            bail!(
                "{}",
                diagnostics::error_message(format!(
                    "cannot push an element onto a JSON {}",
                    self.kind()
                ))
            );
        };
        items.push(item.into());
        Ok(self)
    }

    /// Append a field to an object value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Result<&mut Self> {
        let Value::Object(obj) = self else {
            bail!(
                "{}",
                diagnostics::error_message(format!(
                    "cannot insert a field into a JSON {}",
                    self.kind()
                ))
            );
        };
        obj.push(key, value);
        Ok(self)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(obj) => obj.get(key),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n.into())
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(n.into())
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<Object> for Value {
    fn from(obj: Object) -> Self {
        Value::Object(obj)
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(n) => n.serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(obj) => {
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn object_keeps_insertion_order_and_duplicates() {
        let mut obj = Object::new();
        obj.push("zeta", "last").push("alpha", 1i64).push("zeta", true);

        assert_eq!(obj.len(), 3);
        assert_eq!(obj.keys().collect::<Vec<_>>(), vec!["zeta", "alpha", "zeta"]);
        assert_eq!(obj.get("zeta"), Some(&Value::from("last")));

        let text = serde_json::to_string(&Value::from(obj)).unwrap();
        assert_eq!(text, r#"{"zeta":"last","alpha":1,"zeta":true}"#);
    }

    #[test]
    fn push_only_applies_to_arrays() {
        let mut arr = Value::array();
        arr.push("a").unwrap().push(Value::Null).unwrap();
        assert_eq!(arr.as_array().map(|a| a.len()), Some(2));

        let err = Value::from("text").push(1u64).unwrap_err();
        assert!(err.to_string().contains("JSON string"), "{}", err);
    }

    #[test]
    fn insert_only_applies_to_objects() {
        let mut obj = Value::object();
        obj.insert("k", 1u64).unwrap();
        assert_eq!(obj.get("k"), Some(&Value::from(1u64)));

        let err = Value::array().insert("k", 1u64).unwrap_err();
        assert!(err.to_string().contains("JSON array"), "{}", err);
    }

    #[test]
    fn nested_tree_serializes_every_kind() {
        let mut inner = Object::new();
        inner.push("n", -3i64).push("none", Value::Null);
        let tree = Value::from(vec![Value::from(inner), Value::from(false), Value::array()]);

        let text = serde_json::to_string(&tree).unwrap();
        assert_eq!(text, r#"[{"n":-3,"none":null},false,[]]"#);
    }

    #[test]
    fn strings_are_escaped() {
        let text = serde_json::to_string(&Value::from("say \"hi\"\n")).unwrap();
        assert_eq!(text, r#""say \"hi\"\n""#);
    }
}
