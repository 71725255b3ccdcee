//! Candidate values
//!
//! A [`ParamValue`] is whatever a parameter may be set to. The grid never
//! interprets candidates, so the type mirrors the JSON data model (with
//! integers and floats kept apart) and key order is preserved in maps.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A dynamically shaped value: a candidate, a raw grid spec, or an index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<ParamValue>),
    Map(IndexMap<String, ParamValue>),
}

impl ParamValue {
    /// Short type name used in error messages
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            ParamValue::Null => "null",
            ParamValue::Bool(_) => "bool",
            ParamValue::Int(_) => "int",
            ParamValue::Float(_) => "float",
            ParamValue::Str(_) => "str",
            ParamValue::List(_) => "list",
            ParamValue::Map(_) => "map",
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParamValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Floats, and integers widened to `f64`
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            ParamValue::Float(x) => Some(*x),
            ParamValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::Str(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_map(&self) -> Option<&IndexMap<String, ParamValue>> {
        match self {
            ParamValue::Map(m) => Some(m),
            _ => None,
        }
    }
}

impl From<bool> for ParamValue {
    fn from(b: bool) -> Self {
        ParamValue::Bool(b)
    }
}

impl From<i32> for ParamValue {
    fn from(i: i32) -> Self {
        ParamValue::Int(i64::from(i))
    }
}

impl From<i64> for ParamValue {
    fn from(i: i64) -> Self {
        ParamValue::Int(i)
    }
}

impl From<u32> for ParamValue {
    fn from(i: u32) -> Self {
        ParamValue::Int(i64::from(i))
    }
}

impl From<f64> for ParamValue {
    fn from(x: f64) -> Self {
        ParamValue::Float(x)
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Str(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Str(s)
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        ParamValue::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<IndexMap<String, ParamValue>> for ParamValue {
    fn from(map: IndexMap<String, ParamValue>) -> Self {
        ParamValue::Map(map)
    }
}

impl From<serde_json::Value> for ParamValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => ParamValue::Null,
            Value::Bool(b) => ParamValue::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => ParamValue::Int(i),
                // u64 above i64::MAX falls back to float, as does any real
                None => ParamValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => ParamValue::Str(s),
            Value::Array(items) => ParamValue::List(items.into_iter().map(Into::into).collect()),
            Value::Object(entries) => {
                ParamValue::Map(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

impl From<ParamValue> for serde_json::Value {
    fn from(value: ParamValue) -> Self {
        use serde_json::Value;

        match value {
            ParamValue::Null => Value::Null,
            ParamValue::Bool(b) => Value::Bool(b),
            ParamValue::Int(i) => Value::from(i),
            // Non-finite floats have no JSON form
            ParamValue::Float(x) => serde_json::Number::from_f64(x)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            ParamValue::Str(s) => Value::String(s),
            ParamValue::List(items) => Value::Array(items.into_iter().map(Into::into).collect()),
            ParamValue::Map(entries) => {
                Value::Object(entries.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_json_conversion_keeps_ints_and_floats_apart() {
        let value = ParamValue::from(json!([1, 1.5, "x", null, true]));
        let ParamValue::List(items) = value else {
            panic!("expected a list");
        };
        assert_eq!(items[0], ParamValue::Int(1));
        assert_eq!(items[1], ParamValue::Float(1.5));
        assert_eq!(items[2], ParamValue::from("x"));
        assert_eq!(items[3], ParamValue::Null);
        assert_eq!(items[4], ParamValue::Bool(true));
    }

    #[test]
    fn test_json_conversion_preserves_key_order() {
        let value = ParamValue::from(json!({"zeta": 1, "alpha": 2, "mid": 3}));
        let keys: Vec<&str> = value.as_map().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_deserialize_untagged() {
        let value: ParamValue = serde_json::from_str(r#"{"a": [1, 2.5, "s"], "b": null}"#).unwrap();
        let map = value.as_map().unwrap();
        assert_eq!(
            map["a"],
            ParamValue::List(vec![1.into(), 2.5.into(), "s".into()])
        );
        assert_eq!(map["b"], ParamValue::Null);
    }

    #[test]
    fn test_accessors() {
        assert_eq!(ParamValue::Int(3).as_float(), Some(3.0));
        assert_eq!(ParamValue::Float(0.5).as_int(), None);
        assert_eq!(ParamValue::from("rbf").as_str(), Some("rbf"));
        assert_eq!(ParamValue::Bool(false).as_bool(), Some(false));
        assert_eq!(ParamValue::Null.type_name(), "null");
    }

    #[test]
    fn test_non_finite_float_to_json_is_null() {
        let value: serde_json::Value = ParamValue::Float(f64::NAN).into();
        assert!(value.is_null());
    }
}
