//! Conversions from ordinary Rust data into [`Value`]

use indexmap::IndexMap;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::{Mapping, Scalar, Value, ValueResult};

macro_rules! impl_from_scalar {
    ($variant:ident as $target:ty: $($ty:ty),+) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::Scalar(Scalar::$variant(<$target>::from(v)))
                }
            }
        )+
    };
}

impl_from_scalar!(Int as i64: i8, i16, i32, i64);
impl_from_scalar!(Uint as u64: u8, u16, u32, u64);
impl_from_scalar!(Float as f64: f32, f64);
impl_from_scalar!(Bool as bool: bool);
impl_from_scalar!(Char as char: char);

impl From<isize> for Value {
    fn from(v: isize) -> Self {
        Value::Scalar(Scalar::Int(v as i64))
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::Scalar(Scalar::Uint(v as u64))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Scalar(Scalar::Str(v.to_string()))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Scalar(Scalar::Str(v))
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Scalar(Scalar::Str(v.clone()))
    }
}

impl From<Scalar> for Value {
    fn from(v: Scalar) -> Self {
        Value::Scalar(v)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Absent
    }
}

impl From<&Value> for Value {
    fn from(v: &Value) -> Self {
        v.clone()
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Absent, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::sequence(v)
    }
}

impl<T: Clone + Into<Value>> From<&[T]> for Value {
    fn from(v: &[T]) -> Self {
        Value::sequence(v.iter().cloned())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(v: [T; N]) -> Self {
        Value::sequence(v)
    }
}

impl<K: Into<String>, T: Into<Value>> From<BTreeMap<K, T>> for Value {
    fn from(v: BTreeMap<K, T>) -> Self {
        Value::mapping(v)
    }
}

impl<K: Into<String>, T: Into<Value>> From<IndexMap<K, T>> for Value {
    fn from(v: IndexMap<K, T>) -> Self {
        Value::mapping(v)
    }
}

/// Keys are sorted so that enumeration, and therefore the first reported
/// divergence, does not depend on hash order.
impl<K: Into<String>, T: Into<Value>, S> From<HashMap<K, T, S>> for Value {
    fn from(v: HashMap<K, T, S>) -> Self {
        let mut entries: Vec<(String, Value)> =
            v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Value::Mapping(entries.into_iter().collect())
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Absent,
            serde_json::Value::Bool(b) => b.into(),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    i.into()
                } else if let Some(u) = n.as_u64() {
                    u.into()
                } else {
                    // serde_json numbers are always representable as f64
                    n.as_f64().map_or(Value::Absent, Into::into)
                }
            }
            serde_json::Value::String(s) => s.into(),
            serde_json::Value::Array(items) => Value::sequence(items),
            serde_json::Value::Object(map) => Value::Mapping(
                map.into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect::<Mapping>(),
            ),
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(v: &serde_json::Value) -> Self {
        v.clone().into()
    }
}

impl Value {
    /// Convert any serializable type into a value
    ///
    /// Structs and maps become mappings that keep the order the serializer
    /// emits (declaration order for structs), sequences and tuples become
    /// sequences, and `None`/unit become [`Value::Absent`].
    pub fn from_serialize<T: Serialize + ?Sized>(v: &T) -> ValueResult<Self> {
        let json = serde_json::to_value(v)?;
        Ok(json.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Kind;
    use proptest::prelude::*;
    use serde::Serialize;
    use serde_json::json;

    #[test]
    fn test_integer_widths_collapse() {
        assert_eq!(Value::from(5i8), Value::from(5i64));
        assert_eq!(Value::from(5u16), Value::from(5usize));
        assert_eq!(Value::from(1.5f32), Value::from(1.5f64));
    }

    #[test]
    fn test_option_and_unit_are_absent() {
        let none: Option<&str> = None;
        assert!(Value::from(none).is_absent());
        assert!(Value::from(()).is_absent());
        assert_eq!(Value::from(Some(3)), Value::from(3));
    }

    #[test]
    fn test_collections() {
        let v = Value::from([1, 2, 3]);
        assert_eq!(v, Value::from(vec![1, 2, 3]));
        assert_eq!(v, Value::from(&[1, 2, 3][..]));

        let mut btree = BTreeMap::new();
        btree.insert("z", 1);
        btree.insert("a", 2);
        assert_eq!(Value::from(btree).to_string(), "{\"a\": 2, \"z\": 1}");
    }

    #[test]
    fn test_hashmap_keys_sorted() {
        let mut map = HashMap::new();
        for key in ["delta", "alpha", "charlie", "bravo"] {
            map.insert(key.to_string(), key.len());
        }
        let v = Value::from(map);
        let keys: Vec<&str> = v
            .as_mapping()
            .map(|m| m.keys().map(String::as_str).collect())
            .unwrap_or_default();
        assert_eq!(keys, vec!["alpha", "bravo", "charlie", "delta"]);
    }

    #[test]
    fn test_from_json() {
        let v = Value::from(json!({"a": [1, null, "x"], "b": 2.5, "c": true}));
        assert_eq!(
            v,
            Value::mapping([
                ("a", Value::sequence([Value::from(1), Value::Absent, Value::from("x")])),
                ("b", Value::from(2.5)),
                ("c", Value::from(true)),
            ])
        );
        assert_eq!(Value::from(json!(u64::MAX)).kind(), Kind::Uint);
        assert!(Value::from(json!(null)).is_absent());
    }

    #[derive(Serialize)]
    struct Light {
        name: String,
        brightness: Option<u8>,
        tags: Vec<&'static str>,
    }

    #[test]
    fn test_from_serialize_struct() {
        let light = Light {
            name: "kitchen".to_string(),
            brightness: None,
            tags: vec!["ceiling"],
        };
        let v = Value::from_serialize(&light).unwrap();
        assert_eq!(
            v,
            Value::mapping([
                ("name", Value::from("kitchen")),
                ("brightness", Value::Absent),
                ("tags", Value::from(vec!["ceiling"])),
            ])
        );
    }

    #[derive(Serialize)]
    struct Reading {
        zone: u8,
        area: u8,
        mode: &'static str,
    }

    #[test]
    fn test_from_serialize_keeps_field_order() {
        let v = Value::from_serialize(&Reading {
            zone: 1,
            area: 2,
            mode: "auto",
        })
        .unwrap();
        let keys: Vec<&str> = v
            .as_mapping()
            .map(|m| m.keys().map(String::as_str).collect())
            .unwrap_or_default();
        assert_eq!(keys, vec!["zone", "area", "mode"]);
        assert_eq!(v.to_string(), "{\"zone\": 1, \"area\": 2, \"mode\": \"auto\"}");
    }

    #[test]
    fn test_from_json_keeps_key_order() {
        let v = Value::from(json!({"z": 1, "a": 2}));
        assert_eq!(v.to_string(), "{\"z\": 1, \"a\": 2}");
    }

    #[test]
    fn test_from_serialize_rejects_non_string_keys() {
        let mut map = HashMap::new();
        map.insert(vec![1u8], 1);
        assert!(Value::from_serialize(&map).is_err());
    }

    proptest! {
        #[test]
        fn prop_int_displays_decimal(i in any::<i64>()) {
            prop_assert_eq!(Value::from(i).to_string(), i.to_string());
        }

        #[test]
        fn prop_string_roundtrips_through_json(s in ".*") {
            prop_assert_eq!(Value::from(json!(s.clone())), Value::from(s));
        }
    }
}
