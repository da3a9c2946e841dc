//! Value type representing a dynamically shaped datum

use indexmap::IndexMap;
use std::fmt;

use crate::{Kind, NIL};

/// String-keyed mapping of values
///
/// Enumeration follows insertion order; equality ignores order.
pub type Mapping = IndexMap<String, Value>;

/// A comparable primitive
#[derive(Debug, Clone)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Char(char),
    Str(String),
}

impl Scalar {
    /// Get the shape tag of this scalar
    pub fn kind(&self) -> Kind {
        match self {
            Scalar::Bool(_) => Kind::Bool,
            Scalar::Int(_) => Kind::Int,
            Scalar::Uint(_) => Kind::Uint,
            Scalar::Float(_) => Kind::Float,
            Scalar::Char(_) => Kind::Char,
            Scalar::Str(_) => Kind::String,
        }
    }
}

/// Exact equality. Two NaNs are equal so every value equals itself.
impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Scalar::Bool(a), Scalar::Bool(b)) => a == b,
            (Scalar::Int(a), Scalar::Int(b)) => a == b,
            (Scalar::Uint(a), Scalar::Uint(b)) => a == b,
            (Scalar::Float(a), Scalar::Float(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Scalar::Char(a), Scalar::Char(b)) => a == b,
            (Scalar::Str(a), Scalar::Str(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Uint(u) => write!(f, "{}", u),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::Char(c) => write!(f, "{:?}", c),
            Scalar::Str(s) => write!(f, "{:?}", s),
        }
    }
}

/// A dynamically shaped value: absent, scalar, sequence or mapping
///
/// `None`, `()` and JSON `null` all convert to [`Value::Absent`]; there is no
/// separate notion of a nil container.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Absent,
    Scalar(Scalar),
    Sequence(Vec<Value>),
    Mapping(Mapping),
}

impl Value {
    /// Build a sequence from anything that yields convertible items
    pub fn sequence<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Build a mapping from key/value pairs, keeping their order
    pub fn mapping<I, K, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
        T: Into<Value>,
    {
        Value::Mapping(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Classify the runtime shape of this value
    pub fn kind(&self) -> Kind {
        match self {
            Value::Absent => Kind::Absent,
            Value::Scalar(s) => s.kind(),
            Value::Sequence(_) => Kind::Sequence,
            Value::Mapping(_) => Kind::Mapping,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Absent)
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Value::Scalar(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }
}

impl Value {
    /// Display form that stops descending after `max_depth` containers
    ///
    /// Non-empty containers below the cut print as `[...]` or `{...}`, so the
    /// rendered text stays bounded for arbitrarily deep values.
    pub fn display_depth(&self, max_depth: usize) -> Truncated<'_> {
        Truncated {
            value: self,
            remaining: max_depth,
        }
    }
}

/// Depth-limited display of a [`Value`], see [`Value::display_depth`]
#[derive(Debug, Clone, Copy)]
pub struct Truncated<'a> {
    value: &'a Value,
    remaining: usize,
}

impl Truncated<'_> {
    fn child<'v>(&self, value: &'v Value) -> Truncated<'v> {
        Truncated {
            value,
            remaining: self.remaining - 1,
        }
    }
}

impl fmt::Display for Truncated<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Value::Absent => f.write_str(NIL),
            Value::Scalar(s) => write!(f, "{}", s),
            Value::Sequence(items) if items.is_empty() => f.write_str("[]"),
            Value::Mapping(map) if map.is_empty() => f.write_str("{}"),
            Value::Sequence(_) if self.remaining == 0 => f.write_str("[...]"),
            Value::Mapping(_) if self.remaining == 0 => f.write_str("{...}"),
            Value::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", self.child(item))?;
                }
                f.write_str("]")
            }
            Value::Mapping(map) => {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{:?}: {}", key, self.child(value))?;
                }
                f.write_str("}")
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_depth(usize::MAX))
    }
}
