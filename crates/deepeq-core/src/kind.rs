//! Runtime shape tags

use std::fmt;

/// The runtime shape of a [`Value`](crate::Value)
///
/// Scalars carry their primitive kind, so an integer and a string are
/// different shapes even when they print the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Absent,
    Bool,
    Int,
    Uint,
    Float,
    Char,
    String,
    Sequence,
    Mapping,
}

impl Kind {
    /// Type name used in diagnostics
    pub fn name(self) -> &'static str {
        match self {
            Kind::Absent => "nil",
            Kind::Bool => "bool",
            Kind::Int => "int",
            Kind::Uint => "uint",
            Kind::Float => "float",
            Kind::Char => "char",
            Kind::String => "string",
            Kind::Sequence => "sequence",
            Kind::Mapping => "mapping",
        }
    }

    /// Whether values of this kind hold nested values
    pub fn is_container(self) -> bool {
        matches!(self, Kind::Sequence | Kind::Mapping)
    }

    /// Whether values of this kind are primitives
    pub fn is_scalar(self) -> bool {
        !self.is_container() && self != Kind::Absent
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
