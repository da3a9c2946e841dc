//! Diagnostics describing where and how two values diverge

use deepeq_core::{Kind, Value, NIL};
use std::fmt;

use crate::comparator::DEFAULT_MAX_DEPTH;

/// One step of an accessor path into a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Mapping key, printed as `["key"]`
    Key(String),
    /// Sequence index, printed as `[idx]`
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(key) => write!(f, "[{:?}]", key),
            PathSegment::Index(idx) => write!(f, "[{}]", idx),
        }
    }
}

/// Broad class of a divergence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Absence,
    Shape,
    Length,
    Missing,
    Extra,
    Value,
    Depth,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Absence => write!(f, "ABSENCE"),
            Category::Shape => write!(f, "SHAPE"),
            Category::Length => write!(f, "LENGTH"),
            Category::Missing => write!(f, "MISSING"),
            Category::Extra => write!(f, "EXTRA"),
            Category::Value => write!(f, "VALUE"),
            Category::Depth => write!(f, "DEPTH"),
        }
    }
}

/// Printed form of one side of a divergence
///
/// Holds the rendered text and shape tag instead of the value itself, so a
/// diagnostic stays small however large the compared values are. Nesting
/// below the comparator's depth limit is elided as `[...]` / `{...}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Excerpt {
    text: String,
    kind: Kind,
}

impl Excerpt {
    /// Render `value`, showing at most `max_depth` levels of nesting
    pub fn of(value: &Value, max_depth: usize) -> Self {
        Self {
            text: value.display_depth(max_depth).to_string(),
            kind: value.kind(),
        }
    }

    /// Shape tag of the rendered value
    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    fn absent() -> Self {
        Self {
            text: NIL.to_string(),
            kind: Kind::Absent,
        }
    }
}

impl From<&Value> for Excerpt {
    fn from(value: &Value) -> Self {
        Self::of(value, DEFAULT_MAX_DEPTH)
    }
}

impl From<Value> for Excerpt {
    fn from(value: Value) -> Self {
        Self::from(&value)
    }
}

impl fmt::Display for Excerpt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// What went wrong at the end of a diagnostic's path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Divergence {
    /// Expected nil, got something
    ExpectedAbsent { actual: Excerpt },
    /// Expected something, got nil
    ActualAbsent { expected: Excerpt },
    /// The two values have different runtime shapes
    ShapeMismatch { expected: Excerpt, actual: Excerpt },
    /// Sequences of different lengths
    LengthMismatch { expected: usize, actual: usize },
    /// Key present in the expected mapping only
    MissingKey { expected: Excerpt },
    /// Key present in the actual mapping only
    UnexpectedKey { actual: Excerpt },
    /// Same shape, different contents
    ValueMismatch { expected: Excerpt, actual: Excerpt },
    /// Nesting went past the configured limit
    DepthExceeded { limit: usize },
}

impl Divergence {
    pub fn category(&self) -> Category {
        match self {
            Divergence::ExpectedAbsent { .. } | Divergence::ActualAbsent { .. } => {
                Category::Absence
            }
            Divergence::ShapeMismatch { .. } => Category::Shape,
            Divergence::LengthMismatch { .. } => Category::Length,
            Divergence::MissingKey { .. } => Category::Missing,
            Divergence::UnexpectedKey { .. } => Category::Extra,
            Divergence::ValueMismatch { .. } => Category::Value,
            Divergence::DepthExceeded { .. } => Category::Depth,
        }
    }
}

impl fmt::Display for Divergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Divergence::ExpectedAbsent { actual } => {
                write!(f, "expected: {}, actual: {}", Excerpt::absent(), actual)
            }
            Divergence::ActualAbsent { expected } => {
                write!(f, "expected: {}, actual: {}", expected, Excerpt::absent())
            }
            Divergence::ShapeMismatch { expected, actual } => write!(
                f,
                "expected: {} (type {}), actual: {} (type {})",
                expected,
                expected.kind(),
                actual,
                actual.kind()
            ),
            Divergence::LengthMismatch { expected, actual } => write!(
                f,
                "slice/array lengths don't match - expected: {}, actual: {}",
                expected, actual
            ),
            Divergence::MissingKey { expected } => {
                write!(f, "- expected: {}, actual: <notfound>", expected)
            }
            Divergence::UnexpectedKey { actual } => {
                write!(f, "shouldn't exist, actual: {}", actual)
            }
            Divergence::ValueMismatch { expected, actual } => {
                write!(f, "expected: {}, actual: {}", expected, actual)
            }
            Divergence::DepthExceeded { limit } => {
                write!(f, "maximum comparison depth of {} exceeded", limit)
            }
        }
    }
}

/// The first divergence found between two values
///
/// Printed as each path segment followed by a space, then the divergence:
/// `["a"] [2] expected: 1, actual: 3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    path: Vec<PathSegment>,
    divergence: Divergence,
}

impl Diagnostic {
    /// A divergence at the root of the compared values
    pub fn new(divergence: Divergence) -> Self {
        Self {
            path: Vec::new(),
            divergence,
        }
    }

    /// A divergence directly below the root
    pub fn at(segment: PathSegment, divergence: Divergence) -> Self {
        Self {
            path: vec![segment],
            divergence,
        }
    }

    /// Prepend a segment to the path
    pub fn within(mut self, segment: PathSegment) -> Self {
        self.path.insert(0, segment);
        self
    }

    pub fn path(&self) -> &[PathSegment] {
        &self.path
    }

    pub fn divergence(&self) -> &Divergence {
        &self.divergence
    }

    pub fn category(&self) -> Category {
        self.divergence.category()
    }

    /// Compact accessor for the path, e.g. `["x"][1]`
    pub fn path_string(&self) -> String {
        self.path.iter().map(ToString::to_string).collect()
    }

    /// Whether the values differ at the root, with no path
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.path {
            write!(f, "{} ", segment)?;
        }
        write!(f, "{}", self.divergence)
    }
}
