//! Deep-equality comparison with path-qualified diagnostics
//!
//! [`compare`] walks two [`Value`]s and returns `None` when they are equal, or
//! a [`Diagnostic`] describing the first divergence it finds:
//!
//! ```text
//! ["x"] [1] expected: 2, actual: 9
//! └─┬──────┘ └──────────┬──────────┘
//!   path           divergence
//! ```
//!
//! The algorithm checks, in order: absence, shape, then mapping keys,
//! sequence lengths and elements, and finally scalar equality. Only the first
//! divergence at each level is reported.

mod comparator;
mod diagnostic;

pub use comparator::{compare, CompareOptions, Comparator, DEFAULT_MAX_DEPTH};
pub use diagnostic::{Category, Diagnostic, Divergence, Excerpt, PathSegment};

pub use deepeq_core::{Kind, Value};
