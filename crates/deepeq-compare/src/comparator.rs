//! The recursive equality check

use deepeq_core::{Mapping, Value};
use tracing::{debug, trace};

use crate::diagnostic::{Diagnostic, Divergence, Excerpt, PathSegment};

/// Default limit on how many containers deep a comparison may descend
///
/// Low enough that a full-depth comparison fits on a 2 MiB test thread in an
/// unoptimized build.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Options for comparing values
#[derive(Debug, Clone)]
pub struct CompareOptions {
    /// Containers nested deeper than this are reported instead of compared,
    /// and elided from printed values
    pub max_depth: usize,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CompareOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Compares values and reports the first divergence
#[derive(Debug, Clone, Default)]
pub struct Comparator {
    options: CompareOptions,
}

/// Compare two values with default options
///
/// Returns `None` when they are equal.
pub fn compare(expected: &Value, actual: &Value) -> Option<Diagnostic> {
    Comparator::new().compare(expected, actual)
}

impl Comparator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CompareOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CompareOptions {
        &self.options
    }

    /// Compare `actual` against `expected`
    ///
    /// Returns `None` when they are equal, otherwise a diagnostic for the
    /// first divergence found.
    pub fn compare(&self, expected: &Value, actual: &Value) -> Option<Diagnostic> {
        let diagnostic = self.equals(expected, actual, 0);
        if let Some(diagnostic) = &diagnostic {
            debug!(
                path = %diagnostic.path_string(),
                category = %diagnostic.category(),
                "Values differ"
            );
        }
        diagnostic
    }

    fn equals(&self, expected: &Value, actual: &Value, depth: usize) -> Option<Diagnostic> {
        match (expected, actual) {
            (Value::Absent, Value::Absent) => return None,
            (Value::Absent, _) => {
                return Some(Diagnostic::new(Divergence::ExpectedAbsent {
                    actual: self.excerpt(actual),
                }))
            }
            (_, Value::Absent) => {
                return Some(Diagnostic::new(Divergence::ActualAbsent {
                    expected: self.excerpt(expected),
                }))
            }
            _ => {}
        }

        if expected.kind() != actual.kind() {
            return Some(Diagnostic::new(Divergence::ShapeMismatch {
                expected: self.excerpt(expected),
                actual: self.excerpt(actual),
            }));
        }

        match (expected, actual) {
            (Value::Mapping(e), Value::Mapping(a)) => self.mapping_equals(e, a, depth),
            (Value::Sequence(e), Value::Sequence(a)) => self.sequence_equals(e, a, depth),
            _ if expected != actual => Some(Diagnostic::new(Divergence::ValueMismatch {
                expected: self.excerpt(expected),
                actual: self.excerpt(actual),
            })),
            _ => None,
        }
    }

    fn mapping_equals(
        &self,
        expected: &Mapping,
        actual: &Mapping,
        depth: usize,
    ) -> Option<Diagnostic> {
        if let Some(exceeded) = self.check_depth(depth) {
            return Some(exceeded);
        }
        trace_container("mapping", depth, expected.len());

        // Every expected key must be present with an equal value
        for (key, e_value) in expected {
            match actual.get(key) {
                Some(a_value) => {
                    if let Some(nested) = self.equals(e_value, a_value, depth + 1) {
                        return Some(nested.within(PathSegment::Key(key.clone())));
                    }
                }
                None => {
                    return Some(Diagnostic::at(
                        PathSegment::Key(key.clone()),
                        Divergence::MissingKey {
                            expected: self.excerpt(e_value),
                        },
                    ));
                }
            }
        }

        // No key may appear only on the actual side
        actual
            .iter()
            .find(|(key, _)| !expected.contains_key(*key))
            .map(|(key, a_value)| {
                Diagnostic::at(
                    PathSegment::Key(key.clone()),
                    Divergence::UnexpectedKey {
                        actual: self.excerpt(a_value),
                    },
                )
            })
    }

    fn sequence_equals(
        &self,
        expected: &[Value],
        actual: &[Value],
        depth: usize,
    ) -> Option<Diagnostic> {
        if expected.len() != actual.len() {
            return Some(Diagnostic::new(Divergence::LengthMismatch {
                expected: expected.len(),
                actual: actual.len(),
            }));
        }
        if let Some(exceeded) = self.check_depth(depth) {
            return Some(exceeded);
        }
        trace_container("sequence", depth, expected.len());

        for (idx, (e_elem, a_elem)) in expected.iter().zip(actual).enumerate() {
            let segment = PathSegment::Index(idx);
            match (e_elem.is_absent(), a_elem.is_absent()) {
                (true, false) => {
                    return Some(Diagnostic::at(
                        segment,
                        Divergence::ExpectedAbsent {
                            actual: self.excerpt(a_elem),
                        },
                    ));
                }
                (false, true) => {
                    return Some(Diagnostic::at(
                        segment,
                        Divergence::ActualAbsent {
                            expected: self.excerpt(e_elem),
                        },
                    ));
                }
                _ => {}
            }

            // Element divergences are reported with the whole elements rather
            // than the nested path; only the depth guard keeps its path.
            if let Some(nested) = self.equals(e_elem, a_elem, depth + 1) {
                if let Divergence::DepthExceeded { .. } = nested.divergence() {
                    return Some(nested.within(segment));
                }
                return Some(Diagnostic::at(
                    segment,
                    Divergence::ValueMismatch {
                        expected: self.excerpt(e_elem),
                        actual: self.excerpt(a_elem),
                    },
                ));
            }
        }

        None
    }

    fn excerpt(&self, value: &Value) -> Excerpt {
        Excerpt::of(value, self.options.max_depth)
    }

    fn check_depth(&self, depth: usize) -> Option<Diagnostic> {
        if depth >= self.options.max_depth {
            debug!(depth, limit = self.options.max_depth, "Comparison depth exceeded");
            return Some(Diagnostic::new(Divergence::DepthExceeded {
                limit: self.options.max_depth,
            }));
        }
        None
    }
}

// Kept out of line so the event's locals are not part of every recursive frame
#[inline(never)]
fn trace_container(shape: &'static str, depth: usize, len: usize) {
    trace!(shape, depth, len, "Comparing container");
}
