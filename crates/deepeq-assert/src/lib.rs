//! Soft test assertions with deep-equality diagnostics
//!
//! This crate wraps the [`deepeq_compare`] comparator in assertion methods
//! that report failures without stopping the test:
//!
//! - [`Assert::equals`] / [`Assert::equalsf`] - deep equality with a
//!   path-qualified diagnostic on the first divergence
//! - [`Assert::is_true`] / [`Assert::is_nil`] - simple checks
//! - [`Assert::errorf`] / [`Assert::fail`] - direct failure reporting
//!
//! # Example
//!
//! ```should_panic
//! use serde_json::json;
//!
//! let a = deepeq_assert::soft();
//! a.equals(json!({"x": [1, 2, 3]}), json!({"x": [1, 9, 3]}));
//! a.is_true(1 + 1 == 2);
//! // Dropping `a` fails the test with:
//! //   ["x"] [1] expected: 2, actual: 9
//! ```

mod assert;
mod config;
mod error;
mod logging;
mod reporter;

pub use assert::{soft, Assert};
pub use config::{AssertConfig, ENV_LOG_FAILURES, ENV_MAX_DEPTH};
pub use error::{ConfigError, ConfigResult};
pub use logging::init_test_logging;
pub use reporter::{Reporter, SoftReporter, UNNAMED_FAILURE};

// Re-export the comparator surface for convenience
pub use deepeq_compare::{
    compare, Comparator, CompareOptions, Diagnostic, Divergence, Excerpt, PathSegment,
};
pub use deepeq_core::{Kind, Value};
