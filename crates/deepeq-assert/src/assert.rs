//! Assertion wrappers over the comparator

use deepeq_compare::Comparator;
use deepeq_core::Value;
use std::fmt;
use tracing::trace;

use crate::config::AssertConfig;
use crate::reporter::{Reporter, SoftReporter};

/// Soft assertions reporting to a [`Reporter`]
///
/// No method panics or returns early on failure; each failure is handed to
/// the reporter and the caller carries on.
pub struct Assert<R: Reporter> {
    reporter: R,
    comparator: Comparator,
}

impl<R: Reporter> Assert<R> {
    /// Create assertions with the default configuration
    pub fn new(reporter: R) -> Self {
        Self::with_config(reporter, &AssertConfig::default())
    }

    /// Create assertions with an explicit configuration
    pub fn with_config(reporter: R, config: &AssertConfig) -> Self {
        Self {
            reporter,
            comparator: Comparator::with_options(config.compare_options()),
        }
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Report a formatted failure
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.reporter.errorf(args);
    }

    /// Mark the test failed
    pub fn fail(&self) {
        self.reporter.fail();
    }

    /// Fail if `v` is false
    pub fn is_true(&self, v: bool) {
        if !v {
            self.fail();
        }
    }

    /// Fail if `v` is not absent
    pub fn is_nil(&self, v: impl Into<Value>) {
        if !v.into().is_absent() {
            self.fail();
        }
    }

    /// Fail with a diagnostic if `actual` differs from `expected`
    pub fn equals(&self, expected: impl Into<Value>, actual: impl Into<Value>) {
        if let Some(diagnostic) = self.comparator.compare(&expected.into(), &actual.into()) {
            self.errorf(format_args!("{}", diagnostic));
        } else {
            trace!("Values equal");
        }
    }

    /// Like [`equals`](Self::equals), prefixing the diagnostic with a message
    pub fn equalsf(
        &self,
        expected: impl Into<Value>,
        actual: impl Into<Value>,
        args: fmt::Arguments<'_>,
    ) {
        if let Some(diagnostic) = self.comparator.compare(&expected.into(), &actual.into()) {
            self.errorf(format_args!("{}: {}", args, diagnostic));
        }
    }
}

/// Assertions for a plain `#[test]`, configured from the environment
impl Default for Assert<SoftReporter> {
    fn default() -> Self {
        let config = AssertConfig::from_env();
        let reporter = SoftReporter::new().log_failures(config.log_failures);
        Self::with_config(reporter, &config)
    }
}

/// Soft assertions for the current test
///
/// Failures are collected and the test panics once, when the returned value
/// is dropped.
pub fn soft() -> Assert<SoftReporter> {
    Assert::default()
}
