//! Failure signals for assertions
//!
//! A [`Reporter`] is the test framework side of an assertion: it records that
//! the running test failed and keeps going. [`SoftReporter`] is the reporter
//! for plain `#[test]` functions.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use tracing::{error, warn};

/// Summary entry for a failure reported without a message
pub const UNNAMED_FAILURE: &str = "assertion failed";

/// Receives assertion failures
///
/// Neither method may stop the caller: a failed assertion marks the test as
/// failed and lets the rest of the test body run.
pub trait Reporter {
    /// Record a failure message and mark the test failed
    fn errorf(&self, args: fmt::Arguments<'_>);

    /// Mark the test failed without a message
    fn fail(&self);
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn errorf(&self, args: fmt::Arguments<'_>) {
        (**self).errorf(args)
    }

    fn fail(&self) {
        (**self).fail()
    }
}

impl<R: Reporter + ?Sized> Reporter for Arc<R> {
    fn errorf(&self, args: fmt::Arguments<'_>) {
        (**self).errorf(args)
    }

    fn fail(&self) {
        (**self).fail()
    }
}

/// Collects failures and fails the test once, when it is dropped
///
/// Every failure is recorded (and logged) as it happens. When the reporter
/// goes out of scope at the end of the test, it panics with all recorded
/// messages if anything failed. Dropping it while already unwinding does
/// nothing, so a panic elsewhere in the test is not turned into an abort.
#[derive(Debug)]
pub struct SoftReporter {
    failures: Mutex<Vec<String>>,
    log_failures: bool,
}

impl Default for SoftReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SoftReporter {
    pub fn new() -> Self {
        Self {
            failures: Mutex::new(Vec::new()),
            log_failures: true,
        }
    }

    /// Whether each failure is also emitted as a `tracing` event
    pub fn log_failures(mut self, enabled: bool) -> Self {
        self.log_failures = enabled;
        self
    }

    /// Whether any assertion has failed so far
    pub fn failed(&self) -> bool {
        !self.lock_failures().is_empty()
    }

    /// Messages recorded so far, in order
    ///
    /// A failure without a message is recorded as [`UNNAMED_FAILURE`].
    pub fn failures(&self) -> Vec<String> {
        self.lock_failures().clone()
    }

    /// End the test now instead of at the end of scope
    ///
    /// Panics if any assertion failed.
    pub fn finish(self) {
        drop(self)
    }

    /// Summary of everything that failed, if anything did
    pub fn summary(&self) -> Option<String> {
        let failures = self.lock_failures();
        if failures.is_empty() {
            return None;
        }

        let mut summary = format!("{} assertion(s) failed:", failures.len());
        for (i, message) in failures.iter().enumerate() {
            summary.push_str(&format!("\n  {}. {}", i + 1, message));
        }
        Some(summary)
    }

    fn lock_failures(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.failures.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Reporter for SoftReporter {
    fn errorf(&self, args: fmt::Arguments<'_>) {
        let message = args.to_string();
        if self.log_failures {
            error!(failure = %message, "Assertion failed");
        }
        self.lock_failures().push(message);
    }

    fn fail(&self) {
        if self.log_failures {
            warn!("Assertion failed");
        }
        self.lock_failures().push(UNNAMED_FAILURE.to_string());
    }
}

impl Drop for SoftReporter {
    fn drop(&mut self) {
        if thread::panicking() {
            return;
        }
        if let Some(summary) = self.summary() {
            panic!("{}", summary);
        }
    }
}
