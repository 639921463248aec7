//! Diagnostic channel for recognized API misuse.
//!
//! The library never writes to a global logger on its own. Callers choose a
//! [`DiagnosticSink`] through [`Options`](crate::Options); the default is
//! [`NoopSink`].

use std::backtrace::Backtrace;

/// Emitted when a string is passed where a structured date is expected.
pub const STRING_ARGUMENT_WARNING: &str = "string arguments are not accepted as dates; \
     parse the string with an ISO 8601 parser and pass the resulting date instead";

/// A single warning raised by a function call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Public function that received the offending argument.
    pub function: &'static str,
    pub message: &'static str,
}

impl Diagnostic {
    pub(crate) fn string_argument(function: &'static str) -> Self {
        Diagnostic {
            function,
            message: STRING_ARGUMENT_WARNING,
        }
    }
}

/// Receiver for diagnostics.
pub trait DiagnosticSink: Send + Sync {
    fn warn(&self, diagnostic: &Diagnostic);
}

/// Discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn warn(&self, _diagnostic: &Diagnostic) {}
}

/// Forwards diagnostics to the [`log`] facade at `warn` level, with the call
/// stack at `debug` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn warn(&self, diagnostic: &Diagnostic) {
        log::warn!("{}: {}", diagnostic.function, diagnostic.message);
        if log::log_enabled!(log::Level::Debug) {
            log::debug!("{}", Backtrace::force_capture());
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Records diagnostics so tests can count them.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSink {
        seen: Mutex<Vec<Diagnostic>>,
    }

    impl RecordingSink {
        pub(crate) fn shared() -> Arc<Self> {
            Arc::new(Self::default())
        }

        pub(crate) fn seen(&self) -> Vec<Diagnostic> {
            self.seen.lock().unwrap().clone()
        }
    }

    impl DiagnosticSink for RecordingSink {
        fn warn(&self, diagnostic: &Diagnostic) {
            self.seen.lock().unwrap().push(diagnostic.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingSink;
    use super::*;

    #[test]
    fn test_string_argument_diagnostic() {
        let diagnostic = Diagnostic::string_argument("add_days");
        assert_eq!(diagnostic.function, "add_days");
        assert_eq!(diagnostic.message, STRING_ARGUMENT_WARNING);
    }

    #[test]
    fn test_sinks_as_trait_objects() {
        let recording = RecordingSink::shared();
        let sinks: [&dyn DiagnosticSink; 3] = [&NoopSink, &LogSink, recording.as_ref()];
        for sink in sinks {
            sink.warn(&Diagnostic::string_argument("is_weekend"));
        }
        assert_eq!(recording.seen().len(), 1);
    }
}
