//! Diagnostic sink abstraction for the editor core.
//!
//! The editor never logs through a process-wide facade directly; it emits
//! `(level, context, message)` triples to a sink injected at construction.
//! The default [`LogSink`] forwards to the `log` crate (initialized via
//! `env_logger` in `main`), with the context string as the log target.

/// Severity of a diagnostic message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Verbose event tracing.
    Debug,
    /// Normal operational messages.
    Info,
    /// Anomalous but fully recoverable conditions.
    Warning,
    /// Conditions that should never occur in practice.
    Error,
}

/// Receiver for diagnostic messages emitted by the editor.
///
/// Timestamping and formatting are the sink's concern; the editor only
/// supplies a static context string and a free-form message.
pub trait DiagnosticSink {
    /// Records a single diagnostic message.
    fn log(&mut self, level: Level, context: &str, message: &str);

    /// Records a debug-level message.
    fn debug(&mut self, context: &str, message: &str) {
        self.log(Level::Debug, context, message);
    }

    /// Records an info-level message.
    fn info(&mut self, context: &str, message: &str) {
        self.log(Level::Info, context, message);
    }

    /// Records a warning-level message.
    fn warning(&mut self, context: &str, message: &str) {
        self.log(Level::Warning, context, message);
    }

    /// Records an error-level message.
    fn error(&mut self, context: &str, message: &str) {
        self.log(Level::Error, context, message);
    }
}

/// Sink that forwards messages to the `log` facade, using the context as the
/// log target. This is the default sink for the application.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn log(&mut self, level: Level, context: &str, message: &str) {
        let level = match level {
            Level::Debug => log::Level::Debug,
            Level::Info => log::Level::Info,
            Level::Warning => log::Level::Warn,
            Level::Error => log::Level::Error,
        };
        log::log!(target: context, level, "{message}");
    }
}

/// Sink that discards all messages. Useful for headless embedding.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn log(&mut self, _level: Level, _context: &str, _message: &str) {}
}

/// Sink that records every message for later inspection in tests.
///
/// Clones share the same underlying buffer, so a test can keep one handle
/// while handing another to the editor.
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    messages: std::rc::Rc<std::cell::RefCell<Vec<(Level, String, String)>>>,
}

#[cfg(test)]
impl RecordingSink {
    /// Returns a snapshot of all messages received so far, in emission order.
    pub fn messages(&self) -> Vec<(Level, String, String)> {
        self.messages.borrow().clone()
    }

    /// Returns the number of recorded messages at the given level.
    pub fn count_at(&self, level: Level) -> usize {
        self.messages
            .borrow()
            .iter()
            .filter(|(l, _, _)| *l == level)
            .count()
    }
}

#[cfg(test)]
impl DiagnosticSink for RecordingSink {
    fn log(&mut self, level: Level, context: &str, message: &str) {
        self.messages
            .borrow_mut()
            .push((level, context.to_string(), message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_captures_in_order() {
        let mut sink = RecordingSink::default();
        sink.debug("ctx", "first");
        sink.warning("ctx", "second");

        let messages = sink.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0], (Level::Debug, "ctx".into(), "first".into()));
        assert_eq!(messages[1].0, Level::Warning);
        assert_eq!(sink.count_at(Level::Warning), 1);
        assert_eq!(sink.count_at(Level::Error), 0);
    }

    #[test]
    fn test_recording_sink_clones_share_buffer() {
        let sink = RecordingSink::default();
        let mut handle = sink.clone();
        handle.info("ctx", "shared");

        assert_eq!(sink.count_at(Level::Info), 1);
    }

    #[test]
    fn test_null_sink_accepts_all_levels() {
        let mut sink = NullSink;
        sink.debug("ctx", "a");
        sink.info("ctx", "b");
        sink.warning("ctx", "c");
        sink.error("ctx", "d");
    }
}
