//! Notifier implementations.

use crate::infrastructure::ports::Notifier;

/// Reports errors through the tracing pipeline.
///
/// Stands in for the UI toast channel in headless runs; a UI shell would
/// install its own [`Notifier`] that surfaces the message to the user.
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TracingNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for TracingNotifier {
    fn notify_error(&self, message: &str) {
        tracing::warn!("{message}");
    }
}
