//! Toast-style outcome feedback. Calls are fire-and-forget: a failing
//! notifier is logged and never undoes the change it reports.

use std::sync::Mutex;

use crate::error::NotifyError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn show(&self, message: &str, severity: Severity) -> Result<(), NotifyError>;
}

/// Shows `message` and swallows notifier failures after logging them.
pub fn notify(notifier: &dyn Notifier, message: &str, severity: Severity) {
    if let Err(err) = notifier.show(message, severity) {
        tracing::warn!(error = %err, severity = severity.as_str(), "Notifier failed; continuing");
    }
}

/// Keeps every message in memory, in order.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<(String, Severity)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(String, Severity)> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<(String, Severity)> {
        self.messages().pop()
    }
}

impl Notifier for RecordingNotifier {
    fn show(&self, message: &str, severity: Severity) -> Result<(), NotifyError> {
        let mut messages = self
            .messages
            .lock()
            .map_err(|_| NotifyError::new("notification log poisoned"))?;
        messages.push((message.to_string(), severity));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_notifier_keeps_order() {
        let notifier = RecordingNotifier::new();
        notify(&notifier, "first", Severity::Info);
        notify(&notifier, "second", Severity::Error);
        assert_eq!(
            notifier.messages(),
            vec![
                ("first".to_string(), Severity::Info),
                ("second".to_string(), Severity::Error)
            ]
        );
        assert_eq!(notifier.last().unwrap().0, "second");
    }

    #[test]
    fn notify_swallows_failures() {
        let mut mock = MockNotifier::new();
        mock.expect_show()
            .times(1)
            .returning(|_, _| Err(NotifyError::new("toast host gone")));
        notify(&mock, "anything", Severity::Success);
    }
}
