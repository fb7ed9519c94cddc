use std::io::Write;

use hrconsole_core::services::{Notifier, Severity};
use hrconsole_core::NotifyError;

/// Prints outcome messages to stderr so they never mix with table output.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn show(&self, message: &str, severity: Severity) -> Result<(), NotifyError> {
        let mut stderr = std::io::stderr().lock();
        writeln!(stderr, "[{}] {}", severity.as_str(), message)
            .map_err(|e| NotifyError::new(format!("stderr unavailable: {}", e)))
    }
}
