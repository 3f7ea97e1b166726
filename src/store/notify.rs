//! Notification and Confirmation Seams
//!
//! The store owns every outcome and reports it through these traits; what
//! renders them (snackbar, terminal, test recorder) is the caller's
//! business. Confirmation is async because no UI toolkit can be assumed to
//! block the way the web `confirm` dialog does.

use async_trait::async_trait;

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

/// Fire-and-forget surface for user-facing notices.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, message: &str, severity: Severity);
}

/// Yes/no gate consulted before a delete goes out.
#[async_trait]
pub trait ConfirmationGate: Send + Sync {
    async fn confirm(&self, prompt: &str) -> bool;
}

/// Sink that forwards notices to the log facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl NotificationSink for LogSink {
    fn notify(&self, message: &str, severity: Severity) {
        match severity {
            Severity::Success => log::info!("{message}"),
            Severity::Warning => log::warn!("{message}"),
            Severity::Error => log::error!("{message}"),
        }
    }
}

/// Gate that waves every delete through. Headless tooling only; an
/// interactive caller should ask the user.
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

#[async_trait]
impl ConfirmationGate for AutoConfirm {
    async fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}
