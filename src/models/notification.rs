//! Toast notification types.

/// Severity of a notification, used for styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

impl NotificationKind {
    /// Short label shown before the message.
    pub fn label(self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Success",
            Self::Error => "Error",
        }
    }
}

/// A single queued notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    /// Unique id for keying and dismissal
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}
