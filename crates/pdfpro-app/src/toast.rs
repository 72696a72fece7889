//! # Toast
//!
//! A single transient notification slot. The last request wins; there is no
//! queue.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Toast severity
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
}

impl ToastKind {
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✗",
            Self::Info => "ℹ",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identity of one `show` call, used to ignore stale auto-dismiss timers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

/// A visible toast
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
}

impl Toast {
    /// Check if this toast reports a failure
    pub fn is_error(&self) -> bool {
        matches!(self.kind, ToastKind::Error)
    }
}

/// Either nothing or the one visible toast
pub type ToastState = Option<Toast>;

/// Owner of the toast slot
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastController {
    current: ToastState,
    next_id: u64,
}

impl ToastController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `message`, replacing whatever is visible.
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;

        if let Some(previous) = &self.current {
            tracing::debug!(replaced = ?previous.id, "toast replaced");
        }
        let message = message.into();
        tracing::debug!(%kind, %message, "toast shown");

        self.current = Some(Toast { id, message, kind });
        id
    }

    /// Clear the slot. Returns whether a toast was visible.
    pub fn dismiss(&mut self) -> bool {
        self.current.take().is_some()
    }

    /// Clear the slot only if `id` is still the visible toast.
    pub fn expire(&mut self, id: ToastId) -> bool {
        if self.current.as_ref().is_some_and(|toast| toast.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_show_wins() {
        let mut toasts = ToastController::new();
        toasts.show("first", ToastKind::Success);
        toasts.show("second", ToastKind::Error);

        let toast = toasts.current().unwrap();
        assert_eq!(toast.message, "second");
        assert_eq!(toast.kind, ToastKind::Error);
        assert!(toast.is_error());
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut toasts = ToastController::new();
        assert!(!toasts.dismiss());

        toasts.show("saved", ToastKind::Info);
        assert!(toasts.dismiss());
        assert!(!toasts.dismiss());
        assert!(!toasts.is_visible());
    }

    #[test]
    fn test_stale_expiry_ignored() {
        let mut toasts = ToastController::new();
        let old = toasts.show("converting", ToastKind::Info);
        let new = toasts.show("done", ToastKind::Success);
        assert_ne!(old, new);

        assert!(!toasts.expire(old));
        assert_eq!(toasts.current().map(|t| t.message.as_str()), Some("done"));

        assert!(toasts.expire(new));
        assert!(toasts.current().is_none());
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(ToastKind::Success.to_string(), "success");
        assert_eq!(ToastKind::default(), ToastKind::Info);
        assert_eq!(ToastKind::Error.icon(), "✗");
    }
}
