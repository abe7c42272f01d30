/*
[INPUT]:  Success/error messages from record operations, clock ticks
[OUTPUT]: Single toast slot with replacement, dismissal, and expiry
[POS]:    Notification layer shared by the wizard, list, and delete flows
[UPDATE]: When toast kinds or lifetime rules change
*/

use std::time::{Duration, Instant};

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(5000);

pub const MSG_CREATED: &str = "Customer created successfully!";
pub const MSG_UPDATED: &str = "Customer updated successfully!";
pub const MSG_CREATE_FAILED: &str = "Failed to create customer. Please try again.";
pub const MSG_UPDATE_FAILED: &str = "Failed to update customer. Please try again.";
pub const MSG_DELETED: &str = "Customer deleted successfully";
pub const MSG_DELETE_FAILED: &str = "Failed to delete customer. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug)]
struct ActiveToast {
    toast: Toast,
    expires_at: Instant,
}

/// Holds at most one toast; a newer toast replaces the current one.
#[derive(Debug)]
pub struct Notifier {
    ttl: Duration,
    active: Option<ActiveToast>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(DEFAULT_TOAST_DURATION)
    }
}

impl Notifier {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, active: None }
    }

    pub fn show(&mut self, toast: Toast, now: Instant) {
        self.active = Some(ActiveToast {
            toast,
            expires_at: now + self.ttl,
        });
    }

    pub fn dismiss(&mut self) {
        self.active = None;
    }

    /// Drop the toast once its lifetime has passed. Returns true if one expired.
    pub fn expire(&mut self, now: Instant) -> bool {
        match &self.active {
            Some(active) if now >= active.expires_at => {
                self.active = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.active.as_ref().map(|active| &active.toast)
    }
}
