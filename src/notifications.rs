//! Toast notifications
//!
//! A queue of short-lived messages shown after user actions ("Transactions
//! exported to CSV successfully"). Each store numbers its own toasts, and
//! expiry is checked against a clock the caller passes in.

use std::fmt;
use std::time::{Duration, Instant};

/// How long a toast stays up when no duration is given
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Type of notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastKind {
    /// Get the icon for this notification type
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Success => "✓",
            Self::Error => "✕",
            Self::Warning => "⚠",
            Self::Info => "ℹ",
        }
    }

    /// Get the title for this notification type
    pub fn title(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Info => "Info",
        }
    }
}

/// Identifier of a toast within its store, displayed as `toast-N`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(u64);

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// A toast notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
    /// `None` keeps the toast until it is removed
    pub duration: Option<Duration>,
    pub created_at: Instant,
}

impl Toast {
    /// Check if the toast has outlived its duration at `now`
    pub fn is_expired(&self, now: Instant) -> bool {
        match self.duration {
            Some(duration) => now.saturating_duration_since(self.created_at) >= duration,
            None => false,
        }
    }
}

/// Ordered collection of live toasts
#[derive(Debug, Default)]
pub struct ToastStore {
    toasts: Vec<Toast>,
    last_id: u64,
}

impl ToastStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a toast created at `now`
    ///
    /// `duration` of `None` uses [`DEFAULT_TOAST_DURATION`]; a zero duration
    /// makes the toast sticky.
    pub fn push_at(
        &mut self,
        kind: ToastKind,
        message: impl Into<String>,
        duration: Option<Duration>,
        now: Instant,
    ) -> ToastId {
        self.last_id += 1;
        let id = ToastId(self.last_id);

        let duration = match duration {
            Some(d) if d.is_zero() => None,
            Some(d) => Some(d),
            None => Some(DEFAULT_TOAST_DURATION),
        };

        let message = message.into();
        tracing::debug!(%id, ?kind, %message, "toast added");

        self.toasts.push(Toast {
            id,
            kind,
            message,
            duration,
            created_at: now,
        });
        id
    }

    /// Add a toast created now
    pub fn push(
        &mut self,
        kind: ToastKind,
        message: impl Into<String>,
        duration: Option<Duration>,
    ) -> ToastId {
        self.push_at(kind, message, duration, Instant::now())
    }

    pub fn success(&mut self, message: impl Into<String>) -> ToastId {
        self.push(ToastKind::Success, message, None)
    }

    pub fn error(&mut self, message: impl Into<String>) -> ToastId {
        self.push(ToastKind::Error, message, None)
    }

    /// Remove a toast; returns whether it was present
    pub fn remove(&mut self, id: ToastId) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    /// Drop every toast whose duration has elapsed at `now`
    pub fn expire(&mut self, now: Instant) {
        self.toasts.retain(|t| !t.is_expired(now));
    }

    /// Clear all notifications
    pub fn clear(&mut self) {
        self.toasts.clear();
    }

    /// Live toasts, oldest first
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_increase_per_store() {
        let mut store = ToastStore::new();
        let a = store.success("Saved");
        let b = store.error("Failed");
        assert_eq!(a.to_string(), "toast-1");
        assert_eq!(b.to_string(), "toast-2");

        let mut other = ToastStore::new();
        assert_eq!(other.success("Fresh").to_string(), "toast-1");
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut store = ToastStore::new();
        let first = store.success("one");
        assert!(store.remove(first));
        assert!(!store.remove(first));
        let second = store.success("two");
        assert_ne!(first, second);
    }

    #[test]
    fn test_default_duration_expiry() {
        let start = Instant::now();
        let mut store = ToastStore::new();
        store.push_at(ToastKind::Info, "hello", None, start);

        store.expire(start + Duration::from_millis(2999));
        assert_eq!(store.len(), 1);

        store.expire(start + DEFAULT_TOAST_DURATION);
        assert!(store.is_empty());
    }

    #[test]
    fn test_zero_duration_is_sticky() {
        let start = Instant::now();
        let mut store = ToastStore::new();
        store.push_at(ToastKind::Warning, "stays", Some(Duration::ZERO), start);
        store.push_at(ToastKind::Info, "goes", Some(Duration::from_secs(1)), start);

        store.expire(start + Duration::from_secs(60));
        assert_eq!(store.len(), 1);
        assert_eq!(store.toasts()[0].message, "stays");
    }

    #[test]
    fn test_clear_and_kinds() {
        let mut store = ToastStore::new();
        store.success("a");
        store.error("b");
        store.clear();
        assert!(store.is_empty());

        assert_eq!(ToastKind::Success.icon(), "✓");
        assert_eq!(ToastKind::Error.title(), "Error");
    }
}
