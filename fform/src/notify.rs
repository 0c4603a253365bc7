//! Transient user notifications.
//!
//! A session reports every outcome through a [`NotificationSink`]. The
//! bundled [`ToastCenter`] keeps only the most recent notification and
//! hides it once its time-to-live elapses.
//!
//! ```rust
//! use std::time::{Duration, Instant};
//!
//! use fform::{Notification, ToastCenter};
//!
//! let toasts = ToastCenter::new(Duration::from_secs(3));
//! let now = Instant::now();
//! toasts.notify_at(Notification::success("Form submitted successfully!"), now);
//!
//! assert!(toasts.visible_at(now + Duration::from_secs(1)).is_some());
//! assert!(toasts.visible_at(now + Duration::from_secs(3)).is_none());
//! ```

use std::sync::Mutex;
use std::time::{Duration, Instant};

use serde::Serialize;

pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_millis(3_000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Info, message)
    }
}

pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: &Notification);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotificationSink;

impl NotificationSink for NoopNotificationSink {
    fn notify(&self, _notification: &Notification) {}
}

pub type ToastId = u64;

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub notification: Notification,
    pub ttl: Duration,
    pub created: Instant,
}

impl Toast {
    fn is_visible(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created) < self.ttl
    }
}

/// Rendering-friendly view of the visible toast.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibleToast {
    pub id: ToastId,
    pub kind: NotificationKind,
    pub message: String,
    /// 1.0 when just shown, approaching 0.0 as it expires.
    pub remaining: f32,
}

#[derive(Debug, Default)]
struct ToastState {
    current: Option<Toast>,
    next_id: ToastId,
}

/// Single-slot toast holder. A newer notification replaces the older one.
#[derive(Debug)]
pub struct ToastCenter {
    ttl: Duration,
    state: Mutex<ToastState>,
}

impl Default for ToastCenter {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_TTL)
    }
}

impl ToastCenter {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            state: Mutex::new(ToastState {
                current: None,
                next_id: 1,
            }),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn notify_at(&self, notification: Notification, now: Instant) -> ToastId {
        let mut state = self.state();
        let id = state.next_id;
        state.next_id += 1;
        state.current = Some(Toast {
            id,
            notification,
            ttl: self.ttl,
            created: now,
        });
        id
    }

    pub fn visible_at(&self, now: Instant) -> Option<VisibleToast> {
        let state = self.state();
        let toast = state.current.as_ref().filter(|toast| toast.is_visible(now))?;

        let elapsed = now.saturating_duration_since(toast.created).as_secs_f32();
        let ttl = toast.ttl.as_secs_f32().max(f32::EPSILON);
        Some(VisibleToast {
            id: toast.id,
            kind: toast.notification.kind,
            message: toast.notification.message.clone(),
            remaining: (1.0 - elapsed / ttl).clamp(0.0, 1.0),
        })
    }

    pub fn current(&self) -> Option<VisibleToast> {
        self.visible_at(Instant::now())
    }

    /// Most recent notification regardless of expiry.
    pub fn latest(&self) -> Option<Notification> {
        self.state()
            .current
            .as_ref()
            .map(|toast| toast.notification.clone())
    }

    /// Hides the current toast. Returns whether one was held.
    pub fn dismiss(&self) -> bool {
        self.state().current.take().is_some()
    }

    /// Drops the held toast once it has expired.
    pub fn retain_visible(&self, now: Instant) {
        let mut state = self.state();
        if state
            .current
            .as_ref()
            .is_some_and(|toast| !toast.is_visible(now))
        {
            state.current = None;
        }
    }

    fn state(&self) -> std::sync::MutexGuard<'_, ToastState> {
        // A poisoned slot only ever holds a fully written toast.
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl NotificationSink for ToastCenter {
    fn notify(&self, notification: &Notification) {
        self.notify_at(notification.clone(), Instant::now());
    }
}
