use std::time::{Duration, Instant};

/// Every notice stays on screen this long.
pub const NOTICE_DURATION: Duration = Duration::from_millis(3000);

pub const SIGN_UP_SOON: &str = "Sign up feature coming soon!";
pub const SIGN_IN_SOON: &str = "Sign in feature coming soon!";
pub const GENERATE_FAILED: &str = "Failed to generate songlist. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

/// A transient message for the user 🔔
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
    pub duration: Duration,
}

impl Notice {
    pub fn info(message: &str) -> Self {
        Self {
            severity: Severity::Info,
            message: message.to_string(),
            duration: NOTICE_DURATION,
        }
    }

    pub fn error(message: &str) -> Self {
        Self {
            severity: Severity::Error,
            message: message.to_string(),
            duration: NOTICE_DURATION,
        }
    }
}

/// Anything that can put a notice in front of the user.
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// On-screen form of a notice.
#[derive(Debug, Clone)]
pub struct Toast {
    pub notice: Notice,
    pub start_time: Instant,
    pub deadline: Instant,
}

impl Toast {
    pub fn new(notice: Notice, now: Instant) -> Self {
        let deadline = now + notice.duration;
        Self {
            notice,
            start_time: now,
            deadline,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.deadline
    }

    /// Swap in a newer notice. The deadline restarts, start_time is kept so the
    /// slide-in animation doesn't replay.
    pub fn replace(&mut self, notice: Notice, now: Instant) {
        self.deadline = now + notice.duration;
        self.notice = notice;
    }
}

/// Single toast slot; a new notice replaces the visible one.
#[derive(Debug, Default)]
pub struct ToastSlot {
    current: Option<Toast>,
}

impl ToastSlot {
    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn show(&mut self, notice: Notice, now: Instant) {
        match self.current {
            Some(ref mut toast) => toast.replace(notice, now),
            None => self.current = Some(Toast::new(notice, now)),
        }
    }

    /// Drops the toast once its deadline has passed.
    pub fn expire(&mut self, now: Instant) {
        if self.current.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.current = None;
        }
    }
}

impl Notifier for ToastSlot {
    fn notify(&mut self, notice: Notice) {
        tracing::debug!(severity = ?notice.severity, message = %notice.message, "notice");
        self.show(notice, Instant::now());
    }
}
