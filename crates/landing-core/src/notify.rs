//! Bookkeeping for transient toast notifications.
//!
//! The queue only tracks identity and order; the frontend owns the elements
//! and timers and asks the queue which ones to drop.

use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
}

impl Severity {
    pub fn background(self) -> &'static str {
        match self {
            Severity::Success => "#10b981",
            Severity::Error => "#ef4444",
            Severity::Info => "#6366f1",
        }
    }

    /// Inline style for a freshly inserted toast.
    pub fn css_text(self) -> String {
        format!(
            "position: fixed; top: 100px; right: 20px; background: {}; color: white; \
             padding: 1rem 2rem; border-radius: 0.5rem; box-shadow: var(--shadow-lg); \
             z-index: 10000; animation: slideInRight 0.3s ease; max-width: 300px; \
             word-wrap: break-word;",
            self.background()
        )
    }
}

/// Animation applied when a toast starts leaving.
pub const EXIT_ANIMATION: &str = "slideOutRight 0.3s ease forwards";

pub type NotificationId = u64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub severity: Severity,
}

/// Result of [`NotificationQueue::push`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pushed {
    pub id: NotificationId,
    /// Oldest entries pushed out to stay under the cap, oldest first.
    pub evicted: Vec<NotificationId>,
}

#[derive(Debug)]
pub struct NotificationQueue {
    cap: usize,
    next_id: NotificationId,
    live: VecDeque<Notification>,
}

impl NotificationQueue {
    pub fn new(cap: usize) -> Self {
        Self {
            cap: cap.max(1),
            next_id: 1,
            live: VecDeque::new(),
        }
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    pub fn contains(&self, id: NotificationId) -> bool {
        self.live.iter().any(|n| n.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.live.iter()
    }

    pub fn push(&mut self, message: impl Into<String>, severity: Severity) -> Pushed {
        let id = self.next_id;
        self.next_id += 1;
        let mut evicted = Vec::new();
        while self.live.len() >= self.cap {
            if let Some(old) = self.live.pop_front() {
                evicted.push(old.id);
            }
        }
        self.live.push_back(Notification {
            id,
            message: message.into(),
            severity,
        });
        Pushed { id, evicted }
    }

    /// Forget a notification; `None` if it already expired or was evicted.
    pub fn remove(&mut self, id: NotificationId) -> Option<Notification> {
        let pos = self.live.iter().position(|n| n.id == id)?;
        self.live.remove(pos)
    }
}
