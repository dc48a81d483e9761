use log::debug;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToastLength {
    Short,
    Long,
}

impl ToastLength {
    pub fn duration(self) -> Duration {
        match self {
            ToastLength::Short => Duration::from_millis(2000),
            ToastLength::Long => Duration::from_millis(3500),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub text: String,
    pub shown_at: Instant,
    pub length: ToastLength,
}

impl Toast {
    fn expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.length.duration()
    }
}

/// Transient notifications, oldest first. Expired entries are pruned on every query.
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Mutex<Vec<Toast>>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&self, text: &str, length: ToastLength) {
        self.show_at(text, length, Instant::now());
    }

    pub fn show_at(&self, text: &str, length: ToastLength, now: Instant) {
        debug!("toast ({:?}): {}", length, text);
        self.lock().push(Toast {
            text: text.to_owned(),
            shown_at: now,
            length,
        });
    }

    pub fn visible(&self) -> Vec<String> {
        self.visible_at(Instant::now())
    }

    pub fn visible_at(&self, now: Instant) -> Vec<String> {
        let mut toasts = self.lock();
        toasts.retain(|t| !t.expired(now));
        toasts.iter().map(|t| t.text.clone()).collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Toast>> {
        self.toasts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
