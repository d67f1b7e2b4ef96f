//! Transient status line
//!
//! A posted message stays visible until its delay runs out. Time is passed in
//! explicitly so callers decide what "now" means.

use std::time::{Duration, Instant};

/// Delay before a posted message clears
pub const DEFAULT_STATUS_TIMEOUT: Duration = Duration::from_secs(4);

/// A single line of status text that clears itself
#[derive(Clone, Debug)]
pub struct StatusLine {
    text: Option<String>,
    /// `None` while a message is shown means it never clears
    expires_at: Option<Instant>,
    timeout: Duration,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self::new(DEFAULT_STATUS_TIMEOUT)
    }
}

impl StatusLine {
    pub fn new(timeout: Duration) -> Self {
        Self {
            text: None,
            expires_at: None,
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Show a message, restarting the delay
    ///
    /// A delay too long to represent keeps the message until the next post.
    pub fn post(&mut self, text: impl Into<String>, now: Instant) {
        self.text = Some(text.into());
        self.expires_at = now.checked_add(self.timeout);
    }

    /// Message visible at `now`, if any
    pub fn current(&self, now: Instant) -> Option<&str> {
        match self.expires_at {
            Some(expiry) if now >= expiry => None,
            _ => self.text.as_deref(),
        }
    }

    /// Drop the message immediately
    pub fn clear(&mut self) {
        self.text = None;
        self.expires_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_by_default() {
        let status = StatusLine::default();
        assert_eq!(status.current(Instant::now()), None);
        assert_eq!(status.timeout(), Duration::from_secs(4));
    }

    #[test]
    fn test_message_expires() {
        let start = Instant::now();
        let mut status = StatusLine::default();
        status.post("hello", start);

        assert_eq!(status.current(start), Some("hello"));
        assert_eq!(status.current(start + Duration::from_millis(3999)), Some("hello"));
        assert_eq!(status.current(start + Duration::from_secs(4)), None);
    }

    #[test]
    fn test_new_post_restarts_delay() {
        let start = Instant::now();
        let mut status = StatusLine::new(Duration::from_secs(2));
        status.post("first", start);
        status.post("second", start + Duration::from_secs(1));

        let later = start + Duration::from_millis(2500);
        assert_eq!(status.current(later), Some("second"));
        assert_eq!(status.current(start + Duration::from_secs(3)), None);
    }

    #[test]
    fn test_unbounded_timeout_never_clears() {
        let start = Instant::now();
        let mut status = StatusLine::new(Duration::MAX);
        status.post("sticky", start);

        assert_eq!(status.current(start + Duration::from_secs(86_400)), Some("sticky"));
        status.post("replaced", start);
        assert_eq!(status.current(start), Some("replaced"));
    }

    #[test]
    fn test_clear() {
        let now = Instant::now();
        let mut status = StatusLine::default();
        status.post("gone", now);
        status.clear();
        assert_eq!(status.current(now), None);
    }
}
