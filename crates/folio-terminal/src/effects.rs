//! Host effects and delayed effect scheduling.
//!
//! The terminal never touches the page directly. Navigation, external links
//! and clipboard writes go through [`Host`], and "say something now, act
//! later" sequences go through [`Scheduler`]. [`TimerQueue`] is the
//! scheduler used in production and in tests: time only moves when the
//! owner calls [`TimerQueue::advance`], so a test clock and a real event
//! loop drive it the same way.

use std::time::Duration;

use crate::transcript::EntryKind;

/// Side effects fulfilled by the surrounding UI.
pub trait Host {
    /// Change the displayed route (e.g. `/projects`).
    fn navigate(&mut self, path: &str);

    /// Open a URL outside the routed app.
    fn open_external(&mut self, url: &str);

    /// Write text to the system clipboard. Returns `false` on failure.
    fn copy_to_clipboard(&mut self, text: &str) -> bool;
}

/// A deferred effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Navigate(String),
    Post { kind: EntryKind, text: String },
}

/// Capability to run an effect after a delay. Scheduled effects cannot be
/// cancelled.
pub trait Scheduler {
    fn after(&mut self, delay: Duration, effect: Effect);
}

#[derive(Debug)]
struct Timer {
    due: Duration,
    seq: u64,
    effect: Effect,
}

/// Manually advanced timer queue.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    seq: u64,
    pending: Vec<Timer>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Effects scheduled but not yet fired.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Time until the next timer fires, if any.
    pub fn next_due(&self) -> Option<Duration> {
        self.pending
            .iter()
            .map(|t| t.due.saturating_sub(self.now))
            .min()
    }

    /// Move the clock forward and return every effect that became due, in
    /// firing order (due time, then scheduling order).
    pub fn advance(&mut self, by: Duration) -> Vec<Effect> {
        self.now += by;
        let now = self.now;
        let (mut due, rest): (Vec<Timer>, Vec<Timer>) =
            std::mem::take(&mut self.pending)
                .into_iter()
                .partition(|t| t.due <= now);
        self.pending = rest;
        due.sort_by_key(|t| (t.due, t.seq));
        due.into_iter().map(|t| t.effect).collect()
    }
}

impl Scheduler for TimerQueue {
    fn after(&mut self, delay: Duration, effect: Effect) {
        log::debug!("Scheduled {effect:?} in {}ms", delay.as_millis());
        self.pending.push(Timer {
            due: self.now + delay,
            seq: self.seq,
            effect,
        });
        self.seq += 1;
    }
}

/// Host that records every request. Used by tests and headless front ends.
#[derive(Debug)]
pub struct RecordingHost {
    pub navigations: Vec<String>,
    pub opened: Vec<String>,
    pub clipboard: Option<String>,
    pub clipboard_available: bool,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self {
            navigations: Vec::new(),
            opened: Vec::new(),
            clipboard: None,
            clipboard_available: true,
        }
    }

    /// A host whose clipboard writes always fail.
    pub fn without_clipboard() -> Self {
        Self {
            clipboard_available: false,
            ..Self::new()
        }
    }

    /// The most recent navigation target.
    pub fn route(&self) -> Option<&str> {
        self.navigations.last().map(|s| s.as_str())
    }
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for RecordingHost {
    fn navigate(&mut self, path: &str) {
        self.navigations.push(path.to_string());
    }

    fn open_external(&mut self, url: &str) {
        self.opened.push(url.to_string());
    }

    fn copy_to_clipboard(&mut self, text: &str) -> bool {
        if !self.clipboard_available {
            return false;
        }
        self.clipboard = Some(text.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav(path: &str) -> Effect {
        Effect::Navigate(path.to_string())
    }

    #[test]
    fn nothing_fires_before_due() {
        let mut q = TimerQueue::new();
        q.after(Duration::from_millis(1000), nav("/"));
        assert!(q.advance(Duration::from_millis(999)).is_empty());
        assert_eq!(q.pending(), 1);
        assert_eq!(q.advance(Duration::from_millis(1)), vec![nav("/")]);
        assert_eq!(q.pending(), 0);
    }

    #[test]
    fn fires_in_due_order_not_schedule_order() {
        let mut q = TimerQueue::new();
        q.after(Duration::from_millis(1000), nav("/"));
        q.after(Duration::from_millis(800), nav("/blog"));
        let fired = q.advance(Duration::from_secs(2));
        assert_eq!(fired, vec![nav("/blog"), nav("/")]);
    }

    #[test]
    fn ties_keep_schedule_order() {
        let mut q = TimerQueue::new();
        q.after(Duration::from_millis(5), nav("/a"));
        q.after(Duration::from_millis(5), nav("/b"));
        assert_eq!(q.advance(Duration::from_millis(5)), vec![nav("/a"), nav("/b")]);
    }

    #[test]
    fn delay_is_relative_to_current_clock() {
        let mut q = TimerQueue::new();
        q.advance(Duration::from_millis(500));
        q.after(Duration::from_millis(100), nav("/x"));
        assert_eq!(q.next_due(), Some(Duration::from_millis(100)));
        assert!(q.advance(Duration::from_millis(50)).is_empty());
        assert_eq!(q.next_due(), Some(Duration::from_millis(50)));
        assert_eq!(q.advance(Duration::from_millis(50)).len(), 1);
        assert_eq!(q.next_due(), None);
    }

    #[test]
    fn recording_host_clipboard_failure() {
        let mut host = RecordingHost::without_clipboard();
        assert!(!host.copy_to_clipboard("x"));
        assert!(host.clipboard.is_none());
        let mut host = RecordingHost::new();
        assert!(host.copy_to_clipboard("x"));
        assert_eq!(host.clipboard.as_deref(), Some("x"));
    }
}
