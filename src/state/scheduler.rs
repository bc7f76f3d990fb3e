//! Single-threaded task scheduler with a virtual clock
//!
//! Timers and frame callbacks are plain values queued here and drained by the
//! coordinator. Nothing runs on its own: time only moves when the owner calls
//! [`Scheduler::pop_due`] or [`Scheduler::settle`], which keeps every
//! time-dependent behaviour reproducible in tests.

use std::collections::BTreeMap;
use std::time::Duration;

/// Handle for a scheduled timer, used for cancellation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u64);

/// Timer queue plus a per-frame callback queue
#[derive(Debug)]
pub struct Scheduler<T> {
    /// Current virtual time
    now: Duration,
    /// Sequence number, breaks ties between timers due at the same instant
    next_seq: u64,
    /// Pending timers keyed by (due time, sequence)
    timers: BTreeMap<(Duration, u64), T>,
    /// Callbacks to run on the next frame
    frame: Vec<T>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            timers: BTreeMap::new(),
            frame: Vec::new(),
        }
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `task` to run `delay` after the current time
    pub fn schedule(&mut self, delay: Duration, task: T) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.insert((self.now + delay, seq), task);
        TimerId(seq)
    }

    /// Cancel a pending timer. Returns the task if it had not fired yet.
    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let key = self.timers.keys().find(|(_, seq)| *seq == id.0).copied()?;
        self.timers.remove(&key)
    }

    /// Pop the earliest timer due at or before `until`, moving the clock to
    /// its due time.
    pub fn pop_due(&mut self, until: Duration) -> Option<T> {
        let (&key, _) = self.timers.first_key_value()?;
        if key.0 > until {
            return None;
        }
        let task = self.timers.remove(&key)?;
        self.now = self.now.max(key.0);
        Some(task)
    }

    /// Move the clock forward to `until` once all due timers are drained
    pub fn settle(&mut self, until: Duration) {
        self.now = self.now.max(until);
    }

    /// Queue a callback for the next frame
    pub fn request_frame(&mut self, task: T) {
        self.frame.push(task);
    }

    /// Take every callback queued for this frame
    pub fn take_frame(&mut self) -> Vec<T> {
        std::mem::take(&mut self.frame)
    }

    /// Number of timers still pending
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Whether anything wants to run soon (frame callbacks or timers)
    pub fn is_busy(&self) -> bool {
        !self.frame.is_empty() || !self.timers.is_empty()
    }
}
