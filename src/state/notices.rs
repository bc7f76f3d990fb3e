//! User-visible notices: the blocking error queue and the success banner

use std::collections::VecDeque;

/// Blocking notices shown one at a time as a modal dialog
#[derive(Debug, Clone, Default)]
pub struct NoticeQueue {
    queue: VecDeque<String>,
}

impl NoticeQueue {
    pub fn push(&mut self, message: impl Into<String>) {
        self.queue.push_back(message.into());
    }

    pub fn has_notices(&self) -> bool {
        !self.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Notice currently on screen
    pub fn current(&self) -> Option<&str> {
        self.queue.front().map(String::as_str)
    }

    pub fn dismiss(&mut self) {
        self.queue.pop_front();
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Success banner under the contact form, hidden again by a timer
#[derive(Debug, Clone, Default)]
pub struct SuccessNotice {
    visible: bool,
    /// Bumped on every show so only the latest hide timer takes effect
    generation: u64,
}

impl SuccessNotice {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show the banner. Returns the generation the hide timer must carry.
    pub fn show(&mut self) -> u64 {
        self.visible = true;
        self.generation += 1;
        self.generation
    }

    /// Hide the banner if `generation` is still the latest show
    pub fn hide(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.visible = false;
        true
    }
}
