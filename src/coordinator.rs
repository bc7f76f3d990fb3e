//! Page navigation and interaction coordinator
//!
//! Owns every piece of interaction state for the site and the scheduler that
//! sequences it. The terminal shell feeds it intents (navigate, scroll, resize,
//! edit, submit) and calls [`Coordinator::tick`] once per frame with the time
//! elapsed since the previous frame. Timers fire inside `tick`, followed by the
//! frame callbacks queued for that frame.

use crate::config::Settings;
use crate::state::{
    observe, ContactForm, ContactSubmission, HeaderState, MobileMenu, NavLink, NavigationState,
    NoticeQueue, Page, PendingTransition, Scheduler, SmoothScroll, SubmissionState,
    SuccessNotice, TimerId, TransitionOutcome, Viewport, HOME_PAGE,
};
use crate::submission::SubmissionError;
use std::time::Duration;

/// Blocking notice shown when a submission fails
pub const SUBMISSION_FAILED_MESSAGE: &str =
    "Sorry, there was an error sending your message. Please try again.";

/// Work queued on the scheduler
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// Show the target page once the exit transition has run
    CompleteSwitch(PendingTransition),
    /// Reveal one fade element of a page
    Reveal {
        page: String,
        index: usize,
        generation: u64,
    },
    HideSuccessNotice {
        generation: u64,
    },
    /// A resize burst went quiet
    ResizeSettled {
        width: u16,
    },
    /// Frame callback: recompute the header style
    UpdateHeader,
    /// Frame callback: reveal elements inside the viewport
    Observe,
    /// Frame callback: advance the smooth scroll
    ScrollStep,
}

/// The site's interaction coordinator
#[derive(Debug)]
pub struct Coordinator {
    settings: Settings,
    scheduler: Scheduler<Task>,
    pub navigation: NavigationState,
    pub menu: MobileMenu,
    pub header: HeaderState,
    pub form: ContactForm,
    pub notices: NoticeQueue,
    pub success: SuccessNotice,
    scroll: u16,
    smooth_scroll: Option<SmoothScroll>,
    viewport_width: u16,
    viewport_height: u16,
    resize_timer: Option<TimerId>,
    observe_pending: bool,
    loaded: bool,
}

impl Coordinator {
    /// Build the coordinator with the home page active and animating
    pub fn new(settings: Settings, pages: Vec<Page>, links: Vec<NavLink>) -> Self {
        let navigation = NavigationState::new(pages, links, HOME_PAGE);
        let mut coordinator = Self {
            settings,
            scheduler: Scheduler::new(),
            navigation,
            menu: MobileMenu::default(),
            header: HeaderState::default(),
            form: ContactForm::new(),
            notices: NoticeQueue::default(),
            success: SuccessNotice::default(),
            scroll: 0,
            smooth_scroll: None,
            viewport_width: 80,
            viewport_height: 24,
            resize_timer: None,
            observe_pending: false,
            loaded: false,
        };

        let current = coordinator.navigation.current().to_string();
        coordinator.animate(&current);
        coordinator.request_observe();
        tracing::info!("Coordinator initialized on page '{current}'");
        coordinator
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll
    }

    pub fn viewport_width(&self) -> u16 {
        self.viewport_width
    }

    /// Whether the nav links are collapsed into the mobile menu
    pub fn is_narrow(&self) -> bool {
        self.viewport_width <= self.settings.menu_breakpoint
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Everything has been drawn once
    pub fn on_load(&mut self) {
        if !self.loaded {
            self.loaded = true;
            tracing::info!("Portfolio loaded");
        }
    }

    /// Whether timers or frame work are pending (drives the frame rate)
    pub fn is_animating(&self) -> bool {
        self.scheduler.is_busy() || self.smooth_scroll.is_some()
    }

    // --- Navigation ---

    /// Hide the current page and schedule showing `page_key`
    pub fn switch_to(&mut self, page_key: &str) {
        let pending = self.navigation.begin_switch(page_key);
        tracing::debug!(
            "Switching from '{}' to '{}' (generation {})",
            pending.previous,
            pending.target,
            pending.generation
        );
        self.smooth_scroll = None;
        self.scheduler
            .schedule(self.settings.transition_delay, Task::CompleteSwitch(pending));
    }

    /// Highlight the nav link for `page_key`
    pub fn set_active_nav(&mut self, page_key: &str) {
        self.navigation.set_active_nav(page_key);
    }

    /// Nav link click: switch, highlight and close the menu
    pub fn navigate(&mut self, page_key: &str) {
        self.switch_to(page_key);
        self.set_active_nav(page_key);
        self.close_menu();
    }

    /// Call-to-action click: switch and highlight, leaving the menu alone
    pub fn follow_cta(&mut self, page_key: &str) {
        self.switch_to(page_key);
        self.set_active_nav(page_key);
    }

    /// Navigate to the link after (or before) the highlighted one
    pub fn cycle_nav(&mut self, forward: bool) {
        let count = self.navigation.links().len();
        if count == 0 {
            return;
        }
        let current = self.navigation.active_link_index().unwrap_or(0);
        let next = if forward {
            (current + 1) % count
        } else {
            (current + count - 1) % count
        };
        let target = self.navigation.links()[next].target.clone();
        self.navigate(&target);
    }

    fn complete_switch(&mut self, pending: PendingTransition) {
        match self.navigation.complete_switch(&pending) {
            TransitionOutcome::Activated(key) => {
                debug_assert_eq!(self.navigation.active_count(), 1);
                tracing::debug!("Page '{key}' active");
                self.set_scroll(self.scroll.min(self.max_scroll()));
                self.animate(&key);
                self.request_observe();
            }
            TransitionOutcome::Restored(key) => {
                tracing::warn!(
                    "Page '{}' does not exist, restoring '{key}'",
                    pending.target
                );
                self.request_observe();
            }
            TransitionOutcome::Stale => {
                tracing::debug!(
                    "Dropping superseded switch to '{}' (generation {})",
                    pending.target,
                    pending.generation
                );
            }
        }
    }

    // --- Animation ---

    /// Hide every fade element of the page, then reveal them one by one
    pub fn animate(&mut self, page_key: &str) {
        let stagger = self.settings.stagger;
        let Some(page) = self.navigation.page_mut(page_key) else {
            return;
        };

        page.animation_generation += 1;
        let generation = page.animation_generation;
        for element in &mut page.elements {
            element.visible = false;
        }

        for index in 0..page.elements.len() {
            self.scheduler.schedule(
                stagger * index as u32,
                Task::Reveal {
                    page: page_key.to_string(),
                    index,
                    generation,
                },
            );
        }
    }

    fn reveal(&mut self, page_key: &str, index: usize, generation: u64) {
        let Some(page) = self.navigation.page_mut(page_key) else {
            return;
        };
        if page.animation_generation != generation {
            return;
        }
        if let Some(element) = page.elements.get_mut(index) {
            element.visible = true;
        }
    }

    fn request_observe(&mut self) {
        if !self.observe_pending {
            self.observe_pending = true;
            self.scheduler.request_frame(Task::Observe);
        }
    }

    /// Visible window over the active page
    pub fn viewport(&self) -> Viewport {
        Viewport {
            top: self.scroll,
            height: self.viewport_height,
            bottom_margin: self.settings.reveal_margin,
        }
    }

    fn run_observer(&mut self) {
        self.observe_pending = false;
        let viewport = self.viewport();
        if let Some(page) = self.navigation.active_page_mut() {
            let revealed = observe(&mut page.elements, &viewport);
            if revealed > 0 {
                tracing::debug!("Observer revealed {revealed} element(s) on '{}'", page.key);
            }
        }
    }

    // --- Mobile menu ---

    pub fn toggle_menu(&mut self) {
        self.menu.toggle();
        if self.menu.is_open() {
            self.menu.selected = self.navigation.active_link_index().unwrap_or(0);
        }
    }

    pub fn close_menu(&mut self) {
        self.menu.close();
    }

    /// Escape key: close the menu if it is open. Returns whether it closed.
    pub fn on_escape(&mut self) -> bool {
        if self.menu.is_open() {
            self.close_menu();
            return true;
        }
        false
    }

    /// Follow the link under the menu cursor
    pub fn activate_menu_selection(&mut self) {
        let Some(link) = self.navigation.links().get(self.menu.selected) else {
            return;
        };
        let target = link.target.clone();
        self.navigate(&target);
    }

    // --- Viewport ---

    /// Terminal resized. The menu check waits for the burst to settle.
    pub fn on_resize(&mut self, width: u16, height: u16) {
        self.viewport_width = width;
        self.viewport_height = height;
        self.set_scroll(self.scroll.min(self.max_scroll()));
        self.request_observe();

        // Restart the debounce window
        if let Some(timer) = self.resize_timer.take() {
            self.scheduler.cancel(timer);
        }
        self.resize_timer = Some(
            self.scheduler
                .schedule(self.settings.resize_debounce, Task::ResizeSettled { width }),
        );
        tracing::trace!(
            "Resize to {width}x{height}, {} timer(s) pending",
            self.scheduler.pending_timers()
        );
    }

    fn resize_settled(&mut self, width: u16) {
        self.resize_timer = None;
        if width > self.settings.menu_breakpoint && self.menu.is_open() {
            tracing::debug!("Wide viewport ({width} cols), closing menu");
            self.close_menu();
        }
    }

    /// Largest scroll offset for the active page
    pub fn max_scroll(&self) -> u16 {
        self.navigation
            .active_page()
            .map(|p| p.content_height().saturating_sub(self.viewport_height))
            .unwrap_or(0)
    }

    /// Scroll to `offset`, notifying the header and the observer
    pub fn on_scroll(&mut self, offset: u16) {
        self.smooth_scroll = None;
        self.set_scroll(offset);
    }

    /// Scroll by a relative amount of rows
    pub fn scroll_by(&mut self, delta: i32) {
        let offset = (self.scroll as i32 + delta).clamp(0, u16::MAX as i32) as u16;
        self.on_scroll(offset);
    }

    fn set_scroll(&mut self, offset: u16) {
        let offset = offset.min(self.max_scroll());
        if offset == self.scroll {
            return;
        }
        self.scroll = offset;
        if self.header.on_scroll(offset) {
            self.scheduler.request_frame(Task::UpdateHeader);
        }
        self.request_observe();
    }

    /// Ease the scroll offset towards a content row
    pub fn smooth_scroll_to(&mut self, row: u16) {
        let target = row
            .saturating_sub(self.settings.header_height)
            .min(self.max_scroll());
        let scroll = SmoothScroll::new(
            self.scroll,
            target,
            self.now(),
            self.settings.smooth_scroll,
        );
        tracing::debug!("Smooth scroll from row {} to {}", self.scroll, scroll.target());
        self.smooth_scroll = Some(scroll);
        self.scheduler.request_frame(Task::ScrollStep);
    }

    pub fn scroll_to_top(&mut self) {
        self.smooth_scroll_to(0);
    }

    pub fn scroll_to_bottom(&mut self) {
        let bottom = self.max_scroll() + self.settings.header_height;
        self.smooth_scroll_to(bottom);
    }

    /// Jump to the next section below the current scroll offset
    pub fn next_section(&mut self) {
        let anchor = self.scroll + self.settings.header_height;
        let next = self
            .navigation
            .active_page()
            .and_then(|p| p.elements.iter().find(|e| e.offset > anchor))
            .map(|e| e.offset);
        if let Some(row) = next {
            self.smooth_scroll_to(row);
        }
    }

    /// Jump to the previous section above the current scroll offset
    pub fn prev_section(&mut self) {
        let anchor = self.scroll + self.settings.header_height;
        let prev = self
            .navigation
            .active_page()
            .and_then(|p| p.elements.iter().rev().find(|e| e.offset < anchor))
            .map(|e| e.offset);
        if let Some(row) = prev {
            self.smooth_scroll_to(row);
        }
    }

    fn step_smooth_scroll(&mut self) {
        let Some(scroll) = self.smooth_scroll.clone() else {
            return;
        };
        let now = self.now();
        self.set_scroll(scroll.position(now));
        if scroll.is_finished(now) {
            self.smooth_scroll = None;
        } else {
            self.scheduler.request_frame(Task::ScrollStep);
        }
    }

    // --- Contact form ---

    /// Validate and enter the submitting state. Returns the values to send,
    /// or `None` when a field is invalid or a submission is in flight.
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if self.form.is_submitting() {
            tracing::debug!("Submission already in flight");
            return None;
        }
        if !self.form.validate_all() {
            tracing::debug!("Contact form has invalid fields, not submitting");
            return None;
        }

        self.form.state = SubmissionState::Submitting;
        self.form.set_loading(true);
        let submission = self.form.to_submission();
        tracing::info!("Submitting contact form {}", submission.id);
        Some(submission)
    }

    /// Apply the collaborator's answer and leave the submitting state
    pub fn finish_submit(&mut self, result: Result<(), SubmissionError>) {
        if !self.form.is_submitting() {
            tracing::warn!("Submission result arrived with nothing in flight");
            return;
        }

        match result {
            Ok(()) => {
                tracing::info!("Contact form submitted");
                self.form.state = SubmissionState::Succeeded;
                let generation = self.success.show();
                self.scheduler.schedule(
                    self.settings.success_notice,
                    Task::HideSuccessNotice { generation },
                );
                self.form.reset();
            }
            Err(err) => {
                tracing::error!("Form submission error: {err}");
                self.form.state = SubmissionState::Failed;
                self.notices.push(SUBMISSION_FAILED_MESSAGE);
            }
        }

        self.form.set_loading(false);
    }

    // --- Scheduling ---

    /// Advance virtual time by `elapsed`, firing due timers, then run one frame
    pub fn tick(&mut self, elapsed: Duration) {
        let until = self.now() + elapsed;
        while let Some(task) = self.scheduler.pop_due(until) {
            self.run(task);
        }
        self.scheduler.settle(until);

        for task in self.scheduler.take_frame() {
            self.run(task);
        }
    }

    fn run(&mut self, task: Task) {
        match task {
            Task::CompleteSwitch(pending) => self.complete_switch(pending),
            Task::Reveal {
                page,
                index,
                generation,
            } => self.reveal(&page, index, generation),
            Task::HideSuccessNotice { generation } => {
                if self.success.hide(generation) {
                    tracing::debug!("Success notice hidden");
                }
            }
            Task::ResizeSettled { width } => self.resize_settled(width),
            Task::UpdateHeader => {
                self.header.on_frame(self.settings.header_threshold);
                tracing::trace!(
                    "Header now {:?} ({} recomputations)",
                    self.header.style(),
                    self.header.recomputations()
                );
            }
            Task::Observe => self.run_observer(),
            Task::ScrollStep => self.step_smooth_scroll(),
        }
    }
}
