//! Application state and terminal event handling

use crate::config::FolioConfig;
use crate::content::{self, CTA_TARGET};
use crate::coordinator::Coordinator;
use crate::state::Form;
use crate::submission::{SimulatedSubmitter, SubmissionClientTrait, SubmissionError};
use crate::ui::layout::{self, HEADER_HEIGHT, STATUS_HEIGHT};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

/// Rows moved per mouse wheel notch
const WHEEL_STEP: i32 = 3;

/// Which part of the screen receives typed keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Page,
    Form,
}

/// Main application struct
pub struct App {
    /// Interaction state for the whole site
    pub coordinator: Coordinator,
    /// Endpoint receiving contact form submissions
    submitter: Arc<dyn SubmissionClientTrait>,
    /// Submission running on a background task
    pending_submission: Option<JoinHandle<Result<(), SubmissionError>>>,
    pub focus: Focus,
    /// Whether the app should quit
    quit: bool,
    /// When the previous frame ran
    last_frame: Instant,
    /// Terminal size (width, height)
    pub terminal_size: (u16, u16),
}

impl App {
    /// Create a new App instance
    pub fn new(config: &FolioConfig) -> Self {
        let submitter =
            SimulatedSubmitter::new(config.submission_delay(), config.simulate_failure());
        Self::with_submitter(config, Arc::new(submitter))
    }

    pub fn with_submitter(config: &FolioConfig, submitter: Arc<dyn SubmissionClientTrait>) -> Self {
        let coordinator = Coordinator::new(
            config.settings(),
            content::build_pages(),
            content::build_nav_links(),
        );

        Self {
            coordinator,
            submitter,
            pending_submission: None,
            focus: Focus::Page,
            quit: false,
            last_frame: Instant::now(),
            terminal_size: (80, 24),
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Poll quickly while something animates, slowly otherwise
    pub fn poll_interval(&self) -> Duration {
        if self.coordinator.is_animating() || self.pending_submission.is_some() {
            Duration::from_millis(16)
        } else {
            Duration::from_millis(100)
        }
    }

    /// Run one frame: advance timers by the wall-clock time since the last one
    pub fn frame(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.coordinator.tick(elapsed);
    }

    /// Terminal resized
    pub fn on_resize(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
        let viewport_height = height.saturating_sub(HEADER_HEIGHT + STATUS_HEIGHT);
        self.coordinator.on_resize(width, viewport_height);
    }

    /// Settle the background submission once it has finished
    pub async fn poll_submission(&mut self) {
        let finished = self
            .pending_submission
            .as_ref()
            .is_some_and(|handle| handle.is_finished());
        if !finished {
            return;
        }

        if let Some(handle) = self.pending_submission.take() {
            let result = match handle.await {
                Ok(result) => result,
                Err(err) => {
                    tracing::error!("Unhandled submission failure: {err}");
                    Err(SubmissionError::Aborted(err.to_string()))
                }
            };
            self.coordinator.finish_submit(result);
        }
    }

    /// Validate the form and hand it to the submitter on a background task
    fn start_submission(&mut self) {
        if self.pending_submission.is_some() {
            return;
        }
        let Some(submission) = self.coordinator.begin_submit() else {
            return;
        };

        let submitter = Arc::clone(&self.submitter);
        self.pending_submission = Some(tokio::spawn(async move {
            submitter.submit(submission).await
        }));
    }

    fn on_contact_page(&self) -> bool {
        self.coordinator.navigation.current() == CTA_TARGET
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Blocking notice first (modal)
        if self.coordinator.notices.has_notices() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.coordinator.notices.dismiss();
            }
            return Ok(());
        }

        if key.code == KeyCode::Esc {
            if self.coordinator.on_escape() {
                return Ok(());
            }
            if self.focus == Focus::Form {
                self.coordinator.form.get_active_field_mut().blur();
                self.focus = Focus::Page;
            }
            return Ok(());
        }

        if self.coordinator.menu.is_open() {
            self.handle_menu_key(key);
            return Ok(());
        }

        match self.focus {
            Focus::Page => self.handle_page_key(key),
            Focus::Form => self.handle_form_key(key),
        }
        Ok(())
    }

    /// Keys while the mobile menu is open
    fn handle_menu_key(&mut self, key: KeyEvent) {
        let link_count = self.coordinator.navigation.links().len();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.coordinator.menu.select_prev(link_count),
            KeyCode::Down | KeyCode::Char('j') => self.coordinator.menu.select_next(link_count),
            KeyCode::Enter => self.coordinator.activate_menu_selection(),
            KeyCode::Char('m') => self.coordinator.toggle_menu(),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Keys while browsing a page
    fn handle_page_key(&mut self, key: KeyEvent) {
        let page_rows = self.coordinator.viewport().height.max(1) as i32;

        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('m') => self.coordinator.toggle_menu(),
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => self.coordinator.cycle_nav(true),
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                self.coordinator.cycle_nav(false)
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(link) = self.coordinator.navigation.links().get(index) {
                    let target = link.target.clone();
                    self.coordinator.navigate(&target);
                }
            }
            KeyCode::Down | KeyCode::Char('j') => self.coordinator.scroll_by(1),
            KeyCode::Up | KeyCode::Char('k') => self.coordinator.scroll_by(-1),
            KeyCode::PageDown | KeyCode::Char(' ') => self.coordinator.scroll_by(page_rows),
            KeyCode::PageUp => self.coordinator.scroll_by(-page_rows),
            KeyCode::Home | KeyCode::Char('g') => self.coordinator.scroll_to_top(),
            KeyCode::End | KeyCode::Char('G') => self.coordinator.scroll_to_bottom(),
            KeyCode::Char(']') => self.coordinator.next_section(),
            KeyCode::Char('[') => self.coordinator.prev_section(),
            KeyCode::Enter | KeyCode::Char('i') if self.on_contact_page() => {
                self.focus = Focus::Form;
            }
            KeyCode::Enter if self.coordinator.navigation.current() == "home" => {
                self.coordinator.follow_cta(CTA_TARGET);
            }
            _ => {}
        }
    }

    /// Keys while editing the contact form
    fn handle_form_key(&mut self, key: KeyEvent) {
        if !self.on_contact_page() {
            self.focus = Focus::Page;
            return;
        }

        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.start_submission();
            return;
        }

        let form = &mut self.coordinator.form;
        match key.code {
            KeyCode::Tab | KeyCode::Down => form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
            KeyCode::Enter => {
                if form.get_active_field_mut().is_multiline {
                    form.get_active_field_mut().push_char('\n');
                } else {
                    form.focus_next();
                }
            }
            KeyCode::Backspace => form.get_active_field_mut().pop_char(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.get_active_field_mut().push_char(c);
            }
            _ => {}
        }
    }

    /// Handle a mouse event
    pub async fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.coordinator.notices.has_notices() {
            return Ok(());
        }

        match mouse.kind {
            MouseEventKind::ScrollDown => self.coordinator.scroll_by(WHEEL_STEP),
            MouseEventKind::ScrollUp => self.coordinator.scroll_by(-WHEEL_STEP),
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(mouse.column, mouse.row),
            _ => {}
        }
        Ok(())
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        let width = self.terminal_size.0;

        if self.coordinator.menu.is_open() {
            let labels = self.nav_labels();
            if let Some(index) = layout::menu_item_at(&labels, width, column, row) {
                self.coordinator.menu.selected = index;
                self.coordinator.activate_menu_selection();
                return;
            }
        }

        if row >= HEADER_HEIGHT {
            return;
        }

        if self.coordinator.is_narrow() {
            if layout::menu_icon_hit(width, column) {
                self.coordinator.toggle_menu();
            }
            return;
        }

        let labels = self.nav_labels();
        if let Some(index) = layout::nav_link_at(&labels, width, column) {
            let target = self.coordinator.navigation.links()[index].target.clone();
            self.coordinator.navigate(&target);
        }
    }

    fn nav_labels(&self) -> Vec<String> {
        self.coordinator
            .navigation
            .links()
            .iter()
            .map(|l| l.label.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submission::MockSubmissionClientTrait;

    fn app_with(mock: MockSubmissionClientTrait) -> App {
        let mut app = App::with_submitter(&FolioConfig::default(), Arc::new(mock));
        app.on_resize(120, 40);
        app.coordinator.tick(Duration::from_secs(1));
        app
    }

    fn app() -> App {
        app_with(MockSubmissionClientTrait::new())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    async fn go_to_contact(app: &mut App) {
        app.handle_key(key(KeyCode::Char('5'))).await.unwrap();
        app.coordinator.tick(Duration::from_millis(150));
        assert_eq!(app.coordinator.navigation.current(), "contact");
    }

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
    }

    mod page_keys {
        use super::*;

        #[tokio::test]
        async fn test_should_quit_initially_false() {
            let app = app();
            assert!(!app.should_quit());
        }

        #[tokio::test]
        async fn test_q_quits() {
            let mut app = app();
            app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
            assert!(app.should_quit());
        }

        #[tokio::test]
        async fn test_number_keys_navigate() {
            let mut app = app();
            app.handle_key(key(KeyCode::Char('2'))).await.unwrap();
            app.coordinator.tick(Duration::from_millis(150));
            assert_eq!(app.coordinator.navigation.current(), "about");
        }

        #[tokio::test]
        async fn test_enter_on_home_follows_cta() {
            let mut app = app();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            app.coordinator.tick(Duration::from_millis(150));
            assert_eq!(app.coordinator.navigation.current(), CTA_TARGET);
        }

        #[tokio::test]
        async fn test_escape_closes_menu() {
            let mut app = app();
            app.handle_key(key(KeyCode::Char('m'))).await.unwrap();
            assert!(app.coordinator.menu.is_open());
            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert!(!app.coordinator.menu.is_open());
        }

        #[tokio::test]
        async fn test_menu_swallows_page_keys() {
            let mut app = app();
            app.handle_key(key(KeyCode::Char('m'))).await.unwrap();
            app.handle_key(key(KeyCode::Char('j'))).await.unwrap();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(!app.coordinator.menu.is_open());
            app.coordinator.tick(Duration::from_millis(150));
            assert_eq!(app.coordinator.navigation.current(), "about");
        }

        #[tokio::test]
        async fn test_notice_is_modal() {
            let mut app = app();
            app.coordinator.notices.push("boom");
            app.handle_key(key(KeyCode::Char('q'))).await.unwrap();
            assert!(!app.should_quit());
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(!app.coordinator.notices.has_notices());
        }
    }

    mod form_keys {
        use super::*;

        #[tokio::test]
        async fn test_enter_on_contact_focuses_form() {
            let mut app = app();
            go_to_contact(&mut app).await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.focus, Focus::Form);
        }

        #[tokio::test]
        async fn test_typing_edits_active_field() {
            let mut app = app();
            go_to_contact(&mut app).await;
            app.handle_key(key(KeyCode::Char('i'))).await.unwrap();
            type_text(&mut app, "Ada").await;
            assert_eq!(app.coordinator.form.name.value, "Ada");
        }

        #[tokio::test]
        async fn test_tab_blurs_and_validates() {
            let mut app = app();
            go_to_contact(&mut app).await;
            app.handle_key(key(KeyCode::Char('i'))).await.unwrap();
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            assert!(app.coordinator.form.name.has_error());
            assert_eq!(app.coordinator.form.active_field(), 1);
        }

        #[tokio::test]
        async fn test_escape_leaves_form() {
            let mut app = app();
            go_to_contact(&mut app).await;
            app.handle_key(key(KeyCode::Char('i'))).await.unwrap();
            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert_eq!(app.focus, Focus::Page);
        }

        #[tokio::test]
        async fn test_ctrl_s_with_invalid_form_does_not_submit() {
            let mut mock = MockSubmissionClientTrait::new();
            mock.expect_submit().times(0);
            let mut app = app_with(mock);
            go_to_contact(&mut app).await;
            app.handle_key(key(KeyCode::Char('i'))).await.unwrap();
            app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL))
                .await
                .unwrap();
            assert!(app.pending_submission.is_none());
            assert!(!app.coordinator.form.is_submitting());
        }

        #[tokio::test]
        async fn test_background_submission_settles() {
            let mut mock = MockSubmissionClientTrait::new();
            mock.expect_submit().times(1).returning(|_| Ok(()));
            let mut app = app_with(mock);
            go_to_contact(&mut app).await;

            app.handle_key(key(KeyCode::Char('i'))).await.unwrap();
            type_text(&mut app, "Ada").await;
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            type_text(&mut app, "ada@example.com").await;
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            type_text(&mut app, "Hello").await;
            app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL))
                .await
                .unwrap();
            assert!(app.coordinator.form.is_submitting());

            while app.pending_submission.is_some() {
                tokio::task::yield_now().await;
                app.poll_submission().await;
            }

            assert!(!app.coordinator.form.is_submitting());
            assert!(app.coordinator.success.is_visible());
            assert_eq!(app.coordinator.form.name.value, "");
        }
    }

    mod mouse {
        use super::*;

        fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
            MouseEvent {
                kind,
                column,
                row,
                modifiers: KeyModifiers::NONE,
            }
        }

        #[tokio::test]
        async fn test_wheel_scrolls() {
            let mut app = app();
            app.on_resize(120, 10);
            app.handle_mouse(mouse(MouseEventKind::ScrollDown, 10, 10))
                .await
                .unwrap();
            assert_eq!(app.coordinator.scroll_offset(), 3);
        }

        #[tokio::test]
        async fn test_clicking_nav_link_navigates() {
            let mut app = app();
            let labels = app.nav_labels();
            let column = layout::nav_link_columns(&labels, 120)[1].0;
            app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), column, 1))
                .await
                .unwrap();
            app.coordinator.tick(Duration::from_millis(150));
            assert_eq!(app.coordinator.navigation.current(), "about");
        }

        #[tokio::test]
        async fn test_clicking_menu_icon_toggles_when_narrow() {
            let mut app = app();
            app.on_resize(60, 30);
            let column = layout::menu_icon_column(60);
            app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), column, 1))
                .await
                .unwrap();
            assert!(app.coordinator.menu.is_open());
        }
    }
}
