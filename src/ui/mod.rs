//! UI module for rendering the TUI

mod components;
mod contact;
pub mod layout;
mod pages;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, content_area, status_area) = layout::create_layout(frame.area());

    // Page first so the header and overlays sit above it
    pages::draw(frame, content_area, app);
    layout::draw_header(frame, header_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Overlays
    layout::draw_menu(frame, app);
    if let Some(message) = app.coordinator.notices.current() {
        components::render_notice_dialog(frame, message, app.coordinator.notices.len());
    }
}
