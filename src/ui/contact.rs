//! Contact page: details on one side, the message form on the other

use super::pages::draw_sections;
use crate::app::{App, Focus};
use crate::content::PageContent;
use crate::state::{Form, Page};
use crate::ui::components::{button_width, draw_field, render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Shown under the form after a successful submission
pub const SUCCESS_MESSAGE: &str = "✓ Thank you! Your message has been sent.";

/// Rows the form panel needs: three fields, the message box, the button row,
/// the success line and the panel borders
const FORM_HEIGHT: u16 = 3 * 3 + 5 + BUTTON_HEIGHT + 1 + 2;

pub fn draw(frame: &mut Frame, area: Rect, app: &App, page: &Page, content: &PageContent) {
    let (details_area, form_area) = if app.coordinator.is_narrow() {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(FORM_HEIGHT)])
            .split(area);
        (chunks[0], chunks[1])
    } else {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(area);
        (chunks[0], chunks[1])
    };

    draw_sections(
        frame,
        details_area,
        page,
        content,
        app.coordinator.scroll_offset(),
    );
    draw_form(frame, form_area, app);
}

fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.coordinator.form;
    let focused = app.focus == Focus::Form;

    let block = Block::default()
        .title(" Send a message ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if focused {
            Color::Cyan
        } else {
            Color::DarkGray
        }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Name
            Constraint::Length(3),             // Email
            Constraint::Length(3),             // Subject
            Constraint::Min(5),                // Message
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Success notice
        ])
        .split(inner);

    for index in 0..form.field_count() {
        if let Some(field) = form.get_field(index) {
            let is_active = focused && form.active_field() == index;
            draw_field(frame, chunks[index], field, is_active);
        }
    }

    // Submit button with its shortcut beside it
    let label = form.submit.label();
    let button_area = Rect {
        width: button_width(label).min(chunks[4].width),
        ..chunks[4]
    };
    render_button(
        frame,
        button_area,
        label,
        focused,
        !form.submit.disabled,
        Color::Green,
    );
    let hint_x = button_area.x + button_area.width + 1;
    if focused && hint_x < chunks[4].x + chunks[4].width {
        let hint_area = Rect {
            x: hint_x,
            y: chunks[4].y + 1,
            width: chunks[4].x + chunks[4].width - hint_x,
            height: 1,
        }
        .intersection(chunks[4]);
        frame.render_widget(
            Paragraph::new(Span::styled("Ctrl+S", Style::default().fg(Color::DarkGray))),
            hint_area,
        );
    }

    if app.coordinator.success.is_visible() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                SUCCESS_MESSAGE,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            chunks[5],
        );
    }
}
