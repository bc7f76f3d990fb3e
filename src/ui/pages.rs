//! Page content rendering
//!
//! Sections that have not faded in yet are drawn as blank rows of the same
//! height so revealed sections never shift the ones below them.

use crate::app::App;
use crate::content::{self, PageContent, CTA_LABEL, SECTION_GAP};
use crate::state::{Page, HOME_PAGE};
use crate::ui::components::{button_width, render_button, BUTTON_HEIGHT};
use crate::ui::contact;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph},
    Frame,
};

/// Draw the active page into the content area
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let coordinator = &app.coordinator;
    // Nothing is on screen while a transition is in flight
    let Some(page) = coordinator.navigation.active_page() else {
        return;
    };
    let Some(content) = content::page_content(&page.key) else {
        tracing::warn!("No content for page '{}'", page.key);
        return;
    };

    if page.key == content::CTA_TARGET {
        contact::draw(frame, area, app, page, content);
        return;
    }

    let show_cta = page.key == HOME_PAGE && page.elements.iter().all(|e| e.visible);
    let (text_area, cta_area) = if show_cta {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(BUTTON_HEIGHT)])
            .split(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    };

    draw_sections(frame, text_area, page, content, coordinator.scroll_offset());

    if let Some(cta_area) = cta_area {
        draw_cta(frame, cta_area);
    }
}

/// Draw the scrollable section text of a page
pub fn draw_sections(
    frame: &mut Frame,
    area: Rect,
    page: &Page,
    content: &PageContent,
    scroll: u16,
) {
    let paragraph = Paragraph::new(page_lines(page, content))
        .block(Block::default().padding(Padding::new(2, 2, 1, 0)))
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);
}

/// Call-to-action button on the home page
fn draw_cta(frame: &mut Frame, area: Rect) {
    let width = button_width(CTA_LABEL).min(area.width.saturating_sub(2));
    let button_area = Rect {
        x: area.x + 2,
        y: area.y,
        width,
        height: area.height,
    }
    .intersection(area);
    render_button(frame, button_area, CTA_LABEL, true, true, Color::Cyan);

    let hint_x = button_area.x + width + 1;
    if hint_x < area.x + area.width {
        let hint_area = Rect {
            x: hint_x,
            y: area.y + 1,
            width: area.x + area.width - hint_x,
            height: 1,
        }
        .intersection(area);
        frame.render_widget(
            Paragraph::new(Span::styled("Enter", Style::default().fg(Color::DarkGray))),
            hint_area,
        );
    }
}

/// Lay out every section of a page, blank where not yet revealed
pub fn page_lines(page: &Page, content: &PageContent) -> Vec<Line<'static>> {
    let heading_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut lines = Vec::new();

    for (index, (element, section)) in page.elements.iter().zip(content.sections).enumerate() {
        if index > 0 {
            lines.extend((0..SECTION_GAP).map(|_| Line::from("")));
        }
        if element.visible {
            lines.push(Line::from(Span::styled(section.heading, heading_style)));
            lines.extend(section.body.iter().map(|&body| Line::from(body)));
        } else {
            lines.extend((0..element.height).map(|_| Line::from("")));
        }
    }

    lines
}
