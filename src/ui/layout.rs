//! Layout components (header, nav menu, status bar)
//!
//! Position helpers here are shared by rendering and mouse hit-testing so
//! both always agree on where a nav link sits.

use crate::app::{App, Focus};
use crate::content::{BRAND, CTA_TARGET};
use crate::state::HeaderStyle;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

/// Header height in rows (top border + content + bottom border)
pub const HEADER_HEIGHT: u16 = 3;

/// Status bar height in rows
pub const STATUS_HEIGHT: u16 = 1;

/// Width of the dropdown menu
const MENU_WIDTH: u16 = 20;

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Header
            Constraint::Min(0),                // Page content
            Constraint::Length(STATUS_HEIGHT), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Column spans (start, end) of each nav link, right-aligned in the header
pub fn nav_link_columns(labels: &[String], width: u16) -> Vec<(u16, u16)> {
    let widths: Vec<u16> = labels
        .iter()
        .map(|l| l.chars().count() as u16 + 2)
        .collect();
    let total = widths.iter().sum::<u16>() + widths.len().saturating_sub(1) as u16;

    let mut x = width.saturating_sub(total + 2);
    widths
        .into_iter()
        .map(|w| {
            let span = (x, x + w);
            x += w + 1;
            span
        })
        .collect()
}

/// Nav link under a header column
pub fn nav_link_at(labels: &[String], width: u16, column: u16) -> Option<usize> {
    nav_link_columns(labels, width)
        .iter()
        .position(|&(start, end)| column >= start && column < end)
}

/// Column of the menu glyph
pub fn menu_icon_column(width: u16) -> u16 {
    width.saturating_sub(4)
}

/// Whether a header column hits the menu toggle
pub fn menu_icon_hit(width: u16, column: u16) -> bool {
    let glyph = menu_icon_column(width);
    column + 1 >= glyph && column <= glyph + 1
}

/// Area of the open dropdown menu
pub fn menu_rect(width: u16, link_count: usize) -> Rect {
    let menu_width = MENU_WIDTH.min(width);
    Rect {
        x: width.saturating_sub(menu_width + 1),
        y: HEADER_HEIGHT,
        width: menu_width,
        height: link_count as u16 + 2,
    }
}

/// Menu item under a screen position
pub fn menu_item_at(labels: &[String], width: u16, column: u16, row: u16) -> Option<usize> {
    let rect = menu_rect(width, labels.len());
    let inside_x = column > rect.x && column < (rect.x + rect.width).saturating_sub(1);
    let first_row = rect.y + 1;
    if !inside_x || row < first_row {
        return None;
    }
    let index = (row - first_row) as usize;
    (index < labels.len()).then_some(index)
}

/// Draw the header: brand on the left, nav links or menu toggle on the right
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let coordinator = &app.coordinator;
    let translucent = coordinator.header.style() == HeaderStyle::Translucent;

    let (border_style, brand_style) = if translucent {
        (
            Style::default().fg(Color::DarkGray),
            Style::default()
                .fg(Color::Gray)
                .add_modifier(Modifier::BOLD | Modifier::DIM),
        )
    } else {
        (
            Style::default().fg(Color::Cyan),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(block, area);

    let brand_area = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: (BRAND.len() as u16).min(area.width.saturating_sub(4)),
        height: 1,
    }
    .intersection(area);
    frame.render_widget(Paragraph::new(Span::styled(BRAND, brand_style)), brand_area);

    if coordinator.is_narrow() {
        let icon = coordinator.menu.icon().glyph();
        let icon_area = Rect {
            x: menu_icon_column(area.width),
            y: area.y + 1,
            width: 1,
            height: 1,
        }
        .intersection(area);
        frame.render_widget(
            Paragraph::new(Span::styled(icon, Style::default().fg(Color::Cyan))),
            icon_area,
        );
        return;
    }

    let links = coordinator.navigation.links();
    let labels: Vec<String> = links.iter().map(|l| l.label.clone()).collect();
    for (link, (start, end)) in links.iter().zip(nav_link_columns(&labels, area.width)) {
        let style = if link.active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let link_area = Rect {
            x: start,
            y: area.y + 1,
            width: end - start,
            height: 1,
        }
        .intersection(area);
        frame.render_widget(
            Paragraph::new(Span::styled(format!(" {} ", link.label), style)),
            link_area,
        );
    }
}

/// Draw the dropdown menu when it is open
pub fn draw_menu(frame: &mut Frame, app: &App) {
    let coordinator = &app.coordinator;
    if !coordinator.menu.is_open() {
        return;
    }

    let links = coordinator.navigation.links();
    // Short terminals cut the dropdown off at the bottom edge
    let rect = menu_rect(coordinator.viewport_width(), links.len()).intersection(frame.area());

    let items: Vec<ListItem> = links
        .iter()
        .enumerate()
        .map(|(idx, link)| {
            let marker = if link.active { "● " } else { "  " };
            let style = if idx == coordinator.menu.selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(
                format!("{marker}{}", link.label),
                style,
            )))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Menu ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(Clear, rect);
    frame.render_widget(list, rect);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let coordinator = &app.coordinator;
    let mut spans = vec![];

    // Load status
    let load_status = if coordinator.is_loaded() {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Yellow))
    };
    spans.push(load_status);

    // Document title
    spans.push(Span::styled(
        coordinator.navigation.title().to_string(),
        Style::default().fg(Color::White),
    ));
    spans.push(Span::raw(" | "));

    // Context-specific hints
    spans.push(Span::styled(
        get_hints(app),
        Style::default().fg(Color::Gray),
    ));

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right
    let quit_hint = " q:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    }
    .intersection(area);
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current context
fn get_hints(app: &App) -> &'static str {
    let coordinator = &app.coordinator;
    if coordinator.menu.is_open() {
        return "j/k:select  Enter:go  Esc:close";
    }
    if app.focus == Focus::Form {
        return "Tab:next  Ctrl+S:send  Esc:leave form";
    }
    match coordinator.navigation.current() {
        CTA_TARGET => "Enter:write a message  Tab:pages  j/k:scroll",
        "home" => "Enter:get in touch  Tab:pages  j/k:scroll  [/]:sections",
        _ => "Tab/h/l:pages  j/k:scroll  g/G:top/bottom  [/]:sections  m:menu",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Vec<String> {
        ["Home", "About", "Contact"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    mod nav_links {
        use super::*;

        #[test]
        fn test_columns_are_right_aligned() {
            let columns = nav_link_columns(&labels(), 80);
            // " Home " " About " " Contact " plus two separators
            assert_eq!(columns.last().map(|c| c.1), Some(78));
            assert_eq!(columns[0], (54, 60));
        }

        #[test]
        fn test_columns_do_not_overlap() {
            let columns = nav_link_columns(&labels(), 80);
            for pair in columns.windows(2) {
                assert!(pair[0].1 < pair[1].0);
            }
        }

        #[test]
        fn test_link_at_finds_link() {
            let columns = nav_link_columns(&labels(), 80);
            assert_eq!(nav_link_at(&labels(), 80, columns[2].0), Some(2));
        }

        #[test]
        fn test_link_at_between_links_is_none() {
            let columns = nav_link_columns(&labels(), 80);
            assert_eq!(nav_link_at(&labels(), 80, columns[0].1), None);
        }

        #[test]
        fn test_link_at_brand_area_is_none() {
            assert_eq!(nav_link_at(&labels(), 80, 3), None);
        }
    }

    mod menu {
        use super::*;

        #[test]
        fn test_icon_hit() {
            assert!(menu_icon_hit(60, menu_icon_column(60)));
            assert!(!menu_icon_hit(60, 2));
        }

        #[test]
        fn test_menu_item_rows() {
            let rect = menu_rect(60, 3);
            let column = rect.x + 2;
            assert_eq!(menu_item_at(&labels(), 60, column, HEADER_HEIGHT + 1), Some(0));
            assert_eq!(menu_item_at(&labels(), 60, column, HEADER_HEIGHT + 3), Some(2));
            assert_eq!(menu_item_at(&labels(), 60, column, HEADER_HEIGHT + 4), None);
        }

        #[test]
        fn test_menu_item_outside_columns() {
            assert_eq!(menu_item_at(&labels(), 60, 0, HEADER_HEIGHT + 1), None);
        }

        #[test]
        fn test_menu_item_on_zero_width_terminal() {
            assert_eq!(menu_item_at(&labels(), 0, 0, HEADER_HEIGHT + 1), None);
        }
    }
}
