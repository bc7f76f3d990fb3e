//! Mobile menu toggle

/// Icon shown on the menu toggle control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuIcon {
    #[default]
    Bars,
    Close,
}

impl MenuIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Bars => "☰",
            Self::Close => "✕",
        }
    }
}

/// Collapsed navigation menu used on narrow terminals
#[derive(Debug, Clone, Default)]
pub struct MobileMenu {
    open: bool,
    icon: MenuIcon,
    /// Link under the cursor while the menu is open
    pub selected: usize,
}

impl MobileMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn icon(&self) -> MenuIcon {
        self.icon
    }

    /// Flip between open and closed, swapping the icon
    pub fn toggle(&mut self) {
        self.open = !self.open;
        self.icon = if self.open {
            MenuIcon::Close
        } else {
            MenuIcon::Bars
        };
    }

    /// Close the menu and reset the icon. Safe to call when already closed.
    pub fn close(&mut self) {
        self.open = false;
        self.icon = MenuIcon::Bars;
    }

    pub fn select_next(&mut self, link_count: usize) {
        if link_count > 0 {
            self.selected = (self.selected + 1) % link_count;
        }
    }

    pub fn select_prev(&mut self, link_count: usize) {
        if link_count > 0 {
            self.selected = (self.selected + link_count - 1) % link_count;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_closed_with_bars() {
        let menu = MobileMenu::default();
        assert!(!menu.is_open());
        assert_eq!(menu.icon(), MenuIcon::Bars);
    }

    #[test]
    fn test_toggle_opens_and_swaps_icon() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.icon(), MenuIcon::Close);
    }

    #[test]
    fn test_toggle_twice_restores_original() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        menu.toggle();
        assert!(!menu.is_open());
        assert_eq!(menu.icon(), MenuIcon::Bars);
    }

    #[test]
    fn test_close_resets_icon() {
        let mut menu = MobileMenu::default();
        menu.toggle();
        menu.close();
        assert!(!menu.is_open());
        assert_eq!(menu.icon(), MenuIcon::Bars);
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut menu = MobileMenu::default();
        menu.close();
        menu.close();
        assert!(!menu.is_open());
        assert_eq!(menu.icon(), MenuIcon::Bars);
    }

    #[test]
    fn test_selection_wraps() {
        let mut menu = MobileMenu::default();
        menu.select_prev(5);
        assert_eq!(menu.selected, 4);
        menu.select_next(5);
        assert_eq!(menu.selected, 0);
    }

    #[test]
    fn test_selection_with_no_links_does_not_panic() {
        let mut menu = MobileMenu::default();
        menu.select_next(0);
        menu.select_prev(0);
        assert_eq!(menu.selected, 0);
    }

    #[test]
    fn test_glyphs_differ() {
        assert_ne!(MenuIcon::Bars.glyph(), MenuIcon::Close.glyph());
    }
}
