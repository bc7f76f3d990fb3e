//! Pages and their fade-in elements

/// Key of the landing page, also the title fallback
pub const HOME_PAGE: &str = "home";

/// Visibility of a logical page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Active,
}

/// An element eligible for the staggered reveal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FadeElement {
    /// First content row of the element within its page
    pub offset: u16,
    /// Height in rows
    pub height: u16,
    /// Whether the element has been revealed
    pub visible: bool,
}

impl FadeElement {
    pub fn new(offset: u16, height: u16) -> Self {
        Self {
            offset,
            height,
            visible: false,
        }
    }

    /// Row just past the element
    pub fn end(&self) -> u16 {
        self.offset.saturating_add(self.height)
    }
}

/// One logical screen of the site
#[derive(Debug, Clone)]
pub struct Page {
    pub key: String,
    pub visibility: Visibility,
    pub elements: Vec<FadeElement>,
    /// Bumped on every animation pass so stale reveals can be dropped
    pub animation_generation: u64,
}

impl Page {
    /// Build a hidden page from the heights of its sections, stacked top to
    /// bottom with `gap` blank rows between them.
    pub fn new(key: &str, section_heights: &[u16], gap: u16) -> Self {
        let mut offset = 0u16;
        let elements = section_heights
            .iter()
            .map(|&height| {
                let element = FadeElement::new(offset, height);
                offset = offset.saturating_add(height).saturating_add(gap);
                element
            })
            .collect();

        Self {
            key: key.to_string(),
            visibility: Visibility::Hidden,
            elements,
            animation_generation: 0,
        }
    }

    pub fn is_active(&self) -> bool {
        self.visibility == Visibility::Active
    }

    /// Total content height in rows
    pub fn content_height(&self) -> u16 {
        self.elements.iter().map(FadeElement::end).max().unwrap_or(0)
    }
}

/// Document title for a page key, falling back to the home title
pub fn page_title(key: &str) -> &'static str {
    match key {
        "about" => "About - Mohamed Ibrahim",
        "services" => "Services - Mohamed Ibrahim",
        "portfolio" => "Portfolio - Mohamed Ibrahim",
        "contact" => "Contact - Mohamed Ibrahim",
        _ => "Mohamed Ibrahim - Digital Designer & Developer",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod page {
        use super::*;

        #[test]
        fn test_new_page_is_hidden() {
            let page = Page::new("about", &[3, 4], 1);
            assert_eq!(page.visibility, Visibility::Hidden);
            assert!(!page.is_active());
        }

        #[test]
        fn test_sections_are_stacked_with_gap() {
            let page = Page::new("about", &[3, 4, 2], 1);
            let offsets: Vec<u16> = page.elements.iter().map(|e| e.offset).collect();
            assert_eq!(offsets, vec![0, 4, 9]);
            assert_eq!(page.content_height(), 11);
        }

        #[test]
        fn test_elements_start_invisible() {
            let page = Page::new("home", &[2, 2], 0);
            assert!(page.elements.iter().all(|e| !e.visible));
        }

        #[test]
        fn test_empty_page_has_zero_height() {
            let page = Page::new("empty", &[], 1);
            assert_eq!(page.content_height(), 0);
        }
    }

    mod titles {
        use super::*;

        #[test]
        fn test_known_titles() {
            assert_eq!(page_title("about"), "About - Mohamed Ibrahim");
            assert_eq!(page_title("contact"), "Contact - Mohamed Ibrahim");
        }

        #[test]
        fn test_unknown_key_falls_back_to_home_title() {
            assert_eq!(page_title("blog"), page_title(HOME_PAGE));
            assert_eq!(
                page_title(HOME_PAGE),
                "Mohamed Ibrahim - Digital Designer & Developer"
            );
        }
    }
}
