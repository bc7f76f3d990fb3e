//! Navigation state: pages, nav links and page transitions
//!
//! Transitions are two-phase. [`NavigationState::begin_switch`] hides the
//! current page and hands back a [`PendingTransition`]; the owner schedules it
//! and later feeds it to [`NavigationState::complete_switch`]. Each begin bumps
//! a generation counter, so a transition superseded by a newer one is dropped
//! when it completes instead of activating a second page.

use super::page::{page_title, Page, Visibility, HOME_PAGE};

/// A navigation control bound to a target page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub target: String,
    pub label: String,
    pub active: bool,
}

impl NavLink {
    pub fn new(target: &str, label: &str) -> Self {
        Self {
            target: target.to_string(),
            label: label.to_string(),
            active: false,
        }
    }
}

/// A page switch waiting for its exit transition to finish
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTransition {
    pub target: String,
    /// Page that was active when the switch started
    pub previous: String,
    pub generation: u64,
}

/// What completing a transition did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// Target page is now active
    Activated(String),
    /// Target page does not exist, the previous page was re-activated
    Restored(String),
    /// A newer switch superseded this one
    Stale,
}

/// Navigation state owned by the coordinator
#[derive(Debug, Clone)]
pub struct NavigationState {
    pages: Vec<Page>,
    links: Vec<NavLink>,
    current: String,
    generation: u64,
    title: String,
}

impl NavigationState {
    /// Build the state with `initial` active and its nav link highlighted.
    /// Falls back to the first page if `initial` is missing.
    pub fn new(mut pages: Vec<Page>, links: Vec<NavLink>, initial: &str) -> Self {
        let current = if pages.iter().any(|p| p.key == initial) {
            initial.to_string()
        } else {
            pages
                .first()
                .map(|p| p.key.clone())
                .unwrap_or_else(|| HOME_PAGE.to_string())
        };

        for page in &mut pages {
            page.visibility = if page.key == current {
                Visibility::Active
            } else {
                Visibility::Hidden
            };
        }

        let mut state = Self {
            pages,
            links,
            title: page_title(&current).to_string(),
            current,
            generation: 0,
        };
        let current = state.current.clone();
        state.set_active_nav(&current);
        state
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Document title
    pub fn title(&self) -> &str {
        &self.title
    }

    #[cfg(test)]
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    #[cfg(test)]
    pub fn page(&self, key: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.key == key)
    }

    pub fn page_mut(&mut self, key: &str) -> Option<&mut Page> {
        self.pages.iter_mut().find(|p| p.key == key)
    }

    /// The page currently flagged active, if any
    pub fn active_page(&self) -> Option<&Page> {
        self.pages.iter().find(|p| p.is_active())
    }

    pub fn active_page_mut(&mut self) -> Option<&mut Page> {
        self.pages.iter_mut().find(|p| p.is_active())
    }

    /// Number of pages flagged active
    pub fn active_count(&self) -> usize {
        self.pages.iter().filter(|p| p.is_active()).count()
    }

    /// Index of the highlighted nav link
    pub fn active_link_index(&self) -> Option<usize> {
        self.links.iter().position(|l| l.active)
    }

    /// Hide the current page and start a transition towards `target`
    pub fn begin_switch(&mut self, target: &str) -> PendingTransition {
        let current = self.current.clone();
        if let Some(page) = self.page_mut(&current) {
            page.visibility = Visibility::Hidden;
        }
        self.generation += 1;

        PendingTransition {
            target: target.to_string(),
            previous: current,
            generation: self.generation,
        }
    }

    /// Finish a transition once its delay has elapsed
    pub fn complete_switch(&mut self, transition: &PendingTransition) -> TransitionOutcome {
        if transition.generation != self.generation {
            return TransitionOutcome::Stale;
        }

        if let Some(page) = self.page_mut(&transition.target) {
            page.visibility = Visibility::Active;
            self.current = transition.target.clone();
            self.title = page_title(&transition.target).to_string();
            return TransitionOutcome::Activated(transition.target.clone());
        }

        if let Some(page) = self.page_mut(&transition.previous) {
            page.visibility = Visibility::Active;
        }
        TransitionOutcome::Restored(transition.previous.clone())
    }

    /// Highlight the link targeting `target` and clear every other link
    pub fn set_active_nav(&mut self, target: &str) {
        for link in &mut self.links {
            link.active = link.target == target;
        }
    }
}
