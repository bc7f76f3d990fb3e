//! Scroll-reactive header

/// Header appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderStyle {
    #[default]
    Solid,
    /// Applied once the page is scrolled past the threshold
    Translucent,
}

/// Header state, recomputed at most once per frame
#[derive(Debug, Clone, Default)]
pub struct HeaderState {
    style: HeaderStyle,
    scroll_offset: u16,
    /// Set while a recompute is queued for the next frame
    pending: bool,
    /// Number of recomputations, exposed for diagnostics
    recomputations: u64,
}

impl HeaderState {
    pub fn style(&self) -> HeaderStyle {
        self.style
    }

    pub fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// Record a scroll. Returns true when the caller should queue a frame
    /// callback, false when one is already pending.
    pub fn on_scroll(&mut self, offset: u16) -> bool {
        self.scroll_offset = offset;
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Frame callback: derive the style from the latest scroll offset
    pub fn on_frame(&mut self, threshold: u16) {
        self.style = if self.scroll_offset > threshold {
            HeaderStyle::Translucent
        } else {
            HeaderStyle::Solid
        };
        self.recomputations += 1;
        self.pending = false;
    }
}
