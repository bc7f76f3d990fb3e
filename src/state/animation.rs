//! Fade-in observation and smooth scrolling

use super::page::FadeElement;
use std::time::Duration;

/// Minimum visible fraction for an element to count as intersecting
pub const INTERSECTION_THRESHOLD: f32 = 0.1;

/// Visible window over a page's content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// First visible content row
    pub top: u16,
    /// Visible rows
    pub height: u16,
    /// Rows trimmed off the bottom edge before testing intersection
    pub bottom_margin: u16,
}

impl Viewport {
    fn effective_bottom(&self) -> u16 {
        self.top
            .saturating_add(self.height.saturating_sub(self.bottom_margin))
    }

    /// Fraction of `element` inside the viewport, from 0.0 to 1.0
    pub fn visible_fraction(&self, element: &FadeElement) -> f32 {
        if element.height == 0 {
            return 0.0;
        }
        let start = element.offset.max(self.top);
        let end = element.end().min(self.effective_bottom());
        if end <= start {
            return 0.0;
        }
        (end - start) as f32 / element.height as f32
    }

    pub fn intersects(&self, element: &FadeElement) -> bool {
        self.visible_fraction(element) >= INTERSECTION_THRESHOLD
    }
}

/// Mark every element entering the viewport as visible.
/// Returns how many elements were newly revealed.
pub fn observe(elements: &mut [FadeElement], viewport: &Viewport) -> usize {
    let mut revealed = 0;
    for element in elements.iter_mut() {
        if !element.visible && viewport.intersects(element) {
            element.visible = true;
            revealed += 1;
        }
    }
    revealed
}

/// Eased scroll from one offset to another
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothScroll {
    start: u16,
    target: u16,
    started_at: Duration,
    duration: Duration,
}

impl SmoothScroll {
    pub fn new(start: u16, target: u16, started_at: Duration, duration: Duration) -> Self {
        Self {
            start,
            target,
            started_at,
            duration,
        }
    }

    pub fn target(&self) -> u16 {
        self.target
    }

    /// Offset at virtual time `now` (quadratic ease-in-out)
    pub fn position(&self, now: Duration) -> u16 {
        if self.is_finished(now) {
            return self.target;
        }
        let elapsed = now.saturating_sub(self.started_at);
        let progress = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = simple_easing::quad_in_out(progress);
        let distance = self.target as f32 - self.start as f32;
        (self.start as f32 + distance * eased).round().max(0.0) as u16
    }

    pub fn is_finished(&self, now: Duration) -> bool {
        self.duration.is_zero() || now.saturating_sub(self.started_at) >= self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport(top: u16, height: u16) -> Viewport {
        Viewport {
            top,
            height,
            bottom_margin: 0,
        }
    }

    mod intersection {
        use super::*;

        #[test]
        fn test_fully_visible_element() {
            let element = FadeElement::new(2, 4);
            assert_eq!(viewport(0, 10).visible_fraction(&element), 1.0);
        }

        #[test]
        fn test_element_below_viewport() {
            let element = FadeElement::new(20, 4);
            assert_eq!(viewport(0, 10).visible_fraction(&element), 0.0);
            assert!(!viewport(0, 10).intersects(&element));
        }

        #[test]
        fn test_partially_visible_element() {
            let element = FadeElement::new(8, 4);
            assert_eq!(viewport(0, 10).visible_fraction(&element), 0.5);
        }

        #[test]
        fn test_below_threshold_does_not_intersect() {
            // one row of twenty = 5%
            let element = FadeElement::new(9, 20);
            assert!(!viewport(0, 10).intersects(&element));
        }

        #[test]
        fn test_bottom_margin_shrinks_viewport() {
            let element = FadeElement::new(9, 1);
            let vp = Viewport {
                top: 0,
                height: 10,
                bottom_margin: 1,
            };
            assert!(!vp.intersects(&element));
            assert!(viewport(0, 10).intersects(&element));
        }

        #[test]
        fn test_zero_height_element_never_intersects() {
            let element = FadeElement::new(0, 0);
            assert!(!viewport(0, 10).intersects(&element));
        }

        #[test]
        fn test_observe_reveals_only_intersecting() {
            let mut elements = vec![
                FadeElement::new(0, 3),
                FadeElement::new(4, 3),
                FadeElement::new(30, 3),
            ];
            let revealed = observe(&mut elements, &viewport(0, 10));
            assert_eq!(revealed, 2);
            assert!(elements[0].visible);
            assert!(elements[1].visible);
            assert!(!elements[2].visible);
        }

        #[test]
        fn test_observe_does_not_count_already_visible() {
            let mut elements = vec![FadeElement::new(0, 3)];
            elements[0].visible = true;
            assert_eq!(observe(&mut elements, &viewport(0, 10)), 0);
        }
    }

    mod smooth_scroll {
        use super::*;

        const DURATION: Duration = Duration::from_millis(800);

        #[test]
        fn test_starts_at_start() {
            let scroll = SmoothScroll::new(0, 40, Duration::ZERO, DURATION);
            assert_eq!(scroll.position(Duration::ZERO), 0);
        }

        #[test]
        fn test_halfway_is_halfway() {
            let scroll = SmoothScroll::new(0, 40, Duration::ZERO, DURATION);
            assert_eq!(scroll.position(Duration::from_millis(400)), 20);
        }

        #[test]
        fn test_ends_at_target() {
            let scroll = SmoothScroll::new(10, 0, Duration::ZERO, DURATION);
            assert_eq!(scroll.position(DURATION), 0);
            assert!(scroll.is_finished(DURATION));
        }

        #[test]
        fn test_ease_is_slow_at_start() {
            let scroll = SmoothScroll::new(0, 100, Duration::ZERO, DURATION);
            let early = scroll.position(Duration::from_millis(80));
            assert!(early < 10, "expected slow start, got {early}");
        }

        #[test]
        fn test_zero_duration_jumps() {
            let scroll = SmoothScroll::new(0, 12, Duration::ZERO, Duration::ZERO);
            assert!(scroll.is_finished(Duration::ZERO));
            assert_eq!(scroll.position(Duration::ZERO), 12);
        }
    }
}
