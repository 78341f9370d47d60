//! Clickable regions.
//!
//! Controls register their screen rectangles while the frame is drawn, and
//! the event loop asks the registry which control sits under a mouse click.

use ratatui::layout::Rect;

use crate::view::ControlId;

/// A clickable region tied to a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitArea {
    pub rect: Rect,
    pub control: ControlId,
}

impl HitArea {
    pub fn new(rect: Rect, control: ControlId) -> Self {
        Self { rect, control }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x + self.rect.width
            && y >= self.rect.y
            && y < self.rect.y + self.rect.height
    }
}

/// Hit areas for the current frame. Cleared at the start of every draw.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.areas.clear();
    }

    pub fn register(&mut self, rect: Rect, control: ControlId) {
        self.areas.push(HitArea::new(rect, control));
    }

    /// The control under (x, y). Later registrations win on overlap.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ControlId> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.contains(x, y))
            .map(|area| area.control)
    }

    pub fn areas(&self) -> &[HitArea] {
        &self.areas
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: ControlId = ControlId("a");
    const B: ControlId = ControlId("b");

    #[test]
    fn test_hit_area_contains() {
        let area = HitArea::new(Rect::new(10, 10, 20, 10), A);

        assert!(area.contains(10, 10));
        assert!(area.contains(29, 19));
        assert!(area.contains(20, 15));

        assert!(!area.contains(9, 10));
        assert!(!area.contains(30, 10));
        assert!(!area.contains(10, 20));
    }

    #[test]
    fn test_hit_area_zero_size() {
        let area = HitArea::new(Rect::new(5, 5, 0, 0), A);
        assert!(!area.contains(5, 5));
    }

    #[test]
    fn test_hit_test_prefers_latest() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 10, 1), A);
        registry.register(Rect::new(5, 0, 10, 1), B);

        assert_eq!(registry.hit_test(2, 0), Some(A));
        assert_eq!(registry.hit_test(7, 0), Some(B));
        assert_eq!(registry.hit_test(7, 1), None);
    }

    #[test]
    fn test_clear() {
        let mut registry = HitAreaRegistry::new();
        registry.register(Rect::new(0, 0, 1, 1), A);
        assert_eq!(registry.len(), 1);
        registry.clear();
        assert!(registry.is_empty());
        assert_eq!(registry.hit_test(0, 0), None);
    }
}
