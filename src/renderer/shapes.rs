//! Shape geometry for 2D primitives

use glam::Vec2;

use crate::settings::PillStyle;
use crate::sim::WordPill;

/// An axis-aligned rectangle with rounded corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRect {
    /// Top-left corner
    pub origin: Vec2,
    pub size: Vec2,
    /// Corner radius, never more than half the shorter side
    pub radius: f32,
}

impl RoundedRect {
    pub fn new(origin: Vec2, size: Vec2, radius: f32) -> Self {
        let radius = radius.clamp(0.0, size.min_element().max(0.0) / 2.0);
        Self {
            origin,
            size,
            radius,
        }
    }

    /// Outline of a pill at its current position
    pub fn for_pill(pill: &WordPill, style: &PillStyle) -> Self {
        Self::new(pill.pos, pill.size, style.corner_radius)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.origin + self.size / 2.0
    }

    /// Corner points in path order (top-left, top-right, bottom-right, bottom-left)
    pub fn corners(&self) -> [Vec2; 4] {
        let min = self.origin;
        let max = self.origin + self.size;
        [
            min,
            Vec2::new(max.x, min.y),
            max,
            Vec2::new(min.x, max.y),
        ]
    }
}
