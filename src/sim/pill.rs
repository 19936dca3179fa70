//! Word pill entity
//!
//! A pill is an axis-aligned rounded rectangle identified by its label. Its
//! position is the top-left corner; every pill in a game shares one size.

use glam::Vec2;
use rand::Rng;

use super::collision::{Separation, aabb_overlap, separate};
use crate::normalize_label;

/// A moving, labeled pill
#[derive(Debug, Clone, PartialEq)]
pub struct WordPill {
    /// Display text and match key
    label: String,
    /// Top-left corner
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl WordPill {
    pub fn new(label: impl Into<String>, pos: Vec2, vel: Vec2, size: Vec2) -> Self {
        Self {
            label: label.into(),
            pos,
            vel,
            size,
        }
    }

    /// Spawn at a random spot inside `field` with a random velocity whose
    /// components lie in `[-max_speed, max_speed)`
    pub fn spawn<R: Rng + ?Sized>(
        label: impl Into<String>,
        field: Vec2,
        size: Vec2,
        max_speed: f32,
        rng: &mut R,
    ) -> Self {
        let room = (field - size).max(Vec2::ZERO);
        let pos = Vec2::new(rng.random::<f32>() * room.x, rng.random::<f32>() * room.y);
        let vel = Vec2::new(
            (rng.random::<f32>() - 0.5) * 2.0 * max_speed,
            (rng.random::<f32>() - 0.5) * 2.0 * max_speed,
        );
        Self::new(label, pos, vel, size)
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// True if an already-normalized transcript names this pill
    #[inline]
    pub fn matches(&self, normalized: &str) -> bool {
        normalize_label(&self.label) == normalized
    }

    /// Advance one tick and bounce off the field walls.
    ///
    /// Each axis is handled independently: reaching the near edge clamps to 0,
    /// reaching the far edge clamps to `field - size`, and either way the
    /// velocity component on that axis flips sign.
    pub fn move_step(&mut self, field: Vec2) {
        self.pos += self.vel;

        let far = field - self.size;

        if self.pos.x <= 0.0 {
            self.pos.x = 0.0;
            self.vel.x = -self.vel.x;
        } else if self.pos.x >= far.x {
            self.pos.x = far.x;
            self.vel.x = -self.vel.x;
        }

        if self.pos.y <= 0.0 {
            self.pos.y = 0.0;
            self.vel.y = -self.vel.y;
        } else if self.pos.y >= far.y {
            self.pos.y = far.y;
            self.vel.y = -self.vel.y;
        }
    }

    /// Strict bounding-box overlap. A pill never overlaps itself.
    pub fn overlaps(&self, other: &WordPill) -> bool {
        if std::ptr::eq(self, other) {
            return false;
        }
        aabb_overlap(self.pos, self.size, other.pos, other.size)
    }

    /// Swap velocities with `other`, then step both pills forward together
    /// until they no longer overlap (at most `max_steps` joint steps).
    pub fn resolve_collision_with(&mut self, other: &mut WordPill, max_steps: u32) -> Separation {
        std::mem::swap(&mut self.vel, &mut other.vel);
        separate(self, other, max_steps)
    }
}
