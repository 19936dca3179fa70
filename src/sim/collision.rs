//! Collision detection and response for axis-aligned pills
//!
//! Detection is a plain bounding-box test. Response is a velocity swap
//! followed by separation-by-simulation: both pills keep stepping along their
//! new velocities until the boxes stop overlapping. There is no analytic
//! positional correction, so the loop is capped.

use glam::Vec2;

use super::pill::WordPill;
use crate::consts::SEPARATION_EPSILON;

/// Outcome of pushing two colliding pills apart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separation {
    /// The pills were not overlapping to begin with
    Clear,
    /// No longer overlapping after `steps` joint steps
    Separated { steps: u32 },
    /// Still overlapping after `steps` joint steps; either the relative
    /// velocity is zero or the step cap was reached
    Stalled { steps: u32 },
}

impl Separation {
    #[inline]
    pub fn is_stalled(&self) -> bool {
        matches!(self, Separation::Stalled { .. })
    }

    #[inline]
    pub fn steps(&self) -> u32 {
        match *self {
            Separation::Clear => 0,
            Separation::Separated { steps } | Separation::Stalled { steps } => steps,
        }
    }
}

/// Strict box intersection: touching edges do not count
#[inline]
pub fn aabb_overlap(a_pos: Vec2, a_size: Vec2, b_pos: Vec2, b_size: Vec2) -> bool {
    a_pos.x < b_pos.x + b_size.x
        && a_pos.x + a_size.x > b_pos.x
        && a_pos.y < b_pos.y + b_size.y
        && a_pos.y + a_size.y > b_pos.y
}

/// Step both pills by their own velocities until they stop overlapping.
///
/// Velocities are left untouched. If the pills move in lockstep (zero
/// relative velocity) they can never separate and this returns immediately.
pub fn separate(a: &mut WordPill, b: &mut WordPill, max_steps: u32) -> Separation {
    if !a.overlaps(b) {
        return Separation::Clear;
    }

    let relative = a.vel - b.vel;
    let can_separate = relative.length_squared() > SEPARATION_EPSILON * SEPARATION_EPSILON;

    let mut steps = 0;
    while a.overlaps(b) {
        if !can_separate || steps >= max_steps {
            return Separation::Stalled { steps };
        }
        a.pos += a.vel;
        b.pos += b.vel;
        steps += 1;
    }

    Separation::Separated { steps }
}
