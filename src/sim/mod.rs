//! Deterministic simulation module
//!
//! All pill movement lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Seeded RNG only (at spawn)
//! - Stable iteration order (collection order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod pill;
pub mod state;
pub mod tick;

pub use collision::{Separation, aabb_overlap, separate};
pub use pill::WordPill;
pub use state::PillField;
pub use tick::{StepReport, tick};
