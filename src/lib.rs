//! Word Pills - speak the animal names to catch the bouncing pills
//!
//! Core modules:
//! - `sim`: Deterministic simulation (pill movement, wall bounces, collisions)
//! - `renderer`: Drawing surface abstraction and canvas 2D backend
//! - `recognition`: Speech transcript matching and the listening state machine
//! - `settings`: Data-driven game configuration and pill styling
//! - `game`: One running game, driven by the frame loop and speech events

pub mod error;
pub mod game;
pub mod recognition;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{GameError, Result};
pub use game::Game;
pub use recognition::{Enclosure, Feedback, ListenState, RecognitionSession, SpeechEvent};
pub use settings::{GameConfig, PillStyle};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default playing field (canvas) dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Pill dimensions, shared by every pill
    pub const PILL_WIDTH: f32 = 80.0;
    pub const PILL_HEIGHT: f32 = 30.0;
    pub const PILL_CORNER_RADIUS: f32 = 15.0;

    /// Initial velocity components are drawn from [-MAX_START_SPEED, MAX_START_SPEED)
    pub const MAX_START_SPEED: f32 = 2.0;

    /// Joint steps allowed when pushing two colliding pills apart
    pub const MAX_SEPARATION_STEPS: u32 = 512;

    /// Relative speeds below this can never separate two pills
    pub const SEPARATION_EPSILON: f32 = 1e-6;

    /// Animals spawned at startup, in collection order
    pub const DEFAULT_ANIMALS: &[&str] = &[
        "Lion", "Tiger", "Elephant", "Giraffe", "Zebra", "Monkey", "Panda", "Kangaroo", "Koala",
        "Penguin",
    ];

    /// Prefix shown in front of interim transcripts
    pub const FEEDBACK_PREFIX: &str = "You said: ";

    /// Default speech recognition language
    pub const DEFAULT_LANG: &str = "en-US";
}

/// Normalize a spoken or displayed word for matching (trimmed, lowercase)
#[inline]
pub fn normalize_label(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Clamp a top-left position so a box of `size` stays inside `bounds`
#[inline]
pub fn clamp_to_field(pos: Vec2, size: Vec2, bounds: Vec2) -> Vec2 {
    let max = (bounds - size).max(Vec2::ZERO);
    pos.clamp(Vec2::ZERO, max)
}
