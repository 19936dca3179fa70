//! Game configuration and pill styling
//!
//! Configuration is read once at startup (from the canvas `data-config`
//! attribute in the browser) and never written back.

use glam::Vec2;
use serde::Deserialize;

use crate::consts::*;
use crate::error::{GameError, Result};

/// Game configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Field ===
    /// Playing field width (canvas pixels)
    pub field_width: f32,
    /// Playing field height (canvas pixels)
    pub field_height: f32,

    // === Pills ===
    /// Pill width, shared by all pills
    pub pill_width: f32,
    /// Pill height, shared by all pills
    pub pill_height: f32,
    /// Corner radius of the pill outline
    pub corner_radius: f32,
    /// Maximum magnitude of each initial velocity component
    pub max_start_speed: f32,
    /// Labels to spawn, one pill each, in collection order
    pub animals: Vec<String>,

    // === Physics ===
    /// Joint steps allowed when pushing two colliding pills apart
    pub max_separation_steps: u32,

    // === Recognition ===
    /// BCP 47 language tag handed to the speech recognizer
    pub lang: String,

    /// RNG seed; the browser falls back to the current time
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            pill_width: PILL_WIDTH,
            pill_height: PILL_HEIGHT,
            corner_radius: PILL_CORNER_RADIUS,
            max_start_speed: MAX_START_SPEED,
            animals: DEFAULT_ANIMALS.iter().map(|s| s.to_string()).collect(),

            max_separation_steps: MAX_SEPARATION_STEPS,

            lang: DEFAULT_LANG.to_string(),

            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse a JSON config; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configs the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        let field = self.field_size();
        let pill = self.pill_size();

        if !(field.x > 0.0 && field.y > 0.0) {
            return Err(GameError::InvalidConfig(format!(
                "field must be positive, got {}x{}",
                field.x, field.y
            )));
        }
        if !(pill.x > 0.0 && pill.y > 0.0) {
            return Err(GameError::InvalidConfig(format!(
                "pill must be positive, got {}x{}",
                pill.x, pill.y
            )));
        }
        if pill.x > field.x || pill.y > field.y {
            return Err(GameError::InvalidConfig(format!(
                "pill {}x{} does not fit in field {}x{}",
                pill.x, pill.y, field.x, field.y
            )));
        }
        if !self.corner_radius.is_finite() || self.corner_radius < 0.0 {
            return Err(GameError::InvalidConfig(format!(
                "corner_radius must be finite and non-negative, got {}",
                self.corner_radius
            )));
        }
        if !self.max_start_speed.is_finite() || self.max_start_speed < 0.0 {
            return Err(GameError::InvalidConfig(format!(
                "max_start_speed must be finite and non-negative, got {}",
                self.max_start_speed
            )));
        }
        if self.max_separation_steps == 0 {
            return Err(GameError::InvalidConfig(
                "max_separation_steps must be at least 1".to_string(),
            ));
        }
        if let Some(blank) = self.animals.iter().position(|a| a.trim().is_empty()) {
            return Err(GameError::InvalidConfig(format!(
                "animal #{blank} has an empty label"
            )));
        }
        Ok(())
    }

    #[inline]
    pub fn field_size(&self) -> Vec2 {
        Vec2::new(self.field_width, self.field_height)
    }

    #[inline]
    pub fn pill_size(&self) -> Vec2 {
        Vec2::new(self.pill_width, self.pill_height)
    }
}

/// Visual styling shared by every pill
#[derive(Debug, Clone, PartialEq)]
pub struct PillStyle {
    pub fill: String,
    pub stroke: String,
    pub line_width: f32,
    pub corner_radius: f32,
    pub text_color: String,
    pub font: String,
}

impl Default for PillStyle {
    fn default() -> Self {
        Self {
            fill: "lightblue".to_string(),
            stroke: "black".to_string(),
            line_width: 1.0,
            corner_radius: PILL_CORNER_RADIUS,
            text_color: "black".to_string(),
            font: "16px Arial".to_string(),
        }
    }
}

impl PillStyle {
    /// Default colors and font with the configured outline shape
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            corner_radius: config.corner_radius,
            ..Default::default()
        }
    }
}
