//! In-memory drawing surface
//!
//! Records every primitive instead of drawing it. Used by the headless
//! native driver and by tests comparing frames.

use glam::Vec2;

use super::Surface;
use super::shapes::RoundedRect;
use crate::settings::PillStyle;

/// One recorded drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear {
        size: Vec2,
    },
    RoundedRect {
        rect: RoundedRect,
        fill: String,
        stroke: String,
        line_width: f32,
    },
    Text {
        text: String,
        center: Vec2,
        font: String,
        color: String,
    },
}

/// Surface that keeps the commands of the most recent frame
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands drawn since the last clear (including the clear itself)
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Labels drawn this frame, in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, size: Vec2) {
        // A full clear wipes the frame; anything before it is no longer visible
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { size });
    }

    fn rounded_rect(&mut self, rect: &RoundedRect, style: &PillStyle) {
        self.commands.push(DrawCommand::RoundedRect {
            rect: *rect,
            fill: style.fill.clone(),
            stroke: style.stroke.clone(),
            line_width: style.line_width,
        });
    }

    fn text(&mut self, text: &str, center: Vec2, style: &PillStyle) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            center,
            font: style.font.clone(),
            color: style.text_color.clone(),
        });
    }
}
