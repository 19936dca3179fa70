//! Rendering module
//!
//! Drawing goes through the `Surface` trait so the frame logic can run
//! against the browser canvas or an in-memory recorder.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod recording;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use recording::{DrawCommand, RecordingSurface};
pub use shapes::RoundedRect;

use glam::Vec2;

use crate::settings::PillStyle;
use crate::sim::{PillField, WordPill};

/// The drawing primitives a frame needs
pub trait Surface {
    /// Clear the region from the origin to `size`
    fn clear(&mut self, size: Vec2);
    /// Fill then stroke a rounded rectangle
    fn rounded_rect(&mut self, rect: &RoundedRect, style: &PillStyle);
    /// Draw text centered on `center`
    fn text(&mut self, text: &str, center: Vec2, style: &PillStyle);
}

/// Draw a single pill: outline first, label centered on top
pub fn draw_pill<S: Surface + ?Sized>(surface: &mut S, pill: &WordPill, style: &PillStyle) {
    let rect = RoundedRect::for_pill(pill, style);
    surface.rounded_rect(&rect, style);
    surface.text(pill.label(), rect.center(), style);
}

/// Clear the whole field and draw every live pill in collection order
pub fn render<S: Surface + ?Sized>(surface: &mut S, state: &PillField, style: &PillStyle) {
    surface.clear(state.bounds());
    for pill in state.pills() {
        draw_pill(surface, pill, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> PillField {
        let size = Vec2::new(80.0, 30.0);
        PillField::with_pills(
            Vec2::new(800.0, 600.0),
            vec![
                WordPill::new("Lion", Vec2::new(0.0, 0.0), Vec2::ONE, size),
                WordPill::new("Tiger", Vec2::new(200.0, 100.0), Vec2::ONE, size),
            ],
            512,
        )
    }

    #[test]
    fn test_render_draws_in_collection_order() {
        let mut surface = RecordingSurface::new();
        render(&mut surface, &field(), &PillStyle::default());

        let commands = surface.commands();
        assert_eq!(commands.len(), 5);
        assert_eq!(commands[0], DrawCommand::Clear { size: Vec2::new(800.0, 600.0) });
        assert_eq!(surface.texts(), vec!["Lion", "Tiger"]);
    }

    #[test]
    fn test_label_centered_in_pill() {
        let mut surface = RecordingSurface::new();
        render(&mut surface, &field(), &PillStyle::default());

        match &surface.commands()[4] {
            DrawCommand::Text { center, font, .. } => {
                assert_eq!(*center, Vec2::new(240.0, 115.0));
                assert_eq!(font, "16px Arial");
            }
            other => panic!("expected text, got {other:?}"),
        }
    }

    #[test]
    fn test_render_is_idempotent() {
        let state = field();
        let style = PillStyle::default();
        let mut surface = RecordingSurface::new();

        render(&mut surface, &state, &style);
        let first = surface.commands().to_vec();
        render(&mut surface, &state, &style);

        assert_eq!(surface.commands(), first.as_slice());
    }

    #[test]
    fn test_render_empty_field_only_clears() {
        let state = PillField::with_pills(Vec2::new(800.0, 600.0), Vec::new(), 512);
        let mut surface = RecordingSurface::new();
        render(&mut surface, &state, &PillStyle::default());
        assert_eq!(surface.commands().len(), 1);
    }
}
