//! Canvas 2D drawing surface (browser only)

use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Surface;
use super::shapes::RoundedRect;
use crate::error::{GameError, Result};
use crate::settings::PillStyle;

/// Draws onto an HTML canvas through its 2D context
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| GameError::Js("canvas has no 2d context".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| GameError::Js("2d context has unexpected type".to_string()))?;
        Ok(Self { ctx })
    }

    fn trace_path(&self, rect: &RoundedRect) -> std::result::Result<(), JsValue> {
        let [tl, tr, br, bl] = rect.corners();
        let r = rect.radius as f64;

        self.ctx.begin_path();
        self.ctx.move_to(tl.x as f64 + r, tl.y as f64);
        self.ctx.arc_to(tr.x as f64, tr.y as f64, br.x as f64, br.y as f64, r)?;
        self.ctx.arc_to(br.x as f64, br.y as f64, bl.x as f64, bl.y as f64, r)?;
        self.ctx.arc_to(bl.x as f64, bl.y as f64, tl.x as f64, tl.y as f64, r)?;
        self.ctx.arc_to(tl.x as f64, tl.y as f64, tr.x as f64, tr.y as f64, r)?;
        self.ctx.close_path();
        Ok(())
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, size: Vec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn rounded_rect(&mut self, rect: &RoundedRect, style: &PillStyle) {
        self.ctx.set_fill_style_str(&style.fill);
        self.ctx.set_stroke_style_str(&style.stroke);
        self.ctx.set_line_width(style.line_width as f64);
        if let Err(e) = self.trace_path(rect) {
            log::warn!("Rounded rect path failed: {:?}", e);
            return;
        }
        self.ctx.fill();
        self.ctx.stroke();
    }

    fn text(&mut self, text: &str, center: Vec2, style: &PillStyle) {
        self.ctx.set_fill_style_str(&style.text_color);
        self.ctx.set_font(&style.font);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        if let Err(e) = self.ctx.fill_text(text, center.x as f64, center.y as f64) {
            log::warn!("fill_text failed: {:?}", e);
        }
    }
}
