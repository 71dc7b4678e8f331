use anyhow::anyhow;
use app_core::{
    for_each_connection, ProjectedPoint, CONNECTION_DISTANCE, GLOW_BLUR, GLOW_THRESHOLD, NET_ALPHA,
};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas2D drawing surface for the backdrop.
pub struct Surface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    width: u32,
    height: u32,
}

impl Surface {
    /// Acquire the 2D context. Environments without one fail here; the
    /// caller treats that as feature-fatal and leaves the page static.
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow!("get_context error: {:?}", e))?
            .ok_or_else(|| anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| anyhow!("unexpected rendering context type"))?;
        let width = canvas.width();
        let height = canvas.height();
        Ok(Self {
            canvas,
            ctx,
            width,
            height,
        })
    }

    /// Match the backing store to the viewport; no-op while unchanged.
    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.canvas.set_width(width);
            self.canvas.set_height(height);
            self.width = width;
            self.height = height;
        }
    }

    pub fn clear(&self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
    }

    /// Net lines first so they sit beneath the particles. `points` must be
    /// sorted by screen x.
    pub fn draw_net(&self, points: &[ProjectedPoint]) {
        let ctx = &self.ctx;
        ctx.set_line_width(1.0);
        for_each_connection(points, CONNECTION_DISTANCE, |i, j| {
            let a = &points[i];
            let b = &points[j];
            ctx.set_global_alpha((a.alpha.min(b.alpha) * NET_ALPHA) as f64);
            ctx.set_stroke_style_str(&css_color(a.color));
            ctx.begin_path();
            ctx.move_to(a.x as f64, a.y as f64);
            ctx.line_to(b.x as f64, b.y as f64);
            ctx.stroke();
        });
        ctx.set_global_alpha(1.0);
    }

    pub fn draw_particles(&self, points: &[ProjectedPoint], hover_factor: f32) {
        let ctx = &self.ctx;
        let glow_enabled = hover_factor > GLOW_THRESHOLD;
        for p in points {
            let css = css_color(p.color);
            ctx.set_global_alpha(p.alpha as f64);
            if glow_enabled && p.glow > 0 {
                ctx.set_shadow_blur((GLOW_BLUR * hover_factor * p.glow as f32) as f64);
                ctx.set_shadow_color(&css);
            }
            ctx.set_fill_style_str(&css);
            let size = p.size as f64;
            ctx.fill_rect(p.x as f64 - size / 2.0, p.y as f64 - size / 2.0, size, size);
            if glow_enabled && p.glow > 0 {
                // Shadow state would leak onto every later draw otherwise.
                ctx.set_shadow_blur(0.0);
            }
        }
        ctx.set_global_alpha(1.0);
        ctx.set_shadow_blur(0.0);
    }
}

#[inline]
fn css_color(c: [u8; 3]) -> String {
    format!("rgb({}, {}, {})", c[0], c[1], c[2])
}
