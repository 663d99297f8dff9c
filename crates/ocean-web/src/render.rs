use ocean_core::{Sprite, Surface};
use std::f64::consts::TAU;
use web_sys as web;

/// Browser 2D canvas as a particle [`Surface`].
///
/// The canvas clamps `rgba` alpha to 1 on its own, so sprites brighter than
/// fully opaque simply saturate.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_glow_circle(&mut self, sprite: &Sprite) {
        self.ctx.begin_path();
        _ = self.ctx.arc(
            sprite.center.x as f64,
            sprite.center.y as f64,
            sprite.radius as f64,
            0.0,
            TAU,
        );
        self.ctx.set_fill_style_str(&sprite.fill_style());
        self.ctx.set_shadow_blur(sprite.blur as f64);
        self.ctx.set_shadow_color(sprite.glow_color);
        self.ctx.fill();
    }
}
