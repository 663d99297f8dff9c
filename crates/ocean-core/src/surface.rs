use crate::field::{FieldParams, Particle, ParticleField};
use crate::intensity::Intensity;
use glam::Vec2;

/// One glowing dot, ready to be drawn.
///
/// `alpha` is `opacity * intensity` and is not clamped here; it can exceed 1
/// at scanning intensity. Surfaces that need a bounded value clamp on output.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub center: Vec2,
    pub radius: f32,
    pub alpha: f32,
    pub blur: f32,
    pub color_rgb: [u8; 3],
    pub glow_color: &'static str,
}

impl Sprite {
    pub fn for_particle(p: &Particle, params: &FieldParams, intensity: Intensity) -> Self {
        Self {
            center: p.position,
            radius: p.size,
            alpha: p.opacity * intensity.get(),
            blur: params.glow_blur * intensity.get(),
            color_rgb: params.color_rgb,
            glow_color: params.glow_color,
        }
    }

    /// CSS fill colour, e.g. `rgba(34, 211, 238, 0.5)`.
    pub fn fill_style(&self) -> String {
        let [r, g, b] = self.color_rgb;
        format!("rgba({}, {}, {}, {})", r, g, b, self.alpha)
    }
}

/// Raster target the field is drawn into.
pub trait Surface {
    fn clear(&mut self, width: f32, height: f32);
    fn fill_glow_circle(&mut self, sprite: &Sprite);
}

/// Clear the surface, then draw every particle in order.
pub fn render<S: Surface + ?Sized>(field: &ParticleField, intensity: Intensity, surface: &mut S) {
    surface.clear(field.width(), field.height());
    for p in &field.particles {
        surface.fill_glow_circle(&Sprite::for_particle(p, &field.params, intensity));
    }
}
