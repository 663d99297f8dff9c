//! Drifting particle field.
//!
//! A fixed population of points rises slowly through a rectangular surface,
//! gets pushed away from the pointer when it comes within
//! [`FieldParams::repel_radius`], and re-enters below the bottom edge once it
//! has drifted far enough past the top. Particles are never created or
//! destroyed after construction; the count stays fixed for the life of the
//! field.

use crate::constants::*;
use crate::intensity::Intensity;
use glam::Vec2;
use rand::prelude::*;
use std::ops::Range;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub size: f32,
    pub speed_y: f32,
    pub opacity: f32,
}

#[derive(Clone, Debug)]
pub struct FieldParams {
    pub particle_count: usize,
    pub size: Range<f32>,
    pub speed_y: Range<f32>,
    pub opacity: Range<f32>,
    pub repel_radius: f32,
    pub repel_strength: f32,
    pub wrap_margin: f32,
    pub glow_blur: f32,
    pub color_rgb: [u8; 3],
    pub glow_color: &'static str,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            size: SIZE_MIN..SIZE_MAX,
            speed_y: SPEED_MIN..SPEED_MAX,
            opacity: OPACITY_MIN..OPACITY_MAX,
            repel_radius: REPEL_RADIUS,
            repel_strength: REPEL_STRENGTH,
            wrap_margin: WRAP_MARGIN,
            glow_blur: GLOW_BLUR_BASE,
            color_rgb: PARTICLE_RGB,
            glow_color: GLOW_COLOR,
        }
    }
}

pub struct ParticleField {
    pub particles: Vec<Particle>,
    pub params: FieldParams,
    width: f32,
    height: f32,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(params: FieldParams, width: f32, height: f32, seed: u64) -> Self {
        Self::with_rng(params, width, height, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(params: FieldParams, width: f32, height: f32, mut rng: StdRng) -> Self {
        let particles = (0..params.particle_count)
            .map(|_| Particle {
                position: Vec2::new(
                    uniform(&mut rng, &(0.0..width)),
                    uniform(&mut rng, &(0.0..height)),
                ),
                size: uniform(&mut rng, &params.size),
                speed_y: uniform(&mut rng, &params.speed_y),
                opacity: uniform(&mut rng, &params.opacity),
            })
            .collect::<Vec<_>>();
        log::debug!(
            "[field] spawned {} particles on {:.0}x{:.0}",
            particles.len(),
            width,
            height
        );
        Self {
            particles,
            params,
            width,
            height,
            rng,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Track new surface bounds. Existing positions are left alone; anything
    /// now outside the surface drifts back in through the wrap rule.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self, pointer: Vec2, intensity: Intensity) {
        for i in 0..self.particles.len() {
            self.step_particle(i, pointer, intensity);
        }
    }

    fn step_particle(&mut self, index: usize, pointer: Vec2, intensity: Intensity) {
        let push = repulsion(
            self.particles[index].position,
            pointer,
            self.params.repel_radius,
            self.params.repel_strength,
        );
        let p = &mut self.particles[index];
        p.position += push;
        p.position.y -= p.speed_y * intensity.get();

        if p.position.y < -self.params.wrap_margin {
            p.position.y = self.height + self.params.wrap_margin;
            p.position.x = uniform(&mut self.rng, &(0.0..self.width));
        }
    }
}

/// Displacement pushing `position` directly away from `pointer`.
///
/// Zero at or beyond `radius`, growing linearly to `strength` as the distance
/// shrinks. A pointer sitting exactly on the particle has no direction, so
/// the distance is taken as 1 and the result is zero rather than NaN.
#[inline]
pub fn repulsion(position: Vec2, pointer: Vec2, radius: f32, strength: f32) -> Vec2 {
    let delta = pointer - position;
    let mut distance = delta.length();
    if distance == 0.0 {
        distance = 1.0;
    }
    if distance >= radius {
        return Vec2::ZERO;
    }
    let force = (radius - distance) / radius;
    -(delta / distance) * force * strength
}

// Scaled unit draw instead of gen_range: an empty range (zero-sized surface)
// yields `start` instead of panicking.
#[inline]
fn uniform(rng: &mut StdRng, range: &Range<f32>) -> f32 {
    range.start + rng.gen::<f32>() * (range.end - range.start)
}
