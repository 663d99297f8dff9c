//! Mounted background instance.
//!
//! Owns everything a running background needs between callbacks: the field,
//! the last pointer position and the current intensity. The platform layer
//! forwards resize, pointer and frame callbacks here and calls
//! [`Background::teardown`] when the view goes away. Once torn down, every
//! callback is ignored, so a frame that was already queued cannot touch the
//! surface.

use crate::field::{FieldParams, ParticleField};
use crate::intensity::Intensity;
use crate::surface::{self, Surface};
use glam::Vec2;
use rand::rngs::StdRng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// Frame drawn; schedule another.
    Continue,
    /// Background torn down; nothing drawn, do not reschedule.
    Stopped,
}

pub struct Background {
    field: ParticleField,
    pointer: Vec2,
    intensity: Intensity,
    active: bool,
}

impl Background {
    pub fn mount(
        params: FieldParams,
        width: f32,
        height: f32,
        intensity: Intensity,
        rng: StdRng,
    ) -> Self {
        log::debug!(
            "[background] mount {:.0}x{:.0} intensity={:.2}",
            width,
            height,
            intensity.get()
        );
        Self {
            field: ParticleField::with_rng(params, width, height, rng),
            pointer: Vec2::ZERO,
            intensity,
            active: true,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[inline]
    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    #[inline]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    #[inline]
    pub fn intensity(&self) -> Intensity {
        self.intensity
    }

    pub fn set_intensity(&mut self, intensity: Intensity) {
        self.intensity = intensity;
    }

    pub fn on_resize(&mut self, width: f32, height: f32) {
        if self.active {
            self.field.resize(width, height);
        }
    }

    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        if self.active {
            self.pointer = Vec2::new(x, y);
        }
    }

    pub fn on_frame<S: Surface + ?Sized>(&mut self, surface: &mut S) -> FrameOutcome {
        if !self.active {
            return FrameOutcome::Stopped;
        }
        self.field.step(self.pointer, self.intensity);
        surface::render(&self.field, self.intensity, surface);
        FrameOutcome::Continue
    }

    pub fn teardown(&mut self) {
        if self.active {
            self.active = false;
            log::debug!("[background] teardown");
        }
    }
}
