use crate::constants::IDLE_INTENSITY;
use crate::error::{OceanError, Result};

/// Linear multiplier applied to drift speed, glow blur and alpha.
///
/// Always finite and strictly positive. Values above 1 are allowed and make
/// the field brighter and faster (the scanning mode uses 1.5).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Intensity(f32);

impl Intensity {
    pub const IDLE: Intensity = Intensity(IDLE_INTENSITY);

    pub fn new(value: f32) -> Result<Self> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(OceanError::InvalidIntensity(value))
        }
    }

    #[inline]
    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self::IDLE
    }
}

impl TryFrom<f32> for Intensity {
    type Error = OceanError;

    fn try_from(value: f32) -> Result<Self> {
        Self::new(value)
    }
}
