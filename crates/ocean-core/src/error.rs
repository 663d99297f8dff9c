use crate::app::{AppMode, ModeAction};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OceanError {
    #[error("intensity must be a finite positive number, got {0}")]
    InvalidIntensity(f32),
    #[error("cannot {action} while in {from} mode")]
    InvalidTransition { from: AppMode, action: ModeAction },
}

pub type Result<T> = std::result::Result<T, OceanError>;
