//! Page mode: input form, scanning animation, results.
//!
//! The page only ever moves forward through `Input -> Scanning -> Results`
//! and then back to `Input`. Scanning ends after a single fixed delay; the
//! mode also decides how lively the background is.

use crate::constants::{IDLE_INTENSITY, SCANNING_INTENSITY, SCAN_DELAY_MS};
use crate::error::{OceanError, Result};
use crate::intensity::Intensity;
use std::fmt;
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppMode {
    #[default]
    Input,
    Scanning,
    Results,
}

impl AppMode {
    pub const ALL: [AppMode; 3] = [AppMode::Input, AppMode::Scanning, AppMode::Results];

    pub fn as_str(self) -> &'static str {
        match self {
            AppMode::Input => "input",
            AppMode::Scanning => "scanning",
            AppMode::Results => "results",
        }
    }

    /// DOM id of the section shown in this mode.
    pub fn view_id(self) -> &'static str {
        match self {
            AppMode::Input => "input-view",
            AppMode::Scanning => "scanning-view",
            AppMode::Results => "results-view",
        }
    }

    pub fn background_intensity(self) -> Intensity {
        let value = match self {
            AppMode::Scanning => SCANNING_INTENSITY,
            AppMode::Input | AppMode::Results => IDLE_INTENSITY,
        };
        Intensity::new(value).unwrap_or_default()
    }
}

impl fmt::Display for AppMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeAction {
    BeginScan,
    FinishScan,
    AnalyzeAnother,
}

impl fmt::Display for ModeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ModeAction::BeginScan => "begin a scan",
            ModeAction::FinishScan => "finish a scan",
            ModeAction::AnalyzeAnother => "analyze another",
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    mode: AppMode,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn begin_scan(&mut self) -> Result<AppMode> {
        self.transition(ModeAction::BeginScan, AppMode::Input, AppMode::Scanning)
    }

    pub fn finish_scan(&mut self) -> Result<AppMode> {
        self.transition(ModeAction::FinishScan, AppMode::Scanning, AppMode::Results)
    }

    pub fn analyze_another(&mut self) -> Result<AppMode> {
        self.transition(ModeAction::AnalyzeAnother, AppMode::Results, AppMode::Input)
    }

    fn transition(&mut self, action: ModeAction, from: AppMode, to: AppMode) -> Result<AppMode> {
        if self.mode != from {
            return Err(OceanError::InvalidTransition {
                from: self.mode,
                action,
            });
        }
        log::info!("[mode] {} -> {}", from, to);
        self.mode = to;
        Ok(to)
    }
}

#[inline]
pub fn scan_delay() -> Duration {
    Duration::from_millis(SCAN_DELAY_MS as u64)
}
