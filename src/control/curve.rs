//! Fan duty-cycle mapping.
//!
//! Automatic mode maps temperature linearly from the calibration range
//! onto the full 8-bit PWM range and clamps; Manual mode is a straight
//! preset lookup.  Output is freshly derived every tick — no smoothing or
//! rate limiting, so the duty can jump discontinuously when the
//! temperature moves fast or the mode switches.

use crate::config::SystemConfig;
use crate::fsm::context::Preset;

/// Linear temperature → duty map with clamping, plus the manual preset table.
pub struct FanCurve {
    min_c: f32,
    max_c: f32,
    duty_normal: u8,
    duty_cold: u8,
    duty_hot: u8,
}

impl FanCurve {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            min_c: config.auto_min_temp_c,
            max_c: config.auto_max_temp_c,
            duty_normal: config.preset_duty_normal,
            duty_cold: config.preset_duty_cold,
            duty_hot: config.preset_duty_hot,
        }
    }

    /// Automatic-mode duty: interpolate `celsius` from `[min_c, max_c]`
    /// onto `[0, 255]`.  Out-of-range temperatures clamp to the ends —
    /// this is the only place out-of-calibration readings are bounded.
    pub fn auto_duty(&self, celsius: f32) -> u8 {
        let duty = (celsius - self.min_c) * 255.0 / (self.max_c - self.min_c);
        duty.clamp(0.0, 255.0) as u8
    }

    /// Manual-mode duty: fixed lookup, independent of temperature.
    pub fn preset_duty(&self, preset: Preset) -> u8 {
        match preset {
            Preset::Normal => self.duty_normal,
            Preset::Cold => self.duty_cold,
            Preset::Hot => self.duty_hot,
        }
    }
}
