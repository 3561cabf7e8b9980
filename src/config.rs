//! System configuration parameters
//!
//! All tunable parameters for the ThermoFan controller.  There is no runtime
//! or persisted configuration source — the firmware always boots with these
//! defaults; the struct exists so every threshold lives in one place and
//! flows by value into the control core.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Automatic mode fan curve ---
    /// Lower end of the calibration range (Celsius) — maps to duty 0.
    pub auto_min_temp_c: f32,
    /// Upper end of the calibration range (Celsius) — maps to duty 255.
    pub auto_max_temp_c: f32,

    // --- Manual presets (8-bit PWM duty) ---
    /// "Normal" preset duty.
    pub preset_duty_normal: u8,
    /// "Frio" (cold) preset duty — low speed.
    pub preset_duty_cold: u8,
    /// "Quente" (hot) preset duty — full speed.
    pub preset_duty_hot: u8,

    // --- Alarm ---
    /// Temperature (Celsius) above which the buzzer sounds.  Strict
    /// greater-than, no hysteresis band.
    pub alarm_threshold_c: f32,
    /// Buzzer tone frequency while the alarm is active.
    pub buzzer_freq_hz: u16,

    // --- Input ---
    /// Settle window after a debounced button edge; further edges on the
    /// same button are ignored until it elapses.
    pub debounce_settle_ms: u32,

    // --- Timing ---
    /// Control loop interval (milliseconds).
    pub control_loop_interval_ms: u32,
    /// Telemetry report interval (seconds).
    pub telemetry_interval_secs: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Fan curve
            auto_min_temp_c: 20.0,
            auto_max_temp_c: 50.0,

            // Presets (calibrated duty values)
            preset_duty_normal: 170,
            preset_duty_cold: 85,
            preset_duty_hot: 255,

            // Alarm
            alarm_threshold_c: 40.0,
            buzzer_freq_hz: 1000,

            // Input
            debounce_settle_ms: 50,

            // Timing
            control_loop_interval_ms: 500, // 2 Hz
            telemetry_interval_secs: 10,
        }
    }
}
