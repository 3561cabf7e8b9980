//! GPIO / peripheral pin assignments for the ThermoFan controller board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Fan output (N-channel MOSFET low-side driver)
// ---------------------------------------------------------------------------

/// LEDC PWM channel for fan speed control.
pub const FAN_PWM_GPIO: i32 = 1;

// ---------------------------------------------------------------------------
// Buzzer (passive piezo, driven by a square wave)
// ---------------------------------------------------------------------------

/// LEDC tone output for the over-temperature alarm.
pub const BUZZER_GPIO: i32 = 2;

// ---------------------------------------------------------------------------
// Temperature sensor — Analog (ADC1)
// ---------------------------------------------------------------------------

/// TMP36-style analog temperature sensor, voltage output to ADC.
/// ADC1 channel 8 (GPIO 9 on ESP32-S3).
pub const TEMP_ADC_GPIO: i32 = 9;

// ---------------------------------------------------------------------------
// Push-buttons (active HIGH with pull-down)
// ---------------------------------------------------------------------------

/// Mode button: toggles Automatic / Manual.
pub const MODE_BUTTON_GPIO: i32 = 6;
/// Preset button: cycles the manual speed preset.
pub const PRESET_BUTTON_GPIO: i32 = 7;

// ---------------------------------------------------------------------------
// I²C bus (16×2 character LCD on a PCF8574 backpack)
// ---------------------------------------------------------------------------

pub const I2C_SDA_GPIO: i32 = 14;
pub const I2C_SCL_GPIO: i32 = 15;

/// PCF8574 backpack address (A0–A2 jumpers open).
pub const LCD_I2C_ADDR: u8 = 0x27;

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// LEDC timer resolution (bits).  8-bit gives 0 – 255 duty levels.
pub const PWM_RESOLUTION_BITS: u32 = 8;
/// LEDC base frequency for the fan (25 kHz — inaudible).
pub const FAN_PWM_FREQ_HZ: u32 = 25_000;
/// LEDC start-up frequency for the buzzer timer; retuned per `tone()` call.
pub const BUZZER_PWM_FREQ_HZ: u32 = 1_000;
