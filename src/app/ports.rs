//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (sensor, buttons, actuators, display, event sinks)
//! implement these traits.  The [`AppService`](super::service::AppService)
//! consumes them via generics, so the domain core never touches hardware
//! directly.
//!
//! Every port method is infallible: on this target a failed register or
//! bus access is logged inside the adapter and the loop carries on — there
//! is no recoverable-error path in a control tick.

use crate::sensors::TemperatureReading;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the domain calls this to obtain the temperature sample.
pub trait SensorPort {
    /// One analog sample, converted through the fixed calibration formula.
    fn read_temperature(&mut self) -> TemperatureReading;
}

// ───────────────────────────────────────────────────────────────
// Input port (driven adapter: buttons → domain)
// ───────────────────────────────────────────────────────────────

/// Instantaneous digital levels of the two push-buttons.
/// Debouncing happens in the domain; adapters return the raw read.
pub trait InputPort {
    /// Mode button level (`true` = pressed).
    fn mode_button_level(&mut self) -> bool;

    /// Preset button level (`true` = pressed).
    fn preset_button_level(&mut self) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command actuators.
pub trait ActuatorPort {
    /// Set fan PWM duty (0 – 255).
    fn set_fan(&mut self, duty: u8);

    /// Sound the buzzer at the given frequency until silenced.
    fn buzzer_on(&mut self, freq_hz: u16);

    /// Silence the buzzer.
    fn buzzer_off(&mut self);

    /// Kill all actuators (fan, buzzer) — safe shutdown.
    fn all_off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → character LCD)
// ───────────────────────────────────────────────────────────────

/// Two-line fixed-width text output.  The domain renders by clearing,
/// positioning, and printing — nothing else.
pub trait DisplayPort {
    fn clear(&mut self);
    fn set_cursor(&mut self, col: u8, row: u8);
    fn print(&mut self, text: &str);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial log in
/// production; a recording vector in tests).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
