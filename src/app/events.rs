//! Outbound application events.
//!
//! The [`AppService`](super::service::AppService) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them — the firmware logs them to serial,
//! tests record them.

use crate::fsm::StateId;
use crate::fsm::context::Preset;

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Periodic telemetry snapshot.
    Telemetry(TelemetryData),

    /// The operating mode toggled.
    ModeChanged { from: StateId, to: StateId },

    /// The operator advanced the manual preset.
    PresetChanged(Preset),

    /// Temperature crossed above the alarm threshold.
    AlarmRaised { celsius: f32 },

    /// Temperature dropped back to or below the alarm threshold.
    AlarmCleared { celsius: f32 },

    /// The application service has started (carries initial mode).
    Started(StateId),
}

/// A point-in-time telemetry snapshot suitable for logging.
#[derive(Debug, Clone)]
pub struct TelemetryData {
    pub mode: StateId,
    pub preset: Preset,
    pub temp_raw: u16,
    pub celsius: f32,
    pub fan_duty: u8,
    pub alarm_on: bool,
}
