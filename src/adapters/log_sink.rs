//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (which goes to UART / USB-CDC in production).

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Telemetry(t) => {
                info!(
                    "TELEM | mode={:?} preset={} | raw={} T={:.2}\u{00b0}C | fan={} | alarm={}",
                    t.mode,
                    t.preset.label(),
                    t.temp_raw,
                    t.celsius,
                    t.fan_duty,
                    if t.alarm_on { "ON" } else { "off" },
                );
            }
            AppEvent::ModeChanged { from, to } => {
                info!("MODE | {:?} -> {:?}", from, to);
            }
            AppEvent::PresetChanged(preset) => {
                info!("PRESET | {}", preset.label());
            }
            AppEvent::AlarmRaised { celsius } => {
                info!("ALARM | raised at {:.2}\u{00b0}C", celsius);
            }
            AppEvent::AlarmCleared { celsius } => {
                info!("ALARM | cleared at {:.2}\u{00b0}C", celsius);
            }
            AppEvent::Started(state) => {
                info!("START | initial_mode={:?}", state);
            }
        }
    }
}
