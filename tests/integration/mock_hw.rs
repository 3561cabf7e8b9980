//! Mock hardware adapter for integration tests.
//!
//! Records every actuator and display call so tests can assert on the
//! full command history without touching real GPIO/PWM/I²C registers.

use thermofan::app::events::AppEvent;
use thermofan::app::ports::{ActuatorPort, DisplayPort, EventSink, InputPort, SensorPort};
use thermofan::sensors::TemperatureReading;
use thermofan::sensors::temperature::raw_to_celsius;

// ── Hardware call record ──────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum HwCall {
    SetFan { duty: u8 },
    BuzzerOn { freq_hz: u16 },
    BuzzerOff,
    Clear,
    SetCursor { col: u8, row: u8 },
    Print(String),
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    /// Raw ADC counts the sensor will report.
    pub raw_counts: u16,
    /// Instantaneous mode-button level.
    pub mode_level: bool,
    /// Instantaneous preset-button level.
    pub preset_level: bool,

    pub calls: Vec<HwCall>,
    lines: [String; 2],
    cursor: (usize, usize),
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new(raw_counts: u16) -> Self {
        Self {
            raw_counts,
            mode_level: false,
            preset_level: false,
            calls: Vec::new(),
            lines: [String::new(), String::new()],
            cursor: (0, 0),
        }
    }

    /// Last commanded fan duty.
    pub fn fan_duty(&self) -> Option<u8> {
        self.calls.iter().rev().find_map(|c| match c {
            HwCall::SetFan { duty } => Some(*duty),
            _ => None,
        })
    }

    /// Whether the buzzer is currently commanded on.
    pub fn buzzer_sounding(&self) -> bool {
        self.calls
            .iter()
            .rev()
            .find_map(|c| match c {
                HwCall::BuzzerOn { .. } => Some(true),
                HwCall::BuzzerOff => Some(false),
                _ => None,
            })
            .unwrap_or(false)
    }

    /// Rendered display row as the LCD would show it.
    pub fn line(&self, row: usize) -> &str {
        &self.lines[row]
    }
}

impl SensorPort for MockHardware {
    fn read_temperature(&mut self) -> TemperatureReading {
        TemperatureReading {
            raw: self.raw_counts,
            celsius: raw_to_celsius(self.raw_counts),
        }
    }
}

impl InputPort for MockHardware {
    fn mode_button_level(&mut self) -> bool {
        self.mode_level
    }

    fn preset_button_level(&mut self) -> bool {
        self.preset_level
    }
}

impl ActuatorPort for MockHardware {
    fn set_fan(&mut self, duty: u8) {
        self.calls.push(HwCall::SetFan { duty });
    }

    fn buzzer_on(&mut self, freq_hz: u16) {
        self.calls.push(HwCall::BuzzerOn { freq_hz });
    }

    fn buzzer_off(&mut self) {
        self.calls.push(HwCall::BuzzerOff);
    }

    fn all_off(&mut self) {
        self.calls.push(HwCall::SetFan { duty: 0 });
        self.calls.push(HwCall::BuzzerOff);
    }
}

impl DisplayPort for MockHardware {
    fn clear(&mut self) {
        self.calls.push(HwCall::Clear);
        self.lines = [String::new(), String::new()];
        self.cursor = (0, 0);
    }

    fn set_cursor(&mut self, col: u8, row: u8) {
        self.calls.push(HwCall::SetCursor { col, row });
        if (row as usize) < 2 {
            self.cursor = (col as usize, row as usize);
        }
    }

    fn print(&mut self, text: &str) {
        self.calls.push(HwCall::Print(text.to_string()));
        let (col, row) = self.cursor;
        let line = &mut self.lines[row];
        while line.len() < col {
            line.push(' ');
        }
        line.truncate(col);
        line.push_str(text);
        self.cursor.0 = col + text.len();
    }
}

// ── RecordingSink ─────────────────────────────────────────────

pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }
}

impl Default for RecordingSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
