//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the temperature sensor and all actuator/display drivers, exposing
//! them through [`SensorPort`], [`InputPort`], [`ActuatorPort`], and
//! [`DisplayPort`].  This is the only module in the system that touches
//! actual hardware.  On non-espidf targets, the underlying drivers use
//! cfg-gated simulation stubs.

use crate::app::ports::{ActuatorPort, DisplayPort, InputPort, SensorPort};
use crate::drivers::buzzer::BuzzerDriver;
use crate::drivers::fan::FanDriver;
use crate::drivers::hw_init;
use crate::drivers::lcd::LcdDriver;
use crate::pins;
use crate::sensors::{TemperatureReading, TemperatureSensor};

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    temperature: TemperatureSensor,
    fan: FanDriver,
    buzzer: BuzzerDriver,
    lcd: LcdDriver,
}

impl HardwareAdapter {
    pub fn new(
        temperature: TemperatureSensor,
        fan: FanDriver,
        buzzer: BuzzerDriver,
        lcd: LcdDriver,
    ) -> Self {
        Self {
            temperature,
            fan,
            buzzer,
            lcd,
        }
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for HardwareAdapter {
    fn read_temperature(&mut self) -> TemperatureReading {
        self.temperature.read()
    }
}

// ── InputPort implementation ──────────────────────────────────

impl InputPort for HardwareAdapter {
    fn mode_button_level(&mut self) -> bool {
        hw_init::gpio_read(pins::MODE_BUTTON_GPIO)
    }

    fn preset_button_level(&mut self) -> bool {
        hw_init::gpio_read(pins::PRESET_BUTTON_GPIO)
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl ActuatorPort for HardwareAdapter {
    fn set_fan(&mut self, duty: u8) {
        self.fan.set(duty);
    }

    fn buzzer_on(&mut self, freq_hz: u16) {
        self.buzzer.tone(freq_hz);
    }

    fn buzzer_off(&mut self) {
        self.buzzer.silence();
    }

    fn all_off(&mut self) {
        self.fan.stop();
        self.buzzer.silence();
    }
}

// ── DisplayPort implementation ────────────────────────────────

impl DisplayPort for HardwareAdapter {
    fn clear(&mut self) {
        self.lcd.clear();
    }

    fn set_cursor(&mut self, col: u8, row: u8) {
        self.lcd.set_cursor(col, row);
    }

    fn print(&mut self, text: &str) {
        self.lcd.print(text);
    }
}
