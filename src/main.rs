//! ThermoFan Firmware — Main Entry Point
//!
//! Hexagonal architecture with a timer-driven control loop.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Adapters (outer ring)                    │
//! │                                                              │
//! │  HardwareAdapter                LogEventSink   Esp32Time     │
//! │  (Sensor+Input+Actuator+Display) (EventSink)   (clock)       │
//! │                                                              │
//! │  ─────────────── Port Trait Boundary ────────────────────    │
//! │                                                              │
//! │  ┌──────────────────────────────────────────────────────┐    │
//! │  │             AppService (pure logic)                  │    │
//! │  │  Mode FSM · Debouncers · Fan curve · Alarm           │    │
//! │  └──────────────────────────────────────────────────────┘    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Module declarations ───────────────────────────────────────
pub mod config;
mod alarm;
mod error;
mod events;
mod pins;

pub mod app;
mod adapters;
mod control;
mod drivers;
pub mod fsm;
mod sensors;

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use log::info;

use adapters::hardware::HardwareAdapter;
use adapters::log_sink::LogEventSink;
use adapters::time::Esp32TimeAdapter;
use app::events::AppEvent;
use app::ports::{DisplayPort, EventSink};
use app::service::AppService;
use config::SystemConfig;
use drivers::buzzer::BuzzerDriver;
use drivers::fan::FanDriver;
use drivers::lcd::LcdDriver;
use events::Event;
use sensors::TemperatureSensor;

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("ThermoFan v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Initialise hardware peripherals ────────────────────
    if let Err(e) = drivers::hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        // In production this triggers the watchdog reset after timeout.
        log::error!("HAL init failed: {} — halting", e);
        #[allow(clippy::empty_loop)]
        loop {}
    }
    let watchdog = drivers::watchdog::Watchdog::new();

    // ── 3. Configuration ──────────────────────────────────────
    // All thresholds are compile-time constants; nothing is persisted.
    let config = SystemConfig::default();

    // ── 4. Construct adapters ─────────────────────────────────
    let time = Esp32TimeAdapter::new();

    let mut lcd = LcdDriver::new();
    if let Err(e) = lcd.init() {
        log::warn!("LCD init failed ({}), continuing without display", e);
    }

    let mut hw = HardwareAdapter::new(
        TemperatureSensor::new(pins::TEMP_ADC_GPIO),
        FanDriver::new(),
        BuzzerDriver::new(),
        lcd,
    );

    // Boot splash while the sensor settles.
    hw.set_cursor(0, 0);
    hw.print("Iniciando...");

    let mut sink = LogEventSink::new();

    // ── 5. Construct app service ──────────────────────────────
    let mut app = AppService::new(config.clone());
    app.start(&mut sink);

    // ── 6. Tick timers ────────────────────────────────────────
    drivers::hw_timer::start_timers(
        config.control_loop_interval_ms,
        config.telemetry_interval_secs,
    );

    info!("System ready. Entering control loop.");

    // ── 7. Control loop ───────────────────────────────────────
    #[cfg(not(target_os = "espidf"))]
    let ticks_per_telemetry = (config.telemetry_interval_secs as u64 * 1000
        / config.control_loop_interval_ms as u64)
        .max(1);
    #[cfg(not(target_os = "espidf"))]
    let mut telemetry_ticks: u64 = 0;

    loop {
        // Simulate the timer cadence via sleep on non-espidf targets.
        // On real hardware, esp_timer callbacks feed the event queue and
        // the loop just drains it.
        #[cfg(not(target_os = "espidf"))]
        {
            std::thread::sleep(std::time::Duration::from_millis(
                config.control_loop_interval_ms as u64,
            ));
            events::push_event(Event::ControlTick);
            telemetry_ticks += 1;
            if telemetry_ticks >= ticks_per_telemetry {
                events::push_event(Event::TelemetryTick);
                telemetry_ticks = 0;
            }
        }
        #[cfg(target_os = "espidf")]
        esp_idf_hal::delay::FreeRtos::delay_ms(10);

        // Process all pending events.
        events::drain_events(|event| match event {
            Event::ControlTick => {
                app.tick(time.uptime_ms(), &mut hw, &mut sink);
            }
            Event::TelemetryTick => {
                sink.emit(&AppEvent::Telemetry(app.build_telemetry()));
            }
        });

        // Feed watchdog on every iteration.
        watchdog.feed();
    }
}
