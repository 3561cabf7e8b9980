//! Application service — the hexagonal core.
//!
//! [`AppService`] owns the mode FSM, the two button debouncers, the fan
//! curve, the alarm monitor, and the shared context.  It exposes a clean,
//! hardware-agnostic API.  All I/O flows through port traits injected at
//! call sites, making the entire service testable with mock adapters.
//!
//! ```text
//!   SensorPort ──▶ ┌────────────────────────┐ ──▶ ActuatorPort
//!   InputPort  ──▶ │       AppService       │ ──▶ DisplayPort
//!                  │  FSM · Curve · Alarm   │ ──▶ EventSink
//!                  └────────────────────────┘
//! ```

use core::fmt::Write;

use log::info;

use crate::alarm::AlarmMonitor;
use crate::config::SystemConfig;
use crate::control::curve::FanCurve;
use crate::drivers::button::DebouncedButton;
use crate::fsm::context::{FsmContext, InputEdges, Preset, SensorSnapshot};
use crate::fsm::states::build_state_table;
use crate::fsm::{Fsm, StateId};

use super::events::{AppEvent, TelemetryData};
use super::ports::{ActuatorPort, DisplayPort, EventSink, InputPort, SensorPort};

// ───────────────────────────────────────────────────────────────
// AppService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct AppService {
    fsm: Fsm,
    ctx: FsmContext,
    /// Duty-cycle mapping for both modes.
    curve: FanCurve,
    /// Over-temperature threshold comparator.
    alarm: AlarmMonitor,
    /// Debouncer for the Auto/Manual toggle button.
    mode_button: DebouncedButton,
    /// Debouncer for the preset-cycle button.
    preset_button: DebouncedButton,
    tick_count: u64,
}

impl AppService {
    /// Construct the service from configuration.
    ///
    /// Does **not** start the FSM — call [`Self::start`] next.
    pub fn new(config: SystemConfig) -> Self {
        let curve = FanCurve::new(&config);
        let alarm = AlarmMonitor::new(&config);
        let mode_button = DebouncedButton::new(config.debounce_settle_ms);
        let preset_button = DebouncedButton::new(config.debounce_settle_ms);
        let ctx = FsmContext::new(config);
        let fsm = Fsm::new(build_state_table(), StateId::Automatic);

        Self {
            fsm,
            ctx,
            curve,
            alarm,
            mode_button,
            preset_button,
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Start the FSM in its initial state (Automatic).
    pub fn start(&mut self, sink: &mut impl EventSink) {
        self.fsm.start(&mut self.ctx);
        sink.emit(&AppEvent::Started(self.fsm.current_state()));
        info!("AppService started in {:?}", self.fsm.current_state());
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full control cycle.
    ///
    /// Per tick, in order: poll buttons → read temperature → mode FSM →
    /// preset → fan duty → alarm → display.  Data flows strictly forward;
    /// nothing downstream feeds back into state within a tick.
    ///
    /// The `hw` parameter satisfies all four hardware ports — this avoids
    /// a double mutable borrow while keeping the port boundary explicit.
    /// `now_ms` is monotonic milliseconds, used only by the debouncers.
    pub fn tick(
        &mut self,
        now_ms: u32,
        hw: &mut (impl SensorPort + InputPort + ActuatorPort + DisplayPort),
        sink: &mut impl EventSink,
    ) {
        self.tick_count += 1;
        let prev_state = self.fsm.current_state();
        let prev_preset = self.ctx.preset;
        let alarm_was_on = self.alarm.is_active();

        // 1. Poll both buttons unconditionally — the preset debouncer must
        //    track its level every tick even while Automatic, or a stale
        //    edge would fire the moment Manual is re-entered.
        let mode_pressed = self.mode_button.update(hw.mode_button_level(), now_ms);
        let preset_pressed = self.preset_button.update(hw.preset_button_level(), now_ms);
        self.ctx.inputs = InputEdges {
            mode_pressed,
            preset_pressed,
        };

        // 2. Read temperature.  Out-of-calibration values pass through.
        let reading = hw.read_temperature();
        self.ctx.sensors = SensorSnapshot {
            temp_raw: reading.raw,
            celsius: reading.celsius,
        };

        // 3. Mode FSM tick — applies the toggle, runs enter hooks.
        self.fsm.tick(&mut self.ctx);

        // 4. Preset: advance while Manual, pinned to Normal while
        //    Automatic (re-applied every tick, not just on transition).
        //    A press in the same tick as the switch into Manual counts.
        match self.fsm.current_state() {
            StateId::Manual => {
                if self.ctx.inputs.preset_pressed {
                    self.ctx.preset = self.ctx.preset.next();
                    info!("Preset advanced to {}", self.ctx.preset.label());
                }
            }
            StateId::Automatic => self.ctx.preset = Preset::Normal,
        }

        // 5. Fan duty — freshly derived, no smoothing.
        let duty = match self.fsm.current_state() {
            StateId::Automatic => self.curve.auto_duty(self.ctx.sensors.celsius),
            StateId::Manual => self.curve.preset_duty(self.ctx.preset),
        };
        self.ctx.commands.fan_duty = duty;
        hw.set_fan(duty);

        // 6. Alarm — re-applied to the buzzer unconditionally.
        let alarm_on = self.alarm.evaluate(self.ctx.sensors.celsius);
        self.ctx.commands.alarm_on = alarm_on;
        if alarm_on {
            hw.buzzer_on(self.ctx.config.buzzer_freq_hz);
        } else {
            hw.buzzer_off();
        }

        // 7. Display snapshot.
        render_display(
            hw,
            self.ctx.sensors.celsius,
            self.fsm.current_state(),
            self.ctx.preset,
        );

        // 8. Structured events for the sink.
        let new_state = self.fsm.current_state();
        if new_state != prev_state {
            sink.emit(&AppEvent::ModeChanged {
                from: prev_state,
                to: new_state,
            });
        }
        if new_state == StateId::Manual && self.ctx.preset != prev_preset {
            sink.emit(&AppEvent::PresetChanged(self.ctx.preset));
        }
        if alarm_on != alarm_was_on {
            let celsius = self.ctx.sensors.celsius;
            let event = if alarm_on {
                AppEvent::AlarmRaised { celsius }
            } else {
                AppEvent::AlarmCleared { celsius }
            };
            sink.emit(&event);
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Build a telemetry snapshot from the current context.
    pub fn build_telemetry(&self) -> TelemetryData {
        TelemetryData {
            mode: self.fsm.current_state(),
            preset: self.ctx.preset,
            temp_raw: self.ctx.sensors.temp_raw,
            celsius: self.ctx.sensors.celsius,
            fan_duty: self.ctx.commands.fan_duty,
            alarm_on: self.ctx.commands.alarm_on,
        }
    }

    /// Current operating mode.
    pub fn state(&self) -> StateId {
        self.fsm.current_state()
    }

    /// Current manual preset (Normal whenever Automatic).
    pub fn preset(&self) -> Preset {
        self.ctx.preset
    }

    /// Total control ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }
}

// ───────────────────────────────────────────────────────────────
// Display rendering
// ───────────────────────────────────────────────────────────────

/// Line 1: the temperature, exactly as converted (may be negative or far
/// out of range).
pub fn format_temperature_line(celsius: f32) -> heapless::String<16> {
    let mut line = heapless::String::new();
    let _ = write!(line, "Temp: {:.2} C", celsius);
    line
}

/// Line 2: the mode, with the preset label while Manual.
pub fn format_mode_line(mode: StateId, preset: Preset) -> heapless::String<16> {
    let mut line = heapless::String::new();
    let _ = match mode {
        StateId::Automatic => write!(line, "Modo: Auto"),
        StateId::Manual => write!(line, "Manual: {}", preset.label()),
    };
    line
}

fn render_display(hw: &mut impl DisplayPort, celsius: f32, mode: StateId, preset: Preset) {
    hw.clear();
    hw.set_cursor(0, 0);
    hw.print(&format_temperature_line(celsius));
    hw.set_cursor(0, 1);
    hw.print(&format_mode_line(mode, preset));
}
