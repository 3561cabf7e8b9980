//! Shared mutable context threaded through every FSM handler.
//!
//! `FsmContext` is the single struct that state handlers read from and
//! write to.  It contains the debounced input edges for this tick, the
//! latest temperature snapshot, the actuator command outputs, the manual
//! preset, timing information, and configuration.

use serde::{Deserialize, Serialize};

use crate::config::SystemConfig;

// ---------------------------------------------------------------------------
// Manual speed preset
// ---------------------------------------------------------------------------

/// One of the three fixed manual fan-speed levels.
///
/// Meaningful only while the controller is in `Manual`; pinned back to
/// `Normal` whenever the controller is in `Automatic`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Preset {
    #[default]
    Normal = 0,
    Cold = 1,
    Hot = 2,
}

impl Preset {
    /// Total number of presets.
    pub const COUNT: usize = 3;

    /// Advance cyclically: Normal → Cold → Hot → Normal.
    pub fn next(self) -> Self {
        match self {
            Self::Normal => Self::Cold,
            Self::Cold => Self::Hot,
            Self::Hot => Self::Normal,
        }
    }

    /// Zero-based index, always in `0..Preset::COUNT`.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Display label, as printed on the LCD's second line.
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Cold => "Frio",
            Self::Hot => "Quente",
        }
    }
}

// ---------------------------------------------------------------------------
// Per-tick input edges (written by the control loop before the FSM tick)
// ---------------------------------------------------------------------------

/// Debounced rising edges observed this tick.  Both buttons are polled
/// unconditionally every tick; whether an edge *acts* depends on the
/// current state.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputEdges {
    /// Mode button fired a debounced rising edge.
    pub mode_pressed: bool,
    /// Preset button fired a debounced rising edge.
    pub preset_pressed: bool,
}

// ---------------------------------------------------------------------------
// Temperature snapshot (read-only to state handlers)
// ---------------------------------------------------------------------------

/// A point-in-time temperature sample.
///
/// `celsius` is the raw calibration-formula output — it may be negative or
/// far above the fan-curve range; clamping happens only at the duty-mapping
/// stage, never here.
#[derive(Debug, Clone, Copy, Default)]
pub struct SensorSnapshot {
    /// Raw ADC counts (0 – 1023).
    pub temp_raw: u16,
    /// Converted temperature (°C), unclamped.
    pub celsius: f32,
}

// ---------------------------------------------------------------------------
// Actuator commands (written by the control loop; consumed by main loop)
// ---------------------------------------------------------------------------

/// Commands computed each tick and applied to the actual drivers.
/// Freshly derived every tick — no memory of the prior value, no smoothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActuatorCommands {
    /// Fan PWM duty (0 – 255).
    pub fan_duty: u8,
    /// Buzzer on (over-temperature alarm active).
    pub alarm_on: bool,
}

// ---------------------------------------------------------------------------
// FsmContext
// ---------------------------------------------------------------------------

/// The shared context passed to every state handler function.
pub struct FsmContext {
    // -- Timing --
    /// Ticks elapsed since the current state was entered.
    pub ticks_in_state: u64,
    /// Monotonic total tick count.
    pub total_ticks: u64,
    /// Duration of one tick in seconds (inverse of control loop frequency).
    pub tick_period_secs: f32,

    // -- Inputs --
    /// Debounced button edges for this tick.
    pub inputs: InputEdges,

    // -- Sensor data --
    /// Latest temperature sample.  Updated before each FSM tick.
    pub sensors: SensorSnapshot,

    // -- Outputs --
    /// Commands to be applied to actuators after the FSM tick.
    pub commands: ActuatorCommands,

    /// Current manual preset.  Advanced in `Manual`, pinned to `Normal`
    /// in `Automatic`.
    pub preset: Preset,

    // -- Configuration --
    /// System configuration (tunable parameters).
    pub config: SystemConfig,
}

impl FsmContext {
    /// Create a new context with the given configuration.
    pub fn new(config: SystemConfig) -> Self {
        Self {
            ticks_in_state: 0,
            total_ticks: 0,
            tick_period_secs: config.control_loop_interval_ms as f32 / 1000.0,
            inputs: InputEdges::default(),
            sensors: SensorSnapshot::default(),
            commands: ActuatorCommands::default(),
            preset: Preset::Normal,
            config,
        }
    }

    /// Seconds elapsed since the current state was entered.
    pub fn secs_in_state(&self) -> f32 {
        self.ticks_in_state as f32 * self.tick_period_secs
    }
}
