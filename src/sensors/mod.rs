//! Sensor subsystem.
//!
//! A single analog temperature channel; the driver produces the
//! `TemperatureReading` that gets written into `FsmContext.sensors`
//! each tick.

pub mod temperature;

pub use temperature::{TemperatureReading, TemperatureSensor};
