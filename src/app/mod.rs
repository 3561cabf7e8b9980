//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the business rules for the ThermoFan controller:
//! mode FSM orchestration, debounced input handling, duty-cycle mapping,
//! and alarm evaluation.  All interaction with hardware happens through
//! **port traits** defined in [`ports`], keeping this layer fully testable
//! without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
