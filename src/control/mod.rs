//! Control algorithms — pure duty-cycle computation, zero I/O.

pub mod curve;
