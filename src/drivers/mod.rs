//! Hardware drivers — the only code that touches peripherals.
//!
//! Every driver follows the dual-target pattern: real register access on
//! ESP-IDF, in-memory state tracking on the host so the domain core and
//! tests run anywhere.

pub mod button;
pub mod buzzer;
pub mod fan;
pub mod hw_init;
pub mod hw_timer;
pub mod lcd;
pub mod watchdog;
