//! Polled push-button debouncer with edge detection.
//!
//! ## Hardware
//!
//! Active-high momentary switch with external pull-down.  The main loop
//! samples the raw GPIO level once per control tick and feeds it to
//! `update()`.
//!
//! ## Edge policy
//!
//! A debounced **rising edge** (previous low → current high) fires exactly
//! once per physical press, however many ticks the button stays held.
//! After an edge fires, the button enters a settle cooldown: further edges
//! within the window are swallowed as mechanical bounce.  The previous-level
//! store tracks the raw input on *every* call — cooldown or not — so a stale
//! edge can never fire from an old sample.
//!
//! Two independent instances run per control cycle (mode button, preset
//! button); they share no state.

/// One debounced button input.
pub struct DebouncedButton {
    /// Raw level seen on the previous `update()` call.
    previous_level: bool,
    /// Settle window after a fired edge (milliseconds).
    settle_ms: u32,
    /// Timestamp of the last fired edge.
    last_edge_ms: u32,
    /// Whether any edge has fired yet (guards `last_edge_ms`).
    has_fired: bool,
}

impl DebouncedButton {
    pub fn new(settle_ms: u32) -> Self {
        Self {
            previous_level: false,
            settle_ms,
            last_edge_ms: 0,
            has_fired: false,
        }
    }

    /// Feed one raw sample.  `now_ms` is monotonic milliseconds (wrapping
    /// arithmetic — safe across u32 rollover).
    ///
    /// Returns `true` exactly when a debounced rising edge fired.
    pub fn update(&mut self, raw_level: bool, now_ms: u32) -> bool {
        let in_cooldown =
            self.has_fired && now_ms.wrapping_sub(self.last_edge_ms) < self.settle_ms;

        let rising = raw_level && !self.previous_level;
        self.previous_level = raw_level;

        if rising && !in_cooldown {
            self.last_edge_ms = now_ms;
            self.has_fired = true;
            return true;
        }
        false
    }
}
