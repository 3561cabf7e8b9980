//! Over-temperature alarm monitor.
//!
//! Runs **every tick after the temperature read** and decides whether the
//! buzzer should sound.  The comparison is a strict greater-than against a
//! fixed threshold with **no hysteresis band**: a reading hovering at the
//! boundary may chatter the buzzer on and off across consecutive ticks.
//! That is documented behavior, not a defect.
//!
//! The decision itself is stateless; the monitor keeps one bool purely to
//! log raise/clear transitions once instead of every tick.

use crate::config::SystemConfig;
use log::{info, warn};

/// Threshold comparator for the audible alarm.
pub struct AlarmMonitor {
    threshold_c: f32,
    /// Last decision, for transition logging only.
    active: bool,
}

impl AlarmMonitor {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            threshold_c: config.alarm_threshold_c,
            active: false,
        }
    }

    /// Evaluate the alarm condition for this tick.
    ///
    /// Returns `true` when `celsius` is strictly above the threshold.  The
    /// caller re-applies the result to the buzzer unconditionally every
    /// tick; re-commanding an already-sounding tone is harmless.
    pub fn evaluate(&mut self, celsius: f32) -> bool {
        let on = celsius > self.threshold_c;
        if on != self.active {
            if on {
                warn!(
                    "ALARM raised: {:.1} C above {:.1} C threshold",
                    celsius, self.threshold_c
                );
            } else {
                info!("ALARM cleared: {:.1} C", celsius);
            }
            self.active = on;
        }
        on
    }

    /// Whether the alarm was active as of the last `evaluate()` call.
    pub fn is_active(&self) -> bool {
        self.active
    }
}
