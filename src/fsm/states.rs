//! Concrete state handler functions and table builder.
//!
//! Each state is defined by plain `fn` pointers — no closures, no dynamic
//! dispatch, no heap.  The classic embedded C FSM pattern in safe Rust.
//!
//! ```text
//!  AUTOMATIC ──[mode button edge]──▶ MANUAL
//!      ▲                               │
//!      └───────[mode button edge]──────┘
//! ```
//!
//! The mode button is the *only* transition trigger.  Preset handling is
//! split between the table (entering Automatic resets the preset) and the
//! control loop (advance while Manual, pin to Normal while Automatic).

use super::context::{FsmContext, Preset};
use super::{StateDescriptor, StateId};
use log::info;

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the static state table.  Called once at startup.
pub fn build_state_table() -> [StateDescriptor; StateId::COUNT] {
    [
        // Index 0 — Automatic
        StateDescriptor {
            id: StateId::Automatic,
            name: "Automatic",
            on_enter: Some(automatic_enter),
            on_exit: None,
            on_update: automatic_update,
        },
        // Index 1 — Manual
        StateDescriptor {
            id: StateId::Manual,
            name: "Manual",
            on_enter: Some(manual_enter),
            on_exit: None,
            on_update: manual_update,
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  AUTOMATIC state — fan duty follows the temperature curve
// ═══════════════════════════════════════════════════════════════════════════

fn automatic_enter(ctx: &mut FsmContext) {
    // Returning to Automatic always discards the operator's preset,
    // whatever it was at the moment of transition.
    ctx.preset = Preset::Normal;
    info!("AUTOMATIC: duty follows temperature, preset reset");
}

fn automatic_update(ctx: &mut FsmContext) -> Option<StateId> {
    if ctx.inputs.mode_pressed {
        return Some(StateId::Manual);
    }
    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  MANUAL state — fan duty from the operator-selected preset
// ═══════════════════════════════════════════════════════════════════════════

fn manual_enter(ctx: &mut FsmContext) {
    info!("MANUAL: operator control, preset {}", ctx.preset.label());
}

fn manual_update(ctx: &mut FsmContext) -> Option<StateId> {
    if ctx.inputs.mode_pressed {
        return Some(StateId::Automatic);
    }
    None
}
