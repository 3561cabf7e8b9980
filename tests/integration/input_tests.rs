//! Integration tests for debounced input handling through the full service.
//!
//! Timing uses the real control-tick cadence (500 ms) so the debounce
//! settle window (50 ms) sits entirely between samples, as on hardware.

use crate::mock_hw::{MockHardware, RecordingSink};

use thermofan::app::service::AppService;
use thermofan::config::SystemConfig;
use thermofan::fsm::StateId;
use thermofan::fsm::context::Preset;

const TICK_MS: u32 = 500;

struct Rig {
    app: AppService,
    hw: MockHardware,
    sink: RecordingSink,
    now_ms: u32,
}

impl Rig {
    fn new() -> Self {
        let mut app = AppService::new(SystemConfig::default());
        let mut sink = RecordingSink::new();
        app.start(&mut sink);
        Self {
            app,
            hw: MockHardware::new(154),
            sink,
            now_ms: 0,
        }
    }

    fn tick(&mut self) {
        self.now_ms += TICK_MS;
        self.app.tick(self.now_ms, &mut self.hw, &mut self.sink);
    }
}

#[test]
fn held_mode_button_toggles_exactly_once() {
    let mut rig = Rig::new();

    rig.hw.mode_level = true;
    for _ in 0..8 {
        rig.tick();
    }
    assert_eq!(rig.app.state(), StateId::Manual);

    rig.hw.mode_level = false;
    rig.tick();
    assert_eq!(rig.app.state(), StateId::Manual);
}

#[test]
fn release_and_press_again_toggles_back() {
    let mut rig = Rig::new();

    rig.hw.mode_level = true;
    rig.tick();
    rig.hw.mode_level = false;
    rig.tick();
    rig.hw.mode_level = true;
    rig.tick();

    assert_eq!(rig.app.state(), StateId::Automatic);
}

#[test]
fn preset_presses_are_ignored_while_automatic() {
    let mut rig = Rig::new();

    rig.hw.preset_level = true;
    rig.tick();
    rig.hw.preset_level = false;
    rig.tick();

    assert_eq!(rig.app.state(), StateId::Automatic);
    assert_eq!(rig.app.preset(), Preset::Normal);
}

#[test]
fn stale_preset_edge_cannot_fire_on_entering_manual() {
    // The preset button goes down (and stays down) while still Automatic:
    // the debouncer consumes that rising edge even though the action is
    // gated off.  Toggling into Manual with the button still held must NOT
    // advance the preset — only a fresh press after release may.
    let mut rig = Rig::new();

    rig.hw.preset_level = true;
    rig.tick(); // edge consumed, action gated (Automatic)
    rig.tick();

    rig.hw.mode_level = true;
    rig.tick(); // → Manual, preset button still held
    rig.hw.mode_level = false;
    rig.tick();

    assert_eq!(rig.app.state(), StateId::Manual);
    assert_eq!(rig.app.preset(), Preset::Normal);

    // Fresh press now advances.
    rig.hw.preset_level = false;
    rig.tick();
    rig.hw.preset_level = true;
    rig.tick();
    assert_eq!(rig.app.preset(), Preset::Cold);
}

#[test]
fn preset_cycles_through_all_three_and_wraps() {
    let mut rig = Rig::new();

    rig.hw.mode_level = true;
    rig.tick();
    rig.hw.mode_level = false;
    rig.tick();
    assert_eq!(rig.app.state(), StateId::Manual);

    let expected = [Preset::Cold, Preset::Hot, Preset::Normal, Preset::Cold];
    for want in expected {
        rig.hw.preset_level = true;
        rig.tick();
        rig.hw.preset_level = false;
        rig.tick();
        assert_eq!(rig.app.preset(), want);
    }
}

#[test]
fn the_two_buttons_debounce_independently() {
    let mut rig = Rig::new();

    // Hold mode; tap preset repeatedly.  Mode toggles once, preset
    // advances once per tap, neither interferes with the other.
    rig.hw.mode_level = true;
    rig.tick();
    assert_eq!(rig.app.state(), StateId::Manual);

    rig.hw.preset_level = true;
    rig.tick();
    assert_eq!(rig.app.preset(), Preset::Cold);

    rig.hw.preset_level = false;
    rig.tick();
    rig.hw.preset_level = true;
    rig.tick();
    assert_eq!(rig.app.preset(), Preset::Hot);

    assert_eq!(rig.app.state(), StateId::Manual, "mode held: still one toggle");
}

#[test]
fn preset_survives_while_manual_and_resets_on_auto() {
    let mut rig = Rig::new();

    rig.hw.mode_level = true;
    rig.tick();
    rig.hw.mode_level = false;
    rig.tick();

    rig.hw.preset_level = true;
    rig.tick();
    rig.hw.preset_level = false;
    rig.tick();
    assert_eq!(rig.app.preset(), Preset::Cold);

    // Idle ticks: preset holds.
    for _ in 0..5 {
        rig.tick();
    }
    assert_eq!(rig.app.preset(), Preset::Cold);

    // Back to Automatic: pinned to Normal from that tick onward.
    rig.hw.mode_level = true;
    rig.tick();
    assert_eq!(rig.app.state(), StateId::Automatic);
    assert_eq!(rig.app.preset(), Preset::Normal);
    for _ in 0..3 {
        rig.tick();
    }
    assert_eq!(rig.app.preset(), Preset::Normal);
}
