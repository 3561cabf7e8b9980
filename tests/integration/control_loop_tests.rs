//! Integration tests for the AppService → actuators → display pipeline.
//!
//! These run on the host (x86_64) and verify that one control tick drives
//! the fan, buzzer, and LCD exactly as the temperature and mode dictate.

use crate::mock_hw::{HwCall, MockHardware, RecordingSink};

use thermofan::app::events::AppEvent;
use thermofan::app::service::AppService;
use thermofan::config::SystemConfig;
use thermofan::fsm::StateId;
use thermofan::fsm::context::Preset;

fn make_app() -> (AppService, RecordingSink) {
    let mut app = AppService::new(SystemConfig::default());
    let mut sink = RecordingSink::new();
    app.start(&mut sink);
    (app, sink)
}

/// One press-and-release of a button, spaced well past the settle window.
fn press(
    app: &mut AppService,
    hw: &mut MockHardware,
    sink: &mut RecordingSink,
    now_ms: &mut u32,
    mode: bool,
) {
    if mode {
        hw.mode_level = true;
    } else {
        hw.preset_level = true;
    }
    *now_ms += 1000;
    app.tick(*now_ms, hw, sink);
    hw.mode_level = false;
    hw.preset_level = false;
    *now_ms += 1000;
    app.tick(*now_ms, hw, sink);
}

// ── End-to-end scenario from the design review ────────────────

#[test]
fn out_of_calibration_reading_saturates_fan_and_alarms() {
    // raw 614 ⇒ ~2998.05 mV ⇒ ~249.8 C: far beyond the fan curve and the
    // alarm threshold, displayed unclamped.
    let (mut app, mut sink) = make_app();
    let mut hw = MockHardware::new(614);

    app.tick(500, &mut hw, &mut sink);

    assert_eq!(app.state(), StateId::Automatic);
    assert_eq!(hw.fan_duty(), Some(255));
    assert!(hw.buzzer_sounding());
    assert_eq!(hw.line(0), "Temp: 249.80 C");
    assert_eq!(hw.line(1), "Modo: Auto");

    let t = app.build_telemetry();
    assert!(t.alarm_on);
    assert_eq!(t.fan_duty, 255);
}

#[test]
fn nominal_reading_drives_proportional_duty() {
    // raw 154 ⇒ ~25.2 C ⇒ duty (25.2 - 20) * 255 / 30 ≈ 44.
    let (mut app, mut sink) = make_app();
    let mut hw = MockHardware::new(154);

    app.tick(500, &mut hw, &mut sink);

    assert_eq!(hw.fan_duty(), Some(44));
    assert!(!hw.buzzer_sounding());
    assert_eq!(hw.line(0), "Temp: 25.20 C");
}

#[test]
fn cold_reading_stops_the_fan_without_alarm() {
    // raw 0 ⇒ -50.0 C: negative temperatures display as-is, duty clamps to 0.
    let (mut app, mut sink) = make_app();
    let mut hw = MockHardware::new(0);

    app.tick(500, &mut hw, &mut sink);

    assert_eq!(hw.fan_duty(), Some(0));
    assert!(!hw.buzzer_sounding());
    assert_eq!(hw.line(0), "Temp: -50.00 C");
}

// ── Alarm threshold at ADC granularity ────────────────────────

#[test]
fn alarm_boundary_in_counts() {
    // raw 184 ⇒ 39.84 C (below threshold), raw 185 ⇒ 40.33 C (above).
    let (mut app, mut sink) = make_app();

    let mut hw = MockHardware::new(184);
    app.tick(500, &mut hw, &mut sink);
    assert!(!hw.buzzer_sounding());

    hw.raw_counts = 185;
    app.tick(1000, &mut hw, &mut sink);
    assert!(hw.buzzer_sounding());
}

#[test]
fn buzzer_state_is_recommanded_every_tick() {
    let (mut app, mut sink) = make_app();
    let mut hw = MockHardware::new(614);

    app.tick(500, &mut hw, &mut sink);
    app.tick(1000, &mut hw, &mut sink);

    let tones = hw
        .calls
        .iter()
        .filter(|c| matches!(c, HwCall::BuzzerOn { freq_hz: 1000 }))
        .count();
    assert_eq!(tones, 2, "tone must be re-applied each tick");
}

// ── Display contract ──────────────────────────────────────────

#[test]
fn display_is_redrawn_clear_cursor_print_each_tick() {
    let (mut app, mut sink) = make_app();
    let mut hw = MockHardware::new(154);

    app.tick(500, &mut hw, &mut sink);

    // The display tail of the call history: full redraw, line by line.
    let display_calls: Vec<&HwCall> = hw
        .calls
        .iter()
        .filter(|c| {
            matches!(
                c,
                HwCall::Clear | HwCall::SetCursor { .. } | HwCall::Print(_)
            )
        })
        .collect();
    assert_eq!(
        display_calls,
        vec![
            &HwCall::Clear,
            &HwCall::SetCursor { col: 0, row: 0 },
            &HwCall::Print("Temp: 25.20 C".to_string()),
            &HwCall::SetCursor { col: 0, row: 1 },
            &HwCall::Print("Modo: Auto".to_string()),
        ]
    );
}

#[test]
fn display_tracks_manual_presets() {
    let (mut app, mut sink) = make_app();
    let mut hw = MockHardware::new(154);
    let mut now = 0;

    press(&mut app, &mut hw, &mut sink, &mut now, true);
    assert_eq!(hw.line(1), "Manual: Normal");

    press(&mut app, &mut hw, &mut sink, &mut now, false);
    assert_eq!(hw.line(1), "Manual: Frio");

    press(&mut app, &mut hw, &mut sink, &mut now, false);
    assert_eq!(hw.line(1), "Manual: Quente");

    press(&mut app, &mut hw, &mut sink, &mut now, true);
    assert_eq!(hw.line(1), "Modo: Auto");
}

// ── Event stream ──────────────────────────────────────────────

#[test]
fn mode_toggle_and_preset_advance_emit_events() {
    let (mut app, mut sink) = make_app();
    let mut hw = MockHardware::new(154);
    let mut now = 0;

    press(&mut app, &mut hw, &mut sink, &mut now, true);
    press(&mut app, &mut hw, &mut sink, &mut now, false);

    assert!(sink.events.iter().any(|e| matches!(
        e,
        AppEvent::ModeChanged {
            from: StateId::Automatic,
            to: StateId::Manual,
        }
    )));
    assert!(
        sink.events
            .iter()
            .any(|e| matches!(e, AppEvent::PresetChanged(Preset::Cold)))
    );
}

#[test]
fn alarm_events_fire_on_transitions_only() {
    let (mut app, mut sink) = make_app();
    let mut hw = MockHardware::new(614);

    app.tick(500, &mut hw, &mut sink);
    app.tick(1000, &mut hw, &mut sink);
    hw.raw_counts = 154;
    app.tick(1500, &mut hw, &mut sink);

    let raised = sink
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::AlarmRaised { .. }))
        .count();
    let cleared = sink
        .events
        .iter()
        .filter(|e| matches!(e, AppEvent::AlarmCleared { .. }))
        .count();
    assert_eq!(raised, 1);
    assert_eq!(cleared, 1);
}

#[test]
fn manual_mode_ignores_temperature_for_duty() {
    let (mut app, mut sink) = make_app();
    let mut hw = MockHardware::new(154);
    let mut now = 0;

    press(&mut app, &mut hw, &mut sink, &mut now, true);
    assert_eq!(hw.fan_duty(), Some(170));

    // Temperature shoots far out of range; manual duty holds, alarm still fires.
    hw.raw_counts = 614;
    now += 1000;
    app.tick(now, &mut hw, &mut sink);
    assert_eq!(hw.fan_duty(), Some(170));
    assert!(hw.buzzer_sounding());
    assert_eq!(hw.line(0), "Temp: 249.80 C");
    assert_eq!(hw.line(1), "Manual: Normal");
}
