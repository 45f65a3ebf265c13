mod common;

use std::sync::atomic::Ordering;

use common::Harness;
use overlay_core::{OverlayConfig, OverlayError};
use overlay_input::{
    KeyId, KeyState, MouseButton, PointerKind, RawKeyEvent, RawPointerEvent,
};
use overlay_runtime::{DriverPhase, Overlay};

fn press(key: KeyId) -> RawKeyEvent {
    RawKeyEvent::keyboard(key, KeyState::Pressed)
}

#[test]
fn first_tick_submits_nothing_then_previous_output_each_tick() {
    let h = Harness::new();
    let mut overlay = h.ready_overlay();
    assert_eq!(overlay.driver().phase(), DriverPhase::Ready);

    let r1 = overlay.on_render_frame();
    assert!(r1.ran);
    assert_eq!(r1.frame_index, 1);
    assert_eq!(r1.submitted, None);
    assert!(h.submitted().is_empty());
    assert_eq!(overlay.driver().phase(), DriverPhase::Steady);

    let r2 = overlay.on_render_frame();
    assert_eq!(r2.submitted, Some(1));
    let r3 = overlay.on_render_frame();
    assert_eq!(r3.submitted, Some(2));

    let frames: Vec<u64> = h.submitted().iter().map(|s| s.frame_index).collect();
    assert_eq!(frames, [1, 2]);
}

#[test]
fn tick_before_initialized_hook_does_nothing() {
    let h = Harness::new();
    let mut overlay = Overlay::new(OverlayConfig::default(), h.services()).unwrap();

    let r = overlay.on_render_frame();
    assert!(!r.ran);
    assert_eq!(overlay.driver().phase(), DriverPhase::Uninitialized);
    assert_eq!(overlay.driver().frame().index, 0);
    assert!(h.textures.created.lock().is_empty());
}

#[test]
fn missing_renderer_leaves_overlay_inert_and_host_untouched() {
    let h = Harness::new();
    let mut overlay = Overlay::new(OverlayConfig::default(), h.services()).unwrap();

    assert!(!overlay.on_system_initialized(None));
    assert_eq!(overlay.driver().phase(), DriverPhase::Inert);
    assert_eq!(h.listeners.listener_count(), 0);
    assert!(h.textures.created.lock().is_empty());

    assert!(!h.listeners.dispatch_key(&press(KeyId::F9)));
    assert!(!overlay.is_captured());
    assert!(!overlay.on_render_frame().ran);
    assert_eq!(h.host.counter(), 0);
    assert!(h.host.routing());
}

#[test]
fn missing_surface_leaves_overlay_inert() {
    let h = Harness::new();
    let mut services = h.services();
    services.surface = None;
    let mut overlay = Overlay::new(OverlayConfig::default(), services).unwrap();

    assert!(!overlay.on_system_initialized(Some(h.renderer())));
    assert_eq!(overlay.driver().phase(), DriverPhase::Inert);
    assert!(!overlay.on_render_frame().ran);
}

#[test]
fn font_upload_failure_leaves_overlay_inert() {
    let h = Harness::new();
    h.textures.fail.store(true, Ordering::SeqCst);
    let mut overlay = Overlay::new(OverlayConfig::default(), h.services()).unwrap();

    assert!(!overlay.on_system_initialized(Some(h.renderer())));
    assert_eq!(overlay.driver().phase(), DriverPhase::Inert);
    assert_eq!(overlay.driver().font_texture(), None);
    assert_eq!(h.listeners.listener_count(), 0);
}

#[test]
fn unknown_toggle_key_is_rejected() {
    let h = Harness::new();
    let cfg = OverlayConfig {
        toggle_key: "NotAKey".into(),
        ..OverlayConfig::default()
    };
    let err = Overlay::new(cfg, h.services()).err().unwrap();
    assert!(matches!(err, OverlayError::UnknownKey(_)));
    assert!(h.console.is_empty());
}

#[test]
fn initialized_hook_twice_subscribes_once() {
    let h = Harness::new();
    let mut overlay = h.ready_overlay();
    overlay.on_system_initialized(Some(h.renderer()));
    assert_eq!(h.listeners.listener_count(), 2);
    assert_eq!(h.textures.created.lock().len(), 1);
}

#[test]
fn font_atlas_uploaded_under_configured_name() {
    let h = Harness::new();
    let overlay = h.ready_overlay();

    let created = h.textures.created.lock().clone();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].0, "OverlayFontAtlas");
    assert!(created[0].1 > 0 && created[0].2 > 0);
    assert!(overlay.driver().font_texture().is_some());
}

#[test]
fn viewport_follows_surface_resize() {
    let h = Harness::new();
    let mut overlay = h.ready_overlay();

    overlay.on_render_frame();
    assert_eq!(overlay.driver().input().viewport, [800, 600]);

    *h.surface.size.lock() = (1920, 1080);
    overlay.on_render_frame();
    assert_eq!(overlay.driver().input().viewport, [1920, 1080]);

    overlay.on_render_frame();
    let last = h.submitted().pop().unwrap();
    assert_eq!(last.frame_index, 2);
    assert_eq!(last.screen_size_px, [1920, 1080]);
}

#[test]
fn zero_host_delta_becomes_one_second() {
    let h = Harness::new();
    let mut overlay = h.ready_overlay();

    *h.surface.dt.lock() = 0.0;
    overlay.on_render_frame();
    assert_eq!(overlay.driver().frame().dt, 1.0);
    assert_eq!(overlay.driver().input().frame_dt, 1.0);

    *h.surface.dt.lock() = 0.02;
    overlay.on_render_frame();
    assert_eq!(overlay.driver().input().frame_dt, 0.02);
}

#[test]
fn uncaptured_input_never_reaches_the_ui() {
    let h = Harness::new();
    let mut overlay = h.ready_overlay();

    let keys = [
        KeyId::A, KeyId::S, KeyId::D, KeyId::W, KeyId::Space,
        KeyId::LCtrl, KeyId::Enter, KeyId::Escape, KeyId::Up, KeyId::D1,
    ];
    for k in keys {
        assert!(!h.listeners.dispatch_key(&press(k)));
    }
    h.listeners.dispatch_pointer(&RawPointerEvent::move_to(100, 100));

    let r = overlay.on_render_frame();
    assert_eq!(r.drain.keys + r.drain.pointer, 0);
    assert_eq!(overlay.driver().input().keys_held().count(), 0);
    assert_eq!(overlay.driver().input().cursor, [0.0, 0.0]);
}

#[test]
fn hotkey_routes_input_to_the_overlay_and_back() {
    let h = Harness::new();
    let mut overlay = h.ready_overlay();

    assert!(h.listeners.dispatch_key(&press(KeyId::F9)));
    assert!(overlay.is_captured());
    assert_eq!(h.host.counter(), 1);
    assert!(!h.host.routing());

    assert!(h.listeners.dispatch_key(&press(KeyId::A)));
    assert!(h.listeners.dispatch_key(&press(KeyId::LShift)));
    let r = overlay.on_render_frame();
    assert_eq!(r.drain.keys, 2);
    assert!(overlay.driver().input().key_down(KeyId::A));
    assert!(overlay.driver().input().modifiers.shift);

    assert!(h.listeners.dispatch_key(&press(KeyId::F9)));
    assert!(!overlay.is_captured());
    assert_eq!(h.host.counter(), 0);
    assert!(h.host.routing());
}

#[test]
fn events_queued_before_release_are_dropped() {
    let h = Harness::new();
    let mut overlay = h.ready_overlay();

    overlay.toggle_capture();
    h.listeners.dispatch_key(&press(KeyId::B));
    overlay.toggle_capture();

    let r = overlay.on_render_frame();
    assert!(r.drain.discarded);
    assert!(!overlay.driver().input().key_down(KeyId::B));
}

#[test]
fn captured_cursor_comes_from_the_hardware_mouse() {
    let h = Harness::new();
    let mut overlay = h.ready_overlay();

    overlay.toggle_capture();
    h.host.set_cursor(Some((321.5, 42.0)));
    h.listeners.dispatch_pointer(&RawPointerEvent::move_to(5, 5));

    overlay.on_render_frame();
    assert_eq!(overlay.driver().input().cursor, [321.5, 42.0]);
}

#[test]
fn uncaptured_cursor_ignores_the_hardware_mouse() {
    let h = Harness::new();
    let mut overlay = h.ready_overlay();

    h.host.set_cursor(Some((321.5, 42.0)));
    overlay.on_render_frame();
    assert_eq!(overlay.driver().input().cursor, [0.0, 0.0]);
}

#[test]
fn double_click_is_a_one_tick_pulse() {
    let h = Harness::new();
    let mut overlay = h.ready_overlay();
    overlay.toggle_capture();

    h.listeners.dispatch_pointer(&RawPointerEvent::new(
        10,
        10,
        PointerKind::DoubleClick(MouseButton::Left),
    ));
    overlay.on_render_frame();
    assert!(overlay.driver().input().buttons_double_clicked[MouseButton::Left.index()]);

    overlay.on_render_frame();
    assert!(!overlay.driver().input().buttons_double_clicked[MouseButton::Left.index()]);
}

#[test]
fn console_toggle_keeps_host_state_balanced() {
    let h = Harness::new();
    let overlay = h.ready_overlay();

    for i in 1..=6 {
        h.console.exec("overlay_toggleCapture").unwrap();
        let expect_captured = i % 2 == 1;
        assert_eq!(overlay.is_captured(), expect_captured);
        assert_eq!(h.host.counter(), i32::from(expect_captured));
        assert_eq!(h.host.routing(), !expect_captured);
    }
}

#[test]
fn console_toggle_is_ignored_by_an_inert_overlay() {
    let h = Harness::new();
    let mut overlay = Overlay::new(OverlayConfig::default(), h.services()).unwrap();
    assert!(!overlay.on_system_initialized(None));
    assert!(!overlay.is_armed());

    for _ in 0..3 {
        h.console.exec("overlay_toggleCapture").unwrap();
        assert!(!overlay.is_captured());
        assert_eq!(h.host.counter(), 0);
        assert!(h.host.routing());
    }
    assert_eq!(overlay.toggle_capture(), overlay.capture_state());
    assert!(!overlay.is_captured());
    assert!(h.host.routing());
}

#[test]
fn console_toggle_is_ignored_before_the_initialized_hook() {
    let h = Harness::new();
    let mut overlay = Overlay::new(OverlayConfig::default(), h.services()).unwrap();

    h.console.exec("overlay_toggleCapture").unwrap();
    overlay.toggle_capture();
    assert!(!overlay.is_captured());
    assert_eq!(h.host.counter(), 0);
    assert!(h.host.routing());

    // Arming later starts from a clean, uncaptured state.
    assert!(overlay.on_system_initialized(Some(h.renderer())));
    assert!(overlay.is_armed());
    h.console.exec("overlay_toggleCapture").unwrap();
    assert!(overlay.is_captured());
    assert_eq!(h.host.counter(), 1);
    assert!(!h.host.routing());
}

#[test]
fn shutdown_disarms_the_overlay() {
    let h = Harness::new();
    let mut overlay = h.ready_overlay();
    assert!(overlay.is_armed());

    overlay.shutdown();
    assert!(!overlay.is_armed());
    overlay.toggle_capture();
    assert!(!overlay.is_captured());
    assert!(h.host.routing());
}

#[test]
fn panels_switched_on_from_the_console_draw_geometry() {
    let h = Harness::new();
    let mut overlay = h.ready_overlay();

    h.console.exec("overlay_showDemoWindow 1").unwrap();
    h.console.exec("overlay_showPerfWidget 1").unwrap();
    assert!(overlay.flags().show_perf_widget.load(Ordering::SeqCst));

    for _ in 0..5 {
        overlay.on_render_frame();
    }
    let last = h.submitted().pop().unwrap();
    assert!(last.has_geometry);
}

#[test]
fn shutdown_releases_capture_listeners_commands_and_texture() {
    let h = Harness::new();
    let mut overlay = h.ready_overlay();
    overlay.toggle_capture();
    overlay.on_render_frame();
    assert_eq!(h.console.len(), 3);

    let font = overlay.driver().font_texture().unwrap();
    overlay.shutdown();

    assert!(!overlay.is_captured());
    assert_eq!(h.host.counter(), 0);
    assert!(h.host.routing());
    assert_eq!(h.listeners.listener_count(), 0);
    assert!(h.console.is_empty());
    assert_eq!(*h.textures.removed.lock(), [font]);
    assert!(!overlay.on_render_frame().ran);

    drop(overlay);
    assert_eq!(h.textures.removed.lock().len(), 1);
}

#[test]
fn dropping_the_overlay_tears_it_down() {
    let h = Harness::new();
    let overlay = h.ready_overlay();
    drop(overlay);

    assert_eq!(h.textures.removed.lock().len(), 1);
    assert_eq!(h.listeners.listener_count(), 0);
    assert!(h.console.is_empty());
}
