mod common;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use common::FakeHost;
use overlay_core::{ConsoleRegistry, OverlayConfig};
use overlay_input::CaptureArbiter;
use overlay_runtime::commands::{self, SHOW_DEMO_WINDOW, SHOW_PERF_WIDGET, TOGGLE_CAPTURE};
use overlay_runtime::OverlayFlags;

struct Fixture {
    host: Arc<FakeHost>,
    console: ConsoleRegistry,
    flags: OverlayFlags,
    arbiter: Arc<CaptureArbiter>,
    armed: Arc<AtomicBool>,
    names: Vec<String>,
}

fn fixture(cfg: &OverlayConfig) -> Fixture {
    let host = Arc::new(FakeHost::new());
    let arbiter = Arc::new(CaptureArbiter::new(host.clone(), host.clone()));
    let console = ConsoleRegistry::new();
    let flags = OverlayFlags::from_config(cfg);
    let armed = Arc::new(AtomicBool::new(false));
    let names = commands::register(&console, cfg, &flags, &arbiter, &armed);
    Fixture { host, console, flags, arbiter, armed, names }
}

#[test]
fn names_carry_the_configured_prefix() {
    let cfg = OverlayConfig { command_prefix: "dbg.".to_owned(), ..OverlayConfig::default() };
    let f = fixture(&cfg);

    assert_eq!(
        f.names,
        [
            format!("dbg.{SHOW_DEMO_WINDOW}"),
            format!("dbg.{SHOW_PERF_WIDGET}"),
            format!("dbg.{TOGGLE_CAPTURE}"),
        ]
    );
    for name in &f.names {
        assert!(f.console.contains(name));
    }
}

#[test]
fn flag_commands_write_through_to_the_panels() {
    let f = fixture(&OverlayConfig::default());

    f.console.exec("overlay_showPerfWidget 1").unwrap();
    assert!(f.flags.show_perf_widget.load(Ordering::SeqCst));
    f.console.exec("overlay_showPerfWidget 0").unwrap();
    assert!(!f.flags.show_perf_widget.load(Ordering::SeqCst));
}

#[test]
fn toggle_waits_for_arming_then_stays_balanced() {
    let f = fixture(&OverlayConfig::default());

    f.console.exec("overlay_toggleCapture").unwrap();
    assert!(!f.arbiter.is_captured());
    assert_eq!(f.host.counter(), 0);

    f.armed.store(true, Ordering::SeqCst);
    f.console.exec("overlay_toggleCapture").unwrap();
    assert!(f.arbiter.is_captured());
    assert_eq!(f.host.counter(), 1);
    assert!(!f.host.routing());

    f.console.exec("overlay_toggleCapture").unwrap();
    assert!(!f.arbiter.is_captured());
    assert_eq!(f.host.counter(), 0);
    assert!(f.host.routing());
}

#[test]
fn unregister_clears_every_name() {
    let f = fixture(&OverlayConfig::default());
    assert_eq!(f.console.len(), 3);

    commands::unregister(&f.console, &f.names);
    assert!(f.console.is_empty());
}
