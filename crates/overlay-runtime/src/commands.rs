use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use overlay_core::{CommandRegistry, ConsoleAction, OverlayConfig};
use overlay_input::CaptureArbiter;

use crate::panels::OverlayFlags;

pub const SHOW_DEMO_WINDOW: &str = "showDemoWindow";
pub const SHOW_PERF_WIDGET: &str = "showPerfWidget";
pub const TOGGLE_CAPTURE: &str = "toggleCapture";

/// Register the overlay's console surface. Returns the full names for teardown.
///
/// `toggleCapture` does nothing until `armed` is set: an overlay that cannot
/// draw must not take input from the host.
pub fn register(
    registry: &dyn CommandRegistry,
    cfg: &OverlayConfig,
    flags: &OverlayFlags,
    arbiter: &Arc<CaptureArbiter>,
    armed: &Arc<AtomicBool>,
) -> Vec<String> {
    let demo = cfg.command_name(SHOW_DEMO_WINDOW);
    registry.register_flag(
        &demo,
        "Show the overlay demo/diagnostics window",
        flags.show_demo_window.clone(),
    );

    let perf = cfg.command_name(SHOW_PERF_WIDGET);
    registry.register_flag(
        &perf,
        "Show the frame timing widget",
        flags.show_perf_widget.clone(),
    );

    let toggle = cfg.command_name(TOGGLE_CAPTURE);
    let arbiter = arbiter.clone();
    let armed = armed.clone();
    let action: ConsoleAction = Arc::new(move || {
        if armed.load(Ordering::Acquire) {
            arbiter.toggle();
        } else {
            log::warn!("overlay not running, capture toggle ignored");
        }
    });
    registry.register_action(&toggle, "Route input to the overlay or back to the host", action);

    log::debug!("overlay commands registered: {demo}, {perf}, {toggle}");
    vec![demo, perf, toggle]
}

pub fn unregister(registry: &dyn CommandRegistry, names: &[String]) {
    for name in names {
        registry.unregister(name);
    }
}
