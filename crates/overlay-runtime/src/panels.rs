use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use overlay_core::{Frame, FrameTimings, OverlayConfig};
use overlay_input::{MouseButton, NormalizedInputState};

/// Console-visible panel switches. Shared with the command registry.
#[derive(Clone, Debug)]
pub struct OverlayFlags {
    pub show_demo_window: Arc<AtomicBool>,
    pub show_perf_widget: Arc<AtomicBool>,
}

impl OverlayFlags {
    pub fn from_config(cfg: &OverlayConfig) -> Self {
        Self {
            show_demo_window: Arc::new(AtomicBool::new(cfg.show_demo_window)),
            show_perf_widget: Arc::new(AtomicBool::new(cfg.show_perf_widget)),
        }
    }
}

/// Read-only frame data the panels display.
pub struct PanelView<'a> {
    pub frame: &'a Frame,
    pub input: &'a NormalizedInputState,
    pub captured: bool,
    pub timings: FrameTimings,
}

const PERF_HISTORY: usize = 120;

/// Built-in diagnostics panels.
pub struct Panels {
    flags: OverlayFlags,
    frame_ms: VecDeque<f32>,
}

impl Panels {
    pub fn new(flags: OverlayFlags) -> Self {
        Self {
            flags,
            frame_ms: VecDeque::with_capacity(PERF_HISTORY),
        }
    }

    #[inline]
    pub fn flags(&self) -> &OverlayFlags {
        &self.flags
    }

    pub fn show(&mut self, ctx: &egui::Context, view: &PanelView<'_>) {
        if self.frame_ms.len() == PERF_HISTORY {
            self.frame_ms.pop_front();
        }
        self.frame_ms.push_back(view.frame.dt * 1000.0);

        if self.flags.show_demo_window.load(Ordering::Relaxed) {
            self.demo_window(ctx, view);
        }
        if self.flags.show_perf_widget.load(Ordering::Relaxed) {
            self.perf_widget(ctx, view);
        }
    }

    fn demo_window(&self, ctx: &egui::Context, view: &PanelView<'_>) {
        let mut open = true;

        egui::Window::new("Overlay")
            .open(&mut open)
            .default_pos([0.0, 0.0])
            .default_width(320.0)
            .show(ctx, |ui| {
                let capture = if view.captured { "captured" } else { "uncaptured" };
                ui.label(format!("input: {capture}"));
                ui.label(format!(
                    "frame {}  dt {:.3} ms  viewport {}x{}",
                    view.frame.index,
                    view.frame.dt * 1000.0,
                    view.input.viewport[0],
                    view.input.viewport[1]
                ));

                ui.separator();
                egui::CollapsingHeader::new("Input")
                    .default_open(true)
                    .show(ui, |ui| input_inspector(ui, view.input));

                egui::CollapsingHeader::new("Settings").show(ui, |ui| ctx.settings_ui(ui));
                egui::CollapsingHeader::new("Inspection").show(ui, |ui| ctx.inspection_ui(ui));
            });

        if !open {
            self.flags.show_demo_window.store(false, Ordering::Relaxed);
        }
    }

    fn perf_widget(&self, ctx: &egui::Context, view: &PanelView<'_>) {
        let (min, avg, max) = history_stats(&self.frame_ms);
        let t = view.timings;

        egui::Window::new("perf")
            .title_bar(false)
            .resizable(false)
            .anchor(egui::Align2::RIGHT_TOP, [-8.0, 8.0])
            .show(ctx, |ui| {
                ui.monospace(format!("fps {:>6.1}", t.fps));
                ui.monospace(format!("cpu {:>6.2} ms", t.cpu_frame_ms));
                ui.monospace(format!("gpu {:>6.2} ms", t.gpu_frame_ms));
                ui.monospace(format!("dt  {min:.2} / {avg:.2} / {max:.2} ms"));
            });
    }
}

fn input_inspector(ui: &mut egui::Ui, st: &NormalizedInputState) {
    ui.monospace(format!("cursor  {:.0}, {:.0}", st.cursor[0], st.cursor[1]));

    let buttons: Vec<String> = MouseButton::ALL
        .iter()
        .map(|b| {
            let i = b.index();
            let mark = if st.buttons_double_clicked[i] {
                "x2"
            } else if st.buttons_down[i] {
                "down"
            } else {
                "-"
            };
            format!("{b:?}:{mark}")
        })
        .collect();
    ui.monospace(format!("buttons {}", buttons.join(" ")));

    let m = st.modifiers;
    ui.monospace(format!(
        "mods    alt:{} ctrl:{} shift:{}",
        m.alt as u8, m.ctrl as u8, m.shift as u8
    ));

    let mut held: Vec<&str> = st.keys_held().map(|k| k.name()).collect();
    held.sort_unstable();
    ui.monospace(format!("keys    {}", held.join(" ")));
}

/// (min, avg, max) of the frame-time history.
fn history_stats(samples: &VecDeque<f32>) -> (f32, f32, f32) {
    if samples.is_empty() {
        return (0.0, 0.0, 0.0);
    }
    let mut min = f32::MAX;
    let mut max = f32::MIN;
    let mut sum = 0.0;
    for &s in samples {
        min = min.min(s);
        max = max.max(s);
        sum += s;
    }
    (min, sum / samples.len() as f32, max)
}
