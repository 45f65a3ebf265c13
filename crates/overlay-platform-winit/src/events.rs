use std::time::{Duration, Instant};

use overlay_input::{KeyState, MouseButton, PointerKind, RawKeyEvent, RawPointerEvent};
use winit::event::{ElementState, MouseButton as WinitButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::keys::key_id;

/// Second press of the same button inside this window is a double click.
pub const DOUBLE_CLICK_TIME: Duration = Duration::from_millis(500);
/// Max cursor travel between the two presses, per axis, in pixels.
pub const DOUBLE_CLICK_DISTANCE: i32 = 4;

const PIXELS_PER_LINE: f64 = 50.0;

/// Raw host event produced from a winit window event.
#[derive(Debug, Clone, PartialEq)]
pub enum AdapterEvent {
    Key(RawKeyEvent),
    Pointer(RawPointerEvent),
}

#[derive(Default)]
struct ClickTracker {
    last: Option<(MouseButton, (i32, i32), Instant)>,
}

impl ClickTracker {
    fn press(&mut self, button: MouseButton, pos: (i32, i32), now: Instant) -> bool {
        if let Some((b, p, t)) = self.last {
            let close = (pos.0 - p.0).abs() <= DOUBLE_CLICK_DISTANCE
                && (pos.1 - p.1).abs() <= DOUBLE_CLICK_DISTANCE;
            if b == button && close && now.saturating_duration_since(t) <= DOUBLE_CLICK_TIME {
                // A third press starts a new pair.
                self.last = None;
                return true;
            }
        }
        self.last = Some((button, pos, now));
        false
    }
}

/// Turns winit window events into the host raw-event shapes the overlay consumes.
pub struct WinitInputAdapter {
    wheel_unit: i32,
    cursor: (i32, i32),
    clicks: ClickTracker,
}

impl WinitInputAdapter {
    pub fn new(wheel_unit: i32) -> Self {
        Self {
            wheel_unit: wheel_unit.max(1),
            cursor: (0, 0),
            clicks: ClickTracker::default(),
        }
    }

    /// Last cursor position seen, in window client pixels.
    #[inline]
    pub fn cursor(&self) -> (i32, i32) {
        self.cursor
    }

    pub fn translate(&mut self, event: &WindowEvent, now: Instant) -> Option<AdapterEvent> {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return None;
                };
                key_event(code, event.state, event.repeat, event.text.as_deref())
                    .map(AdapterEvent::Key)
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = (position.x.round() as i32, position.y.round() as i32);
                Some(AdapterEvent::Pointer(RawPointerEvent::move_to(
                    self.cursor.0,
                    self.cursor.1,
                )))
            }
            WindowEvent::MouseInput { state, button, .. } => Some(AdapterEvent::Pointer(
                self.button_event(*button, *state, now),
            )),
            WindowEvent::MouseWheel { delta, .. } => {
                let d = wheel_delta(*delta, self.wheel_unit);
                (d != 0).then(|| {
                    AdapterEvent::Pointer(RawPointerEvent::wheel(self.cursor.0, self.cursor.1, d))
                })
            }
            _ => None,
        }
    }

    pub fn button_event(
        &mut self,
        button: WinitButton,
        state: ElementState,
        now: Instant,
    ) -> RawPointerEvent {
        let (x, y) = self.cursor;

        let b = match button {
            WinitButton::Left => MouseButton::Left,
            WinitButton::Right => MouseButton::Right,
            WinitButton::Middle => MouseButton::Middle,
            WinitButton::Back => return RawPointerEvent::new(x, y, PointerKind::Other(3)),
            WinitButton::Forward => return RawPointerEvent::new(x, y, PointerKind::Other(4)),
            WinitButton::Other(code) => return RawPointerEvent::new(x, y, PointerKind::Other(code)),
        };

        let kind = match state {
            ElementState::Pressed if self.clicks.press(b, (x, y), now) => PointerKind::DoubleClick(b),
            ElementState::Pressed => PointerKind::ButtonDown(b),
            ElementState::Released => PointerKind::ButtonUp(b),
        };
        RawPointerEvent::new(x, y, kind)
    }
}

/// Keyboard event to raw key event. Unmapped keys yield `None`.
pub fn key_event(
    code: KeyCode,
    state: ElementState,
    repeat: bool,
    text: Option<&str>,
) -> Option<RawKeyEvent> {
    let key = key_id(code)?;
    let state = match state {
        ElementState::Pressed if repeat => KeyState::Down,
        ElementState::Pressed => KeyState::Pressed,
        ElementState::Released => KeyState::Released,
    };

    let mut ev = RawKeyEvent::keyboard(key, state);
    if state != KeyState::Released {
        if let Some(t) = text.filter(|t| !t.is_empty() && !t.chars().any(char::is_control)) {
            ev = ev.with_character(t);
        }
    }
    Some(ev)
}

/// Scroll delta in host wheel units; positive is away from the user.
pub fn wheel_delta(delta: MouseScrollDelta, wheel_unit: i32) -> i32 {
    let lines = match delta {
        MouseScrollDelta::LineDelta(_, y) => y as f64,
        MouseScrollDelta::PixelDelta(p) => p.y / PIXELS_PER_LINE,
    };
    (lines * wheel_unit as f64).round() as i32
}
