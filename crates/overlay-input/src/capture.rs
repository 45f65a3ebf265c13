use parking_lot::Mutex;
use std::sync::Arc;

use overlay_core::{HardwareMouse, InputRouting};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaptureState {
    #[default]
    Uncaptured,
    Captured,
}

/// Decides who owns input: the host (uncaptured) or the overlay (captured).
///
/// Each transition also drives the host cursor counter and the host action
/// routing. Both host calls happen under the state lock, so they never
/// interleave with a concurrent toggle. No rollback: the host services are
/// infallible by contract.
pub struct CaptureArbiter {
    state: Mutex<CaptureState>,
    mouse: Arc<dyn HardwareMouse>,
    routing: Arc<dyn InputRouting>,
}

impl CaptureArbiter {
    pub fn new(mouse: Arc<dyn HardwareMouse>, routing: Arc<dyn InputRouting>) -> Self {
        Self {
            state: Mutex::new(CaptureState::Uncaptured),
            mouse,
            routing,
        }
    }

    /// Flip the capture state and return the new one.
    pub fn toggle(&self) -> CaptureState {
        let mut g = self.state.lock();
        self.flip(&mut g)
    }

    /// Hand input back to the host if the overlay holds it.
    /// Returns true when a transition happened.
    pub fn release(&self) -> bool {
        let mut g = self.state.lock();
        if *g == CaptureState::Uncaptured {
            return false;
        }
        self.flip(&mut g);
        true
    }

    fn flip(&self, state: &mut CaptureState) -> CaptureState {
        let next = match *state {
            CaptureState::Uncaptured => {
                self.mouse.increment_counter();
                self.routing.enable(false);
                CaptureState::Captured
            }
            CaptureState::Captured => {
                self.mouse.decrement_counter();
                self.routing.enable(true);
                CaptureState::Uncaptured
            }
        };
        *state = next;
        log::info!("overlay capture: {next:?}");
        next
    }

    #[inline]
    pub fn state(&self) -> CaptureState {
        *self.state.lock()
    }

    #[inline]
    pub fn is_captured(&self) -> bool {
        self.state() == CaptureState::Captured
    }

    #[inline]
    pub fn mouse(&self) -> &Arc<dyn HardwareMouse> {
        &self.mouse
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use mockall::{mock, Sequence};

    mock! {
        Mouse {}
        impl HardwareMouse for Mouse {
            fn increment_counter(&self);
            fn decrement_counter(&self);
            fn client_position(&self) -> Option<(f32, f32)>;
        }
    }

    mock! {
        Routing {}
        impl InputRouting for Routing {
            fn enable(&self, enabled: bool);
        }
    }

    #[test]
    fn starts_uncaptured_without_touching_host() {
        let arbiter = CaptureArbiter::new(Arc::new(MockMouse::new()), Arc::new(MockRouting::new()));
        assert!(!arbiter.is_captured());
        assert_eq!(arbiter.state(), CaptureState::Uncaptured);
    }

    #[test]
    fn double_toggle_is_balanced_and_ordered() {
        let mut seq = Sequence::new();
        let mut mouse = MockMouse::new();
        let mut routing = MockRouting::new();

        mouse
            .expect_increment_counter()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        routing
            .expect_enable()
            .with(eq(false))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        mouse
            .expect_decrement_counter()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());
        routing
            .expect_enable()
            .with(eq(true))
            .times(1)
            .in_sequence(&mut seq)
            .return_const(());

        let arbiter = CaptureArbiter::new(Arc::new(mouse), Arc::new(routing));

        assert_eq!(arbiter.toggle(), CaptureState::Captured);
        assert!(arbiter.is_captured());
        assert_eq!(arbiter.toggle(), CaptureState::Uncaptured);
        assert!(!arbiter.is_captured());
    }

    #[test]
    fn release_only_acts_while_captured() {
        let mut mouse = MockMouse::new();
        let mut routing = MockRouting::new();
        mouse.expect_increment_counter().times(1).return_const(());
        mouse.expect_decrement_counter().times(1).return_const(());
        routing.expect_enable().times(2).return_const(());

        let arbiter = CaptureArbiter::new(Arc::new(mouse), Arc::new(routing));

        assert!(!arbiter.release());
        arbiter.toggle();
        assert!(arbiter.release());
        assert!(!arbiter.is_captured());
        assert!(!arbiter.release());
    }
}
