//! Start/stop decision for the render loop.
//!
//! Two independent visibility signals feed the controller: whether the page
//! (tab) is visible, and whether the canvas itself intersects the viewport.
//! The loop may run only while both hold. Signal changes are the sole
//! trigger for transitions besides the explicit teardown path.

/// Render-loop state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Stopped,
    Running,
}

/// Side effect the caller must apply after a signal change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Start,
    Stop,
}

#[derive(Clone, Debug)]
pub struct Lifecycle {
    page_visible: bool,
    element_visible: bool,
    state: LoopState,
}

impl Lifecycle {
    /// Both signals start false; the wiring reports real values right after
    /// construction.
    pub fn new() -> Self {
        Self {
            page_visible: false,
            element_visible: false,
            state: LoopState::Stopped,
        }
    }

    pub fn set_page_visible(&mut self, visible: bool) -> Option<Transition> {
        self.page_visible = visible;
        self.reevaluate()
    }

    pub fn set_element_visible(&mut self, visible: bool) -> Option<Transition> {
        self.element_visible = visible;
        self.reevaluate()
    }

    /// Unconditional stop for unload/teardown; no-op when already stopped.
    pub fn halt(&mut self) -> Option<Transition> {
        self.page_visible = false;
        self.element_visible = false;
        self.reevaluate()
    }

    fn reevaluate(&mut self) -> Option<Transition> {
        let want_running = self.page_visible && self.element_visible;
        match (self.state, want_running) {
            (LoopState::Stopped, true) => {
                self.state = LoopState::Running;
                Some(Transition::Start)
            }
            (LoopState::Running, false) => {
                self.state = LoopState::Stopped;
                Some(Transition::Stop)
            }
            // Already in the wanted state: idempotent, nothing to apply.
            _ => None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    pub fn state(&self) -> LoopState {
        self.state
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}
