use glam::Vec2;

/// Last known pointer or touch position in canvas pixels.
///
/// Updates are dropped while the render loop is stopped, so a hidden field
/// never keeps tracking the cursor.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    last: Option<Vec2>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, position: Vec2, running: bool) {
        if running {
            self.last = Some(position);
        }
    }

    pub fn clear(&mut self) {
        self.last = None;
    }

    pub fn position(&self) -> Option<Vec2> {
        self.last
    }
}
