use glam::Vec2;

/// Turns absolute cursor positions into look offsets.
///
/// The first sample after creation or [`MouseTracker::reset`] only records
/// the position, so capturing the cursor does not make the view jump.
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseTracker {
    last: Option<Vec2>,
}

impl MouseTracker {
    /// Create a tracker that has not seen the cursor yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a cursor position and return the `(x, y)` look offset.
    ///
    /// The y offset is inverted because screen coordinates grow downward
    /// while pitch grows upward.
    pub fn handle_position(&mut self, x: f32, y: f32) -> Option<Vec2> {
        let current = Vec2::new(x, y);
        let offset = self
            .last
            .map(|last| Vec2::new(current.x - last.x, last.y - current.y));
        self.last = Some(current);
        offset
    }

    /// Forget the last position; the next sample is treated as the first.
    pub fn reset(&mut self) {
        self.last = None;
    }
}
