/// Previous and current pointer positions in surface pixels.
///
/// Only used to turn a drag into a velocity impulse; it carries no physical state.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerTracker {
    prev_x: f64,
    prev_y: f64,
    x: f64,
    y: f64,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new pointer position; the old one becomes the previous position.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.prev_x = self.x;
        self.prev_y = self.y;
        self.x = x;
        self.y = y;
    }

    /// Jump to a position with no displacement (e.g. pointer re-entered the surface).
    pub fn warp_to(&mut self, x: f64, y: f64) {
        *self = Self { prev_x: x, prev_y: y, x, y };
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn previous(&self) -> (f64, f64) {
        (self.prev_x, self.prev_y)
    }

    /// Displacement from the previous to the current position.
    pub fn delta(&self) -> (f64, f64) {
        (self.x - self.prev_x, self.y - self.prev_y)
    }
}
