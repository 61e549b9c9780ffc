// Last known pointer location relative to the canvas

use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CursorState {
    Absent,
    Present(Vector2<f64>),
}

impl Default for CursorState {
    fn default() -> Self {
        CursorState::Absent
    }
}

impl CursorState {
    // Cursor for a pointer at canvas-local `(x, y)`; absent unless the point
    // lies inside the width x height surface, edges included
    pub fn locate(x: f64, y: f64, width: f64, height: f64) -> CursorState {
        if x >= 0.0 && x <= width && y >= 0.0 && y <= height {
            CursorState::Present([x, y])
        } else {
            CursorState::Absent
        }
    }

    pub fn position(&self) -> Option<Vector2<f64>> {
        match *self {
            CursorState::Present(pos) => Some(pos),
            CursorState::Absent => None,
        }
    }

    pub fn is_present(&self) -> bool {
        self.position().is_some()
    }
}
