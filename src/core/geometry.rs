use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Moves `step` units from `self` straight at `toward`.
    ///
    /// Returns `self` unchanged when the two points coincide, since there is
    /// no direction to move in.
    pub fn step_toward(self, toward: Point, step: f64) -> Point {
        let dir_x = toward.x - self.x;
        let dir_y = toward.y - self.y;
        let norm = dir_x.hypot(dir_y);
        if norm > 0.0 {
            Point::new(self.x + step * (dir_x / norm), self.y + step * (dir_y / norm))
        } else {
            self
        }
    }
}
