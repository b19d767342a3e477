use crate::core::geometry::Point;

/// Body moving at constant speed along the horizontal line `y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Carrier {
    speed: f64,
    start_x: f64,
    y: f64,
    elapsed_s: f64,
}

impl Carrier {
    pub fn new(speed: f64, start_x: f64, y: f64) -> Self {
        Self {
            speed,
            start_x,
            y,
            elapsed_s: 0.0,
        }
    }

    pub fn position_at(&self, time_s: f64) -> Point {
        Point::new(self.start_x + self.speed * time_s, self.y)
    }

    pub fn position(&self) -> Point {
        self.position_at(self.elapsed_s)
    }

    pub fn advance(&mut self, dt: f64) {
        self.elapsed_s += dt;
    }

    pub fn elapsed_s(&self) -> f64 {
        self.elapsed_s
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}
