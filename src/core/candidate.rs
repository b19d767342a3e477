use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::geometry::Point;

/// Distance below which a candidate counts as having reached the target.
pub const ARRIVAL_TOLERANCE: f64 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub center: Point,
}

impl Target {
    pub const fn new(x: f64, y: f64) -> Self {
        Self {
            center: Point::new(x, y),
        }
    }

    pub fn distance_from(&self, point: Point) -> f64 {
        point.distance(self.center)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionState {
    Carried,
    Gliding,
}

/// One agent evaluated at a single release angle.
///
/// Rides the carrier until `release_time_s`, spends one tick detaching, then
/// heads straight at the target, re-aiming every tick. Once it gets within
/// [`ARRIVAL_TOLERANCE`] of the target it is frozen for good.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    angle_rad: f64,
    release_time_s: f64,
    position: Point,
    state: MotionState,
    elapsed_s: f64,
    arrival_time_s: Option<f64>,
}

impl Candidate {
    pub fn new(angle_rad: f64, release_time_s: f64, start: Point) -> Self {
        Self {
            angle_rad,
            release_time_s,
            position: start,
            state: MotionState::Carried,
            elapsed_s: 0.0,
            arrival_time_s: None,
        }
    }

    /// Advances this candidate by one tick against the carrier's current
    /// position. Returns the arrival time on the tick the candidate first
    /// reaches the target, `None` otherwise.
    pub fn update(
        &mut self,
        carrier_position: Point,
        target: &Target,
        glide_speed: f64,
        dt: f64,
    ) -> Option<f64> {
        if self.is_arrived() {
            return None;
        }

        if self.elapsed_s < self.release_time_s {
            self.state = MotionState::Carried;
            self.position = carrier_position;
        } else if self.state == MotionState::Carried {
            // The detach tick: no movement until the next update.
            self.state = MotionState::Gliding;
            debug!(
                "candidate {:.2} deg released at t={:.2}s, x={:.1}",
                self.angle_rad.to_degrees(),
                self.elapsed_s,
                self.position.x
            );
        } else {
            self.position = self
                .position
                .step_toward(target.center, glide_speed * dt);
        }

        let mut arrived_now = None;
        if target.distance_from(self.position) < ARRIVAL_TOLERANCE {
            self.arrival_time_s = Some(self.elapsed_s);
            arrived_now = self.arrival_time_s;
            debug!(
                "candidate {:.2} deg arrived at t={:.2}s",
                self.angle_rad.to_degrees(),
                self.elapsed_s
            );
        }

        self.elapsed_s += dt;
        arrived_now
    }

    pub fn angle_rad(&self) -> f64 {
        self.angle_rad
    }

    pub fn release_time_s(&self) -> f64 {
        self.release_time_s
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn state(&self) -> MotionState {
        self.state
    }

    pub fn elapsed_s(&self) -> f64 {
        self.elapsed_s
    }

    pub fn is_arrived(&self) -> bool {
        self.arrival_time_s.is_some()
    }

    pub fn arrival_time_s(&self) -> Option<f64> {
        self.arrival_time_s
    }
}
