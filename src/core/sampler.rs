use std::f64::consts::FRAC_PI_2;

use crate::core::candidate::Candidate;
use crate::core::geometry::Point;
use crate::core::scenario::Scenario;

/// `count` angles evenly spaced over `[0, π/2]`, both ends included.
/// A single sample is angle 0.
pub fn sample_angles(count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let last = (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        FRAC_PI_2
                    } else {
                        FRAC_PI_2 * (i as f64 / last)
                    }
                })
                .collect()
        }
    }
}

/// Time at which the candidate for `angle_rad` leaves the carrier:
/// the carrier's transit time to the target's x, less a correction for how
/// much of that distance the glide covers at the combined closing speed.
/// Never negative.
pub fn release_time_s(
    angle_rad: f64,
    carrier_start_x: f64,
    carrier_speed: f64,
    agent_speed: f64,
    target_x: f64,
) -> f64 {
    let slope = angle_rad.cos();
    let release = (target_x - carrier_start_x) / carrier_speed
        - slope * target_x / (carrier_speed + agent_speed);
    release.max(0.0)
}

/// One candidate per sampled angle, in sampling order, each starting on the
/// carrier at its initial position.
pub fn build_candidates(scenario: &Scenario) -> Vec<Candidate> {
    let start = Point::new(scenario.carrier_start_x, scenario.carrier_y);
    sample_angles(scenario.angle_samples)
        .into_iter()
        .map(|angle| {
            let release = release_time_s(
                angle,
                scenario.carrier_start_x,
                scenario.carrier_speed,
                scenario.agent_speed,
                scenario.target.center.x,
            );
            Candidate::new(angle, release, start)
        })
        .collect()
}
