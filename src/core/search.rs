use log::info;
use serde::{Deserialize, Serialize};

use crate::core::candidate::{Candidate, Target};
use crate::core::carrier::Carrier;
use crate::core::geometry::Point;
use crate::core::sampler::build_candidates;
use crate::core::scenario::Scenario;

/// Earliest arrival seen so far.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub best_angle_rad: Option<f64>,
    pub best_time_s: f64,
}

impl Default for SearchResult {
    fn default() -> Self {
        Self {
            best_angle_rad: None,
            best_time_s: f64::INFINITY,
        }
    }
}

impl SearchResult {
    /// Records an arrival if it is strictly earlier than the current best.
    /// Equal times keep the incumbent, so the first candidate in sampling
    /// order wins ties.
    pub fn offer(&mut self, angle_rad: f64, time_s: f64) -> bool {
        if time_s < self.best_time_s {
            self.best_time_s = time_s;
            self.best_angle_rad = Some(angle_rad);
            true
        } else {
            false
        }
    }

    pub fn best_angle_deg(&self) -> Option<f64> {
        self.best_angle_rad.map(f64::to_degrees)
    }

    pub fn is_found(&self) -> bool {
        self.best_angle_rad.is_some()
    }
}

/// A candidate reaching the target during a tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arrival {
    pub index: usize,
    pub angle_rad: f64,
    pub time_s: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Termination {
    AllArrived,
    TimeLimit,
}

/// Steps the carrier and every candidate in lockstep and keeps the optimum.
pub struct DropSearch {
    carrier: Carrier,
    candidates: Vec<Candidate>,
    target: Target,
    agent_speed: f64,
    result: SearchResult,
    ticks: u64,
}

impl DropSearch {
    pub fn new(scenario: &Scenario) -> Self {
        Self {
            carrier: Carrier::new(
                scenario.carrier_speed,
                scenario.carrier_start_x,
                scenario.carrier_y,
            ),
            candidates: build_candidates(scenario),
            target: scenario.target,
            agent_speed: scenario.agent_speed,
            result: SearchResult::default(),
            ticks: 0,
        }
    }

    /// Advances the whole population by `dt` and returns the candidates that
    /// arrived during this tick, in sampling order.
    pub fn tick(&mut self, dt: f64) -> Vec<Arrival> {
        self.carrier.advance(dt);
        let carrier_position = self.carrier.position();
        self.ticks += 1;

        let mut arrivals = Vec::new();
        for (index, candidate) in self.candidates.iter_mut().enumerate() {
            let Some(time_s) = candidate.update(carrier_position, &self.target, self.agent_speed, dt)
            else {
                continue;
            };

            let angle_rad = candidate.angle_rad();
            if self.result.offer(angle_rad, time_s) {
                info!(
                    "new optimum: {:.2} deg arriving at {:.2}s",
                    angle_rad.to_degrees(),
                    time_s
                );
            }
            arrivals.push(Arrival {
                index,
                angle_rad,
                time_s,
            });
        }
        arrivals
    }

    /// Ticks until every candidate has arrived or the carrier's clock has
    /// passed `max_time_s`.
    pub fn run(&mut self, dt: f64, max_time_s: f64) -> Termination {
        let termination = loop {
            if self.all_arrived() {
                break Termination::AllArrived;
            }
            if self.carrier.elapsed_s() > max_time_s {
                break Termination::TimeLimit;
            }
            self.tick(dt);
        };

        info!(
            "search finished after {} ticks ({:.2}s simulated): {:?}, {}/{} arrived",
            self.ticks,
            self.carrier.elapsed_s(),
            termination,
            self.arrived_count(),
            self.candidates.len()
        );
        termination
    }

    pub fn carrier_position(&self) -> Point {
        self.carrier.position()
    }

    pub fn candidate_positions(&self) -> Vec<Point> {
        self.candidates.iter().map(Candidate::position).collect()
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn current_best(&self) -> SearchResult {
        self.result
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn elapsed_s(&self) -> f64 {
        self.carrier.elapsed_s()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn arrived_count(&self) -> usize {
        self.candidates.iter().filter(|c| c.is_arrived()).count()
    }

    pub fn all_arrived(&self) -> bool {
        self.candidates.iter().all(Candidate::is_arrived)
    }
}
