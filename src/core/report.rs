use chrono::{DateTime, Local};
use serde::Serialize;

use crate::core::geometry::Point;
use crate::core::scenario::Scenario;
use crate::core::search::{DropSearch, Termination};

#[derive(Clone, Debug, Serialize)]
pub struct CandidateOutcome {
    pub index: usize,
    pub angle_deg: f64,
    pub release_time_s: f64,
    pub arrival_time_s: Option<f64>,
    pub final_position: Point,
}

/// Snapshot of a finished (or interrupted) search.
#[derive(Clone, Debug, Serialize)]
pub struct SearchReport {
    pub generated_at: DateTime<Local>,
    pub scenario: Scenario,
    pub best_angle_deg: Option<f64>,
    pub best_angle_rad: Option<f64>,
    pub best_time_s: Option<f64>,
    pub ticks: u64,
    pub elapsed_s: f64,
    pub termination: Termination,
    pub arrived: usize,
    pub candidates: Vec<CandidateOutcome>,
}

impl SearchReport {
    pub fn new(scenario: &Scenario, search: &DropSearch, termination: Termination) -> Self {
        let best = search.current_best();
        let candidates = search
            .candidates()
            .iter()
            .enumerate()
            .map(|(index, c)| CandidateOutcome {
                index,
                angle_deg: c.angle_rad().to_degrees(),
                release_time_s: c.release_time_s(),
                arrival_time_s: c.arrival_time_s(),
                final_position: c.position(),
            })
            .collect();

        Self {
            generated_at: Local::now(),
            scenario: *scenario,
            best_angle_deg: best.best_angle_deg(),
            best_angle_rad: best.best_angle_rad,
            best_time_s: best.is_found().then_some(best.best_time_s),
            ticks: search.ticks(),
            elapsed_s: search.elapsed_s(),
            termination,
            arrived: search.arrived_count(),
            candidates,
        }
    }

    /// `(angle_deg, arrival_time_s)` for every candidate that arrived.
    pub fn arrival_curve(&self) -> Vec<(f64, f64)> {
        self.candidates
            .iter()
            .filter_map(|c| c.arrival_time_s.map(|t| (c.angle_deg, t)))
            .collect()
    }

    pub fn summary_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        match (self.best_angle_deg, self.best_time_s) {
            (Some(angle), Some(time)) => {
                lines.push(format!("Optimal angle: {angle:.1} deg"));
                lines.push(format!("Arrival time: {time:.2} s"));
            }
            _ => lines.push("No candidate reached the target".to_string()),
        }
        lines.push(format!(
            "Arrived: {} of {} candidates",
            self.arrived,
            self.candidates.len()
        ));
        lines.push(format!(
            "Simulated {:.2} s in {} ticks ({})",
            self.elapsed_s,
            self.ticks,
            match self.termination {
                Termination::AllArrived => "all candidates arrived",
                Termination::TimeLimit => "time limit reached",
            }
        ));
        lines
    }
}
