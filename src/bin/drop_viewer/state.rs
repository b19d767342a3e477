use drop_intercept::core::config::{ScenarioOverrides, validated_or_default};
use drop_intercept::core::{DropSearch, Scenario, Termination};

/// Slider-backed copy of the editable scenario fields.
#[derive(Clone, Copy, PartialEq)]
pub(crate) struct ScenarioEdit {
    pub(crate) carrier_speed: f32,
    pub(crate) agent_speed: f32,
    pub(crate) target_x: f32,
    pub(crate) target_y: f32,
    pub(crate) angle_samples: f32,
}

impl ScenarioEdit {
    pub(crate) fn from_scenario(scenario: &Scenario) -> Self {
        Self {
            carrier_speed: scenario.carrier_speed as f32,
            agent_speed: scenario.agent_speed as f32,
            target_x: scenario.target.center.x as f32,
            target_y: scenario.target.center.y as f32,
            angle_samples: scenario.angle_samples as f32,
        }
    }

    pub(crate) fn apply(&self, base: Scenario) -> Scenario {
        let overrides = ScenarioOverrides {
            carrier_speed: Some(f64::from(self.carrier_speed)),
            agent_speed: Some(f64::from(self.agent_speed)),
            target_x: Some(f64::from(self.target_x)),
            target_y: Some(f64::from(self.target_y)),
            angle_samples: Some(self.angle_samples.round().max(0.0) as usize),
            ..ScenarioOverrides::default()
        };
        validated_or_default(overrides.apply(base))
    }
}

pub(crate) struct ViewerState {
    pub(crate) scenario: Scenario,
    pub(crate) search: DropSearch,
    pub(crate) edit: ScenarioEdit,
    applied_edit: ScenarioEdit,
    pub(crate) paused: bool,
    pub(crate) sim_speed: f32,
    pub(crate) accumulator_s: f64,
    pub(crate) finished: Option<Termination>,
    pub(crate) status_line: String,
}

impl ViewerState {
    pub(crate) fn new(scenario: Scenario) -> Self {
        let edit = ScenarioEdit::from_scenario(&scenario);
        Self {
            search: DropSearch::new(&scenario),
            scenario,
            edit,
            applied_edit: edit,
            paused: false,
            sim_speed: 1.0,
            accumulator_s: 0.0,
            finished: None,
            status_line: "Ready".to_string(),
        }
    }

    pub(crate) fn edit_changed(&self) -> bool {
        self.edit != self.applied_edit
    }

    /// Rebuilds the search from the current slider values.
    pub(crate) fn restart(&mut self) {
        self.scenario = self.edit.apply(self.scenario);
        self.applied_edit = self.edit;
        self.search = DropSearch::new(&self.scenario);
        self.accumulator_s = 0.0;
        self.finished = None;
        self.status_line = format!("Restarted with {} angles", self.scenario.angle_samples);
    }
}
