use serde::{Deserialize, Serialize};

use crate::core::candidate::Target;
use crate::core::config::ConfigError;

pub const DEFAULT_CARRIER_SPEED: f64 = 270.0;
pub const DEFAULT_AGENT_SPEED: f64 = 110.0;
pub const DEFAULT_TARGET_X: f64 = 2000.0;
pub const DEFAULT_TARGET_Y: f64 = -1500.0;
pub const DEFAULT_ANGLE_SAMPLES: usize = 200;
pub const DEFAULT_CARRIER_START_X: f64 = 0.0;
pub const DEFAULT_CARRIER_Y: f64 = 0.0;
pub const DEFAULT_TIME_STEP_S: f64 = 0.1;
pub const DEFAULT_MAX_TIME_S: f64 = 120.0;
pub const DEFAULT_MAP_WIDTH: f64 = 5000.0;
pub const DEFAULT_MAP_HEIGHT: f64 = 5000.0;

/// Parameters of one drop-angle search. Only validated scenarios should
/// reach [`crate::core::DropSearch::new`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub carrier_speed: f64,
    pub agent_speed: f64,
    pub target: Target,
    pub angle_samples: usize,
    pub carrier_start_x: f64,
    pub carrier_y: f64,
    pub dt: f64,
    pub max_time_s: f64,
    pub map_width: f64,
    pub map_height: f64,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            carrier_speed: DEFAULT_CARRIER_SPEED,
            agent_speed: DEFAULT_AGENT_SPEED,
            target: Target::new(DEFAULT_TARGET_X, DEFAULT_TARGET_Y),
            angle_samples: DEFAULT_ANGLE_SAMPLES,
            carrier_start_x: DEFAULT_CARRIER_START_X,
            carrier_y: DEFAULT_CARRIER_Y,
            dt: DEFAULT_TIME_STEP_S,
            max_time_s: DEFAULT_MAX_TIME_S,
            map_width: DEFAULT_MAP_WIDTH,
            map_height: DEFAULT_MAP_HEIGHT,
        }
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn require_finite(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { field, value })
    }
}

impl Scenario {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_positive("carrier speed", self.carrier_speed)?;
        require_positive("agent speed", self.agent_speed)?;
        require_finite("target x", self.target.center.x)?;
        require_finite("target y", self.target.center.y)?;
        require_finite("carrier start x", self.carrier_start_x)?;
        require_finite("carrier y", self.carrier_y)?;
        require_positive("time step", self.dt)?;
        require_positive("max time", self.max_time_s)?;
        require_positive("map width", self.map_width)?;
        require_positive("map height", self.map_height)?;
        if self.angle_samples == 0 {
            return Err(ConfigError::NoAngles);
        }
        Ok(())
    }
}
