//! Scenario loading: interactive prompts, JSON files and command-line
//! overrides, all collapsing to a validated [`Scenario`].
//!
//! Anything malformed is replaced by the default scenario; the search never
//! sees an invalid parameter set.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::candidate::Target;
use crate::core::scenario::Scenario;

pub const FALLBACK_NOTICE: &str = "Invalid input detected. Using default values.";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{field} must be a positive number, got {value}")]
    NotPositive { field: &'static str, value: f64 },

    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },

    #[error("at least one release angle must be sampled")]
    NoAngles,

    #[error("invalid {field}: '{input}'")]
    InvalidNumber { field: &'static str, input: String },

    #[error("could not read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not parse '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Partial scenario; every present field replaces the matching value of the
/// scenario it is applied to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioOverrides {
    pub carrier_speed: Option<f64>,
    pub agent_speed: Option<f64>,
    pub target_x: Option<f64>,
    pub target_y: Option<f64>,
    pub angle_samples: Option<usize>,
    pub carrier_start_x: Option<f64>,
    pub carrier_y: Option<f64>,
    pub dt: Option<f64>,
    pub max_time_s: Option<f64>,
    pub map_width: Option<f64>,
    pub map_height: Option<f64>,
}

impl ScenarioOverrides {
    pub fn apply(&self, base: Scenario) -> Scenario {
        Scenario {
            carrier_speed: self.carrier_speed.unwrap_or(base.carrier_speed),
            agent_speed: self.agent_speed.unwrap_or(base.agent_speed),
            target: Target::new(
                self.target_x.unwrap_or(base.target.center.x),
                self.target_y.unwrap_or(base.target.center.y),
            ),
            angle_samples: self.angle_samples.unwrap_or(base.angle_samples),
            carrier_start_x: self.carrier_start_x.unwrap_or(base.carrier_start_x),
            carrier_y: self.carrier_y.unwrap_or(base.carrier_y),
            dt: self.dt.unwrap_or(base.dt),
            max_time_s: self.max_time_s.unwrap_or(base.max_time_s),
            map_width: self.map_width.unwrap_or(base.map_width),
            map_height: self.map_height.unwrap_or(base.map_height),
        }
    }
}

pub fn load_overrides(path: &Path) -> Result<ScenarioOverrides, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Returns `scenario` if it validates, the default scenario otherwise.
pub fn validated_or_default(scenario: Scenario) -> Scenario {
    match scenario.validate() {
        Ok(()) => scenario,
        Err(err) => {
            warn!("{err}; falling back to the default scenario");
            Scenario::default()
        }
    }
}

fn parse_answer<T: std::str::FromStr>(
    answer: &str,
    field: &'static str,
) -> Result<Option<T>, ConfigError> {
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<T>()
        .map(Some)
        .map_err(|_| ConfigError::InvalidNumber {
            field,
            input: trimmed.to_string(),
        })
}

/// Answers to the interactive prompts, in prompt order: carrier speed, agent
/// speed, target x, target y, angle count. Blank answers keep the default.
pub fn overrides_from_answers(answers: &[String; 5]) -> Result<ScenarioOverrides, ConfigError> {
    Ok(ScenarioOverrides {
        carrier_speed: parse_answer(&answers[0], "carrier speed")?,
        agent_speed: parse_answer(&answers[1], "agent speed")?,
        target_x: parse_answer(&answers[2], "target x")?,
        target_y: parse_answer(&answers[3], "target y")?,
        angle_samples: parse_answer(&answers[4], "angle count")?,
        ..ScenarioOverrides::default()
    })
}

fn read_answer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}

/// Asks for each parameter in turn. A single unparseable answer discards
/// them all in favour of the defaults.
pub fn prompt_scenario<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    base: Scenario,
) -> io::Result<Scenario> {
    let answers = [
        read_answer(
            input,
            output,
            &format!("Enter carrier speed (default {}): ", base.carrier_speed),
        )?,
        read_answer(
            input,
            output,
            &format!("Enter agent speed (default {}): ", base.agent_speed),
        )?,
        read_answer(
            input,
            output,
            &format!("Enter target x-coordinate (default {}): ", base.target.center.x),
        )?,
        read_answer(
            input,
            output,
            &format!("Enter target y-coordinate (default {}): ", base.target.center.y),
        )?,
        read_answer(
            input,
            output,
            &format!("Enter number of angles to test (default {}): ", base.angle_samples),
        )?,
    ];

    match overrides_from_answers(&answers) {
        Ok(overrides) => Ok(validated_or_default(overrides.apply(base))),
        Err(err) => {
            warn!("{err}");
            writeln!(output, "{FALLBACK_NOTICE}")?;
            Ok(Scenario::default())
        }
    }
}
