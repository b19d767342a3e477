use std::error::Error;
use std::io;
use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use drop_intercept::core::config::{
    ScenarioOverrides, load_overrides, prompt_scenario, validated_or_default,
};
use drop_intercept::core::plot::{default_chart_path, draw_arrival_chart};
use drop_intercept::core::report::SearchReport;
use drop_intercept::core::{DropSearch, Scenario};
use log::info;

#[derive(Parser, Debug)]
#[command(name = "drop_intercept")]
#[command(version)]
#[command(about = "Searches release angles for the fastest carrier drop onto a target", long_about = None)]
struct Cli {
    /// Carrier speed (units/s)
    #[arg(long)]
    carrier_speed: Option<f64>,

    /// Agent glide speed (units/s)
    #[arg(long)]
    agent_speed: Option<f64>,

    /// Target x-coordinate
    #[arg(long, allow_hyphen_values = true)]
    target_x: Option<f64>,

    /// Target y-coordinate
    #[arg(long, allow_hyphen_values = true)]
    target_y: Option<f64>,

    /// Number of release angles sampled over [0, 90] degrees
    #[arg(short = 'n', long)]
    angles: Option<usize>,

    /// Simulation time step (s)
    #[arg(long)]
    dt: Option<f64>,

    /// Stop once this much time has been simulated (s)
    #[arg(long)]
    max_time: Option<f64>,

    /// JSON file with scenario fields; flags override it
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Prompt for the main parameters instead of reading flags
    #[arg(short = 'i', long)]
    interactive: bool,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,

    /// Write an arrival-time chart (PNG); file name defaults to a timestamp
    #[arg(long, num_args = 0..=1)]
    plot: Option<Option<PathBuf>>,

    /// Log search progress
    #[arg(short = 'v', long)]
    verbose: bool,
}

impl Cli {
    fn overrides(&self) -> ScenarioOverrides {
        ScenarioOverrides {
            carrier_speed: self.carrier_speed,
            agent_speed: self.agent_speed,
            target_x: self.target_x,
            target_y: self.target_y,
            angle_samples: self.angles,
            dt: self.dt,
            max_time_s: self.max_time,
            ..ScenarioOverrides::default()
        }
    }
}

fn resolve_scenario(cli: &Cli) -> Result<Scenario, Box<dyn Error>> {
    let mut scenario = Scenario::default();
    if let Some(path) = &cli.config {
        scenario = load_overrides(path)?.apply(scenario);
    }
    scenario = cli.overrides().apply(scenario);

    if cli.interactive {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        scenario = prompt_scenario(&mut input, &mut output, scenario)?;
    }

    Ok(validated_or_default(scenario))
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let scenario = resolve_scenario(&cli)?;
    info!(
        "searching {} angles: carrier {} u/s, agent {} u/s, target ({}, {}), dt {}",
        scenario.angle_samples,
        scenario.carrier_speed,
        scenario.agent_speed,
        scenario.target.center.x,
        scenario.target.center.y,
        scenario.dt
    );

    let mut search = DropSearch::new(&scenario);
    let termination = search.run(scenario.dt, scenario.max_time_s);
    let report = SearchReport::new(&scenario, &search, termination);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!();
        for line in report.summary_lines() {
            println!("{line}");
        }
    }

    if let Some(requested) = &cli.plot {
        let path = requested
            .clone()
            .unwrap_or_else(|| default_chart_path(Local::now()));
        draw_arrival_chart(&report, &path)?;
        if !cli.json {
            println!("Chart written to {}", path.display());
        }
    }

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use super::{Cli, resolve_scenario};
    use drop_intercept::core::Scenario;

    #[test]
    fn no_flags_gives_default_scenario() {
        let cli = Cli::parse_from(["drop_intercept"]);
        let scenario = resolve_scenario(&cli).expect("defaults should resolve");
        assert_eq!(scenario, Scenario::default());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "drop_intercept",
            "--carrier-speed",
            "300",
            "--target-y",
            "-800",
            "-n",
            "25",
        ]);
        let scenario = resolve_scenario(&cli).expect("flags should resolve");
        assert_eq!(scenario.carrier_speed, 300.0);
        assert_eq!(scenario.target.center.y, -800.0);
        assert_eq!(scenario.angle_samples, 25);
        assert_eq!(scenario.agent_speed, 110.0);
    }

    #[test]
    fn invalid_flag_values_fall_back_to_defaults() {
        let cli = Cli::parse_from(["drop_intercept", "--agent-speed", "0"]);
        let scenario = resolve_scenario(&cli).expect("invalid values fall back");
        assert_eq!(scenario, Scenario::default());
    }

    #[test]
    fn bare_plot_flag_requests_default_name() {
        let cli = Cli::parse_from(["drop_intercept", "--plot"]);
        assert_eq!(cli.plot, Some(None));

        let cli = Cli::parse_from(["drop_intercept", "--plot", "out.png"]);
        assert_eq!(cli.plot, Some(Some(PathBuf::from("out.png"))));

        let cli = Cli::parse_from(["drop_intercept"]);
        assert_eq!(cli.plot, None);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let cli = Cli::parse_from(["drop_intercept", "--config", "/nonexistent/scenario.json"]);
        assert!(resolve_scenario(&cli).is_err());
    }
}
