use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use plotters::prelude::*;
use thiserror::Error;

use crate::core::report::SearchReport;

const CHART_SIZE: (u32, u32) = (1280, 720);

#[derive(Error, Debug)]
pub enum PlotError {
    #[error("no candidate reached the target, nothing to plot")]
    NoArrivals,

    #[error("failed to draw '{path}': {message}")]
    Drawing { path: PathBuf, message: String },
}

pub fn default_chart_path(now: DateTime<Local>) -> PathBuf {
    PathBuf::from(format!("drop_search_{}.png", now.format("%Y%m%d_%H%M%S")))
}

/// Padded `(min, max)` for an axis, never collapsing to an empty range.
fn axis_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    let span = (hi - lo).max(1.0);
    ((lo - span * 0.05).max(0.0), hi + span * 0.05)
}

/// Writes a PNG of arrival time against release angle, with the optimum
/// highlighted.
pub fn draw_arrival_chart(report: &SearchReport, path: &Path) -> Result<(), PlotError> {
    let curve = report.arrival_curve();
    if curve.is_empty() {
        return Err(PlotError::NoArrivals);
    }
    let drawing = |err: &dyn std::fmt::Display| PlotError::Drawing {
        path: path.to_path_buf(),
        message: err.to_string(),
    };

    let (y_min, y_max) = axis_range(curve.iter().map(|&(_, t)| t));

    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| drawing(&e))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!(
                "Arrival time by release angle (carrier {} u/s, agent {} u/s)",
                report.scenario.carrier_speed, report.scenario.agent_speed
            ),
            ("sans-serif", 26),
        )
        .margin(20)
        .x_label_area_size(45)
        .y_label_area_size(65)
        .build_cartesian_2d(0f64..90f64, y_min..y_max)
        .map_err(|e| drawing(&e))?;

    chart
        .configure_mesh()
        .x_desc("Release angle (deg)")
        .y_desc("Arrival time (s)")
        .draw()
        .map_err(|e| drawing(&e))?;

    chart
        .draw_series(LineSeries::new(curve.iter().copied(), &BLUE))
        .map_err(|e| drawing(&e))?
        .label("arrived candidates")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .draw_series(
            curve
                .iter()
                .map(|&(angle, time)| Circle::new((angle, time), 2, BLUE.filled())),
        )
        .map_err(|e| drawing(&e))?;

    if let (Some(angle), Some(time)) = (report.best_angle_deg, report.best_time_s) {
        chart
            .draw_series(std::iter::once(Circle::new((angle, time), 7, RED.filled())))
            .map_err(|e| drawing(&e))?
            .label(format!("optimum {angle:.1} deg, {time:.2} s"))
            .legend(|(x, y)| Circle::new((x + 10, y), 5, RED.filled()));
    }

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.8))
        .draw()
        .map_err(|e| drawing(&e))?;

    root.present().map_err(|e| drawing(&e))?;
    Ok(())
}
